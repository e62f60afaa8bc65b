//! Tunables for the site's reactive behaviors, collected in one place so
//! the scroll, reveal, counter and form modules agree on their timings.

/// Scroll offset past which the nav bar switches to its condensed style.
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;

/// How far above a section's top the highlight window starts, so the nav
/// link flips just before the section reaches the viewport top.
pub const HIGHLIGHT_LOOKAHEAD: f64 = 100.0;

/// Fraction of a reveal element that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Width of the repeating stagger wave across revealed cards.
pub const REVEAL_STAGGER_WAVE: usize = 4;

/// Delay added per position inside a stagger wave.
pub const REVEAL_STAGGER_STEP_MS: u32 = 100;

/// Fraction of a stat element that must be visible before its run-up starts.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Nominal length of a stat run-up.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Assumed frame interval used to size each run-up increment.
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// How long the stand-in submission gateway takes to resolve.
pub const SUBMIT_SIMULATED_DELAY_MS: u32 = 1500;

/// How long the success state is held before the form returns to idle.
pub const SUBMIT_RESET_DELAY_MS: u32 = 3000;

/// Multiplier applied to the scroll offset for the hero glow drift.
pub const PARALLAX_FACTOR: f64 = 0.3;
