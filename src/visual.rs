//! Class names shared between the behavior modules and the stylesheet.
//!
//! Several controllers flag visual state on elements they do not otherwise
//! own, so the vocabulary lives here rather than as string literals spread
//! across the markup.

/// Open menu, pressed nav toggle, and the highlighted nav link.
pub const ACTIVE: &str = "active";

/// Condensed nav bar once the page has scrolled past the top band.
pub const SCROLLED: &str = "scrolled";

/// Element is registered for a fade-in reveal and starts hidden.
pub const FADE_IN: &str = "fade-in";

/// Reveal has fired; the element stays visible from here on.
pub const VISIBLE: &str = "visible";

/// Form field failed validation.
pub const ERROR: &str = "error";

/// The one service card currently under the pointer.
pub const HIGHLIGHTED: &str = "highlighted";
