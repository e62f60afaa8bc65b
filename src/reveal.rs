//! One-shot fade-in reveals driven by viewport intersection.
//!
//! Elements opt in by carrying one of the reveal classes below together
//! with a `data-reveal-key` attribute rendered into the markup. The
//! observer marks each key revealed at most once; scrolling back up never
//! hides an element again.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::UseStateSetter;

use crate::config;

/// Card-level classes revealed in a staggered wave.
pub const CARD_SELECTOR: &str = ".service-card, .project-card, .testimonial-card, .value-item, \
     .process-step, .credential, .deliverable-item, .area-region, .faq-item, .trust-item";

/// Header-level classes revealed without a stagger delay.
pub const HEADER_SELECTOR: &str = ".section-header, .about-content, .contact-info, .cta-content";

/// Stagger delay for the `index`-th card, cycling through a fixed-width
/// wave so grids ripple instead of appearing all at once.
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index % config::REVEAL_STAGGER_WAVE) as u32 * config::REVEAL_STAGGER_STEP_MS
}

/// Which reveal keys have fired. Marks are monotone: a key only ever moves
/// from pending to revealed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealLedger {
    revealed: HashSet<String>,
}

impl RevealLedger {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Record a reveal. Returns true only the first time a key is seen.
    pub fn mark_revealed(&mut self, key: &str) -> bool {
        self.revealed.insert(key.to_string())
    }
}

/// Keeps an observer and its callback alive; disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub(crate) fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ) -> Self {
        Self { observer, _callback: callback }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every reveal-tagged element currently in the document.
///
/// Reveals are published through `on_change` so the page re-renders with
/// the visible class applied; the ledger held here stays authoritative
/// between renders, which keeps each key one-shot even if entries for it
/// arrive in separate observer batches.
pub fn mount(document: &Document, on_change: UseStateSetter<RevealLedger>) -> Option<ObserverHandle> {
    let selector = format!("{CARD_SELECTOR}, {HEADER_SELECTOR}");
    let targets = document.query_selector_all(&selector).ok()?;

    let ledger = Rc::new(RefCell::new(RevealLedger::default()));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(key) = target.get_attribute("data-reveal-key") {
                    if ledger.borrow_mut().mark_revealed(&key) {
                        on_change.set(ledger.borrow().clone());
                    }
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for i in 0..targets.length() {
        if let Some(node) = targets.item(i) {
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }

    Some(ObserverHandle::new(observer, callback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_key_fires_exactly_once() {
        let mut ledger = RevealLedger::default();
        assert!(ledger.mark_revealed("c0"));
        assert!(!ledger.mark_revealed("c0"));
        assert!(ledger.is_revealed("c0"));
    }

    #[test]
    fn reveals_accumulate_and_never_reverse() {
        let mut ledger = RevealLedger::default();
        for key in ["c0", "c1", "h0"] {
            assert!(ledger.mark_revealed(key));
        }
        assert!(!ledger.mark_revealed("c1"));
        for key in ["c0", "c1", "h0"] {
            assert!(ledger.is_revealed(key));
        }
        assert!(!ledger.is_revealed("c2"));
    }

    #[test]
    fn stagger_wave_repeats_every_four_cards() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(2), 200);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_delay_ms(4), 0);
        assert_eq!(stagger_delay_ms(9), 100);
    }
}
