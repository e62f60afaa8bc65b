//! Stat counters that run up from zero the first time they become visible.
//!
//! Each `.stat-number` element's authored text doubles as its target:
//! `"500+"` counts to 500 and keeps the plus. The run-up happens outside
//! the rendered view, writing the element's text directly each frame, so
//! the authored markup stays the single source of the final value.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::reveal::ObserverHandle;

/// Unit suffix carried through every rendered frame. Detection checks the
/// authored text for `+`, then `%`, then `h`; the first hit wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    None,
    Plus,
    Percent,
    Hours,
}

impl Suffix {
    fn parse(text: &str) -> Suffix {
        if text.contains('+') {
            Suffix::Plus
        } else if text.contains('%') {
            Suffix::Percent
        } else if text.contains('h') {
            Suffix::Hours
        } else {
            Suffix::None
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Suffix::None => "",
            Suffix::Plus => "+",
            Suffix::Percent => "%",
            Suffix::Hours => "h",
        }
    }
}

/// A target parsed from a stat element's authored text, e.g. `"98%"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u32,
    pub suffix: Suffix,
}

impl CounterTarget {
    /// `None` when the text carries no digits; such an element has no
    /// tracked target and is left exactly as authored.
    pub fn parse(text: &str) -> Option<CounterTarget> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let value = digits.parse().ok()?;
        Some(CounterTarget { value, suffix: Suffix::parse(text) })
    }
}

/// Linear run-up from zero. Every tick advances one frame's worth and
/// renders the floored value; the final frame renders the exact target.
#[derive(Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    current: f64,
    step: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget) -> Self {
        let frames = config::COUNTER_DURATION_MS / config::COUNTER_FRAME_MS;
        Self { target, current: 0.0, step: f64::from(target.value) / frames }
    }

    /// Advance one frame and render its text.
    pub fn tick(&mut self) -> String {
        self.current += self.step;
        let suffix = self.target.suffix.as_str();
        if self.current < f64::from(self.target.value) {
            format!("{}{}", self.current.floor() as u32, suffix)
        } else {
            format!("{}{}", self.target.value, suffix)
        }
    }

    /// True once the exact target has been rendered.
    pub fn is_done(&self) -> bool {
        self.current >= f64::from(self.target.value)
    }
}

/// Run one element's counter in place on the frame callback.
fn animate_element(element: HtmlElement) {
    let authored = element.text_content().unwrap_or_default();
    let Some(target) = CounterTarget::parse(&authored) else {
        return;
    };
    let mut animation = CounterAnimation::new(target);

    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let starter = slot.clone();
    *starter.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let text = animation.tick();
        element.set_text_content(Some(&text));
        if animation.is_done() {
            // Final frame rendered; dropping the closure ends the loop.
            slot.borrow_mut().take();
        } else if let Some(frame) = slot.borrow().as_ref() {
            request_frame(frame);
        }
    }) as Box<dyn FnMut()>));

    if let Some(frame) = starter.borrow().as_ref() {
        request_frame(frame);
    };
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Arm every stat element on the page: each starts its run-up on first
/// half-visibility and is unobserved immediately after, so the run-up
/// fires once per page load.
pub fn mount(document: &Document) -> Option<ObserverHandle> {
    let stats = document.query_selector_all(".stat-number").ok()?;

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(element) = target.clone().dyn_into::<HtmlElement>() {
                    animate_element(element);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(config::COUNTER_VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for i in 0..stats.length() {
        if let Some(node) = stats.item(i) {
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

    fn run(authored: &str) -> Vec<String> {
        let target = CounterTarget::parse(authored).expect("parsable counter");
        let mut animation = CounterAnimation::new(target);
        let mut frames = Vec::new();
        loop {
            frames.push(animation.tick());
            if animation.is_done() {
                break;
            }
            assert!(frames.len() < 1_000, "animation failed to terminate");
        }
        frames
    }

    #[test]
    fn the_final_frame_is_the_authored_value() {
        assert_eq!(run("500+").last().map(String::as_str), Some("500+"));
        assert_eq!(run("98%").last().map(String::as_str), Some("98%"));
        assert_eq!(run("24h").last().map(String::as_str), Some("24h"));
        assert_eq!(run("15").last().map(String::as_str), Some("15"));
    }

    #[test]
    fn frames_never_decrease_and_keep_the_suffix() {
        for authored in ["500+", "98%", "24h"] {
            let suffix = &authored[authored.len() - 1..];
            let mut last = -1_i64;
            for frame in run(authored) {
                assert!(frame.ends_with(suffix), "frame {frame} lost suffix {suffix}");
                let value: i64 = frame[..frame.len() - suffix.len()].parse().unwrap();
                assert!(value >= last, "value went backwards: {last} -> {value}");
                last = value;
            }
        }
    }

    #[test]
    fn intermediate_frames_floor_the_running_value() {
        let frames = run("123+");
        assert_eq!(frames[0], "0+");
        assert!(frames.len() > 100, "a small target should still span the full duration");
    }

    #[test]
    fn suffix_detection_checks_plus_then_percent_then_hours() {
        assert_eq!(CounterTarget::parse("12+"), Some(CounterTarget { value: 12, suffix: Suffix::Plus }));
        assert_eq!(CounterTarget::parse("12%"), Some(CounterTarget { value: 12, suffix: Suffix::Percent }));
        assert_eq!(CounterTarget::parse("12h"), Some(CounterTarget { value: 12, suffix: Suffix::Hours }));
        assert_eq!(CounterTarget::parse("12h+"), Some(CounterTarget { value: 12, suffix: Suffix::Plus }));
        assert_eq!(CounterTarget::parse("12"), Some(CounterTarget { value: 12, suffix: Suffix::None }));
    }

    #[test]
    fn text_without_digits_has_no_target() {
        assert_eq!(CounterTarget::parse(""), None);
        assert_eq!(CounterTarget::parse("n/a"), None);
    }

    #[test]
    fn a_zero_target_finishes_on_its_first_frame() {
        assert_eq!(run("0"), vec!["0".to_string()]);
    }
}
