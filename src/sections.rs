//! Scroll offset math for the nav's active-section highlight, plus the
//! smooth-scroll that keeps anchored sections clear of the fixed nav bar.

use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config;

/// Vertical span a page section occupies, measured from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Whether `scroll_y` falls inside this section's highlight window.
    ///
    /// The window starts [`config::HIGHLIGHT_LOOKAHEAD`] above the section
    /// and runs for the section's height, half-open at the bottom.
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - config::HIGHLIGHT_LOOKAHEAD;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// The id of the section owning `scroll_y`, or `None` inside a gap.
/// When windows overlap, the section appearing later in the document wins.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    spans
        .iter()
        .rev()
        .find(|span| span.contains(scroll_y))
        .map(|span| span.id.as_str())
}

/// Measure every identified section currently in the document.
/// Bounds are re-read on each call, so layout changes between scroll
/// events are picked up for free.
pub fn measure(document: &Document) -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    if let Ok(list) = document.query_selector_all("section[id]") {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(section) = node.dyn_into::<web_sys::HtmlElement>() {
                    if let Some(id) = section.get_attribute("id") {
                        spans.push(SectionSpan {
                            id,
                            top: f64::from(section.offset_top()),
                            height: f64::from(section.offset_height()),
                        });
                    }
                }
            }
        }
    }
    spans
}

/// Smooth-scroll the viewport so `id`'s section lands just below the nav.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(section) = document.get_element_by_id(id) {
                let nav_height = document
                    .query_selector("nav")
                    .ok()
                    .flatten()
                    .and_then(|nav| nav.dyn_into::<web_sys::HtmlElement>().ok())
                    .map_or(0.0, |nav| f64::from(nav.offset_height()));
                let page_y = window.scroll_y().unwrap_or(0.0);
                let top = section.get_bounding_client_rect().top() + page_y - nav_height;

                let options = web_sys::ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: "home".into(), top: 0.0, height: 600.0 },
            SectionSpan { id: "services".into(), top: 600.0, height: 800.0 },
            SectionSpan { id: "contact".into(), top: 1400.0, height: 500.0 },
        ]
    }

    #[test]
    fn offsets_inside_a_window_activate_that_section() {
        assert_eq!(active_section(&page(), 0.0), Some("home"));
        assert_eq!(active_section(&page(), 499.0), Some("home"));
        assert_eq!(active_section(&page(), 500.0), Some("services"));
        assert_eq!(active_section(&page(), 1299.0), Some("services"));
        assert_eq!(active_section(&page(), 1300.0), Some("contact"));
    }

    #[test]
    fn the_window_starts_a_lookahead_above_the_section() {
        let span = SectionSpan { id: "x".into(), top: 1000.0, height: 400.0 };
        assert!(!span.contains(899.9));
        assert!(span.contains(900.0));
        assert!(span.contains(1299.9));
        assert!(!span.contains(1300.0));
    }

    #[test]
    fn gaps_between_windows_leave_nothing_active() {
        let sparse = vec![
            SectionSpan { id: "a".into(), top: 200.0, height: 100.0 },
            SectionSpan { id: "b".into(), top: 1000.0, height: 100.0 },
        ];
        assert_eq!(active_section(&sparse, 0.0), None);
        assert_eq!(active_section(&sparse, 500.0), None);
        assert_eq!(active_section(&sparse, 1800.0), None);
    }

    #[test]
    fn overlapping_windows_resolve_to_the_later_section() {
        let overlapping = vec![
            SectionSpan { id: "a".into(), top: 100.0, height: 500.0 },
            SectionSpan { id: "b".into(), top: 400.0, height: 500.0 },
        ];
        assert_eq!(active_section(&overlapping, 450.0), Some("b"));
        assert_eq!(active_section(&overlapping, 100.0), Some("a"));
    }

    #[test]
    fn no_sections_means_no_highlight() {
        assert_eq!(active_section(&[], 300.0), None);
    }
}
