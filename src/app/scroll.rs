use leptos::prelude::{document, window};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::nav::{ScrollEnvironment, SectionBounds, SectionId};

/// The live document, read through `web-sys`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScroll;

impl ScrollEnvironment for BrowserScroll {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let el = document().get_element_by_id(id.as_str())?;
        let rect = el.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn request_scroll(&self, offset: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(offset);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
