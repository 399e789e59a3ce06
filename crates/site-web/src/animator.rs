//! Scroll-progress animator: recomputes per-section progress on every scroll
//! event and pushes the resulting visuals into element styles.

use crate::dom::{self, DomTarget};
use fnv::FnvHashMap;
use site_core::constants::TRACKED_SECTION_IDS;
use site_core::scroll::{
    apply_element, apply_text_block, section_progress, AnimationKind, ScrollContext,
    ScrollDirection, SectionBounds,
};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

struct TrackedSection {
    id: &'static str,
    el: web::HtmlElement,
}

pub struct Animator {
    sections: SmallVec<[TrackedSection; 4]>,
    direction: ScrollDirection,
    last_y: f32,
    // last applied (progress, direction) per section; skips redundant style
    // writes when a scroll event lands on the same progress
    applied: FnvHashMap<&'static str, (f32, ScrollDirection)>,
}

impl Animator {
    pub fn new(document: &web::Document) -> Self {
        let mut sections = SmallVec::new();
        for id in TRACKED_SECTION_IDS {
            match document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            {
                Some(el) => sections.push(TrackedSection { id, el }),
                None => log::warn!("tracked section #{id} not found"),
            }
        }
        Self {
            sections,
            direction: ScrollDirection::Down,
            last_y: 0.0,
            applied: FnvHashMap::default(),
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Drop the applied-progress cache so the next pass rewrites every
    /// element (after a resize, cached progress no longer matches layout).
    pub fn invalidate(&mut self) {
        self.applied.clear();
    }

    pub fn on_scroll(&mut self) {
        let Some((_, viewport_h)) = dom::window_metrics() else {
            return;
        };
        let scroll_y = dom::scroll_y();
        self.direction = self.direction.update(self.last_y, scroll_y);
        self.last_y = scroll_y;
        let ctx = ScrollContext {
            scroll_y,
            viewport_h,
            direction: self.direction,
        };
        for section in &self.sections {
            // Layout is read live so anchors stay correct across reflows
            let bounds = SectionBounds {
                top: section.el.offset_top() as f32,
                height: section.el.offset_height() as f32,
            };
            let progress = section_progress(&ctx, &bounds);
            if self.applied.get(section.id) == Some(&(progress, self.direction)) {
                continue;
            }
            self.applied.insert(section.id, (progress, self.direction));
            apply_section(&section.el, progress, self.direction);
        }
    }
}

fn apply_section(section: &web::HtmlElement, progress: f32, direction: ScrollDirection) {
    for el in dom::query_all(section, "[data-scroll]") {
        let kind = el
            .get_attribute("data-scroll-call")
            .map(|v| AnimationKind::from_marker(&v))
            .unwrap_or_default();
        let is_title = el.class_list().contains("section-title");
        if let Some(mut target) = DomTarget::new(&el) {
            apply_element(&mut target, progress, direction, kind, is_title);
        }
    }
    for el in dom::query_all(section, ".section-text") {
        if let Some(mut target) = DomTarget::new(&el) {
            apply_text_block(&mut target, progress, direction);
        }
    }
}
