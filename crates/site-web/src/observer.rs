//! IntersectionObserver fallback for animated elements outside the tracked
//! sections (the hero area has no scroll-progress anchor, so visibility
//! classes come from intersection ratios instead).

use crate::animator::Animator;
use crate::dom;
use site_core::constants::{OBSERVER_THRESHOLDS, TRACKED_SECTION_IDS};
use site_core::visibility::{fallback_view_state, ViewState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn in_tracked_section(el: &web::Element) -> bool {
    if let Ok(Some(section)) = el.closest("section") {
        return TRACKED_SECTION_IDS.contains(&section.id().as_str());
    }
    false
}

pub fn wire_fallback_observer(
    document: &web::Document,
    animator: Rc<RefCell<Animator>>,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let direction = animator.borrow().direction();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if in_tracked_section(&target) {
                    // scroll-progress already drives these
                    continue;
                }
                let state = fallback_view_state(
                    entry.intersection_ratio(),
                    entry.is_intersecting(),
                    direction,
                );
                match state {
                    Some(ViewState::In) => {
                        dom::set_class(&target, "in-view", true);
                        dom::set_class(&target, "out-view", false);
                    }
                    Some(ViewState::Out) => {
                        dom::set_class(&target, "in-view", false);
                        dom::set_class(&target, "out-view", true);
                    }
                    Some(ViewState::Cleared) => {
                        dom::set_class(&target, "in-view", false);
                        dom::set_class(&target, "out-view", false);
                    }
                    None => {}
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let thresholds = js_sys::Array::new();
    for t in OBSERVER_THRESHOLDS {
        thresholds.push(&JsValue::from_f64(t));
    }
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {e:?}"))?;
    closure.forget();

    for el in dom::document_query_all(document, "[data-scroll]") {
        if !in_tracked_section(&el) {
            observer.observe(&el);
        }
    }
    Ok(())
}
