//! Page chrome: hamburger menu, navbar blur, active nav link highlighting
//! and the portfolio category filter.

use crate::dom;
use site_core::constants::{NAVBAR_BLUR_AFTER_PX, NAV_ACTIVE_LEAD_PX};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_ui(document: &web::Document) {
    wire_hamburger(document);
    wire_nav_links(document);
    wire_portfolio_filter(document);
}

fn wire_hamburger(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, ".hamburger", move || {
        if let Ok(Some(burger)) = doc.query_selector(".hamburger") {
            let _ = burger.class_list().toggle("active");
        }
        if let Ok(Some(menu)) = doc.query_selector(".nav-menu") {
            let _ = menu.class_list().toggle("active");
        }
    });
}

/// Selecting a link closes the mobile menu.
fn wire_nav_links(document: &web::Document) {
    for link in dom::document_query_all(document, ".nav-link") {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(Some(burger)) = doc.query_selector(".hamburger") {
                dom::set_class(&burger, "active", false);
            }
            if let Ok(Some(menu)) = doc.query_selector(".nav-menu") {
                dom::set_class(&menu, "active", false);
            }
        }) as Box<dyn FnMut()>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Frost the navbar once the page has scrolled past the hero top.
pub fn update_navbar(document: &web::Document, scroll_y: f32) {
    let Ok(Some(navbar)) = document.query_selector(".navbar") else {
        return;
    };
    let Ok(navbar) = navbar.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let style = navbar.style();
    if scroll_y > NAVBAR_BLUR_AFTER_PX {
        let _ = style.set_property("background", "rgba(10, 10, 10, 0.85)");
        let _ = style.set_property("backdrop-filter", "blur(10px)");
    } else {
        let _ = style.set_property("background", "transparent");
        let _ = style.set_property("backdrop-filter", "blur(0px)");
    }
}

/// Highlight the nav link of the section currently under the viewport top.
pub fn update_active_nav(document: &web::Document, scroll_y: f32) {
    let mut current_id = String::new();
    for section in dom::document_query_all(document, "section[id]") {
        let Ok(section) = section.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        if scroll_y >= section.offset_top() as f32 - NAV_ACTIVE_LEAD_PX {
            current_id = section.id();
        }
    }
    let target = format!("#{current_id}");
    for link in dom::document_query_all(document, ".nav-link") {
        let is_current = link.get_attribute("href").as_deref() == Some(target.as_str());
        dom::set_class(&link, "active", is_current);
    }
}

fn wire_portfolio_filter(document: &web::Document) {
    for button in dom::document_query_all(document, ".filter-btn") {
        let doc = document.clone();
        let this = button.clone();
        let closure = Closure::wrap(Box::new(move || {
            for other in dom::document_query_all(&doc, ".filter-btn") {
                dom::set_class(&other, "active", false);
            }
            dom::set_class(&this, "active", true);
            let filter = this.get_attribute("data-filter").unwrap_or_default();
            apply_portfolio_filter(&doc, &filter);
        }) as Box<dyn FnMut()>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply_portfolio_filter(document: &web::Document, filter: &str) {
    for item in dom::document_query_all(document, ".portfolio-item") {
        let category = item.get_attribute("data-category").unwrap_or_default();
        let shown = filter == "all" || category == filter;
        let Ok(item) = item.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let style = item.style();
        if shown {
            let _ = style.set_property("display", "block");
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "scale(1)");
        } else {
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "scale(0.8)");
            let _ = style.set_property("display", "none");
        }
    }
}
