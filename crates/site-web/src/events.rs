//! Window event wiring: scroll, pointer and resize listeners feeding the
//! animator and the shared per-frame state.

use crate::animator::Animator;
use crate::dom;
use crate::ui;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page scroll offset and range, shared between the scroll handler and the
/// frame loop (the hero pose is a function of both).
#[derive(Default, Clone, Copy)]
pub struct PageScroll {
    pub y: f32,
    pub max: f32,
}

#[derive(Clone)]
pub struct EventWiring {
    pub document: web::Document,
    pub animator: Rc<RefCell<Animator>>,
    pub page: Rc<RefCell<PageScroll>>,
    pub mouse: Rc<RefCell<Vec2>>,
}

pub fn wire_event_handlers(w: EventWiring) {
    wire_scroll(&w);
    wire_pointermove(&w);
    wire_resize(&w);
}

fn wire_scroll(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = dom::scroll_y();
        {
            let mut page = w.page.borrow_mut();
            page.y = y;
            page.max = dom::max_scroll(&w.document);
        }
        w.animator.borrow_mut().on_scroll();
        ui::update_navbar(&w.document, y);
        ui::update_active_nav(&w.document, y);
    }) as Box<dyn FnMut()>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &EventWiring) {
    let mouse = w.mouse.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some((width, height)) = dom::window_metrics() {
            // [-1,1] with y growing downwards, matching screen space
            let x = (ev.client_x() as f32 / width.max(1.0) - 0.5) * 2.0;
            let y = (ev.client_y() as f32 / height.max(1.0) - 0.5) * 2.0;
            *mouse.borrow_mut() = Vec2::new(x, y);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        w.page.borrow_mut().max = dom::max_scroll(&w.document);
        let mut animator = w.animator.borrow_mut();
        animator.invalidate();
        animator.on_scroll();
    }) as Box<dyn FnMut()>);
    if let Some(win) = web::window() {
        let _ = win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
