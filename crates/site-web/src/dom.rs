use site_core::scroll::RenderTarget;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
pub fn wire_canvas_autosize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Collect a static snapshot of the elements matching `selector` under `root`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn set_class(el: &web::Element, name: &str, member: bool) {
    let cl = el.class_list();
    if member {
        let _ = cl.add_1(name);
    } else {
        let _ = cl.remove_1(name);
    }
}

#[inline]
pub fn window_metrics() -> Option<(f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Document scroll range: content height minus one viewport.
pub fn max_scroll(document: &web::Document) -> f32 {
    let content = document
        .document_element()
        .map(|e| e.scroll_height() as f32)
        .unwrap_or(0.0);
    let viewport = window_metrics().map(|(_, h)| h).unwrap_or(0.0);
    (content - viewport).max(0.0)
}

/// Inline-style sink for one animated element; the animation math never
/// touches the DOM directly.
pub struct DomTarget {
    el: web::HtmlElement,
}

impl DomTarget {
    pub fn new(el: &web::Element) -> Option<Self> {
        el.clone().dyn_into::<web::HtmlElement>().ok().map(|el| Self { el })
    }
}

impl RenderTarget for DomTarget {
    fn set_opacity(&mut self, opacity: f32) {
        let _ = self.el.style().set_property("opacity", &opacity.to_string());
    }

    fn set_offset(&mut self, x_px: f32, y_px: f32) {
        let value = format!("translateX({x_px}px) translateY({y_px}px) scale(1)");
        let _ = self.el.style().set_property("transform", &value);
    }

    fn set_custom_property(&mut self, name: &str, value_px: f32) {
        let _ = self.el.style().set_property(name, &format!("{value_px}px"));
    }

    fn set_class(&mut self, name: &str, member: bool) {
        set_class(&self.el, name, member);
    }
}
