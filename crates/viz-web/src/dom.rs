use viz_core::Rgb;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The anchor element whose text color tracks the active scheme.
pub fn find_link(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .query_selector("#container a")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn set_link_color(link: Option<&web::HtmlElement>, color: Rgb) {
    if let Some(el) = link {
        let _ = el.style().set_property("color", &color.to_css_hex());
    }
}

/// Keep the canvas backing store sized to its CSS size times the device
/// pixel ratio.
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

/// Current viewport size in CSS pixels; zero when unavailable.
pub fn viewport_size() -> (f32, f32) {
    let Some(win) = web::window() else {
        return (0.0, 0.0);
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}
