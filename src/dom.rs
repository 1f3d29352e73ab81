use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(
    document: &web::Document,
    element_id: &str,
) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn require_html_element(
    document: &web::Document,
    element_id: &str,
) -> Result<web::HtmlElement> {
    html_element_by_id(document, element_id).ok_or_else(|| anyhow!("missing #{}", element_id))
}

/// Viewport size in CSS pixels, `None` before layout or when unavailable.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    (w > 0.0 && h > 0.0).then_some((w, h))
}

#[inline]
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
