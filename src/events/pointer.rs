use crate::dom;
use crate::gallery::Gallery;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole document. The handler only records the
/// latest offset; the frame loop does the smoothing.
pub fn wire_pointermove(document: &web::Document, gallery: Rc<RefCell<Gallery>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some((w, h)) = dom::viewport_size() else {
            return;
        };
        gallery
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64, w, h);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());

    closure.forget();
}
