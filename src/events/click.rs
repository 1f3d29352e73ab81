use crate::activation::ClickOutcome;
use crate::dom;
use crate::gallery::Gallery;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Per-tile click handlers. Propagation stops here so the document-level
/// handler only ever sees clicks outside the tiles.
pub fn wire_tile_clicks(gallery: &Rc<RefCell<Gallery>>, tiles: &[web::HtmlElement]) {
    for (i, el) in tiles.iter().enumerate() {
        let gallery = gallery.clone();
        dom::add_click_listener(el, move |ev| {
            ev.stop_propagation();
            let outcome = gallery.borrow_mut().on_tile_click(i);
            log_outcome(outcome);
        });
    }
}

pub fn wire_document_click(document: &web::Document, gallery: Rc<RefCell<Gallery>>) {
    dom::add_click_listener(document, move |_ev| {
        let outcome = gallery.borrow_mut().on_document_click();
        log_outcome(outcome);
    });
}

fn log_outcome(outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Activated(i) => log::info!("[click] activate tile {}", i),
        ClickOutcome::Deactivated(i) => log::info!("[click] release tile {}, resetting", i),
        ClickOutcome::Unchanged => {}
    }
}
