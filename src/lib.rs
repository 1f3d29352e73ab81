#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod activation;
mod chrome;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;
mod projection;
mod render;
mod sphere;
mod transition;

pub use activation::{Activation, ClickOutcome};
pub use config::GalleryConfig;
pub use gallery::Gallery;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-gallery starting");

    if let Err(e) = mount(GalleryConfig::default()) {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Build the tiles under the sphere container, wire input and page chrome,
/// and start the frame loop. Fails when the container is absent.
pub fn mount(config: GalleryConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let sphere = dom::require_html_element(&document, &config.sphere_id)?;

    let gallery = Gallery::new(&config)?;
    let tiles = render::mount_tiles(&document, &sphere, gallery.tiles())?;
    log::info!(
        "[gallery] mounted {} tiles on #{} (radius {})",
        tiles.len(),
        config.sphere_id,
        config.radius
    );
    let gallery = Rc::new(RefCell::new(gallery));

    events::wire_tile_clicks(&gallery, &tiles);
    events::wire_document_click(&document, gallery.clone());
    events::wire_pointermove(&document, gallery.clone());

    chrome::wire_sound_toggle(&document, &config);
    chrome::wire_intro_reveal(&document, &config, &sphere);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(gallery, tiles)));
    frame::start_loop(frame_ctx);
    Ok(())
}
