use crate::dom;
use crate::projection::TileVisual;
use crate::sphere::Tile;
use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create one `div.tile` per tile under `container`, in generation order.
/// Stacking is driven by z-index every frame, so DOM order does not matter.
pub fn mount_tiles(
    document: &web::Document,
    container: &web::HtmlElement,
    tiles: &[Tile],
) -> Result<Vec<web::HtmlElement>> {
    tiles
        .iter()
        .map(|tile| {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow!("{:?}", e))?;
            el.set_class_name("tile");
            dom::set_style(&el, "background-image", &format!("url({})", tile.image_url));
            dom::set_style(&el, "pointer-events", "auto");
            container
                .append_child(&el)
                .map_err(|e| anyhow!("append tile {}: {:?}", tile.index, e))?;
            Ok(el)
        })
        .collect()
}

#[inline]
pub fn apply_visual(el: &web::HtmlElement, visual: &TileVisual) {
    dom::set_style(el, "transform", &visual.transform_css());
    dom::set_style(el, "z-index", &visual.z_index.to_string());
    dom::set_style(el, "filter", &visual.filter_css());
    dom::set_style(el, "opacity", &visual.opacity.to_string());
}

pub fn apply_visuals(elements: &[web::HtmlElement], visuals: &[TileVisual]) {
    for (el, visual) in elements.iter().zip(visuals) {
        apply_visual(el, visual);
    }
}
