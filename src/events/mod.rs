pub mod click;
pub mod pointer;

pub use click::{wire_document_click, wire_tile_clicks};
pub use pointer::wire_pointermove;
