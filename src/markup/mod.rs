//! Page markup loading.
//!
//! Pages are XHTML-style documents (well-formed XML). Geometry that a browser
//! would compute comes from a `data-rect="left,top,width,height"` attribute.

mod parse;

pub use parse::{load_page, load_page_file, load_page_into};

/// Attribute carrying an element's explicit layout box.
pub const RECT_ATTRIBUTE: &str = "data-rect";
