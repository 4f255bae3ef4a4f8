//! Document model for the simulated dashboard page.

mod document;
mod element;
mod geometry;

pub use document::Document;
pub use element::{Element, ElementId};
pub use geometry::{Position, Rect, Size, TextMetrics};

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique element ID.
pub fn next_element_id() -> u64 {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}
