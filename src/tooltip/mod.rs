//! Hover tooltips for annotated elements.
//!
//! Any element carrying the tooltip attribute (`data-tooltip` by default)
//! gets a transient overlay on pointer enter. The overlay is appended to the
//! body, centered horizontally over its anchor and lifted a fixed gap above
//! it, and removed again on pointer leave.

use crate::dom::{Document, ElementId, Position, Rect, Size};
use std::collections::HashMap;

/// Attribute carrying the tooltip text.
pub const TOOLTIP_ATTRIBUTE: &str = "data-tooltip";

/// Classes applied to every overlay.
pub const OVERLAY_CLASSES: &str =
    "absolute z-50 px-2 py-1 text-sm text-white bg-gray-900 rounded shadow-lg";

/// Vertical distance between the overlay's bottom edge and the anchor.
pub const DEFAULT_GAP: f32 = 10.0;

/// Per-anchor hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Idle,
    Showing(ElementId),
}

/// Overlay position for an anchor box and the overlay's rendered size.
pub fn overlay_position(anchor: Rect, overlay: Size, gap: f32) -> Position {
    Position {
        top: anchor.top - overlay.height - gap,
        left: anchor.center_x() - overlay.width / 2.0,
    }
}

/// Tracks registered anchors and the overlay each one is currently showing.
#[derive(Debug)]
pub struct TooltipManager {
    attribute: String,
    gap: f32,
    /// Registered anchors and their text.
    anchors: HashMap<ElementId, String>,
    /// Active overlay per anchor.
    active: HashMap<ElementId, ElementId>,
}

impl Default for TooltipManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipManager {
    pub fn new() -> Self {
        Self::with_options(TOOLTIP_ATTRIBUTE, DEFAULT_GAP)
    }

    pub fn with_options(attribute: &str, gap: f32) -> Self {
        Self {
            attribute: attribute.to_string(),
            gap,
            anchors: HashMap::new(),
            active: HashMap::new(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Register every element currently carrying the tooltip attribute and
    /// return them in document order. Elements added later need an explicit
    /// [`register`](Self::register).
    pub fn init(&mut self, document: &Document) -> Vec<ElementId> {
        let mut registered = Vec::new();
        for id in document.query_by_attribute(&self.attribute) {
            let Some(text) = document.get(id).and_then(|e| e.attribute(&self.attribute)) else {
                continue;
            };
            self.register(id, text);
            registered.push(id);
        }
        tracing::debug!(
            "Registered {} tooltip anchor(s), {} in total",
            registered.len(),
            self.registered_count()
        );
        registered
    }

    /// Register one anchor. Re-registering replaces its text; an overlay
    /// already showing keeps the old text until the next hover.
    pub fn register(&mut self, anchor: ElementId, text: &str) {
        self.anchors.insert(anchor, text.to_string());
    }

    /// Forget an anchor, removing its overlay if one is showing.
    pub fn unregister(&mut self, document: &mut Document, anchor: ElementId) {
        self.hover_end(document, anchor);
        self.anchors.remove(&anchor);
    }

    pub fn is_registered(&self, anchor: ElementId) -> bool {
        self.anchors.contains_key(&anchor)
    }

    pub fn registered_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn state(&self, anchor: ElementId) -> TooltipState {
        match self.active.get(&anchor) {
            Some(overlay) => TooltipState::Showing(*overlay),
            None => TooltipState::Idle,
        }
    }

    pub fn is_showing(&self, anchor: ElementId) -> bool {
        self.active.contains_key(&anchor)
    }

    pub fn overlay_for(&self, anchor: ElementId) -> Option<ElementId> {
        self.active.get(&anchor).copied()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Show the anchor's overlay. Returns the overlay ID when one was created.
    ///
    /// No-op for unregistered anchors, anchors without text, anchors no
    /// longer in the document, and anchors already showing.
    pub fn hover_start(&mut self, document: &mut Document, anchor: ElementId) -> Option<ElementId> {
        if self.active.contains_key(&anchor) {
            return None;
        }
        let text = self.anchors.get(&anchor).filter(|t| !t.is_empty())?;
        if !document.contains(anchor) {
            tracing::debug!("Tooltip anchor {} is no longer in the document", anchor);
            return None;
        }

        let mut overlay = document.create_element("div");
        overlay.set_class_name(OVERLAY_CLASSES);
        overlay.text = Some(text.clone());
        let overlay = document.append_child(document.body(), overlay)?;

        // Size is only known once the overlay is in the document.
        let rect = document.bounding_client_rect(anchor);
        let size = document.rendered_size(overlay);
        document.set_position(overlay, overlay_position(rect, size, self.gap));

        self.active.insert(anchor, overlay);
        Some(overlay)
    }

    /// Remove the anchor's overlay. Returns whether one was removed.
    pub fn hover_end(&mut self, document: &mut Document, anchor: ElementId) -> bool {
        match self.active.remove(&anchor) {
            Some(overlay) => {
                document.remove(overlay);
                true
            }
            None => false,
        }
    }
}
