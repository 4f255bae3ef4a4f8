//! The page document: an arena of elements rooted at `<html><body>`.

use super::{Element, ElementId, Position, Rect, Size, TextMetrics};
use std::collections::HashMap;

/// Element tree of one page.
#[derive(Debug)]
pub struct Document {
    /// Elements by ID.
    elements: HashMap<ElementId, Element>,
    /// Element IDs by `id` attribute.
    html_ids: HashMap<String, ElementId>,
    root: ElementId,
    body: ElementId,
    metrics: TextMetrics,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_metrics(TextMetrics::default())
    }

    pub fn with_metrics(metrics: TextMetrics) -> Self {
        let mut html = Element::new("html");
        let mut body = Element::new("body");
        body.parent_id = Some(html.id);
        html.children.push(body.id);
        let (root, body_id) = (html.id, body.id);

        let mut elements = HashMap::new();
        elements.insert(root, html);
        elements.insert(body_id, body);
        Self { elements, html_ids: HashMap::new(), root, body: body_id, metrics }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Number of elements currently attached, including `html` and `body`.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a detached element. It joins the document on `append_child`.
    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    /// Attach `child` as the last child of `parent`. Returns `None` when the
    /// parent is not part of the document.
    pub fn append_child(&mut self, parent: ElementId, mut child: Element) -> Option<ElementId> {
        let id = child.id;
        let parent_el = self.elements.get_mut(&parent)?;
        parent_el.children.push(id);
        child.parent_id = Some(parent);
        if let Some(ref html_id) = child.html_id {
            // First element with a given id wins, like getElementById.
            self.html_ids.entry(html_id.clone()).or_insert(id);
        }
        self.elements.insert(id, child);
        Some(id)
    }

    /// Detach an element and drop its whole subtree. The root and body stay.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if id == self.root || id == self.body || !self.elements.contains_key(&id) {
            return false;
        }
        let parent = self.elements.get(&id).and_then(|e| e.parent_id);
        if let Some(parent) = parent.and_then(|p| self.elements.get_mut(&p)) {
            parent.children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.elements.remove(&next) {
                if let Some(html_id) = el.html_id {
                    if self.html_ids.get(&html_id) == Some(&next) {
                        self.html_ids.remove(&html_id);
                    }
                }
                stack.extend(el.children);
            }
        }
        true
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn get_element_by_id(&self, html_id: &str) -> Option<ElementId> {
        self.html_ids.get(html_id).copied()
    }

    /// All element IDs in document order (pre-order from the root).
    pub fn iter_ids(&self) -> Vec<ElementId> {
        let mut out = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(el) = self.elements.get(&id) else { continue };
            out.push(id);
            stack.extend(el.children.iter().rev());
        }
        out
    }

    /// First element with the given tag, in document order.
    pub fn query_selector(&self, tag: &str) -> Option<ElementId> {
        let tag = tag.to_ascii_lowercase();
        self.iter_ids()
            .into_iter()
            .find(|id| self.elements.get(id).is_some_and(|e| e.tag == tag))
    }

    /// Every element carrying `attribute`, in document order.
    pub fn query_by_attribute(&self, attribute: &str) -> Vec<ElementId> {
        self.iter_ids()
            .into_iter()
            .filter(|id| self.elements.get(id).is_some_and(|e| e.has_attribute(attribute)))
            .collect()
    }

    /// Every element whose class list contains `class`, in document order.
    pub fn query_by_class(&self, class: &str) -> Vec<ElementId> {
        self.iter_ids()
            .into_iter()
            .filter(|id| self.elements.get(id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// `id` and every element below it, pre-order. Empty when `id` is not
    /// in the document.
    pub fn subtree(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(el) = self.elements.get(&next) else { continue };
            out.push(next);
            stack.extend(el.children.iter().rev());
        }
        out
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut current = self.elements.get(&id).and_then(|e| e.parent_id);
        while let Some(parent) = current {
            out.push(parent);
            current = self.elements.get(&parent).and_then(|e| e.parent_id);
        }
        out
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id)?.text.as_deref()
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.text = Some(text.to_string());
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements.get(&id).is_some_and(|e| e.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.add_class(class);
        }
    }

    /// Toggle a class. Returns the new presence, or `None` for a missing element.
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> Option<bool> {
        self.elements.get_mut(&id).map(|e| e.toggle_class(class))
    }

    pub fn set_position(&mut self, id: ElementId, position: Position) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.position = Some(position);
        }
    }

    /// Rendered size of an element: its explicit box when it has one,
    /// otherwise its text measured with the document metrics plus padding.
    /// Detached elements have no size.
    pub fn rendered_size(&self, id: ElementId) -> Size {
        let Some(el) = self.elements.get(&id) else {
            return Size::default();
        };
        if let Some(rect) = el.rect {
            return rect.size();
        }

        let (pad_x, pad_y) = el.padding();
        let scale = el.font_scale();
        let (columns, lines) = match el.text.as_deref() {
            Some(text) if !text.is_empty() => {
                let columns = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                (columns, text.lines().count().max(1))
            }
            _ => (0, 0),
        };
        Size {
            width: columns as f32 * self.metrics.char_width * scale + pad_x * 2.0,
            height: lines as f32 * self.metrics.line_height * scale + pad_y * 2.0,
        }
    }

    /// Bounding rectangle in viewport coordinates. Elements no longer in the
    /// document report an empty rect.
    ///
    /// A positioned element sits at its `{top, left}` even when it also has
    /// an explicit box; the box then only contributes its size.
    pub fn bounding_client_rect(&self, id: ElementId) -> Rect {
        let Some(el) = self.elements.get(&id) else {
            return Rect::default();
        };
        let size = self.rendered_size(id);
        match (el.position, el.rect) {
            (Some(pos), _) => Rect::new(pos.left, pos.top, size.width, size.height),
            (None, Some(rect)) => rect,
            (None, None) => Rect::new(0.0, 0.0, size.width, size.height),
        }
    }
}
