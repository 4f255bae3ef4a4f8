//! Element - a single node of the page document.

use super::{next_element_id, Position, Rect};
use std::collections::BTreeMap;

/// Opaque element identity. Stable for the element's whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A document element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Unique element ID.
    pub id: ElementId,
    /// Lowercase tag name (`div`, `button`, `aside`...).
    pub tag: String,
    /// Value of the `id` attribute, if any.
    pub html_id: Option<String>,
    /// Parent element ID.
    pub parent_id: Option<ElementId>,
    /// Child element IDs in document order.
    pub children: Vec<ElementId>,
    /// Raw attributes other than `id` and `class`.
    pub attributes: BTreeMap<String, String>,
    /// Class list in insertion order.
    pub classes: Vec<String>,
    /// Text content.
    pub text: Option<String>,
    /// Explicit layout box, when the page provides one.
    pub rect: Option<Rect>,
    /// Absolute position set through the style (positioned overlays).
    pub position: Option<Position>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            id: ElementId(next_element_id()),
            tag: tag.to_ascii_lowercase(),
            html_id: None,
            parent_id: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            text: None,
            rect: None,
            position: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Replace the class list from a whitespace-separated `class` value.
    pub fn set_class_name(&mut self, value: &str) {
        self.classes.clear();
        for class in value.split_whitespace() {
            self.add_class(class);
        }
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    /// Horizontal and vertical padding implied by `p-*`, `px-*` and `py-*`
    /// utility classes (one step = 4 units).
    pub fn padding(&self) -> (f32, f32) {
        let mut x = 0.0;
        let mut y = 0.0;
        for class in &self.classes {
            let step = |rest: &str| rest.parse::<f32>().ok().map(|n| n * 4.0);
            if let Some(v) = class.strip_prefix("px-").and_then(step) {
                x = v;
            } else if let Some(v) = class.strip_prefix("py-").and_then(step) {
                y = v;
            } else if let Some(v) = class.strip_prefix("p-").and_then(step) {
                x = v;
                y = v;
            }
        }
        (x, y)
    }

    /// Font scale implied by `text-<size>` classes, relative to the base size.
    pub fn font_scale(&self) -> f32 {
        self.classes
            .iter()
            .rev()
            .find_map(|c| match c.as_str() {
                "text-xs" => Some(0.75),
                "text-sm" => Some(0.875),
                "text-base" => Some(1.0),
                "text-lg" => Some(1.125),
                "text-xl" => Some(1.25),
                _ => None,
            })
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class() {
        let mut el = Element::new("ASIDE");
        assert_eq!(el.tag, "aside");
        assert!(el.toggle_class("hidden"));
        assert!(el.has_class("hidden"));
        assert!(!el.toggle_class("hidden"));
        assert!(!el.has_class("hidden"));
    }

    #[test]
    fn test_class_name_dedups() {
        let mut el = Element::new("div");
        el.set_class_name("a  b a");
        assert_eq!(el.class_name(), "a b");
    }

    #[test]
    fn test_padding_and_font_scale() {
        let mut el = Element::new("div");
        el.set_class_name("absolute px-2 py-1 text-sm");
        assert_eq!(el.padding(), (8.0, 4.0));
        assert_eq!(el.font_scale(), 0.875);

        el.set_class_name("p-3");
        assert_eq!(el.padding(), (12.0, 12.0));
        assert_eq!(el.font_scale(), 1.0);
    }
}
