//! Document tree dump for diagnostics.

use crate::dom::{Document, ElementId};
use std::fmt::Write;

/// Render the document as an indented tree, one element per line.
pub fn build_tree(document: &Document, visible_only: bool) -> String {
    let mut out = String::new();
    write_element(&mut out, document, document.root(), 0, visible_only);
    out
}

/// One-line description: `tag#id.class [left,top wxh] @(top,left) "text"`.
pub fn describe(document: &Document, id: ElementId) -> String {
    let Some(el) = document.get(id) else {
        return format!("<removed {}>", id);
    };
    let mut line = el.tag.clone();
    if let Some(ref html_id) = el.html_id {
        let _ = write!(line, "#{}", html_id);
    }
    for class in &el.classes {
        let _ = write!(line, ".{}", class);
    }
    if let Some(rect) = el.rect {
        let _ = write!(line, " [{},{} {}x{}]", rect.left, rect.top, rect.width, rect.height);
    }
    if let Some(pos) = el.position {
        let _ = write!(line, " @({},{})", pos.top, pos.left);
    }
    if let Some(ref text) = el.text {
        let _ = write!(line, " {:?}", text);
    }
    line
}

fn write_element(out: &mut String, document: &Document, id: ElementId, depth: usize, visible_only: bool) {
    let Some(el) = document.get(id) else { return };
    if visible_only && el.has_class("hidden") {
        return;
    }
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), describe(document, id));
    for child in &el.children {
        write_element(out, document, *child, depth + 1, visible_only);
    }
}
