//! XHTML page parsing into a [`Document`].

use super::RECT_ATTRIBUTE;
use crate::dom::{Document, Element, ElementId, Rect, TextMetrics};
use crate::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Parse a page from a string.
pub fn load_page(markup: &str) -> Result<Document> {
    let mut document = Document::new();
    load_page_into(&mut document, markup)?;
    Ok(document)
}

/// Parse a page from disk, measuring text with the given metrics.
pub fn load_page_file(path: &Path, metrics: TextMetrics) -> Result<Document> {
    let contents = std::fs::read_to_string(path)?;
    let mut document = Document::with_metrics(metrics);
    load_page_into(&mut document, &contents)?;
    tracing::debug!("Loaded {} element(s) from {}", document.len(), path.display());
    Ok(document)
}

/// Parse markup and append it to an existing document's body.
///
/// `<html>` and `<body>` merge into the document's own root and body;
/// `<head>` goes under the root. Everything else is appended in place.
pub fn load_page_into(document: &mut Document, markup: &str) -> Result<()> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<ElementId> = vec![document.body()];
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let parent = current(&stack, document);
                let id = open_element(document, parent, &start)?;
                stack.push(id);
            }
            Event::Empty(start) => {
                let parent = current(&stack, document);
                open_element(document, parent, &start)?;
            }
            Event::End(_) => {
                // Keep the body as the floor so stray end tags are harmless.
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                let target = current(&stack, document);
                append_text(document, target, text.trim());
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                let target = current(&stack, document);
                append_text(document, target, text.trim());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

fn current(stack: &[ElementId], document: &Document) -> ElementId {
    stack.last().copied().unwrap_or(document.body())
}

/// Create (or merge, for `html`/`body`) the element for a start tag.
fn open_element(document: &mut Document, parent: ElementId, start: &BytesStart) -> Result<ElementId> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();
    let (target, parent) = match tag.as_str() {
        "html" => (Some(document.root()), parent),
        "body" => (Some(document.body()), parent),
        "head" => (None, document.root()),
        _ => (None, parent),
    };

    let mut element = match target {
        Some(id) => document.get(id).cloned().unwrap_or_else(|| Element::new(&tag)),
        None => Element::new(&tag),
    };
    apply_attributes(&mut element, start)?;

    match target {
        Some(id) => {
            if let Some(existing) = document.get_mut(id) {
                existing.attributes = element.attributes;
                existing.classes = element.classes;
                existing.rect = element.rect;
            }
            Ok(id)
        }
        None => document
            .append_child(parent, element)
            .ok_or_else(|| Error::ElementNotFound(format!("parent of <{}>", tag))),
    }
}

fn apply_attributes(element: &mut Element, start: &BytesStart) -> Result<()> {
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?;
        match key.as_str() {
            "id" => element.html_id = Some(value.into_owned()),
            "class" => element.set_class_name(&value),
            RECT_ATTRIBUTE => {
                let rect = Rect::parse(&value).ok_or_else(|| Error::InvalidRect {
                    tag: element.tag.clone(),
                    value: value.to_string(),
                })?;
                element.rect = Some(rect);
                element.set_attribute(&key, &value);
            }
            _ => element.set_attribute(&key, &value),
        }
    }
    Ok(())
}

fn append_text(document: &mut Document, id: ElementId, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(el) = document.get_mut(id) {
        match el.text {
            Some(ref mut existing) => {
                existing.push(' ');
                existing.push_str(text);
            }
            None => el.text = Some(text.to_string()),
        }
    }
}
