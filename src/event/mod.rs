//! Event dispatch for the simulated page.
//!
//! Listeners are plain values (behavior tags) registered per target and event
//! kind. Dispatch walks the propagation path and hands each listener to the
//! caller, which decides whether propagation stops.

use crate::dom::{Document, ElementId};
use std::collections::HashMap;

/// Event types the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    DomContentLoaded,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::DomContentLoaded => "DOMContentLoaded",
        }
    }

    /// Pointer enter/leave fire on the target only; clicks bubble.
    pub fn bubbles(&self) -> bool {
        matches!(self, Self::Click)
    }
}

/// Where an event is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Document,
    Element(ElementId),
}

/// A single dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: EventTarget,
}

impl Event {
    pub fn new(kind: EventKind, target: EventTarget) -> Self {
        Self { kind, target }
    }

    pub fn click(id: ElementId) -> Self {
        Self::new(EventKind::Click, EventTarget::Element(id))
    }

    pub fn mouse_enter(id: ElementId) -> Self {
        Self::new(EventKind::MouseEnter, EventTarget::Element(id))
    }

    pub fn mouse_leave(id: ElementId) -> Self {
        Self::new(EventKind::MouseLeave, EventTarget::Element(id))
    }

    pub fn loaded() -> Self {
        Self::new(EventKind::DomContentLoaded, EventTarget::Document)
    }
}

/// What a listener asks of the dispatcher after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Targets an event visits, in order. Empty when the target element is not
/// in the document.
pub fn propagation_path(document: &Document, event: &Event) -> Vec<EventTarget> {
    match event.target {
        EventTarget::Document => vec![EventTarget::Document],
        EventTarget::Element(id) if !document.contains(id) => Vec::new(),
        EventTarget::Element(id) if !event.kind.bubbles() => vec![EventTarget::Element(id)],
        EventTarget::Element(id) => std::iter::once(id)
            .chain(document.ancestors(id))
            .map(EventTarget::Element)
            .chain(std::iter::once(EventTarget::Document))
            .collect(),
    }
}

/// Event queue for pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Listener storage: target -> event kind -> listeners in registration order.
#[derive(Debug)]
pub struct ListenerRegistry<L> {
    listeners: HashMap<EventTarget, HashMap<EventKind, Vec<L>>>,
}

impl<L> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self { listeners: HashMap::new() }
    }
}

impl<L: Copy + PartialEq> ListenerRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener. Adding the same listener twice for one target and
    /// kind is ignored, like `addEventListener` with the same function.
    pub fn add(&mut self, target: EventTarget, kind: EventKind, listener: L) {
        let list = self.listeners.entry(target).or_default().entry(kind).or_default();
        if !list.contains(&listener) {
            list.push(listener);
        }
    }

    pub fn get(&self, target: EventTarget, kind: EventKind) -> &[L] {
        self.listeners
            .get(&target)
            .and_then(|kinds| kinds.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Remove all listeners for a target.
    pub fn remove_all(&mut self, target: EventTarget) {
        self.listeners.remove(&target);
    }

    /// Listeners along the event's propagation path, paired with the target
    /// they are attached to.
    pub fn collect(&self, document: &Document, event: &Event) -> Vec<(EventTarget, L)> {
        propagation_path(document, event)
            .into_iter()
            .flat_map(|target| self.get(target, event.kind).iter().map(move |l| (target, *l)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        assert_eq!(EventKind::Click.as_str(), "click");
        assert_eq!(EventKind::MouseLeave.as_str(), "mouseleave");
        assert_eq!(EventKind::DomContentLoaded.as_str(), "DOMContentLoaded");
    }

    #[test]
    fn test_click_bubbles_to_document() {
        let mut doc = Document::new();
        let div = doc.append_child(doc.body(), doc.create_element("div")).unwrap();
        let btn = doc.append_child(div, doc.create_element("button")).unwrap();

        let path = propagation_path(&doc, &Event::click(btn));
        assert_eq!(
            path,
            vec![
                EventTarget::Element(btn),
                EventTarget::Element(div),
                EventTarget::Element(doc.body()),
                EventTarget::Element(doc.root()),
                EventTarget::Document,
            ]
        );
    }

    #[test]
    fn test_mouse_enter_does_not_bubble() {
        let mut doc = Document::new();
        let btn = doc.append_child(doc.body(), doc.create_element("button")).unwrap();
        assert_eq!(propagation_path(&doc, &Event::mouse_enter(btn)), vec![EventTarget::Element(btn)]);
    }

    #[test]
    fn test_removed_target_has_no_path() {
        let mut doc = Document::new();
        let btn = doc.append_child(doc.body(), doc.create_element("button")).unwrap();
        doc.remove(btn);
        assert!(propagation_path(&doc, &Event::click(btn)).is_empty());
    }

    #[test]
    fn test_registry_ignores_duplicate_listener() {
        let mut reg = ListenerRegistry::new();
        reg.add(EventTarget::Document, EventKind::Click, 1u8);
        reg.add(EventTarget::Document, EventKind::Click, 1u8);
        reg.add(EventTarget::Document, EventKind::Click, 2u8);
        assert_eq!(reg.get(EventTarget::Document, EventKind::Click), &[1, 2]);
    }

    #[test]
    fn test_remove_all_clears_one_target() {
        let mut doc = Document::new();
        let btn = doc.append_child(doc.body(), doc.create_element("button")).unwrap();
        let mut reg = ListenerRegistry::new();
        reg.add(EventTarget::Element(btn), EventKind::Click, 'b');
        reg.add(EventTarget::Element(btn), EventKind::MouseEnter, 'e');
        reg.add(EventTarget::Document, EventKind::Click, 'd');

        reg.remove_all(EventTarget::Element(btn));
        assert!(reg.get(EventTarget::Element(btn), EventKind::MouseEnter).is_empty());
        assert_eq!(reg.collect(&doc, &Event::click(btn)), vec![(EventTarget::Document, 'd')]);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut q = EventQueue::new();
        q.push(Event::loaded());
        q.push(Event::new(EventKind::Click, EventTarget::Document));
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::DomContentLoaded);
        assert!(q.is_empty());
    }
}
