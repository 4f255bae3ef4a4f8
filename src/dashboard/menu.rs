//! Mobile menu button: shows and hides the sidebar.

use super::Behavior;
use crate::dom::{Document, ElementId};
use crate::event::{EventKind, EventTarget, ListenerRegistry};

pub const MENU_BUTTON_ID: &str = "mobile-menu-button";
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy)]
pub struct MenuToggle {
    pub button: ElementId,
}

impl MenuToggle {
    /// Bind to `#mobile-menu-button`. `None` when the page has no such button.
    pub fn attach(document: &Document, listeners: &mut ListenerRegistry<Behavior>) -> Option<Self> {
        let button = document.get_element_by_id(MENU_BUTTON_ID)?;
        listeners.add(EventTarget::Element(button), EventKind::Click, Behavior::ToggleMenu);
        Some(Self { button })
    }

    /// Toggle `hidden` on the first `<aside>`. Returns whether the sidebar is
    /// hidden afterwards, or `None` when the page has no sidebar.
    pub fn toggle(&self, document: &mut Document) -> Option<bool> {
        let sidebar = document.query_selector("aside")?;
        document.toggle_class(sidebar, HIDDEN_CLASS)
    }
}
