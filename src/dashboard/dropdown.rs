//! User menu dropdown.
//!
//! The button toggles the dropdown, any click that reaches the document
//! closes it, and clicks inside the dropdown stop before the document so it
//! does not close itself.

use super::menu::HIDDEN_CLASS;
use super::Behavior;
use crate::dom::{Document, ElementId};
use crate::event::{EventKind, EventTarget, ListenerRegistry, Propagation};

pub const USER_MENU_BUTTON_ID: &str = "user-menu-button";
pub const USER_DROPDOWN_ID: &str = "user-dropdown";

#[derive(Debug, Clone, Copy)]
pub struct UserDropdown {
    pub button: ElementId,
    pub dropdown: ElementId,
}

impl UserDropdown {
    /// Bind when both the button and the dropdown exist.
    pub fn attach(document: &Document, listeners: &mut ListenerRegistry<Behavior>) -> Option<Self> {
        let button = document.get_element_by_id(USER_MENU_BUTTON_ID)?;
        let dropdown = document.get_element_by_id(USER_DROPDOWN_ID)?;

        listeners.add(EventTarget::Element(button), EventKind::Click, Behavior::ToggleDropdown);
        listeners.add(EventTarget::Document, EventKind::Click, Behavior::CloseDropdown);
        listeners.add(EventTarget::Element(dropdown), EventKind::Click, Behavior::KeepDropdownOpen);
        Some(Self { button, dropdown })
    }

    pub fn is_open(&self, document: &Document) -> bool {
        document.contains(self.dropdown) && !document.has_class(self.dropdown, HIDDEN_CLASS)
    }

    pub fn toggle(&self, document: &mut Document) -> Propagation {
        document.toggle_class(self.dropdown, HIDDEN_CLASS);
        Propagation::Stop
    }

    pub fn close(&self, document: &mut Document) -> Propagation {
        document.add_class(self.dropdown, HIDDEN_CLASS);
        Propagation::Continue
    }
}
