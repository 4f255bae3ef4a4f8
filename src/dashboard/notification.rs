//! Notification button placeholder.

use super::Behavior;
use crate::dom::{Document, ElementId};
use crate::event::{EventKind, EventTarget, ListenerRegistry};
use std::sync::{Arc, Mutex};

pub const NOTIFICATION_BUTTON_ID: &str = "notification-button";

/// Sink for user-facing messages (the page's `alert`).
pub trait Notifier: Send {
    fn alert(&mut self, message: &str);
}

/// Writes alerts to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&mut self, message: &str) {
        tracing::info!("alert: {}", message);
    }
}

/// Keeps every alert; clones share the same history.
#[derive(Debug, Default, Clone)]
pub struct AlertLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl Notifier for AlertLog {
    fn alert(&mut self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotificationButton {
    pub button: ElementId,
}

impl NotificationButton {
    pub fn attach(document: &Document, listeners: &mut ListenerRegistry<Behavior>) -> Option<Self> {
        let button = document.get_element_by_id(NOTIFICATION_BUTTON_ID)?;
        listeners.add(EventTarget::Element(button), EventKind::Click, Behavior::Notify);
        Some(Self { button })
    }
}
