//! The dashboard page: one document plus every behavior bound to it.

pub mod clock;
pub mod dropdown;
pub mod menu;
pub mod notification;

pub use clock::{spawn_clock, Clock, FixedTime, LocalTime, TimeSource};
pub use dropdown::UserDropdown;
pub use menu::MenuToggle;
pub use notification::{AlertLog, LogNotifier, NotificationButton, Notifier};

use crate::config::DashboardConfig;
use crate::dom::{Document, ElementId};
use crate::event::{Event, EventKind, EventQueue, EventTarget, ListenerRegistry, Propagation};
use crate::tooltip::TooltipManager;
use crate::{Error, Result};

/// Listener tags. Each one names the page behavior that runs when its event
/// reaches the target it was registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    PageLoaded,
    ToggleMenu,
    ToggleDropdown,
    CloseDropdown,
    KeepDropdownOpen,
    Notify,
    ShowTooltip,
    HideTooltip,
}

pub struct Dashboard {
    document: Document,
    config: DashboardConfig,
    listeners: ListenerRegistry<Behavior>,
    queue: EventQueue,
    tooltips: TooltipManager,
    menu: Option<MenuToggle>,
    dropdown: Option<UserDropdown>,
    notifications: Option<NotificationButton>,
    clock: Clock,
    notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("elements", &self.document.len())
            .field("tooltips", &self.tooltips)
            .field("menu", &self.menu)
            .field("dropdown", &self.dropdown)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Bind the page behaviors whose elements exist. Tooltips and the first
    /// clock update wait for [`load`](Self::load).
    pub fn new(document: Document, config: DashboardConfig) -> Self {
        let mut listeners = ListenerRegistry::new();
        let menu = MenuToggle::attach(&document, &mut listeners);
        let dropdown = UserDropdown::attach(&document, &mut listeners);
        let notifications = NotificationButton::attach(&document, &mut listeners);
        listeners.add(EventTarget::Document, EventKind::DomContentLoaded, Behavior::PageLoaded);

        tracing::debug!(
            "Dashboard attached: menu={} dropdown={} notifications={}",
            menu.is_some(),
            dropdown.is_some(),
            notifications.is_some()
        );

        Self {
            tooltips: TooltipManager::with_options(&config.tooltip_attribute, config.tooltip_gap),
            clock: Clock::new(&config.clock_format),
            document,
            config,
            listeners,
            queue: EventQueue::new(),
            menu,
            dropdown,
            notifications,
            notifier: Box::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.clock = Clock::new(&self.config.clock_format).with_source(source);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn tooltips(&self) -> &TooltipManager {
        &self.tooltips
    }

    pub fn dropdown(&self) -> Option<&UserDropdown> {
        self.dropdown.as_ref()
    }

    pub fn menu(&self) -> Option<&MenuToggle> {
        self.menu.as_ref()
    }

    pub fn notifications(&self) -> Option<&NotificationButton> {
        self.notifications.as_ref()
    }

    /// Give `anchor` a tooltip, including elements added after load.
    pub fn register_tooltip(&mut self, anchor: ElementId, text: &str) {
        self.tooltips.register(anchor, text);
        self.bind_tooltip(anchor);
    }

    fn bind_tooltip(&mut self, anchor: ElementId) {
        let target = EventTarget::Element(anchor);
        self.listeners.add(target, EventKind::MouseEnter, Behavior::ShowTooltip);
        self.listeners.add(target, EventKind::MouseLeave, Behavior::HideTooltip);
    }

    /// Remove an element and its subtree from the page.
    ///
    /// Anchors inside the subtree are unregistered first so their overlays
    /// go with them, and listeners bound to the removed elements are
    /// dropped. The root and body cannot be removed.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        if id == self.document.root() || id == self.document.body() {
            return false;
        }
        let removed = self.document.subtree(id);
        for &el in &removed {
            if self.tooltips.is_registered(el) {
                self.tooltips.unregister(&mut self.document, el);
            }
            self.listeners.remove_all(EventTarget::Element(el));
        }
        tracing::debug!("Removing {} element(s) under {}", removed.len(), id);
        self.document.remove(id)
    }

    /// Deliver one event. Returns how many listeners ran.
    ///
    /// Listeners are collected before any of them runs. Stopping propagation
    /// lets the remaining listeners on the same target finish.
    pub fn dispatch(&mut self, event: Event) -> usize {
        let listeners = self.listeners.collect(&self.document, &event);
        let mut stopped_at: Option<EventTarget> = None;
        let mut ran = 0;
        for (target, behavior) in listeners {
            if stopped_at.is_some_and(|t| t != target) {
                break;
            }
            ran += 1;
            if self.run(target, behavior) == Propagation::Stop {
                stopped_at = Some(target);
            }
        }
        tracing::trace!("{} on {:?}: {} listener(s)", event.kind.as_str(), event.target, ran);
        ran
    }

    /// Queue an event for the next [`flush`](Self::flush).
    pub fn queue(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Dispatch queued events in order, one at a time.
    pub fn flush(&mut self) -> usize {
        self.queue.drain().into_iter().map(|event| self.dispatch(event)).sum()
    }

    pub fn load(&mut self) -> usize {
        self.dispatch(Event::loaded())
    }

    pub fn click(&mut self, id: ElementId) -> usize {
        self.dispatch(Event::click(id))
    }

    pub fn hover(&mut self, id: ElementId) -> usize {
        self.dispatch(Event::mouse_enter(id))
    }

    pub fn leave(&mut self, id: ElementId) -> usize {
        self.dispatch(Event::mouse_leave(id))
    }

    /// Resolve an `id` attribute for the CLI and scripted scenarios.
    pub fn element(&self, html_id: &str) -> Result<ElementId> {
        self.document
            .get_element_by_id(html_id)
            .ok_or_else(|| Error::ElementNotFound(html_id.to_string()))
    }

    pub fn update_clock(&mut self) -> Option<String> {
        self.clock.update(&mut self.document)
    }

    fn run(&mut self, target: EventTarget, behavior: Behavior) -> Propagation {
        let element = match target {
            EventTarget::Element(id) => Some(id),
            EventTarget::Document => None,
        };
        match behavior {
            Behavior::PageLoaded => {
                for anchor in self.tooltips.init(&self.document) {
                    self.bind_tooltip(anchor);
                }
                self.update_clock();
                Propagation::Continue
            }
            Behavior::ToggleMenu => {
                if let Some(menu) = self.menu {
                    let hidden = menu.toggle(&mut self.document);
                    tracing::debug!("Sidebar hidden: {:?}", hidden);
                }
                Propagation::Continue
            }
            Behavior::ToggleDropdown => match self.dropdown {
                Some(dropdown) => dropdown.toggle(&mut self.document),
                None => Propagation::Continue,
            },
            Behavior::CloseDropdown => match self.dropdown {
                Some(dropdown) => dropdown.close(&mut self.document),
                None => Propagation::Continue,
            },
            Behavior::KeepDropdownOpen => Propagation::Stop,
            Behavior::Notify => {
                self.notifier.alert(&self.config.notification_message);
                Propagation::Continue
            }
            Behavior::ShowTooltip => {
                if let Some(anchor) = element {
                    self.tooltips.hover_start(&mut self.document, anchor);
                }
                Propagation::Continue
            }
            Behavior::HideTooltip => {
                if let Some(anchor) = element {
                    self.tooltips.hover_end(&mut self.document, anchor);
                }
                Propagation::Continue
            }
        }
    }
}
