//! Clock display: writes the local time into `#current-time` on load and then
//! on a fixed interval.

use super::Dashboard;
use crate::dom::Document;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const CURRENT_TIME_ID: &str = "current-time";

const FALLBACK_FORMAT: &str = "%H:%M";

/// Where the clock reads the local date and time from.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub NaiveDateTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct Clock {
    format: String,
    source: Box<dyn TimeSource>,
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock").field("format", &self.format).finish_non_exhaustive()
    }
}

impl Clock {
    /// Formats chrono cannot render for a local date and time (unknown
    /// specifiers, or zone fields such as `%Z`) fall back to `%H:%M`.
    pub fn new(format: &str) -> Self {
        let format = if renders(format) {
            format.to_string()
        } else {
            tracing::warn!("Invalid clock format {:?}, using {}", format, FALLBACK_FORMAT);
            FALLBACK_FORMAT.to_string()
        };
        Self { format, source: Box::new(LocalTime) }
    }

    pub fn with_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn format_time(&self, time: NaiveDateTime) -> String {
        let mut out = String::new();
        match write!(out, "{}", time.format_with_items(StrftimeItems::new(&self.format))) {
            Ok(()) => out,
            Err(_) => time.format(FALLBACK_FORMAT).to_string(),
        }
    }

    pub fn current(&self) -> String {
        self.format_time(self.source.now())
    }

    /// Write the current time into `#current-time`. Returns the text written,
    /// or `None` when the page has no clock element.
    pub fn update(&self, document: &mut Document) -> Option<String> {
        let target = document.get_element_by_id(CURRENT_TIME_ID)?;
        let text = self.current();
        document.set_text(target, &text);
        Some(text)
    }
}

/// Whether `format` parses and renders against a zone-less local timestamp.
fn renders(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut out = String::new();
    write!(out, "{}", NaiveDateTime::MIN.format_with_items(StrftimeItems::new(format))).is_ok()
}

/// Run the periodic clock update until `shutdown` flips to `true` or its
/// sender is dropped. The first update happens one `period` after start; the
/// page-loaded handler covers the initial one.
pub fn spawn_clock(
    dashboard: Arc<Mutex<Dashboard>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let text = dashboard.lock().await.update_clock();
                    tracing::trace!("clock tick: {:?}", text);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Clock stopped");
    })
}
