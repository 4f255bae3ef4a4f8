//! Simulator configuration persistence.
//!
//! Stores page behavior settings (tooltip attribute and gap, clock interval
//! and format, text metrics) as JSON at
//! `~/.local/share/dashboard-sim/config.json`. `load()` never fails; an
//! explicit path given on the command line goes through `load_from()` and
//! reports errors instead.

use crate::dom::TextMetrics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dashboard-sim")
        .join("config.json")
}

/// Persisted simulator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_tooltip_attribute")]
    pub tooltip_attribute: String,
    #[serde(default = "default_tooltip_gap")]
    pub tooltip_gap: f32,
    #[serde(default = "default_clock_interval")]
    pub clock_interval_secs: u64,
    /// chrono format string for the clock display.
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    #[serde(default = "default_notification_message")]
    pub notification_message: String,
    #[serde(default)]
    pub text_metrics: TextMetrics,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_tooltip_attribute() -> String { crate::tooltip::TOOLTIP_ATTRIBUTE.into() }
fn default_tooltip_gap() -> f32 { crate::tooltip::DEFAULT_GAP }
fn default_clock_interval() -> u64 { 60 }
fn default_clock_format() -> String { "%H:%M".into() }
fn default_notification_message() -> String { "Notifications feature coming soon!".into() }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tooltip_attribute: default_tooltip_attribute(),
            tooltip_gap: default_tooltip_gap(),
            clock_interval_secs: default_clock_interval(),
            clock_format: default_clock_format(),
            notification_message: default_notification_message(),
            text_metrics: TextMetrics::default(),
            path: default_path(),
        }
    }
}

impl DashboardConfig {
    /// Load from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path;
        config
    }

    /// Load from an explicit path, reporting read and parse errors.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current config to disk.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    pub fn clock_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.clock_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.tooltip_attribute, "data-tooltip");
        assert_eq!(config.tooltip_gap, 10.0);
        assert_eq!(config.clock_interval(), std::time::Duration::from_secs(60));
        assert_eq!(config.clock_format, "%H:%M");
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = DashboardConfig::default().with_path(path.clone());
        config.tooltip_gap = 6.0;
        config.clock_interval_secs = 5;
        config.save().unwrap();

        let loaded = DashboardConfig::load_from(&path).unwrap();
        assert_eq!(loaded.tooltip_gap, 6.0);
        assert_eq!(loaded.clock_interval_secs, 5);
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "clock_format": "%I:%M %p" }"#).unwrap();

        let loaded = DashboardConfig::load_from(&path).unwrap();
        assert_eq!(loaded.clock_format, "%I:%M %p");
        assert_eq!(loaded.tooltip_attribute, "data-tooltip");
        assert_eq!(loaded.text_metrics, TextMetrics::default());
    }

    #[test]
    fn test_load_from_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(DashboardConfig::load_from(&path), Err(crate::Error::Config(_))));
    }
}
