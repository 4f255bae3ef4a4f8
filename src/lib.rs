//! Dashboard UI Simulator
//!
//! A headless model of an admin dashboard page and the behaviors its script
//! wires up: hover tooltips, the mobile menu toggle, the user dropdown, the
//! notification placeholder and the clock display.

pub mod config;
pub mod dashboard;
pub mod dom;
pub mod dump;
pub mod error;
pub mod event;
pub mod markup;
pub mod tooltip;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{Error, Result};
