//! Shared test helpers.

use dashboard_ui_sim::dashboard::AlertLog;
use dashboard_ui_sim::dom::{Document, ElementId};
use dashboard_ui_sim::markup::load_page;
use dashboard_ui_sim::{Dashboard, DashboardConfig};

/// A trimmed-down admin dashboard page with every scripted element.
pub const DASHBOARD_PAGE: &str = r#"
<html>
  <head><title>Admin Panel</title></head>
  <body class="bg-gray-100">
    <aside id="sidebar" class="hidden md:block w-64" data-rect="0,0,256,900">
      <a id="nav-events" href="/admin/events" data-tooltip="Manage events" data-rect="16,80,224,40">Events</a>
      <a id="nav-bookings" href="/admin/bookings" data-tooltip="Bookings &amp; payments" data-rect="16,130,224,40">Bookings</a>
    </aside>
    <header data-rect="256,0,1184,64">
      <button id="mobile-menu-button" data-rect="272,16,32,32">Menu</button>
      <span id="current-time" class="text-sm">--:--</span>
      <button id="notification-button" data-tooltip="Notifications" data-rect="1300,16,32,32">Bell</button>
      <button id="user-menu-button" data-rect="1350,16,64,32">Admin</button>
      <div id="user-dropdown" class="hidden absolute" data-rect="1250,56,180,120">
        <a id="profile-link" href="/admin/profile">Profile</a>
        <a id="logout-link" href="/logout">Log out</a>
      </div>
    </header>
    <main data-rect="256,64,1184,836">
      <button id="save" data-tooltip="Save your work" data-rect="200,100,50,20">Save</button>
    </main>
  </body>
</html>
"#;

#[allow(dead_code)]
pub fn dashboard_page() -> Document {
    load_page(DASHBOARD_PAGE).expect("dashboard page parses")
}

/// Loaded dashboard plus a handle on the alerts it raises.
#[allow(dead_code)]
pub fn loaded_dashboard() -> (Dashboard, AlertLog) {
    let alerts = AlertLog::new();
    let mut dash = Dashboard::new(dashboard_page(), DashboardConfig::default()).with_notifier(alerts.clone());
    dash.load();
    (dash, alerts)
}

/// Overlays currently in the document (elements carrying the overlay classes
/// under the body).
#[allow(dead_code)]
pub fn overlays(doc: &Document) -> Vec<ElementId> {
    doc.query_by_class("z-50")
}

#[allow(dead_code)]
pub fn id(dash: &Dashboard, html_id: &str) -> ElementId {
    dash.element(html_id).unwrap()
}
