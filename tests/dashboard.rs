//! Tests for the page-level behaviors: menu, user dropdown, notifications,
//! event dispatch.

mod common;

use common::{dashboard_page, id, loaded_dashboard};
use dashboard_ui_sim::dashboard::{AlertLog, FixedTime};
use dashboard_ui_sim::event::{Event, EventKind, EventTarget};
use dashboard_ui_sim::markup::load_page;
use dashboard_ui_sim::{Dashboard, DashboardConfig};

#[test]
fn test_user_menu_button_toggles_dropdown() {
    let (mut dash, _) = loaded_dashboard();
    let button = id(&dash, "user-menu-button");
    let dropdown = *dash.dropdown().unwrap();

    assert!(!dropdown.is_open(dash.document()));
    dash.click(button);
    assert!(dropdown.is_open(dash.document()));
    dash.click(button);
    assert!(!dropdown.is_open(dash.document()));
}

#[test]
fn test_click_elsewhere_closes_dropdown() {
    let (mut dash, _) = loaded_dashboard();
    let button = id(&dash, "user-menu-button");
    let dropdown = *dash.dropdown().unwrap();

    dash.click(button);
    assert!(dropdown.is_open(dash.document()));

    let save = id(&dash, "save");
    dash.click(save);
    assert!(!dropdown.is_open(dash.document()));
}

#[test]
fn test_click_inside_dropdown_keeps_it_open() {
    let (mut dash, _) = loaded_dashboard();
    let button = id(&dash, "user-menu-button");
    let dropdown = *dash.dropdown().unwrap();
    dash.click(button);

    let profile = id(&dash, "profile-link");
    dash.click(profile);
    assert!(dropdown.is_open(dash.document()));

    dash.click(dropdown.dropdown);
    assert!(dropdown.is_open(dash.document()));
}

#[test]
fn test_document_click_closes_dropdown() {
    let (mut dash, _) = loaded_dashboard();
    let button = id(&dash, "user-menu-button");
    let dropdown = *dash.dropdown().unwrap();
    dash.click(button);

    dash.dispatch(Event::new(EventKind::Click, EventTarget::Document));
    assert!(!dropdown.is_open(dash.document()));
}

#[test]
fn test_dropdown_needs_both_elements() {
    let doc = load_page(r#"<button id="user-menu-button"/>"#).unwrap();
    let mut dash = Dashboard::new(doc, DashboardConfig::default());
    let button = id(&dash, "user-menu-button");
    assert!(dash.dropdown().is_none());
    assert_eq!(dash.click(button), 0);
}

#[test]
fn test_mobile_menu_toggles_sidebar() {
    let (mut dash, _) = loaded_dashboard();
    let button = id(&dash, "mobile-menu-button");
    let sidebar = id(&dash, "sidebar");

    assert!(dash.document().has_class(sidebar, "hidden"));
    dash.click(button);
    assert!(!dash.document().has_class(sidebar, "hidden"));
    assert!(dash.document().has_class(sidebar, "w-64"));
    dash.click(button);
    assert!(dash.document().has_class(sidebar, "hidden"));
}

#[test]
fn test_mobile_menu_without_sidebar_is_harmless() {
    let doc = load_page(r#"<button id="mobile-menu-button"/>"#).unwrap();
    let mut dash = Dashboard::new(doc, DashboardConfig::default());
    let button = id(&dash, "mobile-menu-button");
    let before = dash.document().len();
    assert_eq!(dash.click(button), 1);
    assert_eq!(dash.document().len(), before);
}

#[test]
fn test_notification_button_alerts_placeholder() {
    let (mut dash, alerts) = loaded_dashboard();
    let button = id(&dash, "notification-button");

    dash.click(button);
    assert_eq!(alerts.messages(), vec!["Notifications feature coming soon!".to_string()]);
}

#[test]
fn test_notification_message_from_config() {
    let alerts = AlertLog::new();
    let mut config = DashboardConfig::default();
    config.notification_message = "Soon".into();
    let mut dash = Dashboard::new(dashboard_page(), config).with_notifier(alerts.clone());

    let button = id(&dash, "notification-button");
    dash.click(button);
    dash.click(button);
    assert_eq!(alerts.messages(), vec!["Soon".to_string(), "Soon".to_string()]);
}

fn afternoon() -> FixedTime {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
    FixedTime(date.and_hms_opt(14, 7, 0).unwrap())
}

#[test]
fn test_load_writes_clock() {
    let mut dash =
        Dashboard::new(dashboard_page(), DashboardConfig::default()).with_time_source(afternoon());
    let clock = id(&dash, "current-time");

    assert_eq!(dash.document().text(clock), Some("--:--"));
    dash.load();
    assert_eq!(dash.document().text(clock), Some("14:07"));
}

#[test]
fn test_clock_format_with_date() {
    let mut config = DashboardConfig::default();
    config.clock_format = "%Y-%m-%d %H:%M".into();
    let mut dash = Dashboard::new(dashboard_page(), config).with_time_source(afternoon());
    let clock = id(&dash, "current-time");

    dash.load();
    assert_eq!(dash.document().text(clock), Some("2024-11-02 14:07"));
}

#[test]
fn test_clock_format_with_zone_falls_back() {
    let mut config = DashboardConfig::default();
    config.clock_format = "%H:%M %Z".into();
    let mut dash = Dashboard::new(dashboard_page(), config).with_time_source(afternoon());
    let clock = id(&dash, "current-time");

    dash.load();
    assert_eq!(dash.document().text(clock), Some("14:07"));
}

#[test]
fn test_hover_does_not_bubble_into_dropdown_handlers() {
    let (mut dash, _) = loaded_dashboard();
    let dropdown = *dash.dropdown().unwrap();
    let profile = id(&dash, "profile-link");

    assert_eq!(dash.hover(profile), 0);
    assert!(!dropdown.is_open(dash.document()));
}

#[test]
fn test_unknown_element_is_reported() {
    let (dash, _) = loaded_dashboard();
    let err = dash.element("missing-button").unwrap_err();
    assert_eq!(err.to_string(), "Element not found: missing-button");
}
