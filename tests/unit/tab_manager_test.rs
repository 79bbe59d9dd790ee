use arkbrowser::engine::headless::HeadlessEngine;
use arkbrowser::managers::tab_manager::TabManager;
use arkbrowser::services::profile::BrowserProfile;
use arkbrowser::types::events::SessionEvent;
use arkbrowser::types::tab::TabId;

const HOME: &str = "https://home.test/";

fn manager() -> TabManager {
    let engine = HeadlessEngine::new()
        .with_page(HOME, "Home")
        .with_page("https://b.test/", "Bravo");
    let mut mgr = TabManager::new(HOME, BrowserProfile::default().shared(), Box::new(engine));
    mgr.pump_events();
    mgr
}

#[test]
fn test_starts_with_one_home_tab() {
    let mgr = manager();
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.current_session().url(), HOME);
    assert_eq!(mgr.address_bar(), HOME);
    assert_eq!(mgr.progress(), None);
}

#[test]
fn test_add_tab_activates_new_tab() {
    let mut mgr = manager();
    let first = mgr.current();
    let second = mgr.add_tab(Some("https://b.test/"));
    assert_ne!(first, second);
    assert_eq!(mgr.current(), second);
    assert_eq!(mgr.tab_order(), vec![first, second]);

    mgr.pump_events();
    assert_eq!(mgr.address_bar(), "https://b.test/");
    assert_eq!(mgr.current_session().title(), "Bravo");
}

#[test]
fn test_add_tab_without_url_opens_home() {
    let mut mgr = manager();
    let id = mgr.add_tab(None);
    assert_eq!(mgr.session(id).map(|s| s.target_url()), Some(HOME));
}

#[test]
fn test_closing_last_tab_returns_home() {
    let mut mgr = manager();
    mgr.navigate("https://b.test/");
    mgr.pump_events();
    let only = mgr.current();

    assert!(mgr.close_tab(only));
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.current(), only);
    assert_eq!(mgr.current_session().target_url(), HOME);

    mgr.pump_events();
    assert_eq!(mgr.address_bar(), HOME);
}

#[test]
fn test_closing_active_tab_selects_same_index() {
    let mut mgr = manager();
    let first = mgr.current();
    let second = mgr.add_tab(Some("https://b.test/"));
    let third = mgr.add_tab(Some("https://c.test/"));

    assert!(mgr.activate(second));
    assert!(mgr.close_tab(second));
    assert_eq!(mgr.current(), third);
    assert_eq!(mgr.tab_order(), vec![first, third]);

    assert!(mgr.close_tab(third));
    assert_eq!(mgr.current(), first);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut mgr = manager();
    let stranger = TabId::new();
    assert!(!mgr.close_tab(stranger));
    assert!(!mgr.activate(stranger));
    assert!(mgr.event_sink(stranger).is_none());
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_background_events_do_not_touch_chrome() {
    let mut mgr = manager();
    let background = mgr.current();
    mgr.add_tab(Some("https://b.test/"));
    mgr.pump_events();
    let address = mgr.address_bar().to_string();

    let sink = mgr.event_sink(background).unwrap();
    sink.emit(SessionEvent::LoadStarted);
    sink.emit(SessionEvent::LoadProgress(30));
    sink.emit(SessionEvent::UrlChanged("https://elsewhere.test/".into()));
    sink.emit(SessionEvent::TitleChanged("Elsewhere".into()));
    assert_eq!(mgr.pump_events(), 4);

    assert_eq!(mgr.address_bar(), address);
    assert_eq!(mgr.progress(), None);
    let bg = mgr.session(background).unwrap();
    assert_eq!(bg.url(), "https://elsewhere.test/");
    assert_eq!(bg.title(), "Elsewhere");
    assert!(bg.load_state().is_loading());
}

#[test]
fn test_active_events_update_chrome() {
    let mut mgr = manager();
    let sink = mgr.event_sink(mgr.current()).unwrap();
    sink.emit(SessionEvent::LoadStarted);
    sink.emit(SessionEvent::LoadProgress(55));
    sink.emit(SessionEvent::UrlChanged("https://moved.test/".into()));
    mgr.pump_events();
    assert_eq!(mgr.progress(), Some(55));
    assert_eq!(mgr.address_bar(), "https://moved.test/");

    sink.emit(SessionEvent::LoadFinished { ok: true });
    mgr.pump_events();
    assert_eq!(mgr.progress(), None);
}

#[test]
fn test_switching_tabs_resyncs_chrome() {
    let mut mgr = manager();
    let first = mgr.current();
    let second = mgr.add_tab(Some("https://b.test/"));
    mgr.pump_events();
    mgr.navigate("https://c.test/");
    mgr.pump_events();
    assert!(mgr.navigation_availability().can_go_back);

    mgr.activate(first);
    assert_eq!(mgr.address_bar(), HOME);
    assert!(!mgr.navigation_availability().can_go_back);

    // A loading background tab shows its progress once activated.
    let sink = mgr.event_sink(second).unwrap();
    sink.emit(SessionEvent::LoadStarted);
    sink.emit(SessionEvent::LoadProgress(20));
    mgr.pump_events();
    assert_eq!(mgr.progress(), None);
    mgr.activate(second);
    assert_eq!(mgr.progress(), Some(20));
    assert_eq!(mgr.chrome().progress, Some(20));
}

#[test]
fn test_navigate_resolves_input() {
    let mut mgr = manager();
    assert_eq!(mgr.navigate("example.com").as_deref(), Some("https://example.com"));
    assert_eq!(mgr.current_session().target_url(), "https://example.com");

    let search = mgr.navigate("hello world").unwrap();
    assert!(search.contains("hello%20world"));
}

#[test]
fn test_blank_navigation_is_ignored() {
    let mut mgr = manager();
    assert_eq!(mgr.navigate("   "), None);
    assert_eq!(mgr.current_session().target_url(), HOME);
}

#[test]
fn test_home_page_change_applies_to_new_tabs() {
    let mut mgr = manager();
    mgr.set_home_page("https://new-home.test/");
    let id = mgr.add_tab(None);
    assert_eq!(mgr.session(id).unwrap().target_url(), "https://new-home.test/");
    mgr.navigate("https://b.test/");
    mgr.navigate_home();
    assert_eq!(mgr.current_session().target_url(), "https://new-home.test/");
}

#[test]
fn test_snapshots_mark_active_tab() {
    let mut mgr = manager();
    mgr.add_tab(Some("https://b.test/"));
    mgr.pump_events();
    let snaps = mgr.snapshots();
    assert_eq!(snaps.len(), 2);
    assert!(!snaps[0].active);
    assert!(snaps[1].active);
    assert_eq!(snaps[1].title, "Bravo");
}
