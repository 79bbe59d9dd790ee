//! arkbrowser: a small tabbed web browser.
//!
//! With the `gui` feature this opens the browser window. Without it, a console
//! walkthrough drives the browser core over the headless engine.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    if let Err(e) = arkbrowser::ui::webview_app::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::init();

    println!();
    println!("arkbrowser v{} (headless walkthrough)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_navigation();
    demo_tabs();
    demo_filtering();
    demo_downloads();
    demo_bookmarks();
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("---------------------------------------------------------------");
    println!("  {}", name);
    println!("---------------------------------------------------------------");
}

#[cfg(not(feature = "gui"))]
fn demo_app() -> arkbrowser::app::App {
    use arkbrowser::app::App;
    use arkbrowser::engine::headless::HeadlessEngine;
    use arkbrowser::services::settings_store::MemorySettingsStore;

    let engine = HeadlessEngine::new()
        .with_page("https://www.google.com", "Google")
        .with_page("https://www.rust-lang.org", "Rust Programming Language");
    let mut app = App::new(Box::new(MemorySettingsStore::new()), Box::new(engine));
    app.pump();
    app
}

#[cfg(not(feature = "gui"))]
fn demo_navigation() {
    use arkbrowser::services::navigation_resolver::NavigationResolver;
    section("Address bar");

    let resolver = NavigationResolver::default();
    for input in ["https://example.com", "example.com", "rust ownership rules"] {
        println!("  {:<24} -> {}", input, resolver.resolve(input));
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_tabs() {
    section("Tabs");

    let mut app = demo_app();
    let tabs = app.tabs_mut();
    let second = tabs.add_tab(Some("https://www.rust-lang.org"));
    tabs.pump_events();
    tabs.navigate("docs.rs");
    tabs.pump_events();

    for tab in tabs.snapshots() {
        let marker = if tab.active { '*' } else { ' ' };
        println!("  {} [{}] {}", marker, tab.title, tab.url);
    }
    println!("  address bar: {}", tabs.address_bar());
    println!("  back enabled: {}", tabs.navigation_availability().can_go_back);

    tabs.close_tab(second);
    let only = tabs.current();
    tabs.close_tab(only);
    tabs.pump_events();
    println!("  after closing everything: {} tab at {}", tabs.tab_count(), tabs.address_bar());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_filtering() {
    section("Ad blocking");

    let mut app = demo_app();
    for url in ["https://ads.example.com/banner.js", "https://www.rust-lang.org"] {
        let decision = app.profile().intercept_request(url);
        println!("  {:<36} {:?}", url, decision);
    }
    if let Err(e) = app.set_ad_blocker(false) {
        println!("  could not save setting: {}", e);
    }
    if let Some(msg) = app.status_message() {
        println!("  status: {}", msg.text);
    }
    println!(
        "  with blocker off: {:?}",
        app.profile().intercept_request("https://ads.example.com/banner.js")
    );
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_downloads() {
    use arkbrowser::types::download::{DownloadDecision, DownloadRequest};
    section("Downloads");

    let mut app = demo_app();
    let request = DownloadRequest::from_url("https://example.com/files/report.pdf?v=2");
    let (id, decision) = app.on_download_requested(&request);
    match decision {
        DownloadDecision::Accept { path } => println!("  saving to {}", path.display()),
        DownloadDecision::Reject { reason } => println!("  rejected: {}", reason),
    }
    app.on_download_progress(id, 512, 2048);
    for record in app.downloads() {
        println!("  {}", record.label());
    }
    app.on_download_finished(id);
    app.pump();
    if let Some(msg) = app.status_message() {
        println!("  status: {}", msg.text);
    }
    println!("  cleared {} finished download(s)", app.clear_completed_downloads());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_bookmarks() {
    section("Bookmarks");

    let mut app = demo_app();
    app.tabs_mut().navigate("https://www.rust-lang.org");
    app.pump();
    match app.bookmark_current_tab() {
        Ok(index) => println!("  added bookmark #{}", index),
        Err(e) => println!("  could not add bookmark: {}", e),
    }
    for bookmark in app.bookmarks() {
        println!("  {}", bookmark.label());
    }
    println!();
}
