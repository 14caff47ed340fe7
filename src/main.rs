//! FirstLife Reader — a desktop reading companion for "The First Life" HTML book.
//!
//! Entry point: opens the book in a WebView window with the reading controls
//! injected. When built without the `gui` feature, runs a console demo.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    firstlife_reader::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            FirstLife Reader v{} — Demo Mode             ║", env!("CARGO_PKG_VERSION"));
    println!("║     Reading companion for The First Life HTML book         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_font_sizes();
    demo_preferences();
    demo_contents();
    demo_progress();
    demo_shortcuts();
    demo_reader_controls();
    demo_controls_builder();
    demo_event_dispatch();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 9 components demonstrated successfully!");
    println!("  FirstLife Reader is ready to open the book.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// Scratch file for a demo, kept out of the invoking directory.
#[cfg(not(feature = "gui"))]
fn demo_path(name: &str) -> String {
    std::env::temp_dir().join(name).to_string_lossy().to_string()
}

#[cfg(not(feature = "gui"))]
fn demo_font_sizes() {
    use firstlife_reader::types::font::FontSize;
    section("Font Sizes");

    for size in FontSize::ALL {
        println!(
            "  {} -> label {}, class {}, root {}",
            size.as_str(),
            size.label(),
            size.css_class(),
            size.root_percent()
        );
    }
    println!("  Default: {}", FontSize::default().as_str());
    println!("  parse(\"huge\") = {:?}", FontSize::parse("huge"));
    println!("  XLarge.step_up() saturates at: {}", FontSize::XLarge.step_up().as_str());
    println!("  Small.step_down() saturates at: {}", FontSize::Small.step_down().as_str());
    println!("  ✓ FontSize OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_preferences() {
    use firstlife_reader::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
    use firstlife_reader::types::font::FontSize;
    section("Preference Store");

    let path = demo_path("firstlife_demo_preferences.json");
    let _ = std::fs::remove_file(&path);

    let mut store = PreferenceStore::new(Some(path.clone()));
    println!("  Fresh load: {}", store.load().as_str());

    store.set_font_size(FontSize::Large).unwrap();
    println!("  Saved font size: {}", store.font_size().as_str());

    let mut store2 = PreferenceStore::new(Some(path.clone()));
    println!("  Reloaded in a new store: {}", store2.load().as_str());

    std::fs::write(&path, r#"{ "font_size": "gigantic" }"#).unwrap();
    let mut store3 = PreferenceStore::new(Some(path.clone()));
    println!("  Unknown stored value falls back to: {}", store3.load().as_str());

    let _ = std::fs::remove_file(&path);
    println!("  ✓ PreferenceStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_contents() {
    use firstlife_reader::types::toc::{resolve_href, PageContext, BOOK_CONTENTS};
    section("Book Contents");

    let entries: usize = BOOK_CONTENTS.iter().map(|s| s.entries.len()).sum();
    println!("  {} sections, {} entries", BOOK_CONTENTS.len(), entries);
    println!("  First entry: {}", BOOK_CONTENTS[0].entries[0].title);
    let last = BOOK_CONTENTS[BOOK_CONTENTS.len() - 1];
    println!("  Last entry: {}", last.entries[last.entries.len() - 1].title);

    println!("  Page classification:");
    println!("    /index.html -> {:?}", PageContext::from_path("/index.html"));
    println!("    /chapters/01-part-i.html -> {:?}", PageContext::from_path("/chapters/01-part-i.html"));

    println!("  Href from index page: {}", resolve_href("01-part-i.html#chapter-1", PageContext::BookIndex));
    println!("  Href from chapter page: {}", resolve_href("01-part-i.html#chapter-1", PageContext::Chapter));
    println!("  Absolute href untouched: {}", resolve_href("https://example.com", PageContext::BookIndex));
    println!("  ✓ Book contents OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_progress() {
    use firstlife_reader::types::scroll::ScrollMetrics;
    section("Scroll Progress");

    let mid = ScrollMetrics { scroll_y: 1050.0, scroll_height: 3000.0, viewport_height: 900.0 };
    println!("  Mid-page: {:.1}%", mid.progress_percent());

    let top = ScrollMetrics { scroll_y: 0.0, scroll_height: 3000.0, viewport_height: 900.0 };
    println!("  Top of page: {:.1}%", top.progress_percent());

    let short = ScrollMetrics { scroll_y: 0.0, scroll_height: 500.0, viewport_height: 900.0 };
    println!("  Page shorter than viewport: {:.1}%", short.progress_percent());

    let over = ScrollMetrics { scroll_y: 5000.0, scroll_height: 3000.0, viewport_height: 900.0 };
    println!("  Overscroll clamped: {:.1}%", over.progress_percent());
    println!("  ✓ ScrollMetrics OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_shortcuts() {
    use firstlife_reader::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
    section("Shortcut Manager");

    let mgr = ShortcutManager::new();
    println!("  toc_close = {:?}", mgr.get_shortcut("toc_close"));
    println!("  font_increase = {:?}", mgr.get_shortcut("font_increase"));
    println!("  font_decrease = {:?}", mgr.get_shortcut("font_decrease"));

    println!("  Ctrl+= matches: {:?}", mgr.match_event("=", true, false));
    println!("  Ctrl++ (shifted =) matches: {:?}", mgr.match_event("+", true, false));
    println!("  Cmd+- matches: {:?}", mgr.match_event("-", false, true));
    println!("  Escape matches: {:?}", mgr.match_event("Escape", false, false));
    println!("  Bare = ignored: {:?}", mgr.match_event("=", false, false));
    println!("  Intercepted keys: {:?}", mgr.intercepted_keys());
    println!("  ✓ ShortcutManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_reader_controls() {
    use firstlife_reader::services::reader_controls::{ReaderControls, ReaderControlsTrait};
    use firstlife_reader::types::scroll::ScrollMetrics;
    section("Reader Controls");

    let mut controls = ReaderControls::new();
    let metrics = ScrollMetrics { scroll_y: 600.0, scroll_height: 3000.0, viewport_height: 900.0 };

    let scripts = controls.page_ready("/chapters/01-part-i.html", true, metrics);
    println!(
        "  page.ready on chapter page: {} script(s), context = {:?}",
        scripts.len(),
        controls.context()
    );

    let scripts = controls.toggle_toc();
    println!("  Toggled contents: open = {} ({} script)", controls.toc_open(), scripts.len());
    let _ = controls.close_toc();
    println!("  Closed contents: open = {}", controls.toc_open());

    let _ = controls.step_font_up();
    let _ = controls.step_font_up();
    println!("  Stepped up twice: {}", controls.font_size().as_str());
    let blocked = controls.step_font_up();
    println!("  Step at top end: {} script(s)", blocked.len());

    let progress = controls.update_progress(ScrollMetrics::default());
    println!("  Progress on page with bar: {} script(s)", progress.len());
    println!("  ✓ ReaderControls OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_controls_builder() {
    use firstlife_reader::managers::shortcut_manager::ShortcutManager;
    use firstlife_reader::services::controls_builder::{ControlsBuilder, ControlsBuilderTrait};
    use firstlife_reader::types::toc::PageContext;
    section("Controls Builder");

    let builder = ControlsBuilder::new();
    let controls = builder.controls_markup();
    println!(
        "  Controls markup: {} bytes, {} button(s)",
        controls.len(),
        controls.matches("<button").count()
    );

    let sidebar = builder.sidebar_markup(PageContext::BookIndex);
    println!(
        "  Sidebar markup: {} bytes, {} link(s)",
        sidebar.len(),
        sidebar.matches("<a href").count()
    );

    let css = builder.stylesheet();
    println!("  Stylesheet: {} bytes", css.len());

    let shortcuts = ShortcutManager::new();
    let bootstrap = builder.bootstrap_script(PageContext::BookIndex, &shortcuts);
    println!("  Bootstrap script: {} bytes", bootstrap.len());
    println!("  ✓ ControlsBuilder OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_event_dispatch() {
    use std::sync::Mutex;
    use firstlife_reader::app::App;
    use firstlife_reader::ipc_handler;
    section("Event Dispatch");

    let path = demo_path("firstlife_demo_dispatch.json");
    let _ = std::fs::remove_file(&path);
    let app = Mutex::new(App::new(Some(path.clone())));

    let scripts = ipc_handler::dispatch(
        &app,
        r#"{"cmd":"page.ready","path":"/index.html","has_progress":true,"metrics":{"scroll_y":0.0,"scroll_height":3000.0,"viewport_height":900.0}}"#,
    )
    .unwrap();
    println!("  page.ready -> {} script(s)", scripts.len());

    let scripts = ipc_handler::dispatch(&app, r#"{"cmd":"font.increase"}"#).unwrap();
    println!("  font.increase -> {} script(s)", scripts.len());

    let scripts = ipc_handler::dispatch(
        &app,
        r#"{"cmd":"key.down","key":"Escape","ctrl":false,"meta":false}"#,
    )
    .unwrap();
    println!("  Escape key -> {} script(s)", scripts.len());

    let pong = ipc_handler::dispatch(&app, r#"{"cmd":"ping"}"#).unwrap();
    println!("  ping -> {} script(s)", pong.len());

    let err = ipc_handler::dispatch(&app, r#"{"cmd":"made.up"}"#);
    println!("  Unknown event rejected: {}", err.is_err());

    let _ = std::fs::remove_file(&path);
    println!("  ✓ Event dispatch OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use firstlife_reader::app::App;
    use firstlife_reader::services::reader_controls::ReaderControlsTrait;
    section("App Core (full lifecycle)");

    let path = demo_path("firstlife_demo_app.json");
    let _ = std::fs::remove_file(&path);

    let mut app = App::new(Some(path.clone()));
    app.startup();
    println!("  Startup primed controls at: {}", app.controls.font_size().as_str());

    let _ = std::fs::remove_file(&path);
    println!("  ✓ App Core OK");
}
