//! Unit tests for the IPC handler — all page events dispatched by `handle_event`.
//!
//! These tests exercise every event through the same code path used by the
//! webview shell, using a temporary on-disk preference file.

use std::sync::Mutex;

use serde_json::json;
use tempfile::TempDir;

use firstlife_reader::app::App;
use firstlife_reader::ipc_handler::{dispatch, handle_event};
use firstlife_reader::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use firstlife_reader::services::reader_controls::ReaderControlsTrait;
use firstlife_reader::types::font::FontSize;

/// Create a fresh App backed by a temp directory preference file.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let pref_path = tmp.path().join("preferences.json");
    let mut app = App::new(Some(pref_path.to_str().unwrap().to_string()));
    app.startup();
    (Mutex::new(app), tmp)
}

/// Reads the font size a separate store instance sees on the same path.
fn persisted_size(tmp: &TempDir) -> FontSize {
    let pref_path = tmp.path().join("preferences.json");
    let mut store = PreferenceStore::new(Some(pref_path.to_str().unwrap().to_string()));
    store.load()
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "ping", &json!({})).unwrap();
    assert!(res.is_empty());
}

// ─── Unknown event ───

#[test]
fn test_unknown_event_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "page.vanish", &json!({}));
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("unknown event"));
}

// ─── Raw message dispatch ───

#[test]
fn test_dispatch_rejects_malformed_json() {
    let (app, _tmp) = setup();
    let res = dispatch(&app, "{not json");
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("malformed event"));
}

#[test]
fn test_dispatch_rejects_missing_cmd() {
    let (app, _tmp) = setup();
    let res = dispatch(&app, r#"{"size": "large"}"#);
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("missing cmd"));
}

#[test]
fn test_dispatch_routes_to_handler() {
    let (app, _tmp) = setup();
    let res = dispatch(&app, r#"{"cmd": "font.increase"}"#).unwrap();
    assert_eq!(res.len(), 1);
    assert!(res[0].contains("classList.add('font-size-large')"));
}

// ─── Page lifecycle ───

#[test]
fn test_page_ready_returns_font_script() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "page.ready", &json!({
        "path": "/index.html",
        "has_progress": false
    })).unwrap();
    assert_eq!(res.len(), 1);
    assert!(res[0].contains("classList.add('font-size-medium')"));
}

#[test]
fn test_page_ready_with_progress_bar_returns_initial_progress() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "page.ready", &json!({
        "path": "/chapters/01-part-i.html",
        "has_progress": true,
        "metrics": {"scroll_y": 0.0, "scroll_height": 400.0, "viewport_height": 100.0}
    })).unwrap();
    assert_eq!(res.len(), 2);
    assert!(res[1].contains("width='0%'"));
}

#[test]
fn test_page_ready_missing_path() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "page.ready", &json!({"has_progress": true}));
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("missing path"));
}

#[test]
fn test_page_ready_closes_sidebar_left_open_on_previous_page() {
    let (app, _tmp) = setup();
    handle_event(&app, "toc.toggle", &json!({})).unwrap();
    assert!(app.lock().unwrap().controls.toc_open());

    handle_event(&app, "page.ready", &json!({"path": "/index.html"})).unwrap();
    assert!(!app.lock().unwrap().controls.toc_open());
}

// ─── Contents sidebar ───

#[test]
fn test_toc_toggle_and_close() {
    let (app, _tmp) = setup();

    let res = handle_event(&app, "toc.toggle", &json!({})).unwrap();
    assert!(res[0].contains("classList.add('open')"));

    let res = handle_event(&app, "toc.close", &json!({})).unwrap();
    assert!(res[0].contains("classList.remove('open')"));

    // Closing again is harmless
    let res = handle_event(&app, "toc.close", &json!({})).unwrap();
    assert_eq!(res.len(), 1);
}

// ─── Font size ───

#[test]
fn test_font_select_applies_and_persists() {
    let (app, tmp) = setup();
    let res = handle_event(&app, "font.select", &json!({"size": "xlarge"})).unwrap();
    assert!(res[0].contains("classList.add('font-size-xlarge')"));
    assert_eq!(persisted_size(&tmp), FontSize::XLarge);
}

#[test]
fn test_font_select_missing_size() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "font.select", &json!({}));
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("missing size"));
}

#[test]
fn test_font_select_unknown_size() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "font.select", &json!({"size": "colossal"}));
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("unknown font size"));
}

#[test]
fn test_font_increase_steps_until_saturated() {
    let (app, tmp) = setup();

    // Fresh store starts at medium; three presses land on the largest size
    assert!(!handle_event(&app, "font.increase", &json!({})).unwrap().is_empty());
    assert!(!handle_event(&app, "font.increase", &json!({})).unwrap().is_empty());
    assert!(handle_event(&app, "font.increase", &json!({})).unwrap().is_empty());
    assert_eq!(persisted_size(&tmp), FontSize::XLarge);

    // A fourth press emits nothing and leaves the stored size alone
    assert!(handle_event(&app, "font.increase", &json!({})).unwrap().is_empty());
    assert_eq!(persisted_size(&tmp), FontSize::XLarge);
}

#[test]
fn test_font_decrease_steps_until_saturated() {
    let (app, tmp) = setup();

    assert!(!handle_event(&app, "font.decrease", &json!({})).unwrap().is_empty());
    assert_eq!(persisted_size(&tmp), FontSize::Small);
    assert!(handle_event(&app, "font.decrease", &json!({})).unwrap().is_empty());
    assert_eq!(persisted_size(&tmp), FontSize::Small);
}

// ─── Keyboard ───

#[test]
fn test_key_down_escape_closes_sidebar() {
    let (app, _tmp) = setup();
    handle_event(&app, "toc.toggle", &json!({})).unwrap();

    let res = handle_event(&app, "key.down", &json!({"key": "Escape"})).unwrap();
    assert!(res[0].contains("classList.remove('open')"));
    assert!(!app.lock().unwrap().controls.toc_open());
}

#[test]
fn test_key_down_ctrl_equals_increases_font() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "key.down", &json!({
        "key": "=", "ctrl": true, "meta": false
    })).unwrap();
    assert!(res[0].contains("classList.add('font-size-large')"));
}

#[test]
fn test_key_down_shifted_plus_increases_font() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "key.down", &json!({
        "key": "+", "meta": true
    })).unwrap();
    assert!(res[0].contains("classList.add('font-size-large')"));
}

#[test]
fn test_key_down_ctrl_minus_decreases_font() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "key.down", &json!({
        "key": "-", "ctrl": true
    })).unwrap();
    assert!(res[0].contains("classList.add('font-size-small')"));
}

#[test]
fn test_key_down_unmatched_chord_is_ignored() {
    let (app, _tmp) = setup();
    // Unbound chord
    let res = handle_event(&app, "key.down", &json!({"key": "q", "ctrl": true})).unwrap();
    assert!(res.is_empty());
    // Bound key without its modifier
    let res = handle_event(&app, "key.down", &json!({"key": "="})).unwrap();
    assert!(res.is_empty());
}

#[test]
fn test_key_down_missing_key() {
    let (app, _tmp) = setup();
    let res = handle_event(&app, "key.down", &json!({"ctrl": true}));
    assert!(res.is_err());
    assert!(res.unwrap_err().contains("missing key"));
}

// ─── Scroll ───

#[test]
fn test_scroll_update_writes_progress() {
    let (app, _tmp) = setup();
    handle_event(&app, "page.ready", &json!({
        "path": "/chapters/01-part-i.html",
        "has_progress": true
    })).unwrap();

    let res = handle_event(&app, "scroll.update", &json!({
        "metrics": {"scroll_y": 150.0, "scroll_height": 400.0, "viewport_height": 100.0}
    })).unwrap();
    assert_eq!(res.len(), 1);
    assert!(res[0].contains("width='50%'"));
}

#[test]
fn test_scroll_update_ignored_without_progress_bar() {
    let (app, _tmp) = setup();
    handle_event(&app, "page.ready", &json!({
        "path": "/index.html",
        "has_progress": false
    })).unwrap();

    let res = handle_event(&app, "scroll.update", &json!({
        "metrics": {"scroll_y": 150.0, "scroll_height": 400.0, "viewport_height": 100.0}
    })).unwrap();
    assert!(res.is_empty());
}

#[test]
fn test_scroll_update_with_missing_metrics_defaults_to_zero() {
    let (app, _tmp) = setup();
    handle_event(&app, "page.ready", &json!({
        "path": "/chapters/01-part-i.html",
        "has_progress": true
    })).unwrap();

    let res = handle_event(&app, "scroll.update", &json!({})).unwrap();
    assert!(res[0].contains("width='0%'"));
}

// ─── Persistence across sessions ───

#[test]
fn test_font_size_survives_restart() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let pref_path = tmp.path().join("preferences.json");

    {
        let mut app = App::new(Some(pref_path.to_str().unwrap().to_string()));
        app.startup();
        let app = Mutex::new(app);
        handle_event(&app, "font.select", &json!({"size": "large"})).unwrap();
    }

    let mut app = App::new(Some(pref_path.to_str().unwrap().to_string()));
    app.startup();
    assert_eq!(app.controls.font_size(), FontSize::Large);

    // The next page renders at the restored size straight away
    let app = Mutex::new(app);
    let res = handle_event(&app, "page.ready", &json!({"path": "/index.html"})).unwrap();
    assert!(res[0].contains("classList.add('font-size-large')"));
}
