//! IPC event handler for FirstLife Reader.
//!
//! Extracted from the webview shell so it can be unit-tested independently.
//! The `dispatch` function takes a raw IPC message posted by a book page,
//! routes it through `handle_event`, and returns the scripts the shell
//! should evaluate in the page.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::services::preference_store::PreferenceStoreTrait;
use crate::services::reader_controls::ReaderControlsTrait;
use crate::types::font::FontSize;
use crate::types::scroll::ScrollMetrics;

use serde_json::Value;

/// Parses the `metrics` field of an event, falling back to zeroed metrics.
fn parse_metrics(params: &Value) -> ScrollMetrics {
    params
        .get("metrics")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Persists the given font size, logging instead of failing the event.
/// The page has already been updated; a broken config dir should not
/// surface as a reader error.
fn persist_font_size(a: &mut App, size: FontSize) {
    if let Err(e) = a.preferences.set_font_size(size) {
        log::warn!("failed to persist font size: {}", e);
    }
}

/// Steps the font size and persists the result when the step moved.
/// A saturated step emits no scripts and writes nothing.
fn step_font(a: &mut App, up: bool) -> Vec<String> {
    let scripts = if up {
        a.controls.step_font_up()
    } else {
        a.controls.step_font_down()
    };
    if !scripts.is_empty() {
        let size = a.controls.font_size();
        persist_font_size(a, size);
    }
    scripts
}

/// Dispatch a page event to the appropriate handler.
///
/// Returns `Ok(scripts)` to evaluate in the page, or `Err(String)` with an
/// error message.
pub fn handle_event(app: &Mutex<App>, cmd: &str, params: &Value) -> Result<Vec<String>, String> {
    match cmd {
        // ─── Page lifecycle ───
        "page.ready" => {
            let path = params.get("path").and_then(|v| v.as_str()).ok_or("missing path")?;
            let has_progress = params
                .get("has_progress")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let metrics = parse_metrics(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(a.controls.page_ready(path, has_progress, metrics))
        }

        // ─── Contents sidebar ───
        "toc.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(a.controls.toggle_toc())
        }
        "toc.close" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(a.controls.close_toc())
        }

        // ─── Font size ───
        "font.select" => {
            let size_str = params.get("size").and_then(|v| v.as_str()).ok_or("missing size")?;
            let size = FontSize::parse(size_str)
                .ok_or_else(|| format!("unknown font size: {}", size_str))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let scripts = a.controls.apply_font_size(size);
            persist_font_size(&mut a, size);
            Ok(scripts)
        }
        "font.increase" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(step_font(&mut a, true))
        }
        "font.decrease" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(step_font(&mut a, false))
        }

        // ─── Keyboard ───
        "key.down" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let ctrl = params.get("ctrl").and_then(|v| v.as_bool()).unwrap_or(false);
            let meta = params.get("meta").and_then(|v| v.as_bool()).unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let action = a.shortcuts.match_event(key, ctrl, meta);
            match action.as_deref() {
                Some("toc_close") => Ok(a.controls.close_toc()),
                Some("font_increase") => Ok(step_font(&mut a, true)),
                Some("font_decrease") => Ok(step_font(&mut a, false)),
                _ => Ok(Vec::new()),
            }
        }

        // ─── Scroll ───
        "scroll.update" => {
            let metrics = parse_metrics(params);
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(a.controls.update_progress(metrics))
        }

        // ─── Ping ───
        "ping" => Ok(Vec::new()),

        _ => Err(format!("unknown event: {}", cmd)),
    }
}

/// Parses a raw IPC message body and dispatches the event it carries.
pub fn dispatch(app: &Mutex<App>, message: &str) -> Result<Vec<String>, String> {
    let value: Value =
        serde_json::from_str(message).map_err(|e| format!("malformed event: {}", e))?;
    let cmd = value
        .get("cmd")
        .and_then(|v| v.as_str())
        .ok_or("missing cmd")?
        .to_string();
    handle_event(app, &cmd, &value)
}
