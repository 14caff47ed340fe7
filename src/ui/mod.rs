//! FirstLife Reader UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK (non-Chromium)
//! - macOS: WKWebView (WebKit, non-Chromium)
//!
//! Book pages render directly in the WebView; the reading controls are
//! injected into them as HTML/CSS/JS. Communication between the Rust
//! backend and the page uses wry IPC.

pub mod webview_app;
