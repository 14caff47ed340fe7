//! WebView-based reader application using `wry` + `tao`.
//!
//! Architecture:
//! - Book pages are served from a directory on disk via the `book://`
//!   custom protocol.
//! - The controls bootstrap is inlined into every served HTML page, since
//!   initialization scripts do not run on custom-protocol pages on Windows
//!   WebView2.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; handled events
//!   come back as scripts evaluated in the page.
//! - Requests to open external sites are denied.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::ipc_handler;
use crate::services::controls_builder::ControlsBuilderTrait;
use crate::types::errors::BookPageError;
use crate::types::toc::PageContext;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

/// Whether the webview may navigate to the given URL.
///
/// Only the book protocol is allowed; external sites referenced by book
/// pages open nowhere. The webview has no network surface.
fn allow_navigation(url: &str) -> bool {
    url.starts_with("book://")
}

/// Maps a served file to its Content-Type header.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// Resolves a request path to a file under the book root.
///
/// Only plain path segments are accepted; `..` and other special components
/// are rejected so requests cannot escape the root. An empty path or a
/// directory resolves to its `index.html`.
fn resolve_book_path(root: &Path, request_path: &str) -> Result<PathBuf, BookPageError> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return Err(BookPageError::OutsideRoot(request_path.to_string())),
        }
    }

    if resolved.is_dir() {
        resolved.push("index.html");
    }
    if !resolved.exists() {
        return Err(BookPageError::NotFound(request_path.to_string()));
    }
    Ok(resolved)
}

/// Reads a book file and pairs it with its content type.
fn load_page(root: &Path, request_path: &str) -> Result<(Vec<u8>, &'static str), BookPageError> {
    let path = resolve_book_path(root, request_path)?;
    let bytes = fs::read(&path)
        .map_err(|e| BookPageError::IoError(format!("{}: {}", path.display(), e)))?;
    Ok((bytes, content_type_for(&path)))
}

/// Inserts the bootstrap script before the page's closing body tag.
/// Pages without one get the script appended.
fn inject_bootstrap(app: &Mutex<App>, html: &str, request_path: &str) -> String {
    let context = PageContext::from_path(request_path);
    let script = {
        let a = app.lock().unwrap();
        a.builder.bootstrap_script(context, &a.shortcuts)
    };
    let tag = format!("<script>{}</script>", script);

    match html.rfind("</body>") {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + tag.len());
            out.push_str(&html[..idx]);
            out.push_str(&tag);
            out.push_str(&html[idx..]);
            out
        }
        None => {
            let mut out = String::from(html);
            out.push_str(&tag);
            out
        }
    }
}

/// Serves one request from the book root, injecting the bootstrap into HTML
/// pages. Failures fall back to the help page instead of a blank window.
fn serve_book_page(app: &Mutex<App>, root: &Path, request_path: &str) -> (Vec<u8>, &'static str) {
    match load_page(root, request_path) {
        Ok((bytes, content_type)) => {
            if content_type.starts_with("text/html") {
                let html = String::from_utf8_lossy(&bytes);
                let injected = inject_bootstrap(app, &html, request_path);
                (injected.into_bytes(), content_type)
            } else {
                (bytes, content_type)
            }
        }
        Err(e) => {
            log::warn!("{}", e);
            (help_page(&e).into_bytes(), "text/html; charset=utf-8")
        }
    }
}

/// Page shown when a request cannot be served.
fn help_page(error: &BookPageError) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="UTF-8"><style>
body{{font-family:Georgia,'Times New Roman',serif;background:#faf7f0;color:#3a342b;display:flex;align-items:center;justify-content:center;height:100vh;margin:0}}
.card{{max-width:460px;padding:32px 40px;background:#fff;border:1px solid #d0c8ba;border-radius:8px}}
h1{{font-size:22px;margin:0 0 12px}}
p{{line-height:1.6;margin:8px 0}}
code{{background:#f0ebe0;padding:2px 5px;border-radius:3px;font-size:14px}}
.err{{color:#8a4a2d;font-size:13px;margin-top:16px}}
</style></head><body>
<div class="card">
<h1>The First Life</h1>
<p>The reader could not open this page.</p>
<p>Start it with the directory that holds the book's <code>index.html</code>:</p>
<p><code>firstlife-reader /path/to/book</code></p>
<p class="err">{}</p>
</div>
</body></html>"#,
        error
    )
}

// ─── Main entry point ───

pub fn run() {
    let book_root = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "book".to_string()));
    log::info!("serving book from {}", book_root.display());

    let mut app = App::new(None);
    app.startup();
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("The First Life")
        .with_inner_size(tao::dpi::LogicalSize::new(1100.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let protocol_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("book".into(), move |_wv_id, request| {
            let path = request.uri().path().to_string();
            let (body, content_type) = serve_book_page(&protocol_state, &book_root, &path);
            wry::http::Response::builder()
                .header("Content-Type", content_type)
                .body(body.into())
                .unwrap()
        })
        .with_url("book://localhost/index.html")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            log::debug!("ipc {}", &body[..body.len().min(200)]);
            match ipc_handler::dispatch(&ipc_state, body) {
                Ok(scripts) => {
                    for script in scripts {
                        let _ = ipc_proxy.send_event(UserEvent::EvalScript(script));
                    }
                }
                Err(e) => log::warn!("ipc error: {}", e),
            }
        })
        .with_navigation_handler(move |url: String| {
            let allowed = allow_navigation(&url);
            if !allowed {
                log::info!("blocked navigation to {}", url);
            }
            allowed
        })
        .with_new_window_req_handler(move |url, _features| {
            log::info!("blocked external navigation to {}", url);
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
