//! Controls builder for FirstLife Reader.
//!
//! Produces the markup for the floating controls and contents sidebar, the
//! stylesheet that skins them, and the bootstrap script injected into every
//! book page. The bootstrap constructs the DOM, wires events back over IPC,
//! and reports the page to the controller. Element ids are defined here and
//! nowhere else; scripts address the controls through them.

use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::types::font::FontSize;
use crate::types::toc::{resolve_href, PageContext, BOOK_CONTENTS};

/// Container for the floating controls.
pub const CONTROLS_ID: &str = "fl-reader-controls";
/// Button that toggles the contents sidebar.
pub const TOC_TOGGLE_ID: &str = "fl-toc-toggle";
/// Button in the sidebar header that closes it.
pub const TOC_CLOSE_ID: &str = "fl-toc-close";
/// The contents sidebar itself.
pub const TOC_SIDEBAR_ID: &str = "fl-toc-sidebar";
/// Click-to-close backdrop behind the open sidebar.
pub const TOC_OVERLAY_ID: &str = "fl-toc-overlay";
/// Progress bar supplied by the book's own page template, not injected.
pub const PROGRESS_ID: &str = "progress";

const BASE_STYLESHEET: &str = include_str!("../../resources/ui/reader.css");

/// Id of the font button selecting the given size.
pub fn font_button_id(size: FontSize) -> String {
    format!("fl-font-{}", size.as_str())
}

/// Trait defining controls construction operations.
pub trait ControlsBuilderTrait {
    fn controls_markup(&self) -> String;
    fn sidebar_markup(&self, context: PageContext) -> String;
    fn stylesheet(&self) -> String;
    fn bootstrap_script(&self, context: PageContext, shortcuts: &ShortcutManager) -> String;
}

/// Controls builder implementation generating markup from the static
/// contents table and the font size palette.
pub struct ControlsBuilder;

impl ControlsBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ControlsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlsBuilderTrait for ControlsBuilder {
    /// Markup for the floating controls: contents toggle plus one button
    /// per font size.
    fn controls_markup(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="reader-controls" id="{}">"#,
            CONTROLS_ID
        ));
        html.push_str(&format!(
            r#"<button id="{}" aria-label="Toggle table of contents">&#9776; Contents</button>"#,
            TOC_TOGGLE_ID
        ));
        html.push_str(r#"<div class="font-controls">"#);
        for size in FontSize::ALL {
            html.push_str(&format!(
                r#"<button id="{}" aria-label="Font size {}">{}</button>"#,
                font_button_id(size),
                size.as_str(),
                size.label()
            ));
        }
        html.push_str("</div></div>");
        html
    }

    /// Markup for the overlay and the contents sidebar, with hrefs resolved
    /// for the page the sidebar is rendered into.
    fn sidebar_markup(&self, context: PageContext) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="toc-overlay" id="{}"></div>"#,
            TOC_OVERLAY_ID
        ));
        html.push_str(&format!(
            r#"<nav class="toc-sidebar" id="{}" aria-label="Table of contents">"#,
            TOC_SIDEBAR_ID
        ));
        html.push_str(&format!(
            r#"<div class="toc-sidebar-header"><h3>Contents</h3><button class="toc-close" id="{}" aria-label="Close table of contents">&times;</button></div>"#,
            TOC_CLOSE_ID
        ));
        html.push_str(r#"<ul class="toc">"#);
        for section in BOOK_CONTENTS {
            html.push_str(&format!(r#"<li class="toc-part">{}</li>"#, section.title));
            for entry in section.entries {
                html.push_str(&format!(
                    r#"<li class="toc-chapter"><a href="{}">{}</a></li>"#,
                    resolve_href(entry.href, context),
                    entry.title
                ));
            }
        }
        html.push_str("</ul></nav>");
        html
    }

    /// The controls stylesheet plus one root font-size rule per size class.
    fn stylesheet(&self) -> String {
        let mut css = String::from(BASE_STYLESHEET);
        css.push('\n');
        for size in FontSize::ALL {
            css.push_str(&format!(
                "html.{} {{ font-size: {}; }}\n",
                size.css_class(),
                size.root_percent()
            ));
        }
        css
    }

    /// The script injected into every served book page.
    ///
    /// Idempotent per page: a guard flag makes a second injection a no-op.
    /// Zoom chords for the keys in `zoomKeys` are intercepted globally so
    /// the webview never zooms; only Escape and those chords are forwarded.
    fn bootstrap_script(&self, context: PageContext, shortcuts: &ShortcutManager) -> String {
        let markup = format!("{}{}", self.controls_markup(), self.sidebar_markup(context));
        let markup_js = serde_json::Value::String(markup).to_string();
        let style_js = serde_json::Value::String(self.stylesheet()).to_string();
        let zoom_keys_js = serde_json::json!(shortcuts.intercepted_keys()).to_string();

        let font_wiring = FontSize::ALL
            .iter()
            .map(|s| {
                format!(
                    "wire('{}', {{cmd: 'font.select', size: '{}'}});\n  ",
                    font_button_id(*s),
                    s.as_str()
                )
            })
            .collect::<String>();

        format!(
            r#"(function() {{
  if (window.__flReader) return;
  window.__flReader = true;

  var style = document.createElement('style');
  style.textContent = {};
  document.head.appendChild(style);

  var host = document.createElement('div');
  host.innerHTML = {};
  while (host.firstChild) {{
    document.body.appendChild(host.firstChild);
  }}

  function post(msg) {{
    if (window.ipc && window.ipc.postMessage) {{
      window.ipc.postMessage(JSON.stringify(msg));
    }}
  }}

  function metrics() {{
    return {{
      scroll_y: window.scrollY,
      scroll_height: document.documentElement.scrollHeight,
      viewport_height: window.innerHeight
    }};
  }}

  function wire(id, msg) {{
    var el = document.getElementById(id);
    if (el) {{
      el.addEventListener('click', function() {{ post(msg); }});
    }}
  }}

  wire('{}', {{cmd: 'toc.toggle'}});
  wire('{}', {{cmd: 'toc.close'}});
  wire('{}', {{cmd: 'toc.close'}});
  {}
  var zoomKeys = {};
  document.addEventListener('keydown', function(e) {{
    var mod = e.ctrlKey || e.metaKey;
    var zoom = mod && zoomKeys.indexOf(e.key) !== -1;
    if (zoom) e.preventDefault();
    if (zoom || e.key === 'Escape') {{
      post({{cmd: 'key.down', key: e.key, ctrl: e.ctrlKey, meta: e.metaKey}});
    }}
  }});

  var ticking = false;
  window.addEventListener('scroll', function() {{
    if (ticking) return;
    ticking = true;
    window.requestAnimationFrame(function() {{
      ticking = false;
      post({{cmd: 'scroll.update', metrics: metrics()}});
    }});
  }});

  post({{
    cmd: 'page.ready',
    path: window.location.pathname,
    has_progress: !!document.getElementById('{}'),
    metrics: metrics()
  }});
}})();"#,
            style_js,
            markup_js,
            TOC_TOGGLE_ID,
            TOC_CLOSE_ID,
            TOC_OVERLAY_ID,
            font_wiring,
            zoom_keys_js,
            PROGRESS_ID
        )
    }
}
