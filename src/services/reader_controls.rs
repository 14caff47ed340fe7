//! Reading controls for FirstLife Reader.
//!
//! Tracks the state behind the injected controls (font size, contents
//! visibility, progress-bar presence) and emits the scripts that bring the
//! current page's DOM in line with that state. Scripts address the elements
//! the bootstrap constructs by id, so nothing is re-queried by shape.

use crate::services::controls_builder::{
    font_button_id, PROGRESS_ID, TOC_OVERLAY_ID, TOC_SIDEBAR_ID,
};
use crate::types::font::FontSize;
use crate::types::scroll::ScrollMetrics;
use crate::types::toc::PageContext;

/// Trait defining reading control operations.
pub trait ReaderControlsTrait {
    fn page_ready(&mut self, path: &str, has_progress: bool, metrics: ScrollMetrics)
        -> Vec<String>;
    fn apply_font_size(&mut self, size: FontSize) -> Vec<String>;
    fn step_font_up(&mut self) -> Vec<String>;
    fn step_font_down(&mut self) -> Vec<String>;
    fn toggle_toc(&mut self) -> Vec<String>;
    fn close_toc(&mut self) -> Vec<String>;
    fn update_progress(&self, metrics: ScrollMetrics) -> Vec<String>;
    fn set_font_size(&mut self, size: FontSize);
    fn font_size(&self) -> FontSize;
    fn toc_open(&self) -> bool;
    fn has_progress(&self) -> bool;
    fn context(&self) -> PageContext;
}

/// Reading controls implementation holding per-page state.
pub struct ReaderControls {
    font_size: FontSize,
    toc_open: bool,
    has_progress: bool,
    context: PageContext,
}

impl ReaderControls {
    pub fn new() -> Self {
        Self {
            font_size: FontSize::default(),
            toc_open: false,
            has_progress: false,
            context: PageContext::default(),
        }
    }

    /// Script that applies a font size class to the document root and
    /// highlights the matching control button.
    fn font_script(size: FontSize) -> String {
        let classes = FontSize::ALL
            .iter()
            .map(|s| format!("'{}'", s.css_class()))
            .collect::<Vec<_>>()
            .join(",");
        let ids = FontSize::ALL
            .iter()
            .map(|s| format!("'{}'", font_button_id(*s)))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "(function(){{var root=document.documentElement;root.classList.remove({});root.classList.add('{}');var ids=[{}];for(var i=0;i<ids.length;i++){{var b=document.getElementById(ids[i]);if(b)b.classList.toggle('active',ids[i]==='{}');}}}})();",
            classes,
            size.css_class(),
            ids,
            font_button_id(size)
        )
    }

    /// Script that opens or closes the contents sidebar.
    ///
    /// Sidebar, overlay, and body scroll lock are always written together so
    /// the three can never disagree.
    fn toc_script(open: bool) -> String {
        let (method, overflow) = if open { ("add", "hidden") } else { ("remove", "") };
        format!(
            "(function(){{var s=document.getElementById('{}');var o=document.getElementById('{}');if(!s||!o)return;s.classList.{}('open');o.classList.{}('open');document.body.style.overflow='{}';}})();",
            TOC_SIDEBAR_ID, TOC_OVERLAY_ID, method, method, overflow
        )
    }

    /// Script that widens the progress bar to the given percentage.
    /// Rounded to one decimal; the bar cannot resolve finer widths.
    fn progress_script(percent: f64) -> String {
        let rounded = (percent * 10.0).round() / 10.0;
        format!(
            "(function(){{var p=document.getElementById('{}');if(p)p.style.width='{}%';}})();",
            PROGRESS_ID, rounded
        )
    }
}

impl Default for ReaderControls {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderControlsTrait for ReaderControls {
    /// Adopts a freshly loaded page.
    ///
    /// Resets the contents sidebar to closed, records whether the page has a
    /// progress bar, and returns the scripts that apply the current font
    /// size and initial progress.
    fn page_ready(
        &mut self,
        path: &str,
        has_progress: bool,
        metrics: ScrollMetrics,
    ) -> Vec<String> {
        self.context = PageContext::from_path(path);
        self.has_progress = has_progress;
        self.toc_open = false;

        let size = self.font_size;
        let mut scripts = self.apply_font_size(size);
        scripts.extend(self.update_progress(metrics));
        scripts
    }

    /// Selects a font size and returns the script that applies it.
    fn apply_font_size(&mut self, size: FontSize) -> Vec<String> {
        self.font_size = size;
        vec![Self::font_script(size)]
    }

    /// Steps to the next larger size. Returns no scripts at the top end.
    fn step_font_up(&mut self) -> Vec<String> {
        let next = self.font_size.step_up();
        if next == self.font_size {
            return Vec::new();
        }
        self.apply_font_size(next)
    }

    /// Steps to the next smaller size. Returns no scripts at the bottom end.
    fn step_font_down(&mut self) -> Vec<String> {
        let next = self.font_size.step_down();
        if next == self.font_size {
            return Vec::new();
        }
        self.apply_font_size(next)
    }

    /// Flips the contents sidebar open or closed.
    fn toggle_toc(&mut self) -> Vec<String> {
        self.toc_open = !self.toc_open;
        vec![Self::toc_script(self.toc_open)]
    }

    /// Closes the contents sidebar. Closing an already closed sidebar
    /// re-emits the closed state rather than erroring.
    fn close_toc(&mut self) -> Vec<String> {
        self.toc_open = false;
        vec![Self::toc_script(false)]
    }

    /// Returns the script updating the progress bar, or nothing when the
    /// page has no progress bar.
    fn update_progress(&self, metrics: ScrollMetrics) -> Vec<String> {
        if !self.has_progress {
            return Vec::new();
        }
        vec![Self::progress_script(metrics.progress_percent())]
    }

    /// Primes the font size without emitting scripts. Used at startup
    /// before any page has loaded.
    fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
    }

    fn font_size(&self) -> FontSize {
        self.font_size
    }

    fn toc_open(&self) -> bool {
        self.toc_open
    }

    fn has_progress(&self) -> bool {
        self.has_progress
    }

    fn context(&self) -> PageContext {
        self.context
    }
}
