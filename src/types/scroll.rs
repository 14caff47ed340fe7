use serde::{Deserialize, Serialize};

/// Scroll measurements reported by a book page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Reading progress through the page as a percentage in [0, 100].
    ///
    /// Pages shorter than the viewport have no scrollable range and report 0.
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }
}
