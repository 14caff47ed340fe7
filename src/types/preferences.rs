use serde::{Deserialize, Serialize};

use crate::types::font::FontSize;

/// Persisted reader preferences.
///
/// The font size is stored as a plain string so that hand-edited or stale
/// preference files never fail to load; unknown values fall back to the
/// default size when read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReaderPreferences {
    pub font_size: String,
}

impl ReaderPreferences {
    pub fn from_font_size(size: FontSize) -> Self {
        ReaderPreferences { font_size: size.as_str().to_string() }
    }

    /// The stored font size, or the default when the value is unknown.
    pub fn effective_font_size(&self) -> FontSize {
        FontSize::parse(&self.font_size).unwrap_or_default()
    }
}

impl Default for ReaderPreferences {
    fn default() -> Self {
        ReaderPreferences::from_font_size(FontSize::default())
    }
}
