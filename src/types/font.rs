use serde::{Deserialize, Serialize};

/// The four reading font sizes, ordered smallest to largest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl FontSize {
    /// All sizes in ascending order.
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::XLarge,
    ];

    /// Canonical identifier used for storage and IPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::XLarge => "xlarge",
        }
    }

    /// Parses a canonical identifier. Anything else is `None`.
    pub fn parse(value: &str) -> Option<FontSize> {
        match value {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            "xlarge" => Some(FontSize::XLarge),
            _ => None,
        }
    }

    /// Label shown on the corresponding control button.
    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "A-",
            FontSize::Medium => "A",
            FontSize::Large => "A+",
            FontSize::XLarge => "A++",
        }
    }

    /// Marker class applied to the document root while this size is active.
    pub fn css_class(&self) -> &'static str {
        match self {
            FontSize::Small => "font-size-small",
            FontSize::Medium => "font-size-medium",
            FontSize::Large => "font-size-large",
            FontSize::XLarge => "font-size-xlarge",
        }
    }

    /// Root font size for the marker class, relative to the browser default.
    pub fn root_percent(&self) -> &'static str {
        match self {
            FontSize::Small => "87.5%",
            FontSize::Medium => "100%",
            FontSize::Large => "115%",
            FontSize::XLarge => "130%",
        }
    }

    /// The next larger size, saturating at the largest.
    pub fn step_up(self) -> FontSize {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium => FontSize::Large,
            FontSize::Large => FontSize::XLarge,
            FontSize::XLarge => FontSize::XLarge,
        }
    }

    /// The next smaller size, saturating at the smallest.
    pub fn step_down(self) -> FontSize {
        match self {
            FontSize::Small => FontSize::Small,
            FontSize::Medium => FontSize::Small,
            FontSize::Large => FontSize::Medium,
            FontSize::XLarge => FontSize::Large,
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Medium
    }
}
