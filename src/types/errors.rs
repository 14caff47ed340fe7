use std::fmt;

// === PreferenceError ===

/// Errors related to reading and writing reader preferences.
#[derive(Debug)]
pub enum PreferenceError {
    /// An I/O error occurred while reading or writing the preference file.
    IoError(String),
    /// Failed to serialize or deserialize preferences.
    SerializationError(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::IoError(msg) => write!(f, "Preference I/O error: {}", msg),
            PreferenceError::SerializationError(msg) => {
                write!(f, "Preference serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

// === ShortcutError ===

/// Errors related to keyboard shortcut management.
#[derive(Debug)]
pub enum ShortcutError {
    /// Shortcut for the given action was not found.
    NotFound(String),
    /// The shortcut keys conflict with an existing binding.
    Conflict(String),
    /// The provided key combination is invalid.
    InvalidKeys(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::NotFound(action) => {
                write!(f, "Shortcut not found for action: {}", action)
            }
            ShortcutError::Conflict(msg) => write!(f, "Shortcut conflict: {}", msg),
            ShortcutError::InvalidKeys(keys) => write!(f, "Invalid shortcut keys: {}", keys),
        }
    }
}

impl std::error::Error for ShortcutError {}

// === BookPageError ===

/// Errors related to serving book pages.
#[derive(Debug)]
pub enum BookPageError {
    /// The requested page does not exist under the book root.
    NotFound(String),
    /// An I/O error occurred while reading a page.
    IoError(String),
    /// The requested path escapes the book root.
    OutsideRoot(String),
}

impl fmt::Display for BookPageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookPageError::NotFound(path) => write!(f, "Book page not found: {}", path),
            BookPageError::IoError(msg) => write!(f, "Book page I/O error: {}", msg),
            BookPageError::OutsideRoot(path) => {
                write!(f, "Path outside book root: {}", path)
            }
        }
    }
}

impl std::error::Error for BookPageError {}
