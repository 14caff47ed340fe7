// FirstLife Reader preference store
// Persists the chosen font size as a JSON file at the platform-specific
// config path. Loading never fails: a missing, unreadable, or malformed
// file yields the default size so the reader always starts.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::PreferenceError;
use crate::types::font::FontSize;
use crate::types::preferences::ReaderPreferences;

/// Trait defining the preference store interface.
pub trait PreferenceStoreTrait {
    fn load(&mut self) -> FontSize;
    fn save(&self) -> Result<(), PreferenceError>;
    fn font_size(&self) -> FontSize;
    fn set_font_size(&mut self, size: FontSize) -> Result<(), PreferenceError>;
    fn get_config_path(&self) -> &str;
}

/// Preference store implementation that persists preferences as JSON on disk.
pub struct PreferenceStore {
    config_path: String,
    preferences: ReaderPreferences,
}

impl PreferenceStore {
    /// Creates a new PreferenceStore.
    ///
    /// If `path_override` is `Some`, uses that path for the preference file.
    /// Otherwise, uses the platform-specific config directory with
    /// `preferences.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("preferences.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            preferences: ReaderPreferences::default(),
        }
    }
}

impl PreferenceStoreTrait for PreferenceStore {
    /// Loads preferences from the JSON file and returns the font size.
    ///
    /// A missing file yields the default size. Read or parse failures are
    /// logged and also yield the default, never an error. Unknown stored
    /// values fall back to the default size.
    fn load(&mut self) -> FontSize {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.preferences = ReaderPreferences::default();
            return self.preferences.effective_font_size();
        }

        let preferences = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<ReaderPreferences>(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::warn!("malformed preference file {}: {}", self.config_path, e);
                    ReaderPreferences::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read preference file {}: {}", self.config_path, e);
                ReaderPreferences::default()
            }
        };

        let size = preferences.effective_font_size();
        // Re-normalize so a later save writes a canonical value
        self.preferences = ReaderPreferences::from_font_size(size);
        size
    }

    /// Saves the current preferences to the JSON file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), PreferenceError> {
        let path = Path::new(&self.config_path);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferenceError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.preferences).map_err(|e| {
            PreferenceError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            PreferenceError::IoError(format!("Failed to write preference file: {}", e))
        })?;

        Ok(())
    }

    /// Returns the current in-memory font size.
    fn font_size(&self) -> FontSize {
        self.preferences.effective_font_size()
    }

    /// Updates the font size and persists it to disk.
    fn set_font_size(&mut self, size: FontSize) -> Result<(), PreferenceError> {
        self.preferences = ReaderPreferences::from_font_size(size);
        self.save()?;
        Ok(())
    }

    /// Returns the path to the preference file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
