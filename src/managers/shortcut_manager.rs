//! Shortcut Manager for FirstLife Reader.
//!
//! Manages keyboard shortcut bindings with conflict detection,
//! platform-specific modifier key adaptation, and matching of
//! key events reported by book pages.

use std::collections::HashMap;

use crate::types::errors::ShortcutError;

/// Actions whose chords the page script must intercept before the
/// embedding webview handles them as zoom commands.
const INTERCEPTED_ACTIONS: [&str; 2] = ["font_increase", "font_decrease"];

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError>;
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn list_shortcuts(&self) -> &HashMap<String, String>;
    fn reset_to_defaults(&mut self) -> Result<(), ShortcutError>;
    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String>;
    fn get_default_shortcuts(&self) -> HashMap<String, String>;
    fn match_event(&self, key: &str, ctrl: bool, meta: bool) -> Option<String>;
    fn intercepted_keys(&self) -> Vec<String>;
}

/// Shortcut manager with in-memory storage and platform adaptation.
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut mgr = Self {
            shortcuts: HashMap::new(),
        };
        let defaults = mgr.get_default_shortcuts();
        mgr.shortcuts = defaults;
        mgr
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    /// Splits a chord into (requires modifier, bound key).
    fn split_chord(keys: &str) -> (bool, &str) {
        if let Some(key) = keys.strip_prefix("Ctrl+").or_else(|| keys.strip_prefix("Cmd+")) {
            (true, key)
        } else {
            (false, keys)
        }
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if keys.is_empty() {
            return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
        }

        if let Some(conflicting_action) = self.has_conflict(keys, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'", keys, conflicting_action
            )));
        }

        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts.insert(action.to_string(), adapted);
        Ok(())
    }

    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError> {
        self.shortcuts.remove(action)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(action.to_string()))
    }

    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    fn list_shortcuts(&self) -> &HashMap<String, String> {
        &self.shortcuts
    }

    fn reset_to_defaults(&mut self) -> Result<(), ShortcutError> {
        self.shortcuts = self.get_default_shortcuts();
        Ok(())
    }

    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String> {
        let adapted = Self::adapt_for_platform(keys);
        for (action, bound_keys) in &self.shortcuts {
            if bound_keys == &adapted {
                if let Some(exclude) = exclude_action {
                    if action == exclude {
                        continue;
                    }
                }
                return Some(action.clone());
            }
        }
        None
    }

    fn get_default_shortcuts(&self) -> HashMap<String, String> {
        let defaults = vec![
            ("toc_close", "Escape"),
            ("font_increase", "Ctrl+="),
            ("font_decrease", "Ctrl+-"),
        ];

        defaults.into_iter()
            .map(|(a, k)| (a.to_string(), Self::adapt_for_platform(k)))
            .collect()
    }

    /// Matches a key event against the registered bindings.
    ///
    /// `key` is the DOM `KeyboardEvent.key` value. A shifted `=` arrives as
    /// `+` and matches the same binding. Chords without a modifier match
    /// whether or not one is held, so Escape closes the contents even
    /// mid-chord.
    fn match_event(&self, key: &str, ctrl: bool, meta: bool) -> Option<String> {
        let key = if key == "+" { "=" } else { key };
        let has_modifier = ctrl || meta;

        for (action, chord) in &self.shortcuts {
            let (needs_modifier, bound_key) = Self::split_chord(chord);
            if bound_key != key {
                continue;
            }
            if needs_modifier && !has_modifier {
                continue;
            }
            return Some(action.clone());
        }
        None
    }

    /// Keys whose modifier chords the page must swallow.
    ///
    /// Derived from the current bindings so rebinding a font action also
    /// moves the interception. The `=` key additionally reports its shifted
    /// form `+`.
    fn intercepted_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for action in INTERCEPTED_ACTIONS {
            if let Some(chord) = self.shortcuts.get(action) {
                let (_, bound_key) = Self::split_chord(chord);
                keys.push(bound_key.to_string());
                if bound_key == "=" {
                    keys.push("+".to_string());
                }
            }
        }
        keys
    }
}
