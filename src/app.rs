//! App Core for FirstLife Reader.
//!
//! Central struct holding the preference store, shortcut bindings, reading
//! controls, and controls builder.

use crate::managers::shortcut_manager::ShortcutManager;
use crate::services::controls_builder::ControlsBuilder;
use crate::services::preference_store::PreferenceStore;
use crate::services::reader_controls::ReaderControls;

/// Central application struct holding all managers and services.
pub struct App {
    pub preferences: PreferenceStore,
    pub shortcuts: ShortcutManager,
    pub controls: ReaderControls,
    pub builder: ControlsBuilder,
}

impl App {
    /// Creates a new App.
    ///
    /// If `config_override` is `Some`, the preference store uses that path
    /// instead of the platform config directory.
    pub fn new(config_override: Option<String>) -> Self {
        Self {
            preferences: PreferenceStore::new(config_override),
            shortcuts: ShortcutManager::new(),
            controls: ReaderControls::new(),
            builder: ControlsBuilder::new(),
        }
    }

    /// Startup sequence: load the persisted font size and prime the controls
    /// with it, so the first page renders at the chosen size.
    pub fn startup(&mut self) {
        use crate::services::preference_store::PreferenceStoreTrait;
        use crate::services::reader_controls::ReaderControlsTrait;

        let size = self.preferences.load();
        self.controls.set_font_size(size);
    }
}
