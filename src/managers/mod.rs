// FirstLife Reader state managers
// Managers handle stateful operations: keyboard shortcut bindings.

pub mod shortcut_manager;
