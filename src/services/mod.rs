// FirstLife Reader services
// Services provide core functionality: preference persistence, reading
// controls, and the markup and script the controls are built from.

pub mod controls_builder;
pub mod preference_store;
pub mod reader_controls;
