// FirstLife Reader shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod font;
pub mod preferences;
pub mod scroll;
pub mod toc;
