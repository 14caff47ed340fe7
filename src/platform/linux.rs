// FirstLife Reader platform paths for Linux
// Config: ~/.config/firstlife-reader

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for the reader on Linux.
/// Uses `$XDG_CONFIG_HOME/firstlife-reader` if set, otherwise `~/.config/firstlife-reader`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("firstlife-reader")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("firstlife-reader")
    }
}
