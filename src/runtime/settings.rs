use std::path::Path;

use crate::config;

/// Load settings from `path` (or the default location), falling back to defaults.
pub fn load_settings(path: Option<&Path>) -> config::Settings {
    let loaded = match path {
        Some(path) => config::Settings::load_from(Some(path)),
        None => config::Settings::load(),
    };
    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("radioscrobbler: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("radioscrobbler: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
