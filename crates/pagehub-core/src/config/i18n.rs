//! Localization configuration.

use serde::{Deserialize, Serialize};

/// Where the message catalog lives and which locale to fall back to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Path to the JSON locale definition file (`locale -> key -> template`).
    #[serde(default = "default_locales_path")]
    pub locales_path: String,
    /// Locale used when a request does not ask for a known one.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales_path: default_locales_path(),
            default_locale: default_locale(),
        }
    }
}

fn default_locales_path() -> String {
    "assets/locales/localization.json".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}
