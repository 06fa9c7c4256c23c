//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Native window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Allow opening the web inspector on the chat view.
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Solace".into(),
            width: 480,
            height: 760,
            devtools: false,
        }
    }
}
