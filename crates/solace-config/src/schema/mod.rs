//! Configuration schema types for Solace.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the built-in companion defaults.

mod logging;
mod model;
mod persona;
mod window;

pub use logging::*;
pub use model::*;
pub use persona::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Solace.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub model: ModelConfig,
    pub persona: PersonaConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
