//! # vtb-config
//!
//! Layered configuration loading for Veritab using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERITAB_*` prefix, `__` as separator)
//! 2. Project-level `.veritab/config.toml`
//! 3. User-level `~/.config/veritab/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERITAB_GEMINI__API_KEY` -> `gemini.api_key`,
//! `VERITAB_GEMINI__MODEL` -> `gemini.model`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vtb_config::VeritabConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = VeritabConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;

pub use error::ConfigError;
pub use gemini::GeminiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VeritabConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl VeritabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`VERITAB_*` prefix)
    /// 2. `.veritab/config.toml` (project-local)
    /// 3. `~/.config/veritab/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".veritab/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERITAB_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("veritab").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VeritabConfig::default();
        assert!(!config.gemini.is_configured());
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = VeritabConfig::figment();
        let config: VeritabConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.gemini.timeout_secs, 120);
    }
}
