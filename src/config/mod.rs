pub mod loader;
pub mod rules;
pub mod session;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use log::error;

pub use rules::{RulesConfig, ScoringRules};
pub use session::SessionConfig;

// Last configuration loaded from disk. The simulation never reads this directly;
// it receives a `RulesConfig` value when the app is built.
pub static CONFIG: once_cell::sync::Lazy<Arc<RwLock<Config>>> =
    once_cell::sync::Lazy::new(|| Arc::new(RwLock::new(Config::default())));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub session: SessionConfig,
}

impl Config {
    // Force reload the configuration from file
    pub fn force_reload() -> Result<(), loader::ConfigError> {
        let new_config = loader::load_config_from_file()?;
        match CONFIG.write() {
            Ok(mut config) => *config = new_config,
            Err(poisoned) => *poisoned.into_inner() = new_config,
        }
        Ok(())
    }

    /// Snapshot of the cached configuration.
    #[must_use]
    pub fn current() -> Config {
        match CONFIG.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => {
                error!("Configuration lock poisoned, using last written value");
                poisoned.into_inner().clone()
            }
        }
    }
}
