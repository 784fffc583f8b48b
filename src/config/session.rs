use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Settings for the headless harness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // Fixed RNG seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
    // Synthetic time step fed to each update
    pub frame_seconds: f32,
    pub max_moves: u32,
    pub log_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_seconds: 1.0 / 60.0,
            max_moves: 100,
            log_path: PathBuf::from("puzzle_attack.log"),
        }
    }
}
