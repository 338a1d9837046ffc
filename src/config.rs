//! Engine configuration. Loaded from a JSON file when present, otherwise
//! defaults; the difficulty domain doubles as input validation bounds and
//! output clamp bounds.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the trained scaler+regressor artifact (JSON)
    pub model_path: PathBuf,
    /// Feature derivation parameters
    pub features: FeaturesConfig,
    /// Valid difficulty domain
    pub difficulty: DifficultyConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Trailing window size for rolling performance mean and trend
    pub window_attempts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Lowest valid difficulty level
    pub min_level: u8,
    /// Highest valid difficulty level
    pub max_level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            features: FeaturesConfig::default(),
            difficulty: DifficultyConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self { window_attempts: 3 }
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: 5,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl EngineConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<EngineConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
