//! Strongly-typed configuration mapped to `config.toml`.
//!
//! Defaults reproduce the classic setup: a 40x40 grid advancing every
//! 250 ms.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! rows = 40
//! columns = 40
//!
//! [run]
//! step_interval_ms = 250
//! ```

use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunConfig {
    /// Delay between scheduled steps while auto-advance is active.
    pub step_interval_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub run: RunConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: 40,
                columns: 40,
            },
            run: RunConfig {
                step_interval_ms: 250,
            },
            target_fps: 60,
        }
    }
}

impl AppConfig {
    /// Loads the config file, falling back to defaults. A missing file is
    /// created with the default contents.
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        if let Ok(serialized) = toml::to_string(&default) {
            let _ = fs::write(path, serialized);
        }
        default
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.run.step_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_setup() {
        let config = AppConfig::default();
        assert_eq!(config.grid.rows, 40);
        assert_eq!(config.grid.columns, 40);
        assert_eq!(config.step_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).expect("serializable");
        let parsed: AppConfig = toml::from_str(&serialized).expect("parseable");
        assert_eq!(parsed.grid.rows, config.grid.rows);
        assert_eq!(parsed.run.step_interval_ms, config.run.step_interval_ms);
        assert_eq!(parsed.target_fps, config.target_fps);
    }

    #[test]
    fn test_partial_file_falls_back_to_default() {
        // Unknown path: load() returns defaults rather than failing.
        let config = AppConfig::load("/nonexistent/dir/config.toml");
        assert_eq!(config.grid.rows, 40);
    }
}
