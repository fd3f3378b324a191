use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Defaults loadable from `~/.config/lifelab/config.toml`. Every field has a
/// default, so a missing or partial file is fine; CLI flags override these.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: usize,
    pub trials: usize,
    pub lifetime_cap: u32,
    pub stability_window: u32,
    pub centroid_generations: u32,
    pub lifetime_output: PathBuf,
    pub centroid_output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: 50,
            trials: crate::analysis::LIFETIME_TRIALS,
            lifetime_cap: crate::analysis::LIFETIME_CAP,
            stability_window: crate::analysis::STABILITY_WINDOW,
            centroid_generations: crate::analysis::CENTROID_GENERATIONS,
            lifetime_output: PathBuf::from("Lifetime.csv"),
            centroid_output: PathBuf::from("CM_coordinates.csv"),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lifelab")
            .join("config.toml")
    }
}
