//! Simulation configuration
//!
//! Tunables live in a single `SimulationConfig` resource. Values can be
//! overridden from a JSON file in the platform config directory:
//! - macOS: ~/Library/Application Support/orbitswarm/config.json
//! - Linux: ~/.config/orbitswarm/config.json
//! - Windows: %APPDATA%\orbitswarm\config\config.json

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::coordinates::{DISPLAY_SCALE, EARTH_RADIUS_KM};

/// Simulation and scene configuration resource
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of satellites to generate. Negative values are rejected by the store.
    pub satellite_count: i64,
    /// Optional RNG seed for reproducible satellite generation
    pub seed: Option<u64>,
    pub earth_radius_km: f64,
    /// Kilometres to display units
    pub display_scale: f64,
    /// Radius of the visible satellite body
    pub satellite_radius: f32,
    /// Radius of the invisible picking sphere around each satellite
    pub interaction_radius: f64,
    /// Earth rotation about Y per frame, radians
    pub earth_spin_per_tick: f32,
    pub show_glow: bool,
    /// Asset path of the ripple sound
    pub ripple_sound: Option<String>,
    pub ripple_volume: f32,
    /// Seconds the ripple loop is offset from the wall clock
    pub ripple_delay_s: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            satellite_count: 4500,
            seed: None,
            earth_radius_km: EARTH_RADIUS_KM,
            display_scale: DISPLAY_SCALE,
            satellite_radius: 1.2,
            interaction_radius: 5.0,
            earth_spin_per_tick: 0.0001,
            show_glow: true,
            ripple_sound: Some("sound.wav".to_string()),
            ripple_volume: 0.5,
            ripple_delay_s: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Earth radius in display units
    pub fn earth_radius_display(&self) -> f64 {
        self.earth_radius_km * self.display_scale
    }

    /// Resolve the default config file path
    pub fn default_path() -> Result<PathBuf, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "orbitswarm")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Load from the platform config directory, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path
    ///
    /// Returns defaults if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, anyhow::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: SimulationConfig = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "orbitswarm-config-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        dir
    }

    #[test]
    fn test_defaults_match_reference_scene() {
        let config = SimulationConfig::default();
        assert_eq!(config.satellite_count, 4500);
        assert!(config.seed.is_none());
        assert!((config.earth_radius_display() - 509.68).abs() < 1e-9);
        assert!(config.interaction_radius > config.satellite_radius as f64);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = unique_temp_dir("missing");
        let config = SimulationConfig::load_from(&dir.join("config.json"))
            .expect("Missing file should not error");
        assert_eq!(config.satellite_count, 4500);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = unique_temp_dir("partial");
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "satellite_count": 12, "seed": 7 }"#).expect("write config");

        let config = SimulationConfig::load_from(&path).expect("Partial config should parse");
        assert_eq!(config.satellite_count, 12);
        assert_eq!(config.seed, Some(7));
        assert!((config.display_scale - DISPLAY_SCALE).abs() < 1e-12);
        assert_eq!(config.ripple_sound.as_deref(), Some("sound.wav"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = unique_temp_dir("malformed");
        let path = dir.join("config.json");
        fs::write(&path, "{ satellite_count: ").expect("write config");

        assert!(SimulationConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_negative_count_survives_parsing() {
        // Rejection happens when the store is built, not when the file is read.
        let dir = unique_temp_dir("negative");
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "satellite_count": -3 }"#).expect("write config");

        let config = SimulationConfig::load_from(&path).expect("Config should parse");
        assert_eq!(config.satellite_count, -3);
    }
}
