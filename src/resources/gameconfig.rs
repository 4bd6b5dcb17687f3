//! Game configuration resource.
//!
//! Manages simulation settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fps = 60
//! grid_extent = 64
//!
//! [player]
//! mass = 3.0
//! friction = 0.001
//! max_velocity = 0.05
//!
//! [debug]
//! enabled = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::rigidbody::{DEFAULT_FRICTION, DEFAULT_MASS, DEFAULT_MAX_VELOCITY};
use crate::engine::EngineConfig;
use crate::error::SimError;

/// Default safe values for startup
const DEFAULT_FPS: u32 = 60;
const DEFAULT_GRID_EXTENT: i32 = 64;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Logical steps per second.
    pub fps: u32,
    /// Side length of the world grid in cells.
    pub grid_extent: i32,
    /// Player mass.
    pub mass: f32,
    /// Player friction coefficient.
    pub friction: f32,
    /// Per-axis speed cap.
    pub max_velocity: f32,
    /// Start with debug output enabled.
    pub debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            grid_extent: DEFAULT_GRID_EXTENT,
            mass: DEFAULT_MASS,
            friction: DEFAULT_FRICTION,
            max_velocity: DEFAULT_MAX_VELOCITY,
            debug: DEFAULT_DEBUG,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, or if an
    /// integer setting does not fit its type. Range checks on the tuning
    /// happen when the engine is built.
    pub fn load_from_file(&mut self) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SimError::Config(format!("failed to load config file: {}", e)))?;

        // [simulation] section
        if let Some(fps) = config.getuint("simulation", "fps").ok().flatten() {
            self.fps = u32::try_from(fps)
                .map_err(|_| SimError::Config(format!("fps {} is out of range", fps)))?;
        }
        if let Some(extent) = config.getint("simulation", "grid_extent").ok().flatten() {
            self.grid_extent = i32::try_from(extent).map_err(|_| {
                SimError::Config(format!("grid_extent {} is out of range", extent))
            })?;
        }

        // [player] section
        if let Some(mass) = config.getfloat("player", "mass").ok().flatten() {
            self.mass = mass as f32;
        }
        if let Some(friction) = config.getfloat("player", "friction").ok().flatten() {
            self.friction = friction as f32;
        }
        if let Some(max_velocity) = config.getfloat("player", "max_velocity").ok().flatten() {
            self.max_velocity = max_velocity as f32;
        }

        // [debug] section
        if let Some(debug) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = debug;
        }

        info!(
            "Loaded config: fps={}, grid_extent={}, mass={}, friction={}, max_velocity={}, debug={}",
            self.fps, self.grid_extent, self.mass, self.friction, self.max_velocity, self.debug
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), SimError> {
        let mut config = Ini::new();

        config.set("simulation", "fps", Some(self.fps.to_string()));
        config.set("simulation", "grid_extent", Some(self.grid_extent.to_string()));

        config.set("player", "mass", Some(self.mass.to_string()));
        config.set("player", "friction", Some(self.friction.to_string()));
        config.set("player", "max_velocity", Some(self.max_velocity.to_string()));

        config.set("debug", "enabled", Some(self.debug.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| SimError::Config(format!("failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fps: self.fps,
            grid_extent: self.grid_extent,
            mass: self.mass,
            friction: self.friction,
            max_velocity: self.max_velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gridpulse_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.fps, 60);
        assert_eq!(config.grid_extent, 64);
        assert!(!config.debug);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(matches!(config.load_from_file(), Err(SimError::Config(_))));
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_path("partial");
        std::fs::write(&path, "[simulation]\nfps = 30\n\n[debug]\nenabled = true\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.fps, 30);
        assert!(config.debug);
        assert_eq!(config.grid_extent, 64);
        assert_eq!(config.max_velocity, DEFAULT_MAX_VELOCITY);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut saved = GameConfig::with_path(&path);
        saved.fps = 30;
        saved.grid_extent = 8;
        saved.mass = 1.5;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_out_of_range_integers_are_rejected() {
        let path = temp_path("overflow");
        std::fs::write(&path, "[simulation]\nfps = 4294967297\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        let result = config.load_from_file();
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(SimError::Config(_))));
        assert_eq!(config.fps, 60);

        let path = temp_path("overflow_extent");
        std::fs::write(&path, "[simulation]\ngrid_extent = -3000000000\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        let result = config.load_from_file();
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(SimError::Config(_))));
        assert_eq!(config.grid_extent, 64);
    }

    #[test]
    fn test_negative_speed_cap_from_file_fails_engine_build() {
        let path = temp_path("negative_cap");
        std::fs::write(&path, "[player]\nmax_velocity = -0.05\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            crate::engine::Engine::new(config.engine_config()),
            Err(SimError::InvalidTuning {
                name: "max_velocity",
                ..
            })
        ));
    }

    #[test]
    fn test_engine_config_carries_tuning() {
        let mut config = GameConfig::new();
        config.grid_extent = 8;
        let engine = config.engine_config();
        assert_eq!(engine.grid_extent, 8);
        assert_eq!(engine.fps, 60);
        assert_eq!(engine.mass, DEFAULT_MASS);
    }
}
