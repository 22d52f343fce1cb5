//! Configuration loading.
//!
//! Configuration lives in an optional TOML file. Every key has a default, so an
//! empty file (or no file at all) reproduces the classic 800x600 black surface
//! with a green actor starting at (370, 480).

use crate::error::{PlayloopError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default frames per second used to pace presentation.
pub const DEFAULT_FRAME_RATE: u32 = 60;
/// Logical surface width.
pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
/// Logical surface height.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;
/// Actor start position on the logical surface (y grows downwards).
pub const DEFAULT_ACTOR_START: [i32; 2] = [370, 480];
/// Actor circle radius in logical units.
pub const DEFAULT_ACTOR_RADIUS: u32 = 20;

const CONFIG_DIR_NAME: &str = "playloop";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Frames per second. Zero disables pacing entirely.
    pub frame_rate: u32,
    /// Show the one-line status bar under the canvas.
    pub show_status: bool,
    pub surface: SurfaceConfig,
    pub actor: ActorConfig,
}

/// Logical draw surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
}

/// Actor appearance and starting point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActorConfig {
    pub start: [i32; 2],
    pub radius: u32,
    pub color: [u8; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            show_status: true,
            surface: SurfaceConfig::default(),
            actor: ActorConfig::default(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            background: [0, 0, 0],
        }
    }
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_ACTOR_START,
            radius: DEFAULT_ACTOR_RADIUS,
            color: [0, 255, 0],
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| PlayloopError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Location of the per-user configuration file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the per-user file is used when
    /// present and the built-in defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("loading configuration from {}", path.display());
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::info!("loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => {
                log::info!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the render loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.surface.width == 0 {
            return Err(PlayloopError::config("surface width must be positive"));
        }
        if self.surface.height == 0 {
            return Err(PlayloopError::config("surface height must be positive"));
        }
        if self.actor.radius == 0 {
            return Err(PlayloopError::config("actor radius must be positive"));
        }
        Ok(())
    }
}
