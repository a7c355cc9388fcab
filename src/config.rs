//! Space-level configuration
//!
//! The surrounding simulation space owns the medium densities and gravity
//! that every element body reads during its drag step. Values come from
//! `constants::physics_constants` unless a TOML file overrides them.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::physics_constants;
use crate::world::MediumKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Physical constants of a simulation space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    pub air_density: f32,
    pub water_density: f32,
    pub lava_density: f32,
    pub gravity: Vec3,
    /// Seconds per fixed step
    pub fixed_timestep: f32,
    pub max_substeps: u32,
    /// Drag forces at or below this magnitude are not applied
    pub min_drag_force: f32,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            air_density: physics_constants::AIR_DENSITY,
            water_density: physics_constants::WATER_DENSITY,
            lava_density: physics_constants::LAVA_DENSITY,
            gravity: Vec3::from_array(physics_constants::GRAVITY),
            fixed_timestep: physics_constants::FIXED_TIMESTEP,
            max_substeps: physics_constants::MAX_SUBSTEPS,
            min_drag_force: physics_constants::MIN_DRAG_FORCE,
        }
    }
}

impl SpaceConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: SpaceConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file from disk
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!(
            "Loaded space config from {} (air {}, water {}, lava {})",
            path.display(),
            config.air_density,
            config.water_density,
            config.lava_density
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would poison every body in the space.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("air_density", self.air_density),
            ("water_density", self.water_density),
            ("lava_density", self.lava_density),
            ("min_drag_force", self.min_drag_force),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a finite non-negative number, got {}", value),
                });
            }
        }

        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "gravity",
                reason: format!("expected finite components, got {:?}", self.gravity),
            });
        }

        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "fixed_timestep",
                reason: format!("expected a positive number, got {}", self.fixed_timestep),
            });
        }

        Ok(())
    }

    /// Density of the given medium. Anything that is not water or lava is air.
    pub fn density_of(&self, medium: MediumKind) -> f32 {
        match medium {
            MediumKind::Water => self.water_density,
            MediumKind::Lava => self.lava_density,
            MediumKind::Air => self.air_density,
        }
    }
}
