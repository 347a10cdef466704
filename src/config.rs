// config.rs - Camera settings loaded from an optional JSON file
use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM};
use crate::demo::{Demo, START_POSITION};
use crate::error::{Error, Result};
use crate::math::AABB;

/// Bounding box as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundsConfig {
    pub fn to_aabb(self) -> Result<AABB> {
        AABB::try_new(Vec3::from_array(self.min), Vec3::from_array(self.max))
    }
}

/// Overrides for the camera's starting pose and tuning.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    /// Replaces the demo's bounds preset when present.
    pub bounds: Option<BoundsConfig>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: START_POSITION.to_array(),
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            bounds: None,
        }
    }
}

impl CameraConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Bounds for `demo`: the file's box if given, otherwise the demo preset.
    pub fn resolve_bounds(&self, demo: Demo) -> Result<AABB> {
        match self.bounds {
            Some(bounds) => bounds.to_aabb(),
            None => Ok(demo.position_bounds()),
        }
    }
}
