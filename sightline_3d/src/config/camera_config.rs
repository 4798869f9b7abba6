/// Camera configuration: the values a host attaches to a camera node.
///
/// Validation happens here, at the configuration boundary. The camera core
/// (CameraNode, CameraRegistry) assumes it only ever sees sanitized input.

use std::str::FromStr;
use bitflags::bitflags;
use crate::error::{Error, Result};

/// Default vertical field of view, in degrees
pub const DEFAULT_FOV: f32 = 80.0;
/// Default near clip plane distance
pub const DEFAULT_NEAR: f32 = 0.005;
/// Default far clip plane distance
pub const DEFAULT_FAR: f32 = 10000.0;
/// Default zoom factor
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Per-node camera configuration.
///
/// Defaults: `active: true`, `far: 10000`, `fov: 80`, `near: 0.005`,
/// `spectator: false`, `zoom: 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Request the active role for this node
    pub active: bool,
    /// Far clip plane distance
    pub far: f32,
    /// Vertical field of view in degrees (min 0)
    pub fov: f32,
    /// Near clip plane distance (min 0)
    pub near: f32,
    /// Request the spectator role for this node
    pub spectator: bool,
    /// Zoom factor (min 0)
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            active: true,
            far: DEFAULT_FAR,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            spectator: false,
            zoom: DEFAULT_ZOOM,
        }
    }
}

bitflags! {
    /// Fields that differ between two configuration snapshots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConfigChanges: u8 {
        /// `active` flag changed
        const ACTIVE = 1 << 0;
        /// `spectator` flag changed
        const SPECTATOR = 1 << 1;
        /// Any of fov, near, far, zoom changed
        const PROJECTION = 1 << 2;
    }
}

impl CameraConfig {
    /// Clamp numeric fields to their schema minimum.
    ///
    /// `fov`, `near` and `zoom` have a minimum of 0. Non-finite values fall
    /// back to the field default.
    pub fn sanitized(mut self) -> Self {
        self.fov = clamp_min_zero(self.fov, DEFAULT_FOV);
        self.near = clamp_min_zero(self.near, DEFAULT_NEAR);
        self.zoom = clamp_min_zero(self.zoom, DEFAULT_ZOOM);
        if !self.far.is_finite() {
            self.far = DEFAULT_FAR;
        }
        self
    }

    /// Reject configurations that cannot produce a usable projection.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` when `far` is not strictly beyond `near`.
    pub fn validate(&self) -> Result<()> {
        if self.far <= self.near {
            return Err(Error::InvalidConfig(format!(
                "far ({}) must be greater than near ({})",
                self.far, self.near
            )));
        }
        Ok(())
    }

    /// Sanitize then validate, as done by the scene before a node sees the config.
    pub fn checked(self) -> Result<Self> {
        let config = self.sanitized();
        config.validate()?;
        Ok(config)
    }

    /// Compute which fields changed relative to `previous`.
    ///
    /// An absent previous snapshot means this is the first configuration
    /// and every field counts as changed.
    pub fn changes_since(&self, previous: Option<&CameraConfig>) -> ConfigChanges {
        let Some(previous) = previous else {
            return ConfigChanges::all();
        };

        let mut changes = ConfigChanges::empty();
        if previous.active != self.active {
            changes |= ConfigChanges::ACTIVE;
        }
        if previous.spectator != self.spectator {
            changes |= ConfigChanges::SPECTATOR;
        }
        if previous.fov != self.fov
            || previous.near != self.near
            || previous.far != self.far
            || previous.zoom != self.zoom
        {
            changes |= ConfigChanges::PROJECTION;
        }
        changes
    }
}

fn clamp_min_zero(value: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        default
    }
}

/// Parse the host's property-string form, e.g. `"fov: 60; active: false"`.
///
/// Unlisted properties keep their defaults. The result is sanitized but
/// not validated (call `validate()` or `checked()`).
impl FromStr for CameraConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut config = CameraConfig::default();

        for declaration in s.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }

            let (key, value) = declaration.split_once(':').ok_or_else(|| {
                Error::InvalidConfig(format!("expected 'name: value', got '{}'", declaration))
            })?;
            let key = key.trim();
            let value = value.trim();

            match key {
                "active" => config.active = parse_bool(key, value)?,
                "spectator" => config.spectator = parse_bool(key, value)?,
                "far" => config.far = parse_number(key, value)?,
                "fov" => config.fov = parse_number(key, value)?,
                "near" => config.near = parse_number(key, value)?,
                "zoom" => config.zoom = parse_number(key, value)?,
                _ => {
                    return Err(Error::InvalidConfig(format!("unknown property '{}'", key)));
                }
            }
        }

        Ok(config.sanitized())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidConfig(format!(
            "property '{}' expects true or false, got '{}'",
            key, value
        ))),
    }
}

fn parse_number(key: &str, value: &str) -> Result<f32> {
    value.parse::<f32>().map_err(|_| {
        Error::InvalidConfig(format!("property '{}' expects a number, got '{}'", key, value))
    })
}

#[cfg(test)]
#[path = "camera_config_tests.rs"]
mod tests;
