//! Configuration module
//!
//! Camera configuration values, their defaults, and the boundary checks
//! applied before a configuration reaches a camera node.

mod camera_config;

pub use camera_config::{
    CameraConfig, ConfigChanges,
    DEFAULT_FOV, DEFAULT_NEAR, DEFAULT_FAR, DEFAULT_ZOOM,
};
