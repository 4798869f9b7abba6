//! Scene management module
//!
//! Provides the scene (camera table + selection registry) and the
//! named scene collection.

mod camera_registry;
mod scene;
mod scene_manager;

pub use camera_registry::{CameraRegistry, CameraEvent, MAX_PENDING_EVENTS};
pub use scene::Scene;
pub use scene_manager::SceneManager;
