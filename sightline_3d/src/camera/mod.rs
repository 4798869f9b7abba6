//! Camera module: camera nodes and their projection.
//!
//! A CameraNode is owned by its Scene. It reports role intent to the
//! scene's CameraRegistry but never decides the selection itself.

mod camera_node;
mod projection;

pub use camera_node::{CameraNode, CameraNodeKey, CameraRole};
pub use projection::PerspectiveProjection;
