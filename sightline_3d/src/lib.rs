/*!
# Sightline 3D

Camera selection core for 3D scene graphs.

Every scene keeps exactly one *active* camera and at most one *spectator*
camera among the camera nodes attached to it, and every camera node keeps
its perspective projection in sync with its configuration and with the
surface the scene is displayed on.

## Architecture

- **CameraNode**: one camera attachment; owns its configuration and projection,
  and turns `active` / `spectator` flag changes into registry requests
- **CameraRegistry**: per-scene record of the active and spectator nodes
  (last writer wins, holder-checked clears)
- **Scene**: camera table + registry + shared hosting surface; drives the
  create / configure / destroy / resize hooks
- **SceneManager**: named scenes, one registry each
- **HostingSurface**: boundary trait for display and container sizes

## Example

```no_run
use std::sync::{Arc, Mutex};
use sightline_3d::sightline::{Scene, CameraConfig, WindowSurface};
use sightline_3d::winit::dpi::PhysicalSize;

let surface = Arc::new(Mutex::new(WindowSurface::new(PhysicalSize::new(1920, 1080))));
let mut scene = Scene::new(surface.clone());

let key = scene.create_camera(CameraConfig::default())?;
assert_eq!(scene.active_camera().map(|c| c.key()), Some(key));

surface.lock().unwrap().resize(PhysicalSize::new(1280, 720));
scene.handle_viewport_resize()?;

// Role changes queue up until drained (bounded, oldest dropped first)
for event in scene.take_camera_events() {
    println!("{:?}", event);
}
# Ok::<(), sightline_3d::sightline::Error>(())
```
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod config;
pub mod scene;
pub mod surface;

// Main sightline namespace module
pub mod sightline {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging entry point
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Core types
    pub use crate::camera::{CameraNode, CameraNodeKey, CameraRole, PerspectiveProjection};
    pub use crate::config::{CameraConfig, ConfigChanges};
    pub use crate::scene::{CameraEvent, CameraRegistry, Scene, SceneManager, MAX_PENDING_EVENTS};
    pub use crate::surface::{HostingSurface, WindowSurface};
}

// Re-export math and windowing libraries at crate root
pub use glam;
pub use winit;
