//! Hosting surface module
//!
//! The boundary between the camera core and whatever displays the scene.

mod hosting_surface;
mod window_surface;

pub use hosting_surface::{HostingSurface, aspect_ratio};
pub use window_surface::WindowSurface;
