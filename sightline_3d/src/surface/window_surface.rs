/// WindowSurface: hosting surface backed by plain size values.
///
/// The host feeds it from its windowing layer (e.g. winit `Resized` events)
/// and from its layout system for embedded scenes.

use winit::dpi::PhysicalSize;
use crate::error::{Error, Result};
use super::hosting_surface::HostingSurface;

/// Hosting surface whose sizes and mode flags are pushed by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSurface {
    display_size: PhysicalSize<u32>,
    container_size: Option<PhysicalSize<u32>>,
    embedded: bool,
    immersive: bool,
}

impl WindowSurface {
    /// Full-viewport (non-embedded) surface of the given display size
    pub fn new(display_size: PhysicalSize<u32>) -> Self {
        Self {
            display_size,
            container_size: None,
            embedded: false,
            immersive: false,
        }
    }

    /// Surface embedded in a containing element of the given content box
    pub fn embedded(display_size: PhysicalSize<u32>, container_size: PhysicalSize<u32>) -> Self {
        Self {
            display_size,
            container_size: Some(container_size),
            embedded: true,
            immersive: false,
        }
    }

    // ===== SETTERS =====

    /// Record a new display size (window resize)
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.display_size = size;
    }

    /// Record a new content box for the containing element
    pub fn resize_container(&mut self, size: PhysicalSize<u32>) {
        self.container_size = Some(size);
    }

    /// Detach the surface from its containing element
    pub fn detach_container(&mut self) {
        self.container_size = None;
    }

    /// Toggle embedded layout
    pub fn set_embedded(&mut self, embedded: bool) {
        self.embedded = embedded;
    }

    /// Enter or leave immersive mode
    pub fn set_immersive(&mut self, immersive: bool) {
        self.immersive = immersive;
    }
}

impl HostingSurface for WindowSurface {
    fn display_size(&self) -> PhysicalSize<u32> {
        self.display_size
    }

    fn container_size(&self) -> Result<PhysicalSize<u32>> {
        self.container_size.ok_or_else(|| {
            Error::SurfaceUnavailable("surface has no containing element".to_string())
        })
    }

    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn is_immersive(&self) -> bool {
        self.immersive
    }
}

#[cfg(test)]
#[path = "window_surface_tests.rs"]
mod tests;
