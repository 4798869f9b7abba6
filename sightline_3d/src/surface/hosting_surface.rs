/// HostingSurface: boundary trait for the surface a scene is displayed on.
///
/// The camera core never measures anything itself. It asks the hosting
/// surface for the display size, the containing element's content box
/// (embedded layouts) and the current mode flags.

use winit::dpi::PhysicalSize;
use crate::error::Result;

/// Surface queried by camera nodes for sizing and mode.
///
/// Implemented by `WindowSurface`; hosts embedding the scene elsewhere
/// provide their own implementation.
pub trait HostingSurface: Send {
    /// Full display viewport size
    fn display_size(&self) -> PhysicalSize<u32>;

    /// Content box of the element containing the surface
    ///
    /// # Errors
    ///
    /// `Error::SurfaceUnavailable` when the surface has no containing element.
    fn container_size(&self) -> Result<PhysicalSize<u32>>;

    /// Whether the surface is laid out inside a containing element
    fn is_embedded(&self) -> bool;

    /// Whether the surface is presenting to an immersive (VR/XR) display
    fn is_immersive(&self) -> bool;

    /// Embedded sizing applies only outside immersive mode.
    fn uses_embedded_sizing(&self) -> bool {
        self.is_embedded() && !self.is_immersive()
    }
}

/// Width / height ratio of a surface size.
///
/// Returns `None` when either side is zero (collapsed or minimized surface).
pub fn aspect_ratio(size: PhysicalSize<u32>) -> Option<f32> {
    if size.width == 0 || size.height == 0 {
        None
    } else {
        Some(size.width as f32 / size.height as f32)
    }
}
