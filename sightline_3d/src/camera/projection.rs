/// PerspectiveProjection: the projection object owned by a camera node.
///
/// A value holder: the owning CameraNode pushes fov/near/far/zoom/aspect
/// into it, then calls `update_projection_matrix()`. Nothing is recomputed
/// implicitly by the setters.

use std::f32::consts::PI;
use glam::Mat4;

/// Lower/upper bound applied to the effective vertical FOV (radians)
/// so the matrix stays finite for fov = 0 or zoom = 0.
const MIN_EFFECTIVE_FOV: f32 = 1.0e-4;
const MAX_EFFECTIVE_FOV: f32 = PI - 1.0e-4;

/// Perspective projection parameters and the matrix derived from them.
///
/// Right-handed, OpenGL depth range ([-1, 1]). `zoom` narrows the vertical
/// field of view: `fov_eff = 2 * atan(tan(fov / 2) / zoom)`.
#[derive(Debug, Clone)]
pub struct PerspectiveProjection {
    fov: f32,
    near: f32,
    far: f32,
    zoom: f32,
    aspect: f32,
    projection_matrix: Mat4,
}

impl PerspectiveProjection {
    /// Create a projection and compute its initial matrix.
    ///
    /// `fov` is the vertical field of view in degrees.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut projection = Self {
            fov,
            near,
            far,
            zoom: 1.0,
            aspect,
            projection_matrix: Mat4::IDENTITY,
        };
        projection.update_projection_matrix();
        projection
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Width / height ratio
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Matrix as of the last `update_projection_matrix()` call.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Inverse of the current projection matrix (unprojection).
    pub fn inverse_projection_matrix(&self) -> Mat4 {
        self.projection_matrix.inverse()
    }

    /// Vertical field of view after zoom, in radians.
    pub fn effective_fov(&self) -> f32 {
        let half = (0.5 * self.fov.to_radians()).tan() / self.zoom;
        (2.0 * half.atan()).clamp(MIN_EFFECTIVE_FOV, MAX_EFFECTIVE_FOV)
    }

    // ===== SETTERS (store only) =====

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    // ===== COMPUTE =====

    /// Recompute the projection matrix from the current parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh_gl(
            self.effective_fov(),
            self.aspect,
            self.near,
            self.far,
        );
    }
}

impl Default for PerspectiveProjection {
    fn default() -> Self {
        Self::new(50.0, 1.0, 0.1, 2000.0)
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
