/// CameraNode: one camera attachment on one scene-graph node.
///
/// Owns its configuration and its projection. Recomputes the projection on
/// every configuration update and on viewport resize, and turns changes of
/// its `active` / `spectator` flags into requests on the scene's
/// CameraRegistry. It never decides which node holds a role; the registry does.

use slotmap::new_key_type;
use crate::config::{CameraConfig, ConfigChanges};
use crate::error::Result;
use crate::scene::CameraRegistry;
use crate::surface::{HostingSurface, aspect_ratio};
use super::projection::PerspectiveProjection;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a CameraNode within a Scene.
    ///
    /// Keys are generational: a key to a destroyed node never resolves
    /// again, even if its slot is reused.
    pub struct CameraNodeKey;
}

// ===== ROLE STATE =====

/// Where a node stands with respect to the scene's camera roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraRole {
    /// Requests no role and holds none
    Unregistered,
    /// `active` is set but another node (or nobody) holds the active slot
    ActiveCandidate,
    /// Holds the active slot
    Active,
    /// `spectator` is set but the node does not hold the spectator slot
    SpectatorCandidate,
    /// Holds the spectator slot
    Spectator,
}

// ===== CAMERA NODE =====

/// A camera attached to a scene-graph node.
#[derive(Debug)]
pub struct CameraNode {
    key: CameraNodeKey,
    config: CameraConfig,
    /// Captured once at creation from the hosting surface's mode
    embedded: bool,
    projection: PerspectiveProjection,
}

impl CameraNode {
    /// Create a camera node (internal: only via Scene::create_camera)
    ///
    /// Allocates the projection and captures the embedded mode. No role is
    /// requested until the first `configure`.
    ///
    /// # Errors
    ///
    /// `Error::SurfaceUnavailable` if the surface is in embedded mode but
    /// has no containing element to measure.
    pub(crate) fn create(
        key: CameraNodeKey,
        config: CameraConfig,
        surface: &dyn HostingSurface,
    ) -> Result<Self> {
        let embedded = surface.uses_embedded_sizing();
        if embedded {
            if let Err(err) = surface.container_size() {
                crate::engine_error!("sightline::CameraNode",
                    "Cannot create camera {:?}: {}", key, err);
                return Err(err);
            }
        }

        crate::engine_debug!("sightline::CameraNode",
            "Created camera {:?} (embedded: {})", key, embedded);

        Ok(Self {
            key,
            config,
            embedded,
            projection: PerspectiveProjection::default(),
        })
    }

    // ===== GETTERS =====

    pub fn key(&self) -> CameraNodeKey {
        self.key
    }

    /// Configuration as of the last `configure` (or creation)
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Whether the node sizes against the containing element
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Current aspect ratio pushed into the projection
    pub fn aspect(&self) -> f32 {
        self.projection.aspect()
    }

    pub fn projection(&self) -> &PerspectiveProjection {
        &self.projection
    }

    /// Role state of this node as seen by `registry`.
    pub fn role(&self, registry: &CameraRegistry) -> CameraRole {
        if registry.is_spectator(self.key) {
            CameraRole::Spectator
        } else if self.config.spectator {
            CameraRole::SpectatorCandidate
        } else if registry.is_active(self.key) {
            CameraRole::Active
        } else if self.config.active {
            CameraRole::ActiveCandidate
        } else {
            CameraRole::Unregistered
        }
    }

    // ===== LIFECYCLE =====

    /// Apply a new configuration.
    ///
    /// Pushes the new values and the surface aspect into the projection,
    /// recomputes its matrix, then issues role requests for the flags that
    /// changed since `previous`. `None` means first configuration: every
    /// flag counts as changed.
    ///
    /// Returns the set of changes that were detected.
    pub fn configure(
        &mut self,
        config: CameraConfig,
        previous: Option<&CameraConfig>,
        surface: &dyn HostingSurface,
        registry: &mut CameraRegistry,
    ) -> ConfigChanges {
        self.config = config;
        let changes = config.changes_since(previous);

        self.apply_projection(surface);

        // Active first, then spectator. A spectator update never touches the active role.
        if changes.contains(ConfigChanges::ACTIVE) && !config.spectator {
            self.request_active_role(registry);
        }
        if changes.contains(ConfigChanges::SPECTATOR) {
            self.request_spectator_role(registry);
        }

        changes
    }

    /// Recompute aspect and projection after the hosting surface was resized.
    ///
    /// Roles are untouched.
    pub fn handle_viewport_resize(&mut self, surface: &dyn HostingSurface) {
        self.apply_projection(surface);
    }

    /// Release the projection and give up any role this node holds.
    pub(crate) fn destroy(self, registry: &mut CameraRegistry) {
        registry.relinquish(self.key);
        crate::engine_debug!("sightline::CameraNode", "Destroyed camera {:?}", self.key);
    }

    // ===== INTERNAL =====

    fn apply_projection(&mut self, surface: &dyn HostingSurface) {
        if let Some(aspect) = self.surface_aspect(surface) {
            self.projection.set_aspect(aspect);
        }
        self.projection.set_fov(self.config.fov);
        self.projection.set_near(self.config.near);
        self.projection.set_far(self.config.far);
        self.projection.set_zoom(self.config.zoom);
        self.projection.update_projection_matrix();

        crate::engine_trace!("sightline::CameraNode",
            "Camera {:?} projection: fov {} near {} far {} zoom {} aspect {}",
            self.key, self.config.fov, self.config.near, self.config.far,
            self.config.zoom, self.projection.aspect());
    }

    /// Width / height of the box this node sizes against.
    ///
    /// Embedded nodes use the containing element, others the full display.
    /// Returns `None` (keep the previous aspect) when the box cannot be
    /// measured or has a zero-sized side.
    fn surface_aspect(&self, surface: &dyn HostingSurface) -> Option<f32> {
        let size = if self.embedded {
            match surface.container_size() {
                Ok(size) => size,
                Err(err) => {
                    crate::engine_warn!("sightline::CameraNode",
                        "Camera {:?} keeps aspect {}: {}", self.key, self.projection.aspect(), err);
                    return None;
                }
            }
        } else {
            surface.display_size()
        };

        let aspect = aspect_ratio(size);
        if aspect.is_none() {
            crate::engine_warn!("sightline::CameraNode",
                "Camera {:?} keeps aspect {}: surface has a zero-sized side", self.key, self.projection.aspect());
        }
        aspect
    }

    fn request_active_role(&self, registry: &mut CameraRegistry) {
        if self.config.active && !registry.is_active(self.key) {
            registry.set_active(self.key);
        } else if !self.config.active && registry.is_active(self.key) {
            registry.clear_active(self.key);
        }
    }

    fn request_spectator_role(&self, registry: &mut CameraRegistry) {
        if self.config.spectator && !registry.is_spectator(self.key) {
            registry.set_spectator(self.key);
        } else if !self.config.spectator && registry.is_spectator(self.key) {
            registry.clear_spectator(self.key);
        }
    }
}

#[cfg(test)]
#[path = "camera_node_tests.rs"]
mod tests;
