/// Scene: camera nodes of one scene and their role selection.
///
/// Uses a SlotMap for O(1) insert/remove with stable, generational keys.
/// Owns exactly one CameraRegistry; the registry only ever holds keys into
/// this scene's table.

use std::sync::{Arc, Mutex, MutexGuard};
use slotmap::SlotMap;
use crate::camera::{CameraNode, CameraNodeKey, CameraRole};
use crate::config::{CameraConfig, ConfigChanges};
use crate::error::{Error, Result};
use crate::surface::HostingSurface;
use super::camera_registry::{CameraEvent, CameraRegistry};

/// A scene holding camera nodes.
///
/// Drives the camera lifecycle hooks (create, configure, destroy, resize)
/// the host scene graph would otherwise call on each node.
pub struct Scene {
    /// Surface the scene is displayed on, shared with the host
    surface: Arc<Mutex<dyn HostingSurface>>,
    /// Camera nodes stored in a slot map for O(1) insert/remove
    cameras: SlotMap<CameraNodeKey, CameraNode>,
    /// Active/spectator selection for this scene only
    registry: CameraRegistry,
}

impl Scene {
    /// Create a new empty scene displayed on `surface`
    pub fn new(surface: Arc<Mutex<dyn HostingSurface>>) -> Self {
        Self {
            surface,
            cameras: SlotMap::with_key(),
            registry: CameraRegistry::new(),
        }
    }

    // ===== LIFECYCLE =====

    /// Attach a camera and run its first configuration.
    ///
    /// The configuration is sanitized and validated first. The first
    /// configuration counts as a change of every flag, so a default camera
    /// immediately claims the active role.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfig` if the configuration is rejected
    /// - `Error::SurfaceUnavailable` if the surface cannot be queried
    pub fn create_camera(&mut self, config: CameraConfig) -> Result<CameraNodeKey> {
        let config = config.checked()?;
        let surface = lock_surface(&self.surface)?;

        let key = self.cameras.try_insert_with_key(|key| {
            CameraNode::create(key, config, &*surface)
        })?;

        if let Some(node) = self.cameras.get_mut(key) {
            node.configure(config, None, &*surface, &mut self.registry);
        }

        crate::engine_info!("sightline::Scene", "Camera {:?} attached", key);
        Ok(key)
    }

    /// Replace a camera's configuration.
    ///
    /// The node's current configuration is passed as the previous snapshot,
    /// so role requests fire only for flags that actually changed.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfig` if the configuration is rejected
    /// - `Error::InvalidNode` if the key does not resolve
    /// - `Error::SurfaceUnavailable` if the surface lock is poisoned
    pub fn update_camera(&mut self, key: CameraNodeKey, config: CameraConfig) -> Result<ConfigChanges> {
        let config = config.checked()?;
        let surface = lock_surface(&self.surface)?;
        let node = self.cameras.get_mut(key).ok_or_else(|| stale_key(key))?;

        let previous = *node.config();
        Ok(node.configure(config, Some(&previous), &*surface, &mut self.registry))
    }

    /// Update a camera by editing a copy of its current configuration.
    ///
    /// ```ignore
    /// scene.modify_camera(key, |config| config.active = false)?;
    /// ```
    pub fn modify_camera<F>(&mut self, key: CameraNodeKey, edit: F) -> Result<ConfigChanges>
    where
        F: FnOnce(&mut CameraConfig),
    {
        let mut config = *self.cameras.get(key).ok_or_else(|| stale_key(key))?.config();
        edit(&mut config);
        self.update_camera(key, config)
    }

    /// Detach a camera, releasing its projection and any role it holds.
    ///
    /// Returns false if the key is invalid.
    pub fn destroy_camera(&mut self, key: CameraNodeKey) -> bool {
        match self.cameras.remove(key) {
            Some(node) => {
                node.destroy(&mut self.registry);
                crate::engine_info!("sightline::Scene", "Camera {:?} detached", key);
                true
            }
            None => false,
        }
    }

    /// Recompute every camera's projection after the surface was resized.
    ///
    /// # Errors
    ///
    /// `Error::SurfaceUnavailable` if the surface lock is poisoned.
    pub fn handle_viewport_resize(&mut self) -> Result<()> {
        let surface = lock_surface(&self.surface)?;
        for node in self.cameras.values_mut() {
            node.handle_viewport_resize(&*surface);
        }
        Ok(())
    }

    /// Detach every camera, releasing every role.
    ///
    /// Each detach records its role changes, as `destroy_camera` does.
    pub fn clear(&mut self) {
        for (_, node) in self.cameras.drain() {
            node.destroy(&mut self.registry);
        }
    }

    // ===== QUERIES =====

    /// Get a camera by key
    pub fn camera(&self, key: CameraNodeKey) -> Option<&CameraNode> {
        self.cameras.get(key)
    }

    /// Iterate over all cameras (key, node)
    pub fn cameras(&self) -> impl Iterator<Item = (CameraNodeKey, &CameraNode)> {
        self.cameras.iter()
    }

    /// Get the number of cameras
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// The camera currently holding the active role
    pub fn active_camera(&self) -> Option<&CameraNode> {
        self.registry.active_node().and_then(|key| self.cameras.get(key))
    }

    /// The camera currently holding the spectator role
    pub fn spectator_camera(&self) -> Option<&CameraNode> {
        self.registry.spectator_node().and_then(|key| self.cameras.get(key))
    }

    /// Role state of a camera, or None if the key is invalid
    pub fn camera_role(&self, key: CameraNodeKey) -> Option<CameraRole> {
        self.cameras.get(key).map(|node| node.role(&self.registry))
    }

    /// The scene's selection registry (read-only; nodes drive it)
    pub fn registry(&self) -> &CameraRegistry {
        &self.registry
    }

    /// Take and clear the role changes recorded since the last call.
    ///
    /// Hosts that react to role changes should drain this once per frame.
    /// Undrained events are capped at `MAX_PENDING_EVENTS`; past that the
    /// oldest are dropped and a warning is logged.
    pub fn take_camera_events(&mut self) -> Vec<CameraEvent> {
        self.registry.take_events()
    }

    /// Surface shared with the host
    pub fn surface(&self) -> &Arc<Mutex<dyn HostingSurface>> {
        &self.surface
    }
}

/// Map a key that no longer resolves to an `InvalidNode` error.
fn stale_key(key: CameraNodeKey) -> Error {
    Error::InvalidNode(format!("camera node {:?} does not exist", key))
}

/// Lock the shared surface, mapping poisoning to `SurfaceUnavailable`.
///
/// A free function so the guard borrows only the surface field.
fn lock_surface(
    surface: &Arc<Mutex<dyn HostingSurface>>,
) -> Result<MutexGuard<'_, dyn HostingSurface + 'static>> {
    surface.lock().map_err(|_| {
        crate::engine_error!("sightline::Scene", "Hosting surface lock poisoned");
        Error::SurfaceUnavailable("hosting surface lock poisoned".to_string())
    })
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
