//! Central scene manager.
//!
//! Stores named scenes. Each scene carries its own CameraRegistry, so
//! camera selection never leaks between scenes.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::engine_bail;
use crate::surface::HostingSurface;
use super::scene::Scene;

/// Named collection of scenes.
///
/// Scenes are handed out as `Arc<Mutex<Scene>>` so the host can share a
/// scene between its update and render loops.
#[derive(Default)]
pub struct SceneManager {
    scenes: FxHashMap<String, Arc<Mutex<Scene>>>,
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new named scene displayed on `surface`
    ///
    /// # Errors
    ///
    /// Returns an error if a scene with the same name already exists.
    pub fn create_scene(
        &mut self,
        name: &str,
        surface: Arc<Mutex<dyn HostingSurface>>,
    ) -> Result<Arc<Mutex<Scene>>> {
        if self.scenes.contains_key(name) {
            engine_bail!("sightline::SceneManager", "Scene '{}' already exists", name);
        }

        let scene = Arc::new(Mutex::new(Scene::new(surface)));
        self.scenes.insert(name.to_string(), scene.clone());

        crate::engine_info!("sightline::SceneManager", "Scene '{}' created", name);
        Ok(scene)
    }

    /// Get a scene by name
    pub fn scene(&self, name: &str) -> Option<Arc<Mutex<Scene>>> {
        self.scenes.get(name).cloned()
    }

    /// Remove a scene by name
    ///
    /// Returns the removed scene, or None if not found. Outstanding handles
    /// keep the scene alive.
    pub fn remove_scene(&mut self, name: &str) -> Option<Arc<Mutex<Scene>>> {
        let removed = self.scenes.remove(name);
        if removed.is_some() {
            crate::engine_info!("sightline::SceneManager", "Scene '{}' removed", name);
        }
        removed
    }

    /// Get the number of scenes
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Get all scene names
    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all scenes
    pub fn clear(&mut self) {
        self.scenes.clear();
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
