/// Tests for Scene
///
/// These tests validate the camera lifecycle driven through a scene:
/// creation, reconfiguration, destruction, viewport resize and the
/// resulting role selection.

use std::sync::{Arc, Mutex};
use winit::dpi::PhysicalSize;
use crate::surface::WindowSurface;
use super::*;
use crate::scene::MAX_PENDING_EVENTS;

// ============================================================================
// Helpers
// ============================================================================

fn full_viewport_surface() -> Arc<Mutex<WindowSurface>> {
    Arc::new(Mutex::new(WindowSurface::new(PhysicalSize::new(1920, 1080))))
}

fn create_scene() -> (Scene, Arc<Mutex<WindowSurface>>) {
    let surface = full_viewport_surface();
    (Scene::new(surface.clone()), surface)
}

fn inactive() -> CameraConfig {
    CameraConfig { active: false, ..Default::default() }
}

// ============================================================================
// Tests: Creation
// ============================================================================

#[test]
fn test_scene_new_is_empty() {
    let (scene, _surface) = create_scene();
    assert_eq!(scene.camera_count(), 0);
    assert!(scene.active_camera().is_none());
    assert!(scene.spectator_camera().is_none());
}

#[test]
fn test_create_default_camera_becomes_active() {
    let (mut scene, _surface) = create_scene();

    let key = scene.create_camera(CameraConfig::default()).unwrap();

    assert_eq!(scene.camera_count(), 1);
    assert_eq!(scene.active_camera().map(|c| c.key()), Some(key));
    assert_eq!(scene.camera_role(key), Some(CameraRole::Active));
}

#[test]
fn test_create_camera_rejects_invalid_config() {
    let (mut scene, _surface) = create_scene();

    let result = scene.create_camera(CameraConfig { near: 10.0, far: 1.0, ..Default::default() });

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert_eq!(scene.camera_count(), 0);
}

#[test]
fn test_create_camera_clamps_negative_fov() {
    let (mut scene, _surface) = create_scene();

    let key = scene.create_camera(CameraConfig { fov: -30.0, ..Default::default() }).unwrap();

    assert_eq!(scene.camera(key).unwrap().config().fov, 0.0);
}

#[test]
fn test_create_embedded_camera_without_container_fails() {
    let surface = Arc::new(Mutex::new(WindowSurface::embedded(
        PhysicalSize::new(1920, 1080),
        PhysicalSize::new(800, 400),
    )));
    surface.lock().unwrap().detach_container();
    let mut scene = Scene::new(surface);

    let result = scene.create_camera(CameraConfig::default());

    assert!(matches!(result, Err(Error::SurfaceUnavailable(_))));
    assert_eq!(scene.camera_count(), 0);
    assert!(scene.registry().active_node().is_none());
}

#[test]
fn test_poisoned_surface_is_reported() {
    let (mut scene, surface) = create_scene();

    let poisoner = surface.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the surface lock");
    })
    .join();

    let result = scene.create_camera(CameraConfig::default());
    assert!(matches!(result, Err(Error::SurfaceUnavailable(_))));
}

// ============================================================================
// Tests: Update
// ============================================================================

#[test]
fn test_update_camera_returns_changes() {
    let (mut scene, _surface) = create_scene();
    let key = scene.create_camera(CameraConfig::default()).unwrap();

    let changes = scene
        .update_camera(key, CameraConfig { fov: 60.0, active: false, ..Default::default() })
        .unwrap();

    assert_eq!(changes, ConfigChanges::ACTIVE | ConfigChanges::PROJECTION);
    assert!(scene.active_camera().is_none());
}

#[test]
fn test_update_unknown_camera_fails() {
    let (mut scene, _surface) = create_scene();
    let key = scene.create_camera(CameraConfig::default()).unwrap();
    scene.destroy_camera(key);

    let result = scene.update_camera(key, CameraConfig::default());
    assert!(matches!(result, Err(Error::InvalidNode(_))));
}

#[test]
fn test_modify_camera_edits_current_config() {
    let (mut scene, _surface) = create_scene();
    let key = scene.create_camera(CameraConfig { fov: 70.0, ..Default::default() }).unwrap();

    scene.modify_camera(key, |config| config.spectator = true).unwrap();

    let node = scene.camera(key).unwrap();
    assert_eq!(node.config().fov, 70.0);
    assert_eq!(scene.spectator_camera().map(|c| c.key()), Some(key));
    assert!(scene.active_camera().is_none());
}

// ============================================================================
// Tests: Selection scenario
// ============================================================================

#[test]
fn test_newest_active_camera_takes_over() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(CameraConfig::default()).unwrap();

    assert!(scene.registry().is_active(b));
    assert!(!scene.registry().is_active(a));
    assert_eq!(scene.camera_role(a), Some(CameraRole::ActiveCandidate));
}

#[test]
fn test_destroy_active_camera_empties_slot() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(CameraConfig::default()).unwrap();

    assert!(scene.destroy_camera(b));

    assert!(scene.active_camera().is_none());
    assert!(scene.camera(a).is_some());
}

#[test]
fn test_reconfigure_with_unchanged_active_does_not_reclaim() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(CameraConfig::default()).unwrap();
    scene.destroy_camera(b);

    let changes = scene.update_camera(a, CameraConfig::default()).unwrap();

    assert!(changes.is_empty());
    assert!(scene.active_camera().is_none());
}

#[test]
fn test_toggling_active_reclaims_role() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(CameraConfig::default()).unwrap();
    scene.destroy_camera(b);

    scene.update_camera(a, inactive()).unwrap();
    scene.update_camera(a, CameraConfig::default()).unwrap();

    assert_eq!(scene.active_camera().map(|c| c.key()), Some(a));
}

#[test]
fn test_destroy_invalid_camera_returns_false() {
    let (mut scene, _surface) = create_scene();
    let key = scene.create_camera(CameraConfig::default()).unwrap();

    assert!(scene.destroy_camera(key));
    assert!(!scene.destroy_camera(key));
}

#[test]
fn test_destroyed_key_never_resolves_after_slot_reuse() {
    let (mut scene, _surface) = create_scene();
    let old = scene.create_camera(CameraConfig::default()).unwrap();
    scene.destroy_camera(old);
    let new = scene.create_camera(CameraConfig::default()).unwrap();

    assert_ne!(old, new);
    assert!(scene.camera(old).is_none());
    assert!(!scene.registry().is_active(old));
    assert!(scene.registry().is_active(new));
}

// ============================================================================
// Tests: Resize
// ============================================================================

#[test]
fn test_handle_viewport_resize_updates_all_cameras() {
    let (mut scene, surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(inactive()).unwrap();

    surface.lock().unwrap().resize(PhysicalSize::new(800, 800));
    scene.handle_viewport_resize().unwrap();

    assert_eq!(scene.camera(a).unwrap().aspect(), 1.0);
    assert_eq!(scene.camera(b).unwrap().aspect(), 1.0);
    assert!(scene.registry().is_active(a));
}

#[test]
fn test_embedded_scene_uses_container_aspect() {
    let surface = Arc::new(Mutex::new(WindowSurface::embedded(
        PhysicalSize::new(1920, 1080),
        PhysicalSize::new(800, 400),
    )));
    let mut scene = Scene::new(surface.clone());
    let key = scene.create_camera(CameraConfig::default()).unwrap();

    assert_eq!(scene.camera(key).unwrap().aspect(), 2.0);

    surface.lock().unwrap().resize_container(PhysicalSize::new(600, 600));
    scene.handle_viewport_resize().unwrap();

    assert_eq!(scene.camera(key).unwrap().aspect(), 1.0);
}

// ============================================================================
// Tests: Events & clear
// ============================================================================

#[test]
fn test_take_camera_events() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(CameraConfig { spectator: true, ..Default::default() }).unwrap();
    scene.destroy_camera(a);

    assert_eq!(
        scene.take_camera_events(),
        vec![
            CameraEvent::ActiveSet(a),
            CameraEvent::SpectatorSet(b),
            CameraEvent::ActiveCleared(a),
        ]
    );
    assert!(scene.take_camera_events().is_empty());
}

#[test]
fn test_clear_detaches_everything() {
    let (mut scene, _surface) = create_scene();
    scene.create_camera(CameraConfig::default()).unwrap();
    scene.create_camera(CameraConfig { spectator: true, ..Default::default() }).unwrap();

    scene.clear();

    assert_eq!(scene.camera_count(), 0);
    assert!(scene.registry().active_node().is_none());
    assert!(scene.registry().spectator_node().is_none());
}

#[test]
fn test_clear_keeps_undrained_events() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();

    scene.clear();

    assert_eq!(
        scene.take_camera_events(),
        vec![CameraEvent::ActiveSet(a), CameraEvent::ActiveCleared(a)]
    );
}

#[test]
fn test_undrained_events_stay_bounded() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();

    for i in 0..MAX_PENDING_EVENTS * 2 {
        scene.modify_camera(a, |config| config.active = i % 2 == 1).unwrap();
    }

    assert_eq!(scene.registry().events().len(), MAX_PENDING_EVENTS);
    assert!(scene.registry().is_active(a));
}

#[test]
fn test_cameras_iterates_all() {
    let (mut scene, _surface) = create_scene();
    let a = scene.create_camera(CameraConfig::default()).unwrap();
    let b = scene.create_camera(inactive()).unwrap();

    let keys: Vec<CameraNodeKey> = scene.cameras().map(|(key, _)| key).collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&a));
    assert!(keys.contains(&b));
}
