/// CameraRegistry: scene-scoped record of which camera holds which role.
///
/// Holds at most one active node and at most one spectator node, as
/// non-owning generational keys into the scene's camera table. It never
/// reads or writes node state, and it never notifies a node that lost a role:
/// `set_*` is last-writer-wins, `clear_*` is holder-checked.

use std::collections::VecDeque;
use crate::camera::CameraNodeKey;

/// Maximum number of undrained role changes kept by a registry.
///
/// Past this, the oldest events are dropped.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Role change recorded by the registry.
///
/// Only effective slot mutations produce events. Redundant sets and stale
/// clears do not. The queue holds at most `MAX_PENDING_EVENTS` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    /// Node became the active camera
    ActiveSet(CameraNodeKey),
    /// Node stopped being the active camera (the active slot is now empty)
    ActiveCleared(CameraNodeKey),
    /// Node became the spectator camera
    SpectatorSet(CameraNodeKey),
    /// Node stopped being the spectator camera (the spectator slot is now empty)
    SpectatorCleared(CameraNodeKey),
}

/// Active/spectator selection for one scene.
#[derive(Debug, Default)]
pub struct CameraRegistry {
    active_node: Option<CameraNodeKey>,
    spectator_node: Option<CameraNodeKey>,
    events: VecDeque<CameraEvent>,
    /// Events dropped since the last `take_events()`
    dropped_events: usize,
}

impl CameraRegistry {
    /// Create an empty registry (no active, no spectator)
    pub fn new() -> Self {
        Self::default()
    }

    // ===== QUERIES =====

    /// Current active node, if any
    pub fn active_node(&self) -> Option<CameraNodeKey> {
        self.active_node
    }

    /// Current spectator node, if any
    pub fn spectator_node(&self) -> Option<CameraNodeKey> {
        self.spectator_node
    }

    pub fn is_active(&self, node: CameraNodeKey) -> bool {
        self.active_node == Some(node)
    }

    pub fn is_spectator(&self, node: CameraNodeKey) -> bool {
        self.spectator_node == Some(node)
    }

    // ===== ACTIVE ROLE =====

    /// Make `node` the active camera. The previous holder is not notified.
    pub fn set_active(&mut self, node: CameraNodeKey) {
        if self.active_node == Some(node) {
            return;
        }
        if let Some(previous) = self.active_node {
            crate::engine_debug!("sightline::CameraRegistry",
                "Active camera {:?} superseded by {:?}", previous, node);
        }
        self.active_node = Some(node);
        self.record(CameraEvent::ActiveSet(node));
        crate::engine_info!("sightline::CameraRegistry", "Active camera set to {:?}", node);
    }

    /// Empty the active slot if `node` holds it; stale clears are ignored.
    pub fn clear_active(&mut self, node: CameraNodeKey) {
        if self.active_node != Some(node) {
            crate::engine_trace!("sightline::CameraRegistry",
                "Ignoring stale active clear from {:?}", node);
            return;
        }
        self.active_node = None;
        self.record(CameraEvent::ActiveCleared(node));
        crate::engine_info!("sightline::CameraRegistry", "Active camera {:?} cleared", node);
    }

    // ===== SPECTATOR ROLE =====

    /// Make `node` the spectator camera.
    ///
    /// A node cannot hold both roles: if `node` is the active camera, the
    /// active slot is emptied.
    pub fn set_spectator(&mut self, node: CameraNodeKey) {
        if self.spectator_node == Some(node) {
            return;
        }
        if self.active_node == Some(node) {
            self.clear_active(node);
        }
        self.spectator_node = Some(node);
        self.record(CameraEvent::SpectatorSet(node));
        crate::engine_info!("sightline::CameraRegistry", "Spectator camera set to {:?}", node);
    }

    /// Empty the spectator slot if `node` holds it; stale clears are ignored.
    pub fn clear_spectator(&mut self, node: CameraNodeKey) {
        if self.spectator_node != Some(node) {
            crate::engine_trace!("sightline::CameraRegistry",
                "Ignoring stale spectator clear from {:?}", node);
            return;
        }
        self.spectator_node = None;
        self.record(CameraEvent::SpectatorCleared(node));
        crate::engine_info!("sightline::CameraRegistry", "Spectator camera {:?} cleared", node);
    }

    /// Drop every role `node` holds (used when the node is destroyed).
    pub fn relinquish(&mut self, node: CameraNodeKey) {
        if self.is_active(node) {
            self.clear_active(node);
        }
        if self.is_spectator(node) {
            self.clear_spectator(node);
        }
    }

    // ===== EVENTS =====

    /// Role changes recorded since the last `take_events()`, oldest first.
    pub fn events(&self) -> &VecDeque<CameraEvent> {
        &self.events
    }

    /// Number of events dropped because the queue was full
    pub fn dropped_event_count(&self) -> usize {
        self.dropped_events
    }

    /// Take and clear the recorded role changes.
    pub fn take_events(&mut self) -> Vec<CameraEvent> {
        self.dropped_events = 0;
        self.events.drain(..).collect()
    }

    fn record(&mut self, event: CameraEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
            if self.dropped_events == 0 {
                crate::engine_warn!("sightline::CameraRegistry",
                    "Camera event queue full ({} entries), dropping oldest events until drained",
                    MAX_PENDING_EVENTS);
            }
            self.dropped_events += 1;
        }
        self.events.push_back(event);
    }
}

#[cfg(test)]
#[path = "camera_registry_tests.rs"]
mod tests;
