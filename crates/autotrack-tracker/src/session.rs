//! Tracker session: known-object snapshot and new-object detection

use crate::applier::apply_track_to;
use crate::event::{EventBus, SceneEvent};
use autotrack_scene::{SceneWorld, TrackerSettings};
use std::collections::HashSet;

/// Session state for the automatic tracker.
///
/// Holds the set of object names observed at the last detection tick. The
/// snapshot is replaced wholesale on every tracked tick, so after a tick it
/// equals the scene's current name set exactly. It is never persisted; a
/// `DocumentLoaded` event re-seeds it.
///
/// Detection diffs names, so a rename shows up as a new object and gets a
/// constraint like one.
#[derive(Debug, Default)]
pub struct TrackerSession {
    known_names: HashSet<String>,
}

impl TrackerSession {
    /// Create a session with an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot
    pub fn known_names(&self) -> &HashSet<String> {
        &self.known_names
    }

    /// Re-seed the snapshot from the current scene, without applying anything
    pub fn seed(&mut self, world: &SceneWorld) {
        self.known_names = world.name_set();
        log::debug!("seeded tracker session with {} object(s)", self.known_names.len());
    }

    /// Run one detection tick.
    ///
    /// Computes `new = current - known`, replaces the snapshot with
    /// `current`, and submits every new object to the applier. Returns the
    /// number of objects that received a constraint. When tracking is
    /// disabled this returns immediately and the snapshot is left untouched,
    /// so objects added while disabled are picked up on the first enabled
    /// tick.
    pub fn detect(&mut self, world: &mut SceneWorld, settings: &TrackerSettings) -> usize {
        if !settings.enabled {
            return 0;
        }

        let current = world.name_set();
        let mut new_names: Vec<String> = current.difference(&self.known_names).cloned().collect();
        new_names.sort();
        self.known_names = current;

        let mut applied = 0;
        for name in &new_names {
            // The object may already be gone again; skip silently
            if let Some(id) = world.get_id(name) {
                if apply_track_to(world, settings, id) {
                    applied += 1;
                }
            }
        }

        if !new_names.is_empty() {
            log::debug!(
                "detection tick: {} new object(s), {} constrained",
                new_names.len(),
                applied
            );
        }

        applied
    }

    /// React to a single scene event
    pub fn handle_event(
        &mut self,
        event: SceneEvent,
        world: &mut SceneWorld,
        settings: &TrackerSettings,
    ) -> usize {
        match event {
            SceneEvent::DocumentLoaded => {
                self.seed(world);
                0
            }
            SceneEvent::GraphChanged => self.detect(world, settings),
        }
    }

    /// Drain an event bus, handling every pending event in order
    pub fn pump(
        &mut self,
        bus: &mut EventBus,
        world: &mut SceneWorld,
        settings: &TrackerSettings,
    ) -> usize {
        bus.drain()
            .into_iter()
            .map(|event| self.handle_event(event, world, settings))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotrack_scene::{Constraint, ObjectKind};

    fn enabled_settings() -> TrackerSettings {
        TrackerSettings {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_equals_scene_after_tick() {
        let mut world = SceneWorld::new();
        world.spawn("a", ObjectKind::Mesh).unwrap();

        let mut session = TrackerSession::new();
        session.seed(&world);

        world.spawn("b", ObjectKind::Mesh).unwrap();
        world.despawn_by_name("a").unwrap();
        session.detect(&mut world, &enabled_settings());

        assert_eq!(*session.known_names(), world.name_set());
    }

    #[test]
    fn test_detect_with_no_changes_is_noop() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();
        world.spawn("cube", ObjectKind::Mesh).unwrap();

        let mut session = TrackerSession::new();
        session.seed(&world);

        assert_eq!(session.detect(&mut world, &enabled_settings()), 0);
        let cube = world.get_id("cube").unwrap();
        assert!(world.data(cube).unwrap().constraints.is_empty());
    }

    #[test]
    fn test_new_mesh_gets_constraint() {
        // Empty scene -> create target "Track" -> add a mesh -> tick
        let mut world = SceneWorld::new();
        let mut session = TrackerSession::new();
        let settings = enabled_settings();
        session.seed(&world);

        world.spawn("Track", ObjectKind::Empty).unwrap();
        world.spawn("cube", ObjectKind::Mesh).unwrap();

        assert_eq!(session.detect(&mut world, &settings), 1);

        let cube = world.get_id("cube").unwrap();
        let constraints = &world.data(cube).unwrap().constraints;
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].target(), "Track");
    }

    #[test]
    fn test_disabled_detector_is_noop() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();

        let mut session = TrackerSession::new();
        session.seed(&world);

        world.spawn("cube", ObjectKind::Mesh).unwrap();

        let settings = TrackerSettings::default();
        assert_eq!(session.detect(&mut world, &settings), 0);

        // Snapshot untouched, no constraints anywhere
        assert!(!session.known_names().contains("cube"));
        let cube = world.get_id("cube").unwrap();
        assert!(world.data(cube).unwrap().constraints.is_empty());
    }

    #[test]
    fn test_objects_added_while_disabled_caught_on_enable() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();

        let mut session = TrackerSession::new();
        session.seed(&world);

        world.spawn("cube", ObjectKind::Mesh).unwrap();
        session.detect(&mut world, &TrackerSettings::default());

        assert_eq!(session.detect(&mut world, &enabled_settings()), 1);
    }

    #[test]
    fn test_missing_target_applies_nothing() {
        let mut world = SceneWorld::new();
        let mut session = TrackerSession::new();
        session.seed(&world);

        world.spawn("cube", ObjectKind::Mesh).unwrap();
        world.spawn("lamp", ObjectKind::Light).unwrap();

        let mut settings = enabled_settings();
        settings.apply_to_lights = true;

        assert_eq!(session.detect(&mut world, &settings), 0);

        // Snapshot still advanced
        assert_eq!(*session.known_names(), world.name_set());
    }

    #[test]
    fn test_rename_treated_as_new_object() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();
        let cube = world.spawn("cube", ObjectKind::Mesh).unwrap();

        let mut session = TrackerSession::new();
        let settings = enabled_settings();
        session.seed(&world);
        session.detect(&mut world, &settings);

        // Drop the constraint the first tick added, then rename
        world.data_mut(cube).unwrap().constraints.clear();
        world.rename(cube, "box").unwrap();

        assert_eq!(session.detect(&mut world, &settings), 1);
        assert_eq!(world.data(cube).unwrap().constraints.len(), 1);
    }

    #[test]
    fn test_second_tick_does_not_duplicate() {
        let mut world = SceneWorld::new();
        let mut session = TrackerSession::new();
        let settings = enabled_settings();
        session.seed(&world);

        world.spawn("Track", ObjectKind::Empty).unwrap();
        let cube = world.spawn("cube", ObjectKind::Mesh).unwrap();

        session.detect(&mut world, &settings);
        // Clear the constraint: the object is now known, so even without a
        // constraint the next tick must not touch it
        world.data_mut(cube).unwrap().constraints.clear();

        assert_eq!(session.detect(&mut world, &settings), 0);
        assert!(world.data(cube).unwrap().constraints.is_empty());
    }

    #[test]
    fn test_document_loaded_reseeds_without_applying() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();
        world.spawn("cube", ObjectKind::Mesh).unwrap();

        let mut session = TrackerSession::new();
        let settings = enabled_settings();

        let applied = session.handle_event(SceneEvent::DocumentLoaded, &mut world, &settings);

        assert_eq!(applied, 0);
        assert_eq!(*session.known_names(), world.name_set());
        let cube = world.get_id("cube").unwrap();
        assert!(world.data(cube).unwrap().constraints.is_empty());
    }

    #[test]
    fn test_pump_handles_events_in_order() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();

        let mut session = TrackerSession::new();
        let settings = enabled_settings();
        let mut bus = EventBus::new();

        bus.push(SceneEvent::DocumentLoaded);
        session.pump(&mut bus, &mut world, &settings);

        world.spawn("cube", ObjectKind::Mesh).unwrap();
        bus.push(SceneEvent::GraphChanged);

        assert_eq!(session.pump(&mut bus, &mut world, &settings), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_existing_constraint_survives_detection() {
        let mut world = SceneWorld::new();
        world.spawn("Track", ObjectKind::Empty).unwrap();

        let mut session = TrackerSession::new();
        let settings = enabled_settings();
        session.seed(&world);

        let cube = world.spawn("cube", ObjectKind::Mesh).unwrap();
        world
            .data_mut(cube)
            .unwrap()
            .constraints
            .push(Constraint::CopyLocation {
                target: "Track".to_string(),
            });

        session.detect(&mut world, &settings);

        let constraints = &world.data(cube).unwrap().constraints;
        assert_eq!(constraints.len(), 2);
        assert!(constraints.iter().any(|c| !c.is_track_to()));
    }
}
