//! Manual tracker operations, invoked from the panel or the CLI
//!
//! These are stateless single-shot actions: they read the settings, mutate
//! the world, and return what happened so the caller can report it.

use crate::applier::apply_track_to;
use autotrack_core::{AutoTrackError, ObjectId, Result, Transform};
use autotrack_scene::{ObjectKind, SceneWorld, TrackerSettings};

/// What the parent operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentOutcome {
    /// The marker was parented under the named object
    Parented(String),
    /// The marker's parent was cleared
    Unparented,
}

/// Create the track target marker: an empty at the origin with identity
/// rotation and scale, selectable.
///
/// Always succeeds. If the configured name is taken, the world's collision
/// rule kicks in and the marker gets a suffixed name.
pub fn create_target(world: &mut SceneWorld, settings: &TrackerSettings) -> ObjectId {
    let id = world.spawn_unique(&settings.target_name, ObjectKind::Empty);
    log::info!(
        "created track target '{}'",
        world.get_name(id).unwrap_or(&settings.target_name)
    );
    id
}

/// Apply the track constraint to every selected object.
///
/// Returns the number of objects whose constraint count increased; objects
/// the applier declines are left alone.
pub fn apply_to_selection(world: &mut SceneWorld, settings: &TrackerSettings) -> usize {
    let mut count = 0;
    for id in world.selected_objects() {
        if apply_track_to(world, settings, id) {
            count += 1;
        }
    }
    count
}

/// Clear the entire constraint stack of every selected object.
///
/// Deliberately broader than the applier: ALL constraint kinds are removed,
/// not just track-to. Returns the total number of records removed.
pub fn remove_constraints(world: &mut SceneWorld) -> usize {
    let mut removed = 0;
    for id in world.selected_objects() {
        if let Some(data) = world.data_mut(id) {
            removed += data.constraints.len();
            data.constraints.clear();
        }
    }
    removed
}

/// Parent or unparent the track target marker.
///
/// With `settings.parent_target` set, the marker is reparented under it, its
/// local transform is reset to identity, and it is made non-selectable so it
/// rides its parent untouched. With the reference unset, the parent is
/// cleared and the marker becomes selectable again.
///
/// Fails without touching anything if the marker (or the named parent) does
/// not exist.
pub fn parent_target(world: &mut SceneWorld, settings: &TrackerSettings) -> Result<ParentOutcome> {
    let marker = world
        .get_id(&settings.target_name)
        .ok_or_else(|| AutoTrackError::TargetNotFound(settings.target_name.clone()))?;

    match &settings.parent_target {
        Some(parent_name) => {
            let parent = world
                .get_id(parent_name)
                .ok_or_else(|| AutoTrackError::ObjectNotFound(parent_name.clone()))?;

            world.set_parent(marker, parent)?;
            if let Some(data) = world.data_mut(marker) {
                data.transform = Transform::IDENTITY;
                data.selectable = false;
                data.selected = false;
            }

            Ok(ParentOutcome::Parented(parent_name.clone()))
        }
        None => {
            world.clear_parent(marker);
            if let Some(data) = world.data_mut(marker) {
                data.selectable = true;
            }

            Ok(ParentOutcome::Unparented)
        }
    }
}
