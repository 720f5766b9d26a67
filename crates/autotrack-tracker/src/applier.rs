//! Track-constraint application rules

use autotrack_core::ObjectId;
use autotrack_scene::{Constraint, SceneWorld, Space, TrackAxis, TrackerSettings, UpAxis};

/// Apply the track-to constraint to a candidate object.
///
/// The constraint is appended iff every guard passes: tracking is enabled,
/// the object is not excluded, its kind is one of the enabled kinds, an
/// object with the configured target name exists, and the object does not
/// already carry a track-to constraint. Returns whether a constraint was
/// added, so callers can count affected objects.
///
/// Calling this twice on the same object is a no-op the second time.
pub fn apply_track_to(world: &mut SceneWorld, settings: &TrackerSettings, id: ObjectId) -> bool {
    if !settings.enabled {
        return false;
    }

    let Some(data) = world.data(id) else {
        // Object vanished between detection and processing
        return false;
    };

    if data.exclude {
        return false;
    }

    if !settings.kind_enabled(data.kind) {
        return false;
    }

    if !world.contains_name(&settings.target_name) {
        // No target in the document: nothing to do, not an error
        return false;
    }

    if data.constraints.iter().any(Constraint::is_track_to) {
        return false;
    }

    let constraint = Constraint::TrackTo {
        target: settings.target_name.clone(),
        track_axis: TrackAxis::NegZ,
        up_axis: UpAxis::Y,
        owner_space: Space::World,
        target_space: Space::World,
    };

    if let Some(data) = world.data_mut(id) {
        data.constraints.push(constraint);
        log::debug!(
            "applied track-to constraint (target '{}') to object {}",
            settings.target_name,
            id
        );
        true
    } else {
        false
    }
}
