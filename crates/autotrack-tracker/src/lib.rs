//! AutoTrack Tracker - Automatic constraint management
//!
//! This crate watches a `SceneWorld` for newly created objects and attaches
//! a track-to constraint to each one that qualifies, plus the manual
//! operations exposed in the settings panel:
//! - `TrackerSession` - known-name snapshot and new-object detection
//! - `apply_track_to` - the guarded, idempotent constraint applier
//! - `ops` - create target, apply to selection, remove constraints,
//!   parent/unparent target
//! - `SceneEvent` / `EventBus` - the host notifications that drive it all

mod applier;
mod event;
pub mod ops;
mod session;

pub use applier::apply_track_to;
pub use event::{EventBus, SceneEvent};
pub use ops::{apply_to_selection, create_target, parent_target, remove_constraints, ParentOutcome};
pub use session::TrackerSession;
