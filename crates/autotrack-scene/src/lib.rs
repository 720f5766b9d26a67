//! AutoTrack Scene - Scene world and document persistence
//!
//! This crate provides the scene model the tracker operates on:
//! - `SceneWorld` - named objects with kinds, parents, selection, and
//!   per-object constraint stacks
//! - `Constraint` - object-attached constraint records
//! - `TrackerSettings` - the document-scoped tracker configuration
//! - TOML scene file format with loader and saver

mod constraint;
mod format;
mod loader;
mod object;
mod saver;
mod settings;
mod world;

pub use constraint::{Constraint, Space, TrackAxis, UpAxis};
pub use format::{ObjectDef, SceneFile, SceneMetadata};
pub use loader::{load_scene, load_scene_string};
pub use object::{ObjectData, ObjectInfo, ObjectKind};
pub use saver::{save_scene, save_scene_string, world_to_scene_file};
pub use settings::TrackerSettings;
pub use world::SceneWorld;
