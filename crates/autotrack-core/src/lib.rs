//! AutoTrack Core - Foundational types for the AutoTrack workspace
//!
//! This crate provides the types every other AutoTrack crate depends on:
//! - `ObjectId` - Session-local object identifiers
//! - `Vec3`, `Transform` - Spatial types
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{AutoTrackError, Result};
pub use id::ObjectId;
pub use types::{Transform, Vec3};
