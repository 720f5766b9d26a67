//! Object-attached constraint records
//!
//! Constraints are data: they name a target object and an axis configuration,
//! and whatever renders or simulates the scene is responsible for solving
//! them. The tracker only creates and removes records.

use serde::{Deserialize, Serialize};

/// The axis of the owner that is aimed at the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackAxis {
    X,
    Y,
    Z,
    NegX,
    NegY,
    NegZ,
}

/// The axis kept pointing upward while tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpAxis {
    X,
    Y,
    Z,
}

/// Coordinate space a constraint evaluates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    World,
    Local,
}

/// A constraint record attached to an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Orient the owner so one axis keeps facing the target
    TrackTo {
        target: String,
        track_axis: TrackAxis,
        up_axis: UpAxis,
        owner_space: Space,
        target_space: Space,
    },
    /// Copy the target's position onto the owner
    CopyLocation { target: String },
    /// Keep the owner within a distance of the target
    LimitDistance { target: String, distance: f32 },
}

impl Constraint {
    /// Whether this record is a track-to constraint
    pub fn is_track_to(&self) -> bool {
        matches!(self, Constraint::TrackTo { .. })
    }

    /// The name of the object this constraint targets
    pub fn target(&self) -> &str {
        match self {
            Constraint::TrackTo { target, .. } => target,
            Constraint::CopyLocation { target } => target,
            Constraint::LimitDistance { target, .. } => target,
        }
    }
}
