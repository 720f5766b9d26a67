//! Object kinds and per-object data

use crate::constraint::Constraint;
use autotrack_core::{ObjectId, Transform};
use serde::{Deserialize, Serialize};

/// The kind of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    Light,
    Camera,
    /// Non-rendering marker object (the track target is one of these)
    Empty,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Mesh => "mesh",
            ObjectKind::Light => "light",
            ObjectKind::Camera => "camera",
            ObjectKind::Empty => "empty",
        }
    }
}

/// Data attached to every object in the world
#[derive(Debug, Clone)]
pub struct ObjectData {
    pub kind: ObjectKind,
    pub transform: Transform,
    /// Whether the object can be selected in an editor
    pub selectable: bool,
    /// Current selection state. Session-only, never persisted.
    pub selected: bool,
    /// Opts the object out of automatic constraint application. Persisted
    /// with the document.
    pub exclude: bool,
    pub constraints: Vec<Constraint>,
}

impl ObjectData {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            transform: Transform::IDENTITY,
            selectable: true,
            selected: false,
            exclude: false,
            constraints: Vec::new(),
        }
    }
}

/// Summary of an object for listings and UI
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub parent: Option<String>,
    pub constraint_count: usize,
}
