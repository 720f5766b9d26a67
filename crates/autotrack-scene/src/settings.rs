//! Document-scoped tracker settings

use crate::object::ObjectKind;
use serde::{Deserialize, Serialize};

/// Tracker configuration, persisted in the scene file under `[settings]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Master switch for all automatic behavior
    #[serde(default)]
    pub enabled: bool,

    /// Name of the object new objects are constrained to face
    #[serde(default = "default_target_name")]
    pub target_name: String,

    #[serde(default = "default_true")]
    pub apply_to_meshes: bool,
    #[serde(default)]
    pub apply_to_lights: bool,
    #[serde(default)]
    pub apply_to_cameras: bool,

    /// Whether the kind toggles are expanded in the panel
    #[serde(default = "default_true")]
    pub show_kind_options: bool,

    /// Optional object the target marker gets parented under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_target: Option<String>,
}

fn default_target_name() -> String {
    "Track".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            target_name: default_target_name(),
            apply_to_meshes: true,
            apply_to_lights: false,
            apply_to_cameras: false,
            show_kind_options: true,
            parent_target: None,
        }
    }
}

impl TrackerSettings {
    /// Whether objects of the given kind qualify for automatic tracking
    pub fn kind_enabled(&self, kind: ObjectKind) -> bool {
        match kind {
            ObjectKind::Mesh => self.apply_to_meshes,
            ObjectKind::Light => self.apply_to_lights,
            ObjectKind::Camera => self.apply_to_cameras,
            ObjectKind::Empty => false,
        }
    }
}
