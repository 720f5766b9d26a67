//! Scene file format definitions

use crate::constraint::Constraint;
use crate::object::ObjectKind;
use crate::settings::TrackerSettings;
use autotrack_core::Transform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root structure of a scene TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    /// Tracker settings ride the document, like any other scene property
    #[serde(default)]
    pub settings: TrackerSettings,
    #[serde(default)]
    pub objects: HashMap<String, ObjectDef>,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Definition of an object in a scene file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub kind: ObjectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default = "default_true")]
    pub selectable: bool,
    #[serde(default)]
    pub exclude: bool,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

fn default_true() -> bool {
    true
}

impl ObjectDef {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            parent: None,
            selectable: true,
            exclude: false,
            transform: Transform::IDENTITY,
            constraints: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

impl SceneFile {
    /// Create a new scene file with default settings and no objects
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: SceneMetadata {
                name: name.into(),
                version: default_version(),
                description: None,
            },
            settings: TrackerSettings::default(),
            objects: HashMap::new(),
        }
    }

    /// Add an object to the scene
    pub fn add_object(&mut self, name: impl Into<String>, object: ObjectDef) {
        self.objects.insert(name.into(), object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_file_serialization() {
        let mut scene = SceneFile::new("Test Scene");
        scene.settings.enabled = true;
        scene.add_object("cube", ObjectDef::new(ObjectKind::Mesh));
        scene.add_object("Track", ObjectDef::new(ObjectKind::Empty));

        let toml_str = toml::to_string_pretty(&scene).unwrap();
        assert!(toml_str.contains("Test Scene"));
        assert!(toml_str.contains("enabled = true"));
        assert!(toml_str.contains("cube"));
    }

    #[test]
    fn test_scene_file_deserialization() {
        let toml_str = r#"
[scene]
name = "Test Scene"
version = "1.0"

[settings]
enabled = true
target_name = "Track"

[objects.cube]
kind = "mesh"

[objects.cube.transform]
position = { x = 1.0, y = 0.0, z = 0.0 }
rotation = { x = 0.0, y = 0.0, z = 0.0 }
scale = { x = 1.0, y = 1.0, z = 1.0 }
"#;

        let scene: SceneFile = toml::from_str(toml_str).unwrap();
        assert_eq!(scene.scene.name, "Test Scene");
        assert!(scene.settings.enabled);
        assert!(scene.objects.contains_key("cube"));
        assert_eq!(scene.objects["cube"].transform.position.x, 1.0);
    }

    #[test]
    fn test_missing_settings_section_defaults() {
        let toml_str = r#"
[scene]
name = "Bare"

[objects.lamp]
kind = "light"
exclude = true
"#;

        let scene: SceneFile = toml::from_str(toml_str).unwrap();
        assert!(!scene.settings.enabled);
        assert_eq!(scene.settings.target_name, "Track");
        assert!(scene.objects["lamp"].exclude);
        assert!(scene.objects["lamp"].selectable);
    }

    #[test]
    fn test_object_with_constraints() {
        let toml_str = r#"
[scene]
name = "Constrained"

[objects.cube]
kind = "mesh"

[[objects.cube.constraints]]
type = "track_to"
target = "Track"
track_axis = "neg_z"
up_axis = "y"
owner_space = "world"
target_space = "world"
"#;

        let scene: SceneFile = toml::from_str(toml_str).unwrap();
        let cube = &scene.objects["cube"];
        assert_eq!(cube.constraints.len(), 1);
        assert!(cube.constraints[0].is_track_to());
    }
}
