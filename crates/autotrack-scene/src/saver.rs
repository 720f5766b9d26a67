//! Scene saving to TOML files

use crate::format::{ObjectDef, SceneFile, SceneMetadata};
use crate::settings::TrackerSettings;
use crate::world::SceneWorld;
use autotrack_core::Result;
use std::fs;
use std::path::Path;

/// Save a world and its settings to a scene file
pub fn save_scene<P: AsRef<Path>>(
    path: P,
    world: &SceneWorld,
    settings: &TrackerSettings,
    name: impl Into<String>,
) -> Result<()> {
    let content = save_scene_string(world, settings, name)?;
    fs::write(path, content)?;
    Ok(())
}

/// Save a world and its settings to a TOML string
pub fn save_scene_string(
    world: &SceneWorld,
    settings: &TrackerSettings,
    name: impl Into<String>,
) -> Result<String> {
    let scene_file = world_to_scene_file(world, settings, name);
    let content = toml::to_string_pretty(&scene_file)?;
    Ok(content)
}

/// Convert a SceneWorld to a SceneFile
pub fn world_to_scene_file(
    world: &SceneWorld,
    settings: &TrackerSettings,
    name: impl Into<String>,
) -> SceneFile {
    let mut scene = SceneFile {
        scene: SceneMetadata {
            name: name.into(),
            version: "1.0".to_string(),
            description: None,
        },
        settings: settings.clone(),
        objects: std::collections::HashMap::new(),
    };

    for info in world.all_objects() {
        let data = world.data(info.id);

        let object_def = ObjectDef {
            kind: info.kind,
            parent: info.parent,
            selectable: data.map(|d| d.selectable).unwrap_or(true),
            exclude: data.map(|d| d.exclude).unwrap_or(false),
            transform: data.map(|d| d.transform).unwrap_or_default(),
            constraints: data.map(|d| d.constraints.clone()).unwrap_or_default(),
        };

        scene.objects.insert(info.name, object_def);
    }

    scene
}
