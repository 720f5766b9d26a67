//! Scene loading from TOML files

use crate::format::SceneFile;
use crate::world::SceneWorld;
use autotrack_core::Result;
use std::fs;
use std::path::Path;

/// Load a scene from a TOML file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<(SceneWorld, SceneFile)> {
    let content = fs::read_to_string(path)?;
    load_scene_string(&content)
}

/// Load a scene from a TOML string
pub fn load_scene_string(content: &str) -> Result<(SceneWorld, SceneFile)> {
    let scene_file: SceneFile = toml::from_str(content)?;
    let mut world = SceneWorld::new();

    // First pass: create all objects
    for (name, object_def) in &scene_file.objects {
        world.spawn(name.clone(), object_def.kind)?;
    }

    // Second pass: object data and relationships
    for (name, object_def) in &scene_file.objects {
        let id = match world.get_id(name) {
            Some(id) => id,
            None => continue,
        };

        if let Some(data) = world.data_mut(id) {
            data.transform = object_def.transform;
            data.selectable = object_def.selectable;
            data.exclude = object_def.exclude;
            data.constraints = object_def.constraints.clone();
        }

        if let Some(parent_name) = &object_def.parent {
            world.set_parent_by_name(name, parent_name)?;
        }
    }

    Ok((world, scene_file))
}
