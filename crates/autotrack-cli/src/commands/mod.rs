//! CLI command implementations

pub mod apply;
pub mod exclude;
pub mod info;
pub mod init;
pub mod remove;
pub mod target;
pub mod watch;

use anyhow::{Context, Result};
use autotrack_scene::{load_scene, save_scene, SceneFile, SceneWorld};

/// Load a scene file, attaching the path to any error
pub(crate) fn load(path: &str) -> Result<(SceneWorld, SceneFile)> {
    load_scene(path).with_context(|| format!("Failed to load scene: {}", path))
}

/// Write the world back to the scene file it came from
pub(crate) fn save(path: &str, world: &SceneWorld, scene_file: &SceneFile) -> Result<()> {
    save_scene(path, world, &scene_file.settings, scene_file.scene.name.clone())
        .with_context(|| format!("Failed to save scene: {}", path))
}

/// Mark the named objects selected, failing on unknown names
pub(crate) fn select_objects(world: &mut SceneWorld, names: &[String]) -> Result<()> {
    for name in names {
        let id = world
            .get_id(name)
            .with_context(|| format!("Object not found: {}", name))?;
        world.select(id, true);
    }
    Ok(())
}
