//! Per-object exclusion flag command

use anyhow::{Context, Result};

pub fn run(scene_path: &str, object: &str, exclude: bool) -> Result<()> {
    let (mut world, scene_file) = super::load(scene_path)?;

    let id = world
        .get_id(object)
        .with_context(|| format!("Object not found: {}", object))?;

    if let Some(data) = world.data_mut(id) {
        data.exclude = exclude;
    }

    super::save(scene_path, &world, &scene_file)?;

    if exclude {
        println!("Excluded '{}' from tracking", object);
    } else {
        println!("'{}' is tracked again", object);
    }

    Ok(())
}
