//! Remove-constraints command

use anyhow::Result;
use autotrack_tracker::ops;

pub fn run(scene_path: &str, select: &[String]) -> Result<()> {
    let (mut world, scene_file) = super::load(scene_path)?;
    super::select_objects(&mut world, select)?;

    let count = ops::remove_constraints(&mut world);

    if count > 0 {
        super::save(scene_path, &world, &scene_file)?;
    }

    println!("Removed {} constraint(s)", count);

    Ok(())
}
