//! Apply-to-selection command

use anyhow::Result;
use autotrack_tracker::ops;

pub fn run(scene_path: &str, select: &[String]) -> Result<()> {
    let (mut world, scene_file) = super::load(scene_path)?;
    super::select_objects(&mut world, select)?;

    let count = ops::apply_to_selection(&mut world, &scene_file.settings);

    if count > 0 {
        super::save(scene_path, &world, &scene_file)?;
    }

    println!("Track constraint applied to {} object(s)", count);

    Ok(())
}
