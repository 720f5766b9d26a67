//! Scene information command

use anyhow::Result;

pub fn run(scene_path: &str) -> Result<()> {
    let (world, scene_file) = super::load(scene_path)?;

    println!("Scene: {}", scene_file.scene.name);

    let settings = &scene_file.settings;
    println!("Tracking: {}", if settings.enabled { "enabled" } else { "disabled" });
    println!("Target name: {}", settings.target_name);
    println!(
        "Kinds: meshes={} lights={} cameras={}",
        settings.apply_to_meshes, settings.apply_to_lights, settings.apply_to_cameras
    );
    if let Some(parent) = &settings.parent_target {
        println!("Parent target: {}", parent);
    }

    println!("Objects: {}", world.object_count());
    for info in world.all_objects() {
        let data = world.data(info.id);
        let excluded = data.map(|d| d.exclude).unwrap_or(false);

        let mut line = format!("  {} ({})", info.name, info.kind.as_str());
        if let Some(parent) = &info.parent {
            line.push_str(&format!(" parent={}", parent));
        }
        if excluded {
            line.push_str(" [excluded]");
        }
        if info.constraint_count > 0 {
            line.push_str(&format!(" constraints={}", info.constraint_count));
        }
        println!("{}", line);
    }

    Ok(())
}
