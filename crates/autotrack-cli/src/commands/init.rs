//! Scene file creation command

use anyhow::Result;
use autotrack_scene::SceneFile;
use std::fs;
use std::path::Path;

pub fn run(path: &str, name: Option<&str>) -> Result<()> {
    let path = if path.ends_with(".toml") {
        path.to_string()
    } else {
        format!("{}.toml", path)
    };

    if Path::new(&path).exists() {
        anyhow::bail!("Scene file already exists: {}", path);
    }

    // Derive name from path if not provided
    let scene_name = name.map(String::from).unwrap_or_else(|| {
        Path::new(&path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string()
    });

    let scene = SceneFile::new(&scene_name);
    let content = toml::to_string_pretty(&scene)?;

    if let Some(parent) = Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, content)?;

    println!("Created scene: {}", path);

    Ok(())
}
