//! Live tracking of a scene file
//!
//! Plays the host role: the initial load seeds the tracker session, and
//! every debounced file change counts as one scene-graph update tick. Newly
//! appeared objects get their constraint and the file is written back.

use anyhow::{Context, Result};
use autotrack_scene::{load_scene, save_scene};
use autotrack_tracker::{EventBus, SceneEvent, TrackerSession};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};

pub fn run(scene_path: &str) -> Result<()> {
    let (mut world, scene_file) = super::load(scene_path)?;
    let mut settings = scene_file.settings.clone();
    let mut scene_name = scene_file.scene.name.clone();

    let mut session = TrackerSession::new();
    let mut bus = EventBus::new();

    bus.push(SceneEvent::DocumentLoaded);
    session.pump(&mut bus, &mut world, &settings);

    println!("Loaded scene: {} ({} object(s))", scene_name, world.object_count());
    if !settings.enabled {
        println!("Tracking is disabled in [settings]; ticks will be no-ops");
    }
    println!("Watching for changes...");

    let (tx, rx) = mpsc::channel();
    let mut debouncer =
        new_debouncer(Duration::from_millis(500), tx).context("Failed to create file watcher")?;
    debouncer
        .watcher()
        .watch(Path::new(scene_path), RecursiveMode::NonRecursive)
        .context("Failed to watch scene file")?;

    for result in rx {
        match result {
            Ok(_events) => {
                let (new_world, new_file) = match load_scene(scene_path) {
                    Ok(loaded) => loaded,
                    Err(err) => {
                        log::warn!("reload failed, keeping previous state: {}", err);
                        continue;
                    }
                };

                world = new_world;
                settings = new_file.settings.clone();
                scene_name = new_file.scene.name.clone();

                bus.push(SceneEvent::GraphChanged);
                let applied = session.pump(&mut bus, &mut world, &settings);

                if applied > 0 {
                    save_scene(scene_path, &world, &settings, scene_name.clone())?;
                    println!("Applied track constraint to {} new object(s)", applied);
                }
            }
            Err(e) => {
                eprintln!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}
