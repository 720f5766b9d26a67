//! Track target commands

use anyhow::Result;
use autotrack_tracker::{ops, ParentOutcome};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum TargetCommands {
    /// Create the track target marker
    Create {
        /// Path to scene file
        scene: String,
    },

    /// Parent the marker under an object, or unparent it
    Parent {
        /// Path to scene file
        scene: String,

        /// Object to parent the marker under
        #[arg(long, conflicts_with = "clear")]
        parent: Option<String>,

        /// Clear the parent reference and unparent the marker
        #[arg(long)]
        clear: bool,
    },
}

pub fn run(cmd: TargetCommands) -> Result<()> {
    match cmd {
        TargetCommands::Create { scene } => create(&scene),
        TargetCommands::Parent {
            scene,
            parent,
            clear,
        } => parent_cmd(&scene, parent, clear),
    }
}

fn create(scene_path: &str) -> Result<()> {
    let (mut world, scene_file) = super::load(scene_path)?;

    let id = ops::create_target(&mut world, &scene_file.settings);
    let name = world
        .get_name(id)
        .unwrap_or(&scene_file.settings.target_name)
        .to_string();

    super::save(scene_path, &world, &scene_file)?;

    println!("Created track target '{}'", name);

    Ok(())
}

fn parent_cmd(scene_path: &str, parent: Option<String>, clear: bool) -> Result<()> {
    let (mut world, mut scene_file) = super::load(scene_path)?;

    if clear {
        scene_file.settings.parent_target = None;
    } else if parent.is_some() {
        scene_file.settings.parent_target = parent;
    }

    match ops::parent_target(&mut world, &scene_file.settings) {
        Ok(ParentOutcome::Parented(parent_name)) => {
            super::save(scene_path, &world, &scene_file)?;
            println!("Track target parented to '{}'", parent_name);
        }
        Ok(ParentOutcome::Unparented) => {
            super::save(scene_path, &world, &scene_file)?;
            println!("Track target unparented");
        }
        Err(err) => {
            // Warning, not a hard failure: the scene is left untouched
            log::warn!("parent operation failed: {}", err);
            println!("Warning: {}", err);
        }
    }

    Ok(())
}
