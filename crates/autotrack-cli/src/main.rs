//! AutoTrack CLI - Track-to constraint management for scene files

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{apply, exclude, info, init, remove, target, watch};

#[derive(Parser)]
#[command(name = "autotrack")]
#[command(about = "Automatic track-to constraints for scene files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new scene file
    Init {
        /// Path to scene file
        path: String,

        /// Scene name (defaults to filename)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show scene settings, objects, and constraints
    Info {
        /// Path to scene file
        scene: String,
    },

    /// Track target operations
    #[command(subcommand)]
    Target(target::TargetCommands),

    /// Apply the track constraint to the named objects
    Apply {
        /// Path to scene file
        scene: String,

        /// Object names to operate on
        #[arg(long, value_delimiter = ',', required = true)]
        select: Vec<String>,
    },

    /// Remove all constraints from the named objects
    Remove {
        /// Path to scene file
        scene: String,

        /// Object names to operate on
        #[arg(long, value_delimiter = ',', required = true)]
        select: Vec<String>,
    },

    /// Toggle an object's per-object exclusion flag
    Exclude {
        /// Path to scene file
        scene: String,

        /// Object name
        object: String,

        /// Clear the flag instead of setting it
        #[arg(long)]
        off: bool,
    },

    /// Watch a scene file and constrain new objects on every change
    Watch {
        /// Path to scene file
        scene: String,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, name } => init::run(&path, name.as_deref()),
        Commands::Info { scene } => info::run(&scene),
        Commands::Target(cmd) => target::run(cmd),
        Commands::Apply { scene, select } => apply::run(&scene, &select),
        Commands::Remove { scene, select } => remove::run(&scene, &select),
        Commands::Exclude { scene, object, off } => exclude::run(&scene, &object, !off),
        Commands::Watch { scene } => watch::run(&scene),
    }
}
