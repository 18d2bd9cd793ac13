use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ObserveArgs, PlanCommands, ServeArgs};

/// Main command-line interface for the Furrow cultivation planner
///
/// Furrow lays out a dated cultivation plan for a crop and gives advice on
/// field observations. Plans come from the planning service when one is
/// configured and reachable, and from built-in rules otherwise.
#[derive(Parser)]
#[command(version, about, name = "furrow")]
pub struct Args {
    /// Base URL of the planning service. Overrides the settings file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Never contact the planning service
    #[arg(long, global = true)]
    pub offline: bool,

    /// Path to the JSON settings file. Defaults to
    /// $XDG_CONFIG_HOME/furrow/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Furrow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create and view cultivation plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Log an observation against a task of a saved plan
    #[command(alias = "o")]
    Observe(ObserveArgs),
    /// Run the planning service
    Serve(ServeArgs),
}
