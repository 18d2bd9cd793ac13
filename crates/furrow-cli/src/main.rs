//! Furrow CLI Application
//!
//! Command-line front end for the furrow cultivation planner.

mod args;
mod cli;
mod renderer;

use std::path::Path;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use furrow_core::{server, Scheduler, SchedulerBuilder, Settings};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn build_scheduler(
    config_file: Option<&Path>,
    api_url: Option<String>,
    offline: bool,
) -> Result<Scheduler> {
    let settings = Settings::load(config_file).context("Failed to load settings")?;
    SchedulerBuilder::new()
        .with_settings(&settings)
        .with_api_url(api_url)
        .offline(offline)
        .build()
        .context("Failed to initialize scheduler")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        offline,
        config_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Plan { command } => {
            let scheduler = build_scheduler(config_file.as_deref(), api_url, offline)?;
            Cli::new(scheduler, renderer)
                .handle_plan_command(command)
                .await
        }
        Observe(args) => {
            let scheduler = build_scheduler(config_file.as_deref(), api_url, offline)?;
            Cli::new(scheduler, renderer).observe(args).await
        }
        Serve(args) => {
            info!("Starting furrow planning service");
            server::run_serve(&args.bind, args.port)
                .await
                .context("Planning service failed")
        }
    }
}
