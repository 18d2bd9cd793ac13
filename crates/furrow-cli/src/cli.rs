//! Command-line argument definitions and command handlers
//!
//! Each clap argument struct converts into a core parameter type, keeping
//! clap out of `furrow-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler → Display
//! ```
//!
//! Required plan fields are optional flags here on purpose: the core
//! validation decides what is missing and reports it the same way for every
//! interface.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use furrow_core::{
    display::{FeedbackResult, PlanResult, Timeline},
    models::{CultivationPlan, Method},
    params::{CreatePlan, RecordObservation},
    Scheduler,
};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Create a new cultivation plan
///
/// Lays out the standard task sequence against the start date, scaled for
/// the growing environment. The planning service is tried first; if it is
/// unreachable the plan is generated locally.
#[derive(Args)]
pub struct CreatePlanArgs {
    #[arg(short, long, help = "Crop name, e.g. tomato")]
    pub crop: Option<String>,
    #[arg(
        short,
        long,
        help = "Sowing or transplant date as YYYY-MM-DD"
    )]
    pub start_date: Option<String>,
    #[arg(short, long, value_enum, default_value_t = MethodArg::Transplant)]
    pub method: MethodArg,
    #[arg(
        short,
        long,
        default_value = "open",
        help = "Growing environment: open, greenhouse or hydroponic"
    )]
    pub environment: String,
    #[arg(long, help = "Cultivated area in hectares")]
    pub area: Option<f64>,
    #[arg(long, help = "Cultivar name")]
    pub variety: Option<String>,
    #[arg(long, help = "Free-form notes kept with the plan")]
    pub notes: Option<String>,
    #[arg(short, long, help = "Write the plan as JSON to this file")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Print the plan as JSON instead of a timeline")]
    pub json: bool,
}

impl From<&CreatePlanArgs> for CreatePlan {
    fn from(val: &CreatePlanArgs) -> Self {
        CreatePlan {
            crop: val.crop.clone().unwrap_or_default(),
            start_date: val.start_date.clone(),
            method: val.method.into(),
            environment: val.environment.as_str().into(),
            area: val.area,
            variety: val.variety.clone(),
            notes: val.notes.clone(),
        }
    }
}

/// Show the timeline of a saved plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Plan file written by `plan create --output`")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new cultivation plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show the timeline of a saved plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
}

/// Log an observation against a task and get advice
///
/// Symptoms mentioning pests, fungal disease or yellowing get targeted
/// advice; anything else is judged by severity.
#[derive(Args)]
pub struct ObserveArgs {
    #[arg(help = "Plan file written by `plan create --output`")]
    pub file: PathBuf,
    #[arg(short, long, help = "Name of the task the observation belongs to")]
    pub task: String,
    #[arg(short, long, help = "Observation date as YYYY-MM-DD (defaults to the task's due date)")]
    pub date: Option<String>,
    #[arg(long, default_value = "", help = "What you saw, e.g. 'aphids on new growth'")]
    pub symptom: String,
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=3),
        help = "Severity: 1 mild, 2 moderate, 3 severe"
    )]
    pub severity: u8,
    #[arg(short, long, help = "Additional context")]
    pub note: Option<String>,
    #[arg(long, help = "Print the feedback as JSON")]
    pub json: bool,
}

impl From<&ObserveArgs> for RecordObservation {
    fn from(val: &ObserveArgs) -> Self {
        RecordObservation {
            task_name: val.task.clone(),
            date: val.date.clone(),
            symptom: val.symptom.clone(),
            severity: val.severity,
            note: val.note.clone(),
        }
    }
}

/// Run the planning service
#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1", help = "Address to listen on")]
    pub bind: String,
    #[arg(short, long, default_value_t = 8000, help = "Port to listen on")]
    pub port: u16,
}

/// Command-line representation of sowing methods
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Direct sowing
    Seed,
    /// Planting out raised seedlings
    Transplant,
    /// Planting out grafted seedlings
    Grafting,
}

impl From<MethodArg> for Method {
    fn from(val: MethodArg) -> Self {
        match val {
            MethodArg::Seed => Method::Seed,
            MethodArg::Transplant => Method::Transplant,
            MethodArg::Grafting => Method::Grafting,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(&args).await,
            PlanCommands::Show(args) => {
                let plan = load_plan(&args.file)?;
                self.renderer.render(&Timeline(&plan).to_string())
            }
        }
    }

    async fn create_plan(&self, args: &CreatePlanArgs) -> Result<()> {
        let result = self
            .scheduler
            .create_plan(&CreatePlan::from(args))
            .await
            .context("Failed to create plan")?;

        if let Some(path) = &args.output {
            save_plan(path, &result.value)?;
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result.value)?);
            Ok(())
        } else {
            self.renderer.render(&PlanResult(&result).to_string())
        }
    }

    pub async fn observe(&self, args: ObserveArgs) -> Result<()> {
        let plan = load_plan(&args.file)?;
        let observation = RecordObservation::from(&args)
            .validate(&plan)
            .context("Failed to record observation")?;
        let feedback = self
            .scheduler
            .submit_observation(&plan, &observation)
            .await
            .context("Failed to record observation")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&feedback.value)?);
            Ok(())
        } else {
            self.renderer
                .render(&FeedbackResult(&observation, &feedback).to_string())
        }
    }
}

fn load_plan(path: &Path) -> Result<CultivationPlan> {
    debug!("Reading plan from {}", path.display());
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid plan file {}", path.display()))
}

fn save_plan(path: &Path, plan: &CultivationPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write plan file {}", path.display()))?;
    debug!("Saved plan {} to {}", plan.id, path.display());
    Ok(())
}
