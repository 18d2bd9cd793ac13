//! Core library for the Furrow cultivation planner.
//!
//! This crate turns a crop, a start date and growing conditions into a dated
//! cultivation plan, and turns field observations into advice. Both are
//! produced by the planning service when it is reachable and by local
//! rule-based generators otherwise.
//!
//! # Architecture
//!
//! - **Generators** ([`generator`], [`advisor`]): pure functions over fixed
//!   rule tables
//! - **Scheduler** ([`scheduler`]): validation, remote attempt, explicit
//!   local fallback and the single-submission guard
//! - **Remote** ([`remote`]): JSON/HTTP client for the planning service
//! - **Server** ([`server`]): the planning service itself, with in-memory
//!   storage
//! - **Display** ([`display`]): markdown timelines for terminal rendering
//!
//! # Quick Start
//!
//! ```rust
//! use furrow_core::{display::Timeline, params::CreatePlan, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_api_url(Some("http://127.0.0.1:8000"))
//!     .build()?;
//!
//! let plan = scheduler
//!     .create_plan(&CreatePlan {
//!         crop: "Tomato".to_string(),
//!         start_date: Some("2024-03-01".to_string()),
//!         environment: "greenhouse".into(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("Plan from {}", plan.origin);
//! println!("{}", Timeline(&plan.value));
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod remote;
pub mod scheduler;
pub mod server;

// Re-export commonly used types
pub use advisor::{Advisory, AdvisoryKind, ObservationAdvisor};
pub use config::Settings;
pub use display::{CalendarDate, FeedbackResult, PlanResult, Timeline};
pub use error::{FurrowError, Result};
pub use generator::PlanGenerator;
pub use models::{
    CultivationPlan, Environment, Method, Observation, ObservationFeedback, Severity, Stage, Task,
};
pub use params::{CreatePlan, PlanInput, RecordObservation};
pub use remote::{HttpPlanApi, PlanApi};
pub use scheduler::{Origin, Scheduler, SchedulerBuilder, Sourced};
