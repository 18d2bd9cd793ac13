//! Rule-based cultivation plan generation.
//!
//! A plan is the fixed [`TASK_TEMPLATES`] table laid out against the start
//! date. Every offset is scaled by the environment factor and rounded on its
//! own, so two closely spaced offsets can land on dates that are not in
//! template order once scaled. Task order is always template order.
//!
//! | environment  | factor |
//! |--------------|--------|
//! | `open`       | 1.0    |
//! | `hydroponic` | 0.8    |
//! | anything else| 0.9    |
//!
//! # Examples
//!
//! ```rust
//! use furrow_core::{generator::PlanGenerator, params::CreatePlan};
//! use jiff::civil::date;
//!
//! let input = CreatePlan {
//!     crop: "Tomato".to_string(),
//!     start_date: Some("2024-03-01".to_string()),
//!     environment: "hydroponic".into(),
//!     ..Default::default()
//! }
//! .validate()?;
//!
//! let plan = PlanGenerator::generate(&input);
//! assert_eq!(plan.tasks.len(), 8);
//! assert_eq!(plan.tasks[7].due_date, date(2024, 4, 26));
//! # Ok::<(), furrow_core::FurrowError>(())
//! ```

use jiff::{civil::Date, ToSpan};
use log::debug;
use uuid::Uuid;

use crate::{
    models::{CultivationPlan, Environment, Task, LOCAL_ID_PREFIX},
    params::PlanInput,
};

pub mod templates;


pub use templates::{
    offset_window, TaskName, TaskTemplate, SOWING, TASK_TEMPLATES, TRANSPLANTING,
};

/// Multiplier applied to every template offset for `environment`.
pub fn environment_factor(environment: &Environment) -> f64 {
    match environment {
        Environment::Open => 1.0,
        Environment::Hydroponic => 0.8,
        Environment::Greenhouse | Environment::Other(_) => 0.9,
    }
}

/// Scale `offset_days` by `factor`, rounding half-way values up.
pub fn scaled_offset(offset_days: i32, factor: f64) -> i64 {
    (f64::from(offset_days) * factor + 0.5).floor() as i64
}

/// Date `offset_days` after `start`, scaled by `factor`.
///
/// Clamps at the ends of the supported calendar; validated start dates
/// never get there.
pub fn due_date(start: Date, offset_days: i32, factor: f64) -> Date {
    start.saturating_add(scaled_offset(offset_days, factor).days())
}

/// Generates cultivation plans from the fixed task table.
pub struct PlanGenerator;

impl PlanGenerator {
    /// Generate a plan with a fresh `local-` identifier.
    pub fn generate(input: &PlanInput) -> CultivationPlan {
        Self::generate_with_id(input, local_plan_id())
    }

    /// Generate a plan carrying an externally supplied identifier.
    pub fn generate_with_id(input: &PlanInput, id: impl Into<String>) -> CultivationPlan {
        let factor = environment_factor(&input.environment);
        debug!(
            "Generating plan for {} from {} (environment {}, factor {factor})",
            input.crop,
            input.start_date,
            input.environment.as_str()
        );

        CultivationPlan {
            id: id.into(),
            crop: input.crop.clone(),
            start_date: input.start_date,
            method: input.method,
            environment: input.environment.clone(),
            area: input.area,
            variety: input.variety.clone(),
            notes: input.notes.clone(),
            tasks: Self::tasks(input, factor),
        }
    }

    fn tasks(input: &PlanInput, factor: f64) -> Vec<Task> {
        TASK_TEMPLATES
            .iter()
            .map(|template| Task {
                name: template.name.resolve(input.method).to_string(),
                stage: template.stage,
                due_date: due_date(input.start_date, template.offset_days, factor),
                checklist: template.checklist.iter().map(|item| item.to_string()).collect(),
                notes: template.notes.to_string(),
            })
            .collect()
    }
}

/// Identifier for a plan that never reached the service.
pub fn local_plan_id() -> String {
    format!("{LOCAL_ID_PREFIX}{}", short_id())
}

/// Eight hex characters of a random UUID.
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
