//! Plan submission with remote-first, local-fallback resolution.
//!
//! The [`Scheduler`] is the single composition root between an interface
//! and the generators. Each operation is an explicit two-step call:
//!
//! ```text
//! ┌─────────────┐    ┌─────────────────┐  Err  ┌──────────────────┐
//! │  validate   │───▶│  remote attempt │──────▶│ local generator  │
//! └─────────────┘    └─────────────────┘       └──────────────────┘
//!        │ Err               │ Ok                      │
//!        ▼                   ▼                         ▼
//!   InvalidInput      Sourced { Remote }        Sourced { Local }
//! ```
//!
//! Remote unavailability is an expected outcome, so it never surfaces as an
//! error; it is logged and recorded in the returned [`Origin`]. Only one
//! plan submission may be pending at a time; a second one is refused with
//! [`FurrowError::SubmissionPending`].
//!
//! # Examples
//!
//! ```rust
//! use furrow_core::{params::CreatePlan, Origin, SchedulerBuilder};
//!
//! # async fn example() -> furrow_core::Result<()> {
//! let scheduler = SchedulerBuilder::new().build()?;
//! let plan = scheduler
//!     .create_plan(&CreatePlan {
//!         crop: "Lettuce".to_string(),
//!         start_date: Some("2024-09-01".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(plan.origin, Origin::Local);
//! # Ok(())
//! # }
//! ```

use std::{fmt, sync::Arc};

use log::{info, warn};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    advisor::ObservationAdvisor,
    error::{FurrowError, Result},
    generator::PlanGenerator,
    models::{CultivationPlan, Observation, ObservationFeedback},
    params::{CreatePlan, PlanInput, RecordObservation},
    remote::PlanApi,
};

pub mod builder;


pub use builder::SchedulerBuilder;

/// Where a result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Returned by the planning service
    Remote,
    /// Computed by the local rule-based generators
    Local,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Remote => write!(f, "planning service"),
            Origin::Local => write!(f, "local rules"),
        }
    }
}

/// A value tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            origin: Origin::Remote,
        }
    }

    pub fn local(value: T) -> Self {
        Self {
            value,
            origin: Origin::Local,
        }
    }
}

/// Resolves plans and observation feedback, remote first.
pub struct Scheduler {
    api: Option<Arc<dyn PlanApi>>,
    submission: Mutex<()>,
}

impl Scheduler {
    pub(crate) fn new(api: Option<Arc<dyn PlanApi>>) -> Self {
        Self {
            api,
            submission: Mutex::new(()),
        }
    }

    /// Whether a remote service is configured.
    pub fn is_online(&self) -> bool {
        self.api.is_some()
    }

    /// Validate `params` and produce a plan.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` when validation fails (no remote
    /// call is made) and `FurrowError::SubmissionPending` when another
    /// submission on this scheduler has not settled yet. Errors from the
    /// service that are not remote failures are passed through.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Sourced<CultivationPlan>> {
        let input = params.validate()?;
        let _pending = self
            .submission
            .try_lock()
            .map_err(|_| FurrowError::SubmissionPending)?;
        self.resolve_plan(&input).await
    }

    async fn resolve_plan(&self, input: &PlanInput) -> Result<Sourced<CultivationPlan>> {
        if let Some(api) = &self.api {
            match api.create_plan(input).await {
                Ok(plan) => {
                    info!("Plan {} created by the planning service", plan.id);
                    return Ok(Sourced::remote(plan));
                }
                Err(e) if e.is_remote_failure() => {
                    warn!("Planning service unavailable, generating locally: {e}")
                }
                Err(e) => return Err(e),
            }
        }
        let plan = PlanGenerator::generate(input);
        info!("Plan {} generated locally", plan.id);
        Ok(Sourced::local(plan))
    }

    /// Validate an observation against `plan` and produce feedback.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` when the observation does not fit
    /// the plan.
    pub async fn record_observation(
        &self,
        plan: &CultivationPlan,
        params: &RecordObservation,
    ) -> Result<Sourced<ObservationFeedback>> {
        let observation = params.validate(plan)?;
        self.submit_observation(plan, &observation).await
    }

    /// Produce feedback for an already validated observation.
    ///
    /// Any decoded service reply is returned as-is, including `ok: false`
    /// answers such as an unknown plan id. Only remote failures fall back to
    /// the local advisor.
    pub async fn submit_observation(
        &self,
        plan: &CultivationPlan,
        observation: &Observation,
    ) -> Result<Sourced<ObservationFeedback>> {
        if let Some(api) = &self.api {
            match api.add_observation(&plan.id, observation).await {
                Ok(feedback) => {
                    if !feedback.ok {
                        info!("Planning service did not record the observation for {}", plan.id);
                        if plan.is_local() {
                            info!(
                                "Plan {} was generated locally and is unknown to the service",
                                plan.id
                            );
                        }
                    }
                    return Ok(Sourced::remote(feedback));
                }
                Err(e) if e.is_remote_failure() => {
                    warn!("Planning service could not advise, using local rules: {e}")
                }
                Err(e) => return Err(e),
            }
        }

        let advice = ObservationAdvisor::advise(plan, observation);
        Ok(Sourced::local(ObservationFeedback::accepted(advice)))
    }
}
