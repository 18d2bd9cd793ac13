//! Field observations and the advice returned for them.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Severity;

/// A symptom noticed in the field while working on a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Observation {
    /// Date of the task the observation was logged against
    pub date: Date,

    /// Name of the task the observation was logged against
    pub task_name: String,

    /// What was seen, in free text
    #[serde(default)]
    pub symptom: String,

    /// How serious it looks
    #[serde(default)]
    pub severity: Severity,

    /// Additional context
    #[serde(default)]
    pub note: Option<String>,
}

/// Advice produced in response to an observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObservationFeedback {
    /// False when the service could not attach the observation to a plan
    #[serde(default = "default_ok")]
    pub ok: bool,

    /// Recommended action
    pub feedback: String,
}

fn default_ok() -> bool {
    true
}

impl ObservationFeedback {
    /// Wrap advice that was successfully produced.
    pub fn accepted(feedback: impl Into<String>) -> Self {
        Self {
            ok: true,
            feedback: feedback.into(),
        }
    }

    /// Report that the observation could not be processed.
    pub fn rejected(feedback: impl Into<String>) -> Self {
        Self {
            ok: false,
            feedback: feedback.into(),
        }
    }
}
