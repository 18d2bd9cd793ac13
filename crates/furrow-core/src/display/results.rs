//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::Timeline;
use crate::{
    models::{CultivationPlan, Observation, ObservationFeedback},
    scheduler::Sourced,
};

/// Wrapper type for displaying a freshly created plan.
///
/// States where the plan came from, then renders its timeline with a hint
/// on how to log observations against its tasks.
pub struct PlanResult<'a>(pub &'a Sourced<CultivationPlan>);

impl fmt::Display for PlanResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Sourced { value: plan, origin } = self.0;
        writeln!(
            f,
            "Created plan {} with {} tasks (source: {origin})",
            plan.id,
            plan.tasks.len()
        )?;
        writeln!(f)?;
        write!(f, "{}", Timeline(plan))
    }
}

/// Wrapper type for displaying observation feedback.
///
/// Echoes the observation that was submitted, then the advice and where it
/// came from.
pub struct FeedbackResult<'a>(pub &'a Observation, pub &'a Sourced<ObservationFeedback>);

impl fmt::Display for FeedbackResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Sourced { value, origin } = self.1;
        writeln!(f, "Observed {}", self.0)?;
        writeln!(f)?;
        let label = if value.ok { "Feedback" } else { "Not recorded" };
        writeln!(f, "**{label}** ({origin}): {}", value.feedback)
    }
}
