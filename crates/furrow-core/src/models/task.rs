//! Task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};

use super::Stage;

/// A single dated piece of work within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Human readable label
    pub name: String,

    /// Lifecycle stage the task belongs to
    pub stage: Stage,

    /// Date the task is due
    pub due_date: Date,

    /// Short imperative checklist items
    #[serde(default)]
    pub checklist: Vec<String>,

    /// Free-form notes, empty when there are none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

/// The service sends `null` for tasks without notes.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
