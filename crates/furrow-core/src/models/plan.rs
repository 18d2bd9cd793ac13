//! Cultivation plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Environment, Method, Task};

/// Prefix carried by identifiers of plans generated without the service.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// A complete cultivation plan with its generated tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CultivationPlan {
    /// Identifier assigned by the service, or a `local-` id
    pub id: String,

    /// Crop name
    pub crop: String,

    /// Sowing or transplant reference date
    pub start_date: Date,

    /// How the crop is started
    #[serde(default)]
    pub method: Method,

    /// Where the crop is grown
    #[serde(default)]
    pub environment: Environment,

    /// Cultivated area in hectares
    #[serde(default)]
    pub area: Option<f64>,

    /// Cultivar name
    #[serde(default)]
    pub variety: Option<String>,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Tasks in generation order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl CultivationPlan {
    /// Whether the plan was generated locally and is unknown to the service.
    pub fn is_local(&self) -> bool {
        self.id.starts_with(LOCAL_ID_PREFIX)
    }

    /// Find the first task with the given name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }
}
