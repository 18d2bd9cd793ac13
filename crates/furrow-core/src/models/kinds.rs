//! Enumerations describing how and where a crop is grown.

use serde::{Deserialize, Serialize};

/// Lifecycle phase a task belongs to, in growing order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Bed preparation and planting out
    Transplant,

    /// Root establishment after planting
    Establish,

    /// Vegetative growth
    Veg,

    /// Flowering and fruit set
    Flower,

    /// Harvest window
    Harvest,
}

/// How the crop is started.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Direct sowing
    Seed,

    /// Planting out raised seedlings
    #[default]
    Transplant,

    /// Planting out grafted seedlings
    Grafting,
}

impl Method {
    /// Wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Seed => "seed",
            Method::Transplant => "transplant",
            Method::Grafting => "grafting",
        }
    }
}

/// Where the crop is grown.
///
/// Unknown values are preserved as [`Environment::Other`] rather than
/// rejected, so plans coming back from the service round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    /// Open field
    #[default]
    Open,

    /// Protected cultivation under glass or film
    Greenhouse,

    /// Soilless cultivation
    Hydroponic,

    /// Any value not recognised above
    Other(String),
}

impl Environment {
    /// Wire representation of the environment.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Open => "open",
            Environment::Greenhouse => "greenhouse",
            Environment::Hydroponic => "hydroponic",
            Environment::Other(value) => value,
        }
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "open" => Environment::Open,
            "greenhouse" => Environment::Greenhouse,
            "hydroponic" => Environment::Hydroponic,
            _ => Environment::Other(value.to_string()),
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Environment::from(value.as_str())
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        match value {
            Environment::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// How serious an observed symptom is, from 1 (mild) to 3 (severe).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MILD: Severity = Severity(1);
    pub const MODERATE: Severity = Severity(2);
    pub const SEVERE: Severity = Severity(3);

    /// Numeric level in `1..=3`.
    pub fn level(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "mild",
            2 => "moderate",
            _ => "severe",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::MODERATE
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=3).contains(&value) {
            Ok(Severity(value))
        } else {
            Err(format!("Severity must be between 1 and 3, got {value}"))
        }
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}
