//! Parameter structures for furrow operations
//!
//! Raw parameters arrive from an interface (CLI flags, an HTTP body) with
//! every field still in string form. Each raw structure has a `validate`
//! method that turns it into the typed value the generators work on, or
//! rejects it with [`FurrowError::InvalidInput`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Raw Params     │    │   validate()    │    │  Typed Input    │
//! │ (CreatePlan,    │───▶│ trim, parse,    │───▶│ (PlanInput,     │
//! │  RecordObs.)    │    │ range checks    │    │  Observation)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation failures stop a submission before any generator or remote
//! call runs.

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use crate::{
    error::{FurrowError, Result},
    generator::offset_window,
    models::{CultivationPlan, Environment, Method, Observation, Severity},
};

/// Parameters for creating a new cultivation plan.
///
/// Mirrors the planning form: crop and start date are required, the rest
/// falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Crop name (required)
    #[serde(default)]
    pub crop: String,
    /// Start date as `YYYY-MM-DD` (required)
    #[serde(default)]
    pub start_date: Option<String>,
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
}

/// Validated plan parameters, also the request body sent to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanInput {
    pub crop: String,
    pub start_date: Date,
    pub method: Method,
    pub environment: Environment,
    pub area: Option<f64>,
    pub variety: Option<String>,
    pub notes: Option<String>,
}

impl CreatePlan {
    /// Check required fields and parse the start date.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` when the crop is blank, the start
    /// date is missing or not an ISO date, or the area is negative.
    pub fn validate(&self) -> Result<PlanInput> {
        let crop = self.crop.trim();
        if crop.is_empty() {
            return Err(FurrowError::invalid_input("crop").with_reason("crop name is required"));
        }

        let raw_date = self
            .start_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                FurrowError::invalid_input("start_date").with_reason("start date is required")
            })?;
        let start_date = parse_date("start_date", raw_date)?;
        check_task_window(start_date)?;

        if let Some(area) = self.area {
            if !area.is_finite() || area < 0.0 {
                return Err(FurrowError::invalid_input("area")
                    .with_reason(format!("area must be a non-negative number, got {area}")));
            }
        }

        Ok(PlanInput {
            crop: crop.to_string(),
            start_date,
            method: self.method,
            environment: self.environment.clone(),
            area: self.area,
            variety: non_blank(self.variety.as_deref()),
            notes: non_blank(self.notes.as_deref()),
        })
    }
}

/// Parameters for logging an observation against a task of a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordObservation {
    /// Name of the task the observation belongs to
    pub task_name: String,
    /// Date as `YYYY-MM-DD`; defaults to the task's due date
    #[serde(default)]
    pub date: Option<String>,
    /// What was seen
    #[serde(default)]
    pub symptom: String,
    /// Severity from 1 (mild) to 3 (severe)
    #[serde(default = "default_severity")]
    pub severity: u8,
    /// Additional context
    #[serde(default)]
    pub note: Option<String>,
}

fn default_severity() -> u8 {
    Severity::default().level()
}

impl RecordObservation {
    /// Resolve the observation against `plan`.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::InvalidInput` when the task is not part of the
    /// plan, the date cannot be parsed or the severity is outside `1..=3`.
    pub fn validate(&self, plan: &CultivationPlan) -> Result<Observation> {
        let task_name = self.task_name.trim();
        let task = plan.task(task_name).ok_or_else(|| {
            FurrowError::invalid_input("task_name")
                .with_reason(format!("plan {} has no task named '{task_name}'", plan.id))
        })?;

        let date = match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_date("date", raw)?,
            _ => task.due_date,
        };

        let severity = Severity::try_from(self.severity)
            .map_err(|reason| FurrowError::invalid_input("severity").with_reason(reason))?;

        Ok(Observation {
            date,
            task_name: task.name.clone(),
            symptom: self.symptom.trim().to_string(),
            severity,
            note: non_blank(self.note.as_deref()),
        })
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Date> {
    raw.parse::<Date>().map_err(|e| {
        FurrowError::invalid_input(field).with_reason(format!("'{raw}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Every task date derived from `start` must exist on the calendar.
fn check_task_window(start: Date) -> Result<()> {
    let (earliest, latest) = offset_window();
    for offset in [earliest, latest] {
        start.checked_add(offset.days()).map_err(|_| {
            FurrowError::invalid_input("start_date").with_reason(format!(
                "{start} leaves task dates outside the supported calendar"
            ))
        })?;
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::generator::PlanGenerator;

    fn tomato() -> CreatePlan {
        CreatePlan {
            crop: "  Tomato ".to_string(),
            start_date: Some("2024-03-01".to_string()),
            variety: Some("   ".to_string()),
            notes: Some(" north bed ".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_trims_and_parses() {
        let input = tomato().validate().unwrap();
        assert_eq!(input.crop, "Tomato");
        assert_eq!(input.start_date, date(2024, 3, 1));
        assert_eq!(input.variety, None);
        assert_eq!(input.notes.as_deref(), Some("north bed"));
        assert_eq!(input.method, Method::Transplant);
    }

    #[test]
    fn test_validate_rejects_blank_crop() {
        let params = CreatePlan {
            crop: "   ".to_string(),
            ..tomato()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "crop"));
    }

    #[test]
    fn test_validate_rejects_missing_start_date() {
        for start_date in [None, Some(String::new())] {
            let params = CreatePlan {
                start_date,
                ..tomato()
            };
            let err = params.validate().unwrap_err();
            assert!(
                matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "start_date")
            );
        }
    }

    #[test]
    fn test_validate_rejects_malformed_date() {
        let params = CreatePlan {
            start_date: Some("2024-02-30".to_string()),
            ..tomato()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_start_dates_at_the_calendar_edge() {
        for raw in ["9999-12-01", "-009999-01-01"] {
            let params = CreatePlan {
                start_date: Some(raw.to_string()),
                ..tomato()
            };
            let err = params.validate().unwrap_err();
            assert!(
                matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "start_date"),
                "{raw} should be rejected"
            );
        }

        let last_full_season = CreatePlan {
            start_date: Some("9999-10-22".to_string()),
            ..tomato()
        };
        let input = last_full_season.validate().unwrap();
        let plan = PlanGenerator::generate(&input);
        assert_eq!(plan.tasks[7].due_date, date(9999, 12, 31));
    }

    #[test]
    fn test_validate_rejects_negative_area() {
        let params = CreatePlan {
            area: Some(-1.0),
            ..tomato()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_plan_input_body_shape() {
        let body = serde_json::to_value(tomato().validate().unwrap()).unwrap();
        assert_eq!(body["crop"], "Tomato");
        assert_eq!(body["start_date"], "2024-03-01");
        assert_eq!(body["method"], "transplant");
        assert_eq!(body["environment"], "open");
        assert!(body["area"].is_null());
    }

    #[test]
    fn test_record_observation_defaults_to_task_due_date() {
        let plan = PlanGenerator::generate(&tomato().validate().unwrap());
        let params = RecordObservation {
            task_name: "Establishment care".to_string(),
            date: None,
            symptom: " aphids on new growth ".to_string(),
            severity: 1,
            note: Some(String::new()),
        };
        let obs = params.validate(&plan).unwrap();
        assert_eq!(obs.date, date(2024, 3, 6));
        assert_eq!(obs.symptom, "aphids on new growth");
        assert_eq!(obs.severity, Severity::MILD);
        assert_eq!(obs.note, None);
    }

    #[test]
    fn test_record_observation_rejects_unknown_task_and_severity() {
        let plan = PlanGenerator::generate(&tomato().validate().unwrap());
        let unknown = RecordObservation {
            task_name: "Irrigation".to_string(),
            date: None,
            symptom: String::new(),
            severity: 2,
            note: None,
        };
        assert!(unknown.validate(&plan).is_err());

        let too_severe = RecordObservation {
            task_name: "Transplanting".to_string(),
            severity: 4,
            ..unknown
        };
        let err = too_severe.validate(&plan).unwrap_err();
        assert!(matches!(err, FurrowError::InvalidInput { ref field, .. } if field == "severity"));
    }
}
