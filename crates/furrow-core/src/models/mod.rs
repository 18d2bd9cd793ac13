//! Data models for cultivation plans, tasks and observations.
//!
//! All models serialize to the JSON shapes exchanged with the planning
//! service. Dates travel as ISO calendar dates (`YYYY-MM-DD`). Display
//! implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use furrow_core::models::{CultivationPlan, Environment};
//!
//! let json = r#"{
//!     "id": "a1b2c3d4",
//!     "crop": "Tomato",
//!     "start_date": "2024-03-01",
//!     "method": "transplant",
//!     "environment": "greenhouse",
//!     "tasks": []
//! }"#;
//! let plan: CultivationPlan = serde_json::from_str(json).unwrap();
//! assert_eq!(plan.environment, Environment::Greenhouse);
//! assert!(!plan.is_local());
//! ```

pub mod kinds;
pub mod observation;
pub mod plan;
pub mod task;


pub use kinds::{Environment, Method, Severity, Stage};
pub use observation::{Observation, ObservationFeedback};
pub use plan::{CultivationPlan, LOCAL_ID_PREFIX};
pub use task::Task;
