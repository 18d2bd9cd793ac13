//! Markdown formatting for plans, timelines and feedback.
//!
//! Domain models implement [`std::fmt::Display`] directly (see
//! [`models`](self::models)); newtype wrappers add contextual views:
//!
//! - [`Timeline`]: tasks grouped by due date with per-date counts
//! - [`PlanResult`]: creation banner with the result's origin
//! - [`FeedbackResult`]: advice returned for an observation
//! - [`CalendarDate`]: human readable calendar dates

pub mod datetime;
pub mod models;
pub mod results;
pub mod timeline;


pub use datetime::CalendarDate;
pub use results::{FeedbackResult, PlanResult};
pub use timeline::{TaskGroup, Timeline};
