//! Date-grouped view of a plan's tasks.

use std::{collections::BTreeMap, fmt};

use jiff::civil::Date;

use super::datetime::CalendarDate;
use crate::models::{CultivationPlan, Task};

/// Tasks sharing a due date.
#[derive(Debug)]
pub struct TaskGroup<'a> {
    pub date: Date,
    pub tasks: Vec<&'a Task>,
}

/// Newtype wrapper rendering a plan as a timeline.
///
/// Groups are ordered by date; within a group tasks keep plan order.
///
/// # Examples
///
/// ```rust
/// use furrow_core::{display::Timeline, generator::PlanGenerator, params::CreatePlan};
///
/// let input = CreatePlan {
///     crop: "Strawberry".to_string(),
///     start_date: Some("2024-10-01".to_string()),
///     ..Default::default()
/// }
/// .validate()?;
/// let plan = PlanGenerator::generate(&input);
///
/// let output = Timeline(&plan).to_string();
/// assert!(output.contains("## 2024-09-29 (Sun)"));
/// assert!(output.contains("Expected first harvest"));
/// # Ok::<(), furrow_core::FurrowError>(())
/// ```
pub struct Timeline<'a>(pub &'a CultivationPlan);

impl<'a> Timeline<'a> {
    /// Tasks grouped by due date, earliest first.
    pub fn groups(&self) -> Vec<TaskGroup<'a>> {
        let mut by_date: BTreeMap<Date, Vec<&'a Task>> = BTreeMap::new();
        for task in &self.0.tasks {
            by_date.entry(task.due_date).or_default().push(task);
        }
        by_date
            .into_iter()
            .map(|(date, tasks)| TaskGroup { date, tasks })
            .collect()
    }
}

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        writeln!(f)?;

        let groups = self.groups();
        if groups.is_empty() {
            return writeln!(f, "No tasks in this plan.");
        }
        for group in groups {
            let count = group.tasks.len();
            writeln!(
                f,
                "## {} · {count} task{}",
                CalendarDate(&group.date),
                if count == 1 { "" } else { "s" }
            )?;
            writeln!(f)?;
            for task in group.tasks {
                write!(f, "{task}")?;
            }
        }
        Ok(())
    }
}
