//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it.

use std::fmt;

use super::datetime::CalendarDate;
use crate::models::{CultivationPlan, Environment, Method, Observation, Stage, Task};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Transplant => "Transplant",
            Stage::Establish => "Establishment",
            Stage::Veg => "Vegetative",
            Stage::Flower => "Flowering",
            Stage::Harvest => "Harvest",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CultivationPlan {
    /// Plan header: crop, reference date and growing conditions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.crop, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Start date**: {}", CalendarDate(&self.start_date))?;
        writeln!(
            f,
            "- **Method**: {} / **Environment**: {}",
            self.method, self.environment
        )?;
        if let Some(variety) = &self.variety {
            writeln!(f, "- **Variety**: {variety}")?;
        }
        if let Some(area) = self.area {
            writeln!(f, "- **Area**: {area} ha")?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Stage**: {} · **Due**: {}",
            self.stage,
            CalendarDate(&self.due_date)
        )?;
        for item in &self.checklist {
            writeln!(f, "  - [ ] {item}")?;
        }
        writeln!(
            f,
            "- **Observe**: `furrow observe <PLAN_FILE> --task \"{}\"`",
            self.name
        )?;
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} ({}): {}",
            self.task_name,
            CalendarDate(&self.date),
            self.severity.label(),
            if self.symptom.is_empty() { "-" } else { self.symptom.as_str() }
        )
    }
}
