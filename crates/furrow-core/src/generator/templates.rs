//! The fixed task table every plan is generated from.

use crate::models::{Method, Stage};

/// How a template names the task it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskName {
    /// The same label for every plan
    Fixed(&'static str),
    /// "Sowing" for seeded crops, "Transplanting" otherwise
    Planting,
}

impl TaskName {
    /// Resolve the label for a plan started with `method`.
    pub fn resolve(self, method: Method) -> &'static str {
        match self {
            TaskName::Fixed(name) => name,
            TaskName::Planting if method == Method::Seed => SOWING,
            TaskName::Planting => TRANSPLANTING,
        }
    }
}

pub const SOWING: &str = "Sowing";
pub const TRANSPLANTING: &str = "Transplanting";

/// One row of the task table.
#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub stage: Stage,
    pub name: TaskName,
    /// Days from the start date before environment scaling
    pub offset_days: i32,
    pub checklist: &'static [&'static str],
    pub notes: &'static str,
}

/// Tasks in the order they appear in every generated plan.
pub const TASK_TEMPLATES: [TaskTemplate; 8] = [
    TaskTemplate {
        stage: Stage::Transplant,
        name: TaskName::Fixed("Transplant prep & inspection"),
        offset_days: -2,
        checklist: &[
            "Check soil/substrate moisture",
            "Check irrigation lines, EC and pH",
            "Sanitise planting tools",
        ],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Transplant,
        name: TaskName::Planting,
        offset_days: 0,
        checklist: &["Keep to planting density", "Check seedling vigour"],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Establish,
        name: TaskName::Fixed("Establishment care"),
        offset_days: 5,
        checklist: &[
            "Shade during heat or drought",
            "Maintain soil moisture",
            "Watch for early disease",
        ],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Veg,
        name: TaskName::Fixed("Training & pinching"),
        offset_days: 24,
        checklist: &["Train main stems", "Remove side shoots"],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Veg,
        name: TaskName::Fixed("Top dressing & fertigation"),
        offset_days: 28,
        checklist: &["Check EC and pH", "Avoid excess nitrogen"],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Flower,
        name: TaskName::Fixed("Flowering & pollination care"),
        offset_days: 42,
        checklist: &["Assist pollination if needed", "Flowering-stage protection"],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Flower,
        name: TaskName::Fixed("Pest & disease control"),
        offset_days: 48,
        checklist: &["Scout for thrips and aphids", "Replace sticky traps"],
        notes: "",
    },
    TaskTemplate {
        stage: Stage::Harvest,
        name: TaskName::Fixed("Expected first harvest"),
        offset_days: 70,
        checklist: &[
            "Check standard harvest indicators",
            "Post-harvest quality control",
        ],
        notes: "",
    },
];

/// Earliest and latest template offsets, in days from the start date.
///
/// Environment factors never exceed 1.0, so every scaled due date falls
/// inside this window.
pub fn offset_window() -> (i32, i32) {
    TASK_TEMPLATES
        .iter()
        .fold((0, 0), |(lo, hi), template| {
            (lo.min(template.offset_days), hi.max(template.offset_days))
        })
}
