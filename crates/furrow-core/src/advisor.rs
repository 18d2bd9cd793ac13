//! Rule-based advice for field observations.
//!
//! [`ADVISORY_RULES`] is evaluated top to bottom and the first matching rule
//! wins. Keyword rules match case-insensitively anywhere in the symptom
//! text. When nothing matches, [`ROUTINE_ADVICE`] is returned.

use log::debug;

use crate::models::{CultivationPlan, Environment, Observation, Severity};

/// What kind of problem an observation was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    Pest,
    Fungal,
    Chlorosis,
    Severe,
    Routine,
}

/// When a rule applies.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any of the keywords occurs in the lowercased symptom
    Keywords(&'static [&'static str]),
    /// The observation is at least this severe
    MinSeverity(Severity),
}

/// What a rule recommends.
#[derive(Debug, Clone, Copy)]
pub enum Advice {
    Fixed(&'static str),
    /// Separate advice for protected cultivation
    ByEnvironment {
        greenhouse: &'static str,
        otherwise: &'static str,
    },
}

impl Advice {
    fn resolve(&self, environment: &Environment) -> &'static str {
        match *self {
            Advice::Fixed(text) => text,
            Advice::ByEnvironment { greenhouse, .. } if *environment == Environment::Greenhouse => {
                greenhouse
            }
            Advice::ByEnvironment { otherwise, .. } => otherwise,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdvisoryRule {
    pub kind: AdvisoryKind,
    pub trigger: Trigger,
    pub advice: Advice,
}

impl AdvisoryRule {
    fn matches(&self, symptom: &str, severity: Severity) -> bool {
        match self.trigger {
            Trigger::Keywords(keywords) => keywords.iter().any(|k| symptom.contains(k)),
            Trigger::MinSeverity(min) => severity >= min,
        }
    }
}

pub const GREENHOUSE_PEST_ADVICE: &str = "Step up pest scouting under cover: add more sticky \
     traps, check double doors and insect screens, and consider biological control with \
     predatory insects.";
pub const PEST_ADVICE: &str = "Remove pest-damaged debris, manage surrounding weeds and check \
     insect screens. If needed, spot-treat with a registered product at label dilution.";
pub const FUNGAL_ADVICE: &str = "Signs of humidity-driven disease: reduce night-time \
     condensation, adjust ventilation intervals and thin dense foliage. Consider a preventive \
     sulphur-based or registered fungicide spray.";
pub const CHLOROSIS_ADVICE: &str = "Possible nutrient imbalance: check EC/pH and the drainage \
     ratio, then reset the fertigation ratio. Rule out nitrogen or iron deficiency.";
pub const SEVERE_ADVICE: &str = "Severe stage: isolate the affected area, sanitise tools and \
     stop the spread first. Act immediately following your SOP, log the response and \
     re-observe within 24-48 hours.";
pub const ROUTINE_ADVICE: &str =
    "Observation recorded. Re-observe in 2-3 days to track the trend.";

/// Rules in priority order.
pub const ADVISORY_RULES: &[AdvisoryRule] = &[
    AdvisoryRule {
        kind: AdvisoryKind::Pest,
        trigger: Trigger::Keywords(&[
            "thrip", "aphid", "mite", "whitefl", "pest", "insect", "bug", "caterpillar", "총채",
            "진딧", "응애", "가루이", "해충", "벌레",
        ]),
        advice: Advice::ByEnvironment {
            greenhouse: GREENHOUSE_PEST_ADVICE,
            otherwise: PEST_ADVICE,
        },
    },
    AdvisoryRule {
        kind: AdvisoryKind::Fungal,
        trigger: Trigger::Keywords(&[
            "powdery", "mildew", "mold", "mould", "fung", "sclerotinia", "흰가루", "곰팡", "균핵",
        ]),
        advice: Advice::Fixed(FUNGAL_ADVICE),
    },
    AdvisoryRule {
        kind: AdvisoryKind::Chlorosis,
        trigger: Trigger::Keywords(&["yellow", "chlorosis", "chlorotic", "황화", "엽황", "잎 노랗"]),
        advice: Advice::Fixed(CHLOROSIS_ADVICE),
    },
    AdvisoryRule {
        kind: AdvisoryKind::Severe,
        trigger: Trigger::MinSeverity(Severity::SEVERE),
        advice: Advice::Fixed(SEVERE_ADVICE),
    },
];

/// The outcome of classifying an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub text: &'static str,
}

/// Pure advice dispatch over [`ADVISORY_RULES`].
pub struct ObservationAdvisor;

impl ObservationAdvisor {
    /// Classify `observation` in the context of `plan`.
    pub fn evaluate(plan: &CultivationPlan, observation: &Observation) -> Advisory {
        let symptom = observation.symptom.to_lowercase();
        let advisory = ADVISORY_RULES
            .iter()
            .find(|rule| rule.matches(&symptom, observation.severity))
            .map(|rule| Advisory {
                kind: rule.kind,
                text: rule.advice.resolve(&plan.environment),
            })
            .unwrap_or(Advisory {
                kind: AdvisoryKind::Routine,
                text: ROUTINE_ADVICE,
            });
        debug!(
            "Observation on '{}' classified as {:?}",
            observation.task_name, advisory.kind
        );
        advisory
    }

    /// Advice text for `observation`.
    pub fn advise(plan: &CultivationPlan, observation: &Observation) -> String {
        Self::evaluate(plan, observation).text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{generator::PlanGenerator, models::Method, params::PlanInput};

    fn plan(environment: &str) -> CultivationPlan {
        PlanGenerator::generate(&PlanInput {
            crop: "Pepper".to_string(),
            start_date: date(2024, 4, 1),
            method: Method::Transplant,
            environment: Environment::from(environment),
            area: None,
            variety: None,
            notes: None,
        })
    }

    fn observation(symptom: &str, severity: Severity) -> Observation {
        Observation {
            date: date(2024, 4, 6),
            task_name: "Establishment care".to_string(),
            symptom: symptom.to_string(),
            severity,
            note: None,
        }
    }

    #[test]
    fn test_greenhouse_pest_advice() {
        let advice = ObservationAdvisor::advise(
            &plan("greenhouse"),
            &observation("Aphids on leaf undersides", Severity::MILD),
        );
        assert_eq!(advice, GREENHOUSE_PEST_ADVICE);
    }

    #[test]
    fn test_pest_advice_outside_greenhouse() {
        for environment in ["open", "hydroponic", "tunnel"] {
            let advice = ObservationAdvisor::advise(
                &plan(environment),
                &observation("THRIPS damage", Severity::MODERATE),
            );
            assert_eq!(advice, PEST_ADVICE);
        }
    }

    #[test]
    fn test_korean_keywords_match() {
        let plan = plan("greenhouse");
        let cases = [
            ("총채벌레 발견", AdvisoryKind::Pest),
            ("흰가루병", AdvisoryKind::Fungal),
            ("잎 노랗게 변함", AdvisoryKind::Chlorosis),
        ];
        for (symptom, kind) in cases {
            let advisory = ObservationAdvisor::evaluate(&plan, &observation(symptom, Severity::MILD));
            assert_eq!(advisory.kind, kind, "symptom {symptom}");
        }
    }

    #[test]
    fn test_fungal_and_chlorosis_advice() {
        let plan = plan("open");
        assert_eq!(
            ObservationAdvisor::advise(&plan, &observation("Powdery Mildew spots", Severity::MILD)),
            FUNGAL_ADVICE
        );
        assert_eq!(
            ObservationAdvisor::advise(&plan, &observation("leaf yellowing", Severity::MILD)),
            CHLOROSIS_ADVICE
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let plan = plan("open");
        let advisory = ObservationAdvisor::evaluate(
            &plan,
            &observation("yellow leaves with mold and aphids", Severity::SEVERE),
        );
        assert_eq!(advisory.kind, AdvisoryKind::Pest);

        let advisory =
            ObservationAdvisor::evaluate(&plan, &observation("yellow mold", Severity::SEVERE));
        assert_eq!(advisory.kind, AdvisoryKind::Fungal);
    }

    #[test]
    fn test_severity_escalation_without_keywords() {
        let plan = plan("open");
        assert_eq!(
            ObservationAdvisor::advise(&plan, &observation("wilting", Severity::SEVERE)),
            SEVERE_ADVICE
        );
        assert_eq!(
            ObservationAdvisor::advise(&plan, &observation("wilting", Severity::MODERATE)),
            ROUTINE_ADVICE
        );
        assert_eq!(
            ObservationAdvisor::advise(&plan, &observation("", Severity::MILD)),
            ROUTINE_ADVICE
        );
    }

    #[test]
    fn test_rules_are_in_priority_order() {
        let kinds: Vec<AdvisoryKind> = ADVISORY_RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AdvisoryKind::Pest,
                AdvisoryKind::Fungal,
                AdvisoryKind::Chlorosis,
                AdvisoryKind::Severe,
            ]
        );
    }
}
