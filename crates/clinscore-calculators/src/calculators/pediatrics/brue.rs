use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// Brief Resolved Unexplained Event classification (AAP 2016).
pub struct Brue;

const ENTRY: &[&str] = &[
    "age_under_1_year",
    "asymptomatic_on_presentation",
    "no_explanation_after_exam",
    "sudden_brief_resolved_episode",
];

const EVENT: &[&str] = &[
    "cyanosis_or_pallor",
    "breathing_changes",
    "tone_changes",
    "altered_responsiveness",
];

const LOWER_RISK: &[&str] = &[
    "episode_duration_under_1_min",
    "age_over_2_months",
    "no_history_prematurity",
    "no_prior_brue",
    "no_cpr_by_provider",
];

fn unmet(params: &Params, fields: &[&'static str]) -> Result<Vec<&'static str>> {
    let mut missing = Vec::new();
    for field in fields {
        if !params.yes_no(field)? {
            missing.push(*field);
        }
    }
    Ok(missing)
}

impl Calculator for Brue {
    fn id(&self) -> &'static str {
        "brue"
    }

    fn name(&self) -> &'static str {
        "Brief Resolved Unexplained Event (BRUE)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pediatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_under_1_year",
            "asymptomatic_on_presentation",
            "no_explanation_after_exam",
            "sudden_brief_resolved_episode",
            "cyanosis_or_pallor",
            "breathing_changes",
            "tone_changes",
            "altered_responsiveness",
            "episode_duration_under_1_min",
            "age_over_2_months",
            "no_history_prematurity",
            "no_prior_brue",
            "no_cpr_by_provider",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let entry_unmet = unmet(params, ENTRY)?;
        let event_absent = unmet(params, EVENT)?;
        let lower_risk_unmet = unmet(params, LOWER_RISK)?;

        if !entry_unmet.is_empty() || event_absent.len() == EVENT.len() {
            return Ok(Assessment::new(
                "not_brue",
                "",
                "Not BRUE",
                "Does not meet BRUE criteria",
                "The event does not meet BRUE criteria. Evaluate for the underlying cause according to the history and examination.",
            )
            .with_detail("unmet_entry_criteria", entry_unmet));
        }

        let assessment = if lower_risk_unmet.is_empty() {
            Assessment::new(
                "brue_lower_risk",
                "",
                "BRUE - Lower Risk",
                "Meets BRUE criteria and classified as lower risk",
                "Lower-risk BRUE. Brief observation with pulse oximetry, caregiver education and CPR training; extensive testing is not recommended.",
            )
        } else {
            Assessment::new(
                "brue_higher_risk",
                "",
                "BRUE - Higher Risk",
                "Meets BRUE criteria but classified as higher risk",
                "Higher-risk BRUE. Lower-risk criteria are not all met; consider admission, further evaluation and monitoring guided by history.",
            )
        };
        Ok(assessment.with_detail("unmet_lower_risk_criteria", lower_risk_unmet))
    }
}
