use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// Rome IV diagnostic criteria for proctalgia fugax. Every criterion,
/// including each exclusion, must be fulfilled.
pub struct RomeIvProctalgiaFugax;

const CRITERIA: &[&str] = &[
    "recurrent_rectal_pain_unrelated_defecation",
    "episode_duration_seconds_to_30_minutes",
    "no_anorectal_pain_between_episodes",
    "exclusion_inflammatory_causes",
    "exclusion_structural_anorectal_lesions",
    "exclusion_prostatitis",
    "exclusion_coccygodynia",
    "exclusion_pelvic_floor_alterations",
];

impl Calculator for RomeIvProctalgiaFugax {
    fn id(&self) -> &'static str {
        "rome_iv_proctalgia_fugax"
    }

    fn name(&self) -> &'static str {
        "Rome IV Criteria for Proctalgia Fugax"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        CRITERIA
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut unmet = Vec::new();
        for field in CRITERIA {
            if !params.yes_no(field)? {
                unmet.push(*field);
            }
        }

        let met = CRITERIA.len() - unmet.len();
        let assessment = if unmet.is_empty() {
            Assessment::new(
                "criteria_met",
                "diagnosis",
                "Criteria Met",
                "Meets Rome IV criteria",
                "All Rome IV criteria for proctalgia fugax are fulfilled. Reassure, and consider inhaled salbutamol or topical therapy for frequent episodes.",
            )
        } else {
            Assessment::new(
                "criteria_not_met",
                "diagnosis",
                "Criteria Not Met",
                "Does not meet Rome IV criteria",
                format!(
                    "{met}/{} Rome IV criteria fulfilled. Proctalgia fugax cannot be diagnosed; evaluate alternative causes of anorectal pain.",
                    CRITERIA.len()
                ),
            )
        };
        Ok(assessment
            .with_detail("criteria_met", met)
            .with_detail("unmet_criteria", unmet))
    }
}
