use clinscore_core::{Assessment, Params, Result, Specialty};

use super::rome_iv_rumination::count_met;
use crate::Calculator;

/// Rome IV criteria for unspecified functional bowel disorder: functional
/// bowel symptoms that fit none of the specific disorders.
pub struct RomeIvUnspecifiedFbd;

const INCLUSION: &[&str] = &["bowel_symptoms_duration", "symptoms_not_organic"];

// "yes" means criteria for that specific disorder are not met.
const SPECIFIC_DISORDERS: &[&str] = &[
    "exclusion_ibs_criteria",
    "exclusion_functional_constipation",
    "exclusion_functional_diarrhea",
    "exclusion_functional_bloating",
];

const ALARM_FEATURES: &[&str] = &[
    "exclusion_gi_bleeding",
    "exclusion_iron_deficiency_anemia",
    "exclusion_weight_loss",
    "exclusion_abdominal_mass_lymphadenopathy",
    "exclusion_family_history_colon_cancer",
    "exclusion_age_over_50_without_screening",
    "exclusion_sudden_bowel_habit_change",
];

impl Calculator for RomeIvUnspecifiedFbd {
    fn id(&self) -> &'static str {
        "rome_iv_unspecified_functional_bowel_disorder"
    }

    fn name(&self) -> &'static str {
        "Rome IV Diagnostic Criteria for Unspecified Functional Bowel Disorder"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "bowel_symptoms_duration",
            "symptoms_not_organic",
            "exclusion_ibs_criteria",
            "exclusion_functional_constipation",
            "exclusion_functional_diarrhea",
            "exclusion_functional_bloating",
            "exclusion_gi_bleeding",
            "exclusion_iron_deficiency_anemia",
            "exclusion_weight_loss",
            "exclusion_abdominal_mass_lymphadenopathy",
            "exclusion_family_history_colon_cancer",
            "exclusion_age_over_50_without_screening",
            "exclusion_sudden_bowel_habit_change",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let inclusion = count_met(params, INCLUSION)?;
        let specific = count_met(params, SPECIFIC_DISORDERS)?;
        let alarm = count_met(params, ALARM_FEATURES)?;

        let assessment = if inclusion == INCLUSION.len()
            && specific == SPECIFIC_DISORDERS.len()
            && alarm == ALARM_FEATURES.len()
        {
            Assessment::new(
                "Positive",
                "diagnosis",
                "Criteria Met",
                "Meets Rome IV criteria",
                "Rome IV criteria for unspecified functional bowel disorder are fulfilled. No standard treatment exists; use symptom-directed therapy such as dietary change, probiotics or antispasmodics.",
            )
        } else {
            let alarm_note;
            let shortfall: &str = match inclusion {
                0 => "Neither the duration nor the functional origin of symptoms is established.",
                1 => "One inclusion criterion is not met.",
                _ if specific < SPECIFIC_DISORDERS.len() => {
                    "Symptoms meet criteria for a more specific functional bowel disorder."
                }
                _ => {
                    alarm_note = format!(
                        "{} alarm features present and need evaluation.",
                        ALARM_FEATURES.len() - alarm
                    );
                    &alarm_note
                }
            };
            Assessment::new(
                "Negative",
                "diagnosis",
                "Criteria Not Met",
                "Does not meet Rome IV criteria",
                format!(
                    "Rome IV criteria for unspecified functional bowel disorder are not fulfilled. {shortfall} Alarm features call for imaging, endoscopy and laboratory studies as indicated."
                ),
            )
        };
        Ok(assessment
            .with_detail("inclusion_criteria_met", inclusion)
            .with_detail("functional_disorder_exclusions_met", specific)
            .with_detail("alarm_feature_exclusions_met", alarm))
    }
}
