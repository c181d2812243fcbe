use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// Rome IV diagnostic criteria for rumination syndrome.
pub struct RomeIvRumination;

const POSITIVE: &[&str] = &[
    "persistent_recurrent_regurgitation",
    "regurgitation_not_preceded_by_retching",
];

// "yes" means the alarm feature is absent.
const EXCLUSIONS: &[&str] = &[
    "exclusion_gi_bleeding",
    "exclusion_iron_deficiency_anemia",
    "exclusion_heartburn_reflux",
    "exclusion_weight_loss",
    "exclusion_abdominal_mass_lymphadenopathy",
    "exclusion_dysphagia",
    "exclusion_persistent_vomiting",
];

pub(crate) fn count_met(params: &Params, fields: &[&str]) -> Result<usize> {
    let mut met = 0;
    for field in fields {
        if params.yes_no(field)? {
            met += 1;
        }
    }
    Ok(met)
}

impl Calculator for RomeIvRumination {
    fn id(&self) -> &'static str {
        "rome_iv_rumination_syndrome"
    }

    fn name(&self) -> &'static str {
        "Rome IV Diagnostic Criteria for Rumination Syndrome"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "persistent_recurrent_regurgitation",
            "regurgitation_not_preceded_by_retching",
            "exclusion_gi_bleeding",
            "exclusion_iron_deficiency_anemia",
            "exclusion_heartburn_reflux",
            "exclusion_weight_loss",
            "exclusion_abdominal_mass_lymphadenopathy",
            "exclusion_dysphagia",
            "exclusion_persistent_vomiting",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let positive = count_met(params, POSITIVE)?;
        let exclusions = count_met(params, EXCLUSIONS)?;

        let assessment = if positive == POSITIVE.len() && exclusions == EXCLUSIONS.len() {
            Assessment::new(
                "Positive",
                "diagnosis",
                "Criteria Met",
                "Meets Rome IV criteria",
                "Rome IV criteria for rumination syndrome are fulfilled. First-line treatment is behavioural: diaphragmatic breathing training, habit reversal and biofeedback.",
            )
        } else {
            let shortfall = if positive < POSITIVE.len() {
                format!("{} essential positive criteria not met.", POSITIVE.len() - positive)
            } else {
                format!(
                    "{} exclusion criteria not satisfied (alarm symptoms present).",
                    EXCLUSIONS.len() - exclusions
                )
            };
            Assessment::new(
                "Negative",
                "diagnosis",
                "Criteria Not Met",
                "Does not meet Rome IV criteria",
                format!(
                    "Rome IV criteria for rumination syndrome are not fulfilled. {shortfall} Consider GERD, gastroparesis, eating disorders or organic pathology; endoscopy or gastric emptying studies as indicated."
                ),
            )
        };
        Ok(assessment
            .with_detail("positive_criteria_met", positive)
            .with_detail("exclusion_criteria_met", exclusions))
    }
}
