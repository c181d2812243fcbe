use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde_json::json;

use crate::Calculator;

/// CAM-ICU delirium screen. Positive when features 1 and 2 are present
/// together with either 3 or 4.
pub struct CamIcu;

const RASS: ParamRange = ParamRange::integer(-5.0, 4.0);
const ATTENTION_ERRORS: ParamRange = ParamRange::integer(0.0, 10.0);
const THINKING_ERRORS: ParamRange = ParamRange::integer(0.0, 4.0);

/// Deeper sedation than this makes the screen unassessable.
const MIN_ASSESSABLE_RASS: i64 = -3;

fn rass_label(rass: i64) -> &'static str {
    match rass {
        4 => "Combative",
        3 => "Very agitated",
        2 => "Agitated",
        1 => "Restless",
        0 => "Alert and calm",
        -1 => "Drowsy",
        -2 => "Light sedation",
        -3 => "Moderate sedation",
        -4 => "Deep sedation",
        _ => "Unarousable",
    }
}

impl Calculator for CamIcu {
    fn id(&self) -> &'static str {
        "cam_icu"
    }

    fn name(&self) -> &'static str {
        "Confusion Assessment Method for the ICU (CAM-ICU)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::CriticalCare
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "rass_score",
            "acute_onset_fluctuating",
            "attention_errors",
            "thinking_errors",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let rass = RASS.check_int("rass_score", params.integer("rass_score")?)?;
        let acute_onset = params.yes_no("acute_onset_fluctuating")?;
        let attention =
            ATTENTION_ERRORS.check_int("attention_errors", params.integer("attention_errors")?)?;
        let thinking =
            THINKING_ERRORS.check_int("thinking_errors", params.integer("thinking_errors")?)?;

        if rass < MIN_ASSESSABLE_RASS {
            return Ok(Assessment::new(
                "unable_to_assess",
                "assessment",
                "Unable to Assess",
                "Patient too sedated for assessment",
                format!(
                    "RASS {rass} ({}). CAM-ICU requires RASS of -3 or higher; reassess when sedation lightens.",
                    rass_label(rass)
                ),
            )
            .with_detail("rass_description", rass_label(rass)));
        }

        let features = [
            acute_onset,
            attention > 2,
            rass != 0,
            thinking > 1,
        ];
        let positive = features[0] && features[1] && (features[2] || features[3]);

        let assessment = if positive {
            Assessment::new(
                "positive",
                "assessment",
                "CAM-ICU Positive",
                "Delirium present",
                "Patient meets CAM-ICU criteria for delirium. Search for precipitating causes, review deliriogenic medications and apply non-pharmacological prevention bundles.",
            )
        } else {
            Assessment::new(
                "negative",
                "assessment",
                "CAM-ICU Negative",
                "No delirium detected",
                "Patient does not meet CAM-ICU criteria for delirium at this time. Continue routine screening at least once per shift.",
            )
        };

        Ok(assessment
            .with_detail(
                "features",
                json!({
                    "acute_onset_or_fluctuating_course": features[0],
                    "inattention": features[1],
                    "altered_level_of_consciousness": features[2],
                    "disorganized_thinking": features[3],
                }),
            )
            .with_detail("rass_description", rass_label(rass)))
    }
}
