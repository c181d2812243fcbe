use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Modified NIH Stroke Scale: the 11 NIHSS items with the best
/// inter-rater reliability.
pub struct ModifiedNihss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correct {
    BothCorrect = 0,
    OneCorrect = 1,
    ZeroCorrect = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gaze {
    Normal = 0,
    PartialGazePalsy = 1,
    TotalGazePalsy = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualField {
    NoVisualLoss = 0,
    PartialHemianopia = 1,
    CompleteHemianopia = 2,
    BilateralHemianopia = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motor {
    NoDrift = 0,
    #[serde(rename = "drift_before_10_seconds")]
    DriftBefore10Seconds = 1,
    #[serde(rename = "falls_before_10_seconds")]
    FallsBefore10Seconds = 2,
    NoEffortAgainstGravity = 3,
    NoMovement = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensation {
    NormalNoSensoryLoss = 0,
    AbnormalSensoryLoss = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    NormalNoAphasia = 0,
    MildAphasia = 1,
    SevereAphasia = 2,
    MuteGlobalAphasia = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extinction {
    Normal = 0,
    Mild = 1,
    Severe = 2,
}

const LIMBS: &[&str] = &["left_arm_motor", "right_arm_motor", "left_leg_motor", "right_leg_motor"];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        5.0,
        "Minor Stroke",
        "Minimal neurological deficit",
        "Minor stroke with minimal deficit. Weigh thrombolysis against disabling deficits and arrange stroke unit care.",
    ),
    Band::new(
        5.0,
        16.0,
        "Moderate Stroke",
        "Moderate neurological deficit",
        "Moderate stroke. Evaluate urgently for thrombolysis and endovascular therapy.",
    ),
    Band::new(
        16.0,
        21.0,
        "Moderate-Severe Stroke",
        "Moderate to severe neurological deficit",
        "Moderate to severe stroke with significant deficits. Large vessel occlusion is likely; expedite reperfusion assessment.",
    ),
    Band::new(
        21.0,
        f64::INFINITY,
        "Severe Stroke",
        "Severe neurological deficit",
        "Severe stroke with major deficits. High risk of complications; intensive monitoring and reperfusion evaluation.",
    ),
];

impl Calculator for ModifiedNihss {
    fn id(&self) -> &'static str {
        "modified_nihss"
    }

    fn name(&self) -> &'static str {
        "Modified NIH Stroke Scale (mNIHSS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "orientation_questions",
            "commands",
            "horizontal_eye_movements",
            "visual_fields",
            "left_arm_motor",
            "right_arm_motor",
            "left_leg_motor",
            "right_leg_motor",
            "sensation",
            "language_aphasia",
            "extinction_neglect",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .add(
                "orientation_questions",
                params.token::<Correct>("orientation_questions")? as i64,
            )
            .add("commands", params.token::<Correct>("commands")? as i64)
            .add(
                "horizontal_eye_movements",
                params.token::<Gaze>("horizontal_eye_movements")? as i64,
            )
            .add(
                "visual_fields",
                params.token::<VisualField>("visual_fields")? as i64,
            );
        for limb in LIMBS {
            tally.add(limb, params.token::<Motor>(limb)? as i64);
        }
        tally
            .add("sensation", params.token::<Sensation>("sensation")? as i64)
            .add(
                "language_aphasia",
                params.token::<Language>("language_aphasia")? as i64,
            )
            .add(
                "extinction_neglect",
                params.token::<Extinction>("extinction_neglect")? as i64,
            );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("mNIHSS {score}/31. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
