use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Cincinnati Prehospital Stroke Severity Scale: screens for large vessel
/// occlusion and severe stroke in the field.
pub struct Cpsss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocQuestions {
    BothCorrect = 0,
    OneCorrect = 1,
    NeitherCorrect = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commands {
    BothCommands = 0,
    OneCommand = 1,
    NeitherCommand = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmHolding {
    CanHold = 0,
    CannotHold = 1,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low Risk",
        "LVO and severe stroke less likely",
        "Low probability of large vessel occlusion and severe stroke (NIHSS <15). Transport to the nearest stroke-capable hospital.",
    ),
    Band::new(
        2.0,
        f64::INFINITY,
        "High Risk",
        "LVO and severe stroke likely",
        "High probability of large vessel occlusion and severe stroke (NIHSS ≥15). Consider direct transport to a comprehensive stroke center.",
    ),
];

impl Calculator for Cpsss {
    fn id(&self) -> &'static str {
        "cpsss"
    }

    fn name(&self) -> &'static str {
        "Cincinnati Prehospital Stroke Severity Scale (CP-SSS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "conjugate_gaze_deviation",
            "level_of_consciousness_questions",
            "following_commands",
            "arm_holding_ability",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .flag(
                "conjugate_gaze_deviation",
                params.yes_no("conjugate_gaze_deviation")?,
                2,
            )
            .add(
                "level_of_consciousness_questions",
                params.token::<LocQuestions>("level_of_consciousness_questions")? as i64,
            )
            .add(
                "following_commands",
                params.token::<Commands>("following_commands")? as i64,
            )
            .add(
                "arm_holding_ability",
                params.token::<ArmHolding>("arm_holding_ability")? as i64,
            );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("CP-SSS {score}/7. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
