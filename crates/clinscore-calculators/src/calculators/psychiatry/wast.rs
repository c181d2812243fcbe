use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Woman Abuse Screening Tool. Lower totals mean higher risk.
pub struct Wast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tension {
    LotsOfTension = 1,
    SomeTension = 2,
    NoTension = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    GreatDifficulty = 1,
    SomeDifficulty = 2,
    NoDifficulty = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Often = 1,
    Sometimes = 2,
    Never = 3,
}

const FREQUENCY_ITEMS: &[&str] = &[
    "arguments_resolution",
    "arguments_feeling_bad",
    "physical_violence_frequency",
];

// A "yes" scores 1 and a "no" scores 2.
const YES_NO_ITEMS: &[&str] = &[
    "feel_frightened",
    "physical_abuse_history",
    "emotional_abuse_history",
];

pub static BANDS: &[Band] = &[
    Band::new(
        8.0,
        13.0,
        "High Risk",
        "High probability of intimate partner violence",
        "Immediate safety assessment and planning; refer to domestic violence services and follow institutional protocols while protecting privacy.",
    ),
    Band::new(
        13.0,
        18.0,
        "Moderate Risk",
        "Moderate probability of intimate partner violence",
        "Further assessment to clarify risk; offer resources and referral to counselling or social services, and document findings.",
    ),
    Band::new(
        18.0,
        f64::INFINITY,
        "Low Risk",
        "Low probability of intimate partner violence",
        "Low likelihood based on current responses. Rescreen periodically and make resources available.",
    ),
];

impl Calculator for Wast {
    fn id(&self) -> &'static str {
        "woman_abuse_screening_tool"
    }

    fn name(&self) -> &'static str {
        "Woman Abuse Screening Tool (WAST)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "tension_arguments_relationship",
            "partner_jealousy_possessiveness",
            "arguments_resolution",
            "arguments_feeling_bad",
            "physical_violence_frequency",
            "feel_frightened",
            "physical_abuse_history",
            "emotional_abuse_history",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let tension: Tension = params.token("tension_arguments_relationship")?;
        let difficulty: Difficulty = params.token("partner_jealousy_possessiveness")?;

        let mut tally = Tally::new();
        tally
            .add("tension_arguments_relationship", tension as i64)
            .add("partner_jealousy_possessiveness", difficulty as i64);
        for field in FREQUENCY_ITEMS {
            tally.add(field, params.token::<Frequency>(field)? as i64);
        }
        for field in YES_NO_ITEMS {
            tally.add(field, if params.yes_no(field)? { 1 } else { 2 });
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("WAST {score} (range 8-24). {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
