use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Children's Hospital of Eastern Ontario Pain Scale, 4 to 13 points.
pub struct Cheops;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cry {
    NoCrying = 1,
    MoaningCrying = 2,
    Screaming = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facial {
    Smiling = 0,
    Composed = 1,
    Grimace = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbal {
    Positive = 0,
    NotTalkingOther = 1,
    PainComplaints = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Torso {
    Neutral = 1,
    ShiftingTense = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Touch {
    NotTouching = 1,
    ReachingTouching = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legs {
    Neutral = 1,
    SquirmingTensed = 2,
}

pub static BANDS: &[Band] = &[
    Band::new(
        4.0,
        5.0,
        "No Pain",
        "Minimal discomfort",
        "No analgesic intervention required. Continue routine monitoring and comfort measures.",
    ),
    Band::new(
        5.0,
        8.0,
        "Mild to Moderate Pain",
        "Consider analgesic intervention",
        "Consider analgesia and non-pharmacological comfort measures. Reassess 15-20 minutes after IV or 30-45 minutes after oral analgesia.",
    ),
    Band::new(
        8.0,
        f64::INFINITY,
        "Severe Pain",
        "Analgesic intervention required",
        "Analgesia required promptly. Reassess frequently until pain is controlled.",
    ),
];

impl Calculator for Cheops {
    fn id(&self) -> &'static str {
        "cheops"
    }

    fn name(&self) -> &'static str {
        "CHEOPS Pain Scale"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pediatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["cry", "facial", "verbal", "torso", "touch", "legs"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .add("cry", params.token::<Cry>("cry")? as i64)
            .add("facial", params.token::<Facial>("facial")? as i64)
            .add("verbal", params.token::<Verbal>("verbal")? as i64)
            .add("torso", params.token::<Torso>("torso")? as i64)
            .add("touch", params.token::<Touch>("touch")? as i64)
            .add("legs", params.token::<Legs>("legs")? as i64);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("CHEOPS {score}/13. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
