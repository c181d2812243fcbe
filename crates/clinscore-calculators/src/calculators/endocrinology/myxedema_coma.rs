use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Myxedema coma diagnostic score (Popoveniuc et al.).
pub struct MyxedemaComa;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyTemperature {
    #[serde(rename = "normal_37")]
    Normal,
    #[serde(rename = "mild_hypothermia_35_37")]
    MildHypothermia,
    #[serde(rename = "moderate_hypothermia_32_35")]
    ModerateHypothermia,
    #[serde(rename = "severe_hypothermia_below_32")]
    SevereHypothermia,
}

impl BodyTemperature {
    fn points(self) -> i64 {
        match self {
            BodyTemperature::Normal => 0,
            BodyTemperature::MildHypothermia => 10,
            BodyTemperature::ModerateHypothermia => 15,
            BodyTemperature::SevereHypothermia => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralNervousSystem {
    Normal,
    MildLethargy,
    ModerateSomnolence,
    StuporSemicoma,
    Coma,
}

impl CentralNervousSystem {
    fn points(self) -> i64 {
        match self {
            CentralNervousSystem::Normal => 0,
            CentralNervousSystem::MildLethargy => 10,
            CentralNervousSystem::ModerateSomnolence => 20,
            CentralNervousSystem::StuporSemicoma => 25,
            CentralNervousSystem::Coma => 30,
        }
    }
}

/// Three-step organ dysfunction graded 0/5/10/15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardiovascular {
    Normal = 0,
    MildBradycardia = 1,
    ModerateBradycardiaHypotension = 2,
    SevereShock = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gastrointestinal {
    Normal = 0,
    MildConstipation = 1,
    ModerateDistension = 2,
    SevereIleus = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metabolic {
    Normal = 0,
    MildHyponatremia = 1,
    ModerateHyponatremia = 2,
    SevereHyponatremiaHypoglycemia = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitatingEvent {
    None = 0,
    MinorStress = 1,
    ModerateStress = 2,
    MajorStress = 3,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        25.0,
        "Unlikely",
        "Myxedema coma unlikely",
        "Score below 25 makes myxedema coma unlikely. Consider other causes of altered mental status.",
    ),
    Band::new(
        25.0,
        45.0,
        "Possible",
        "Myxedema coma possible but unlikely",
        "Low probability of myxedema coma. Check thyroid function and monitor closely.",
    ),
    Band::new(
        45.0,
        60.0,
        "At Risk",
        "Patient at risk for myxedema coma",
        "Intermediate probability. Obtain urgent TSH, free T4 and cortisol; consider empirical treatment if clinical suspicion is high.",
    ),
    Band::new(
        60.0,
        f64::INFINITY,
        "Diagnostic",
        "Highly suggestive of myxedema coma",
        "Highly suggestive of myxedema coma, an endocrine emergency. Start IV levothyroxine with stress-dose hydrocortisone and ICU-level supportive care.",
    ),
];

impl Calculator for MyxedemaComa {
    fn id(&self) -> &'static str {
        "myxedema_coma"
    }

    fn name(&self) -> &'static str {
        "Myxedema Coma Diagnostic Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Endocrinology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "body_temperature",
            "central_nervous_system",
            "cardiovascular_dysfunction",
            "gastrointestinal_dysfunction",
            "metabolic_dysfunction",
            "precipitating_event",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .add(
                "temperature",
                params.token::<BodyTemperature>("body_temperature")?.points(),
            )
            .add(
                "cns",
                params.token::<CentralNervousSystem>("central_nervous_system")?.points(),
            )
            .add(
                "cardiovascular",
                params.token::<Cardiovascular>("cardiovascular_dysfunction")? as i64 * 5,
            )
            .add(
                "gastrointestinal",
                params.token::<Gastrointestinal>("gastrointestinal_dysfunction")? as i64 * 5,
            )
            .add(
                "metabolic",
                params.token::<Metabolic>("metabolic_dysfunction")? as i64 * 5,
            )
            .add(
                "precipitating",
                params.token::<PrecipitatingEvent>("precipitating_event")? as i64 * 5,
            );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Myxedema coma score {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
