use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Calculator;

/// Lung Injury Prediction Score (LIPS) for acute lung injury risk.
pub struct LungInjuryPredictionScore;

const PREDISPOSING: &[(&str, f64)] = &[
    ("shock", 2.0),
    ("aspiration", 2.0),
    ("sepsis", 1.0),
    ("pneumonia", 1.5),
    ("pancreatitis", 1.0),
];

const MODIFIERS: &[(&str, f64)] = &[
    ("alcohol_abuse", 1.0),
    ("obesity", 1.0),
    ("hypoalbuminemia", 1.0),
    ("chemotherapy", 1.0),
    ("fio2_over_35", 2.0),
    ("tachypnea", 1.5),
    ("spo2_under_95", 1.0),
    ("acidosis", 1.5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighRiskSurgery {
    None,
    OrthopedicSpine,
    AcuteAbdomen,
    Cardiac,
    AorticVascular,
    EmergencySurgery,
}

impl HighRiskSurgery {
    fn points(self) -> f64 {
        match self {
            HighRiskSurgery::None => 0.0,
            HighRiskSurgery::OrthopedicSpine => 1.0,
            HighRiskSurgery::AcuteAbdomen => 2.0,
            HighRiskSurgery::Cardiac => 2.5,
            HighRiskSurgery::AorticVascular => 3.5,
            HighRiskSurgery::EmergencySurgery => 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighRiskTrauma {
    None,
    TraumaticBrainInjury,
    SmokeInhalation,
    NearDrowning,
    LungContusion,
    MultipleFractures,
}

impl HighRiskTrauma {
    fn points(self) -> f64 {
        match self {
            HighRiskTrauma::None => 0.0,
            HighRiskTrauma::TraumaticBrainInjury
            | HighRiskTrauma::SmokeInhalation
            | HighRiskTrauma::NearDrowning => 2.0,
            HighRiskTrauma::LungContusion | HighRiskTrauma::MultipleFractures => 1.5,
        }
    }
}

// Scores move in half-point steps, so 4.5 is the first score above 4.
pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        4.5,
        "Low Risk",
        "Low risk for acute lung injury",
        "ALI probability below 10%. Standard monitoring and ventilation practices; reassess if the clinical condition changes.",
    ),
    Band::new(
        4.5,
        f64::INFINITY,
        "High Risk",
        "High risk for acute lung injury",
        "ALI probability 15-25%. Lung-protective ventilation (6-8 mL/kg PBW, PEEP 5-10 cmH₂O, plateau below 30), conservative fluids, minimal FiO₂ and transfusions.",
    ),
];

fn sum_present(params: &Params, factors: &[(&str, f64)]) -> Result<f64> {
    let mut total = 0.0;
    for &(field, points) in factors {
        if params.yes_no(field)? {
            total += points;
        }
    }
    Ok(total)
}

impl Calculator for LungInjuryPredictionScore {
    fn id(&self) -> &'static str {
        "lung_injury_prediction_score"
    }

    fn name(&self) -> &'static str {
        "Lung Injury Prediction Score (LIPS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "shock",
            "aspiration",
            "sepsis",
            "pneumonia",
            "pancreatitis",
            "high_risk_surgery",
            "high_risk_trauma",
            "alcohol_abuse",
            "obesity",
            "hypoalbuminemia",
            "chemotherapy",
            "fio2_over_35",
            "tachypnea",
            "spo2_under_95",
            "acidosis",
            "diabetes_with_sepsis",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let predisposing = sum_present(params, PREDISPOSING)?;
        let surgery = params.token::<HighRiskSurgery>("high_risk_surgery")?.points();
        let trauma = params.token::<HighRiskTrauma>("high_risk_trauma")?.points();
        let mut modifiers = sum_present(params, MODIFIERS)?;
        // Diabetes only counts, as a protective factor, alongside sepsis.
        if params.yes_no("diabetes_with_sepsis")? && params.yes_no("sepsis")? {
            modifiers -= 1.0;
        }

        let score = predisposing + surgery + trauma + modifiers;
        let band = classify(BANDS, score);
        Ok(Assessment::from_band(round_to(score, 1), "points", band)
            .with_interpretation(format!("LIPS {score}. {}", band.interpretation))
            .with_detail(
                "components",
                json!({
                    "predisposing_conditions": predisposing,
                    "high_risk_surgery": surgery,
                    "high_risk_trauma": trauma,
                    "risk_modifiers": modifiers,
                }),
            ))
    }
}
