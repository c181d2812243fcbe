use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// I-SEE (Index of Severity for Eosinophilic Esophagitis): symptoms,
/// complications, inflammatory and fibrostenotic features.
pub struct ISee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomFrequency {
    None,
    Weekly,
    Daily,
    MultipleDaily,
}

impl SymptomFrequency {
    fn points(self) -> i64 {
        match self {
            SymptomFrequency::None => 0,
            SymptomFrequency::Weekly => 1,
            SymptomFrequency::Daily => 2,
            SymptomFrequency::MultipleDaily => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodImpaction {
    None = 0,
    AdultWithEr = 1,
    PediatricWithEr = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finding {
    None,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InflammatoryFeatures {
    None = 0,
    Localized = 1,
    Diffuse = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EosinophilCount {
    #[serde(rename = "under_15")]
    Under15 = 0,
    #[serde(rename = "15_to_60")]
    From15To60 = 1,
    #[serde(rename = "over_60")]
    Over60 = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingsStrictures {
    None,
    EndoscopePassesEasily,
    RequiresDilation,
    CannotPassEndoscope,
}

impl RingsStrictures {
    fn points(self) -> i64 {
        match self {
            RingsStrictures::None => 0,
            RingsStrictures::EndoscopePassesEasily => 1,
            RingsStrictures::RequiresDilation => 2,
            RingsStrictures::CannotPassEndoscope => 15,
        }
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Inactive",
        "Score 0 points",
        "Inactive EoE. No evidence of active disease; continue current management and monitor.",
    ),
    Band::new(
        1.0,
        7.0,
        "Mild",
        "Score 1-6 points",
        "Mild EoE severity with minimal functional impact and low complication risk. Standard first-line therapy.",
    ),
    Band::new(
        7.0,
        15.0,
        "Moderate",
        "Score 7-14 points",
        "Moderate EoE severity. Optimize therapy and consider combination approaches with closer follow-up.",
    ),
    Band::new(
        15.0,
        f64::INFINITY,
        "Severe",
        "Score ≥15 points",
        "Severe EoE with significant complications or fibrostenosis. Aggressive therapy, dilation as needed and specialist follow-up.",
    ),
];

impl Calculator for ISee {
    fn id(&self) -> &'static str {
        "i_see"
    }

    fn name(&self) -> &'static str {
        "I-SEE Score for Eosinophilic Esophagitis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "symptoms_frequency",
            "food_impaction",
            "hospitalization_due_eoe",
            "esophageal_perforation",
            "malnutrition",
            "persistent_inflammation",
            "inflammatory_features",
            "eosinophil_count",
            "rings_strictures",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let symptoms: SymptomFrequency = params.token("symptoms_frequency")?;
        let impaction: FoodImpaction = params.token("food_impaction")?;
        let malnutrition: Finding = params.token("malnutrition")?;
        let persistent: Finding = params.token("persistent_inflammation")?;
        let inflammatory: InflammatoryFeatures = params.token("inflammatory_features")?;
        let eosinophils: EosinophilCount = params.token("eosinophil_count")?;
        let rings: RingsStrictures = params.token("rings_strictures")?;

        let mut tally = Tally::new();
        tally
            .add("symptoms_frequency", symptoms.points())
            .add("food_impaction", impaction as i64 * 2)
            .flag(
                "hospitalization_due_eoe",
                params.yes_no("hospitalization_due_eoe")?,
                4,
            )
            .flag(
                "esophageal_perforation",
                params.yes_no("esophageal_perforation")?,
                15,
            )
            .flag("malnutrition", malnutrition == Finding::Present, 15)
            .flag(
                "persistent_inflammation",
                persistent == Finding::Present,
                15,
            )
            .add("inflammatory_features", inflammatory as i64)
            .add("eosinophil_count", eosinophils as i64)
            .add("rings_strictures", rings.points());

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("I-SEE {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
