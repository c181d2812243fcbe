use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Khorana score for chemotherapy-associated venous thromboembolism.
pub struct KhoranaScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancerType {
    /// Stomach, pancreas.
    VeryHighRisk,
    /// Lung, lymphoma, gynecologic, bladder, testicular.
    HighRisk,
    Other,
}

impl CancerType {
    pub fn points(self) -> i64 {
        match self {
            CancerType::VeryHighRisk => 2,
            CancerType::HighRisk => 1,
            CancerType::Other => 0,
        }
    }
}

const CRITERIA: &[&str] = &[
    "platelet_count_350_or_more",
    "hemoglobin_under_10_or_esa",
    "leukocyte_count_over_11000",
    "bmi_35_or_more",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Low Risk",
        "0.3-0.8% VTE risk",
        "Low risk of VTE over 2.5 months. Routine thromboprophylaxis is not recommended.",
    ),
    Band::new(
        1.0,
        3.0,
        "Intermediate Risk",
        "1.8-2.0% VTE risk",
        "Intermediate risk of VTE over 2.5 months. Assess individually; prophylaxis is generally not required.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "High Risk",
        "6.7-7.1% VTE risk",
        "High risk of VTE over 2.5 months. Consider thromboprophylaxis with a DOAC or LMWH if bleeding risk allows.",
    ),
];

impl Calculator for KhoranaScore {
    fn id(&self) -> &'static str {
        "khorana_score"
    }

    fn name(&self) -> &'static str {
        "Khorana Risk Score for VTE"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "cancer_type",
            "platelet_count_350_or_more",
            "hemoglobin_under_10_or_esa",
            "leukocyte_count_over_11000",
            "bmi_35_or_more",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let cancer: CancerType = params.token("cancer_type")?;

        let mut tally = Tally::new();
        tally.add("cancer_type", cancer.points());
        for field in CRITERIA {
            tally.flag(field, params.yes_no(field)?, 1);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Khorana score {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
