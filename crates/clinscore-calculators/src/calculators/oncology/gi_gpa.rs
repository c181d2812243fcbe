use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, Params, Result, Specialty, band_index};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Graded Prognostic Assessment for gastrointestinal cancer with brain
/// metastases. Components score in half-point steps up to 4.0.
pub struct GiGpa;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "under_60")]
    Under60,
    #[serde(rename = "60_or_over")]
    AtLeast60,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kps {
    #[serde(rename = "under_80")]
    Under80,
    #[serde(rename = "80")]
    Eighty,
    #[serde(rename = "90_to_100")]
    From90To100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtracranialMetastases {
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrainMetastases {
    #[serde(rename = "more_than_3")]
    MoreThan3,
    #[serde(rename = "2_to_3")]
    TwoToThree,
    #[serde(rename = "1")]
    Single,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.5,
        "Poor Prognosis",
        "Worst survival group",
        "Median survival about 3 months. Consider whole-brain radiotherapy or best supportive care.",
    ),
    Band::new(
        1.5,
        2.5,
        "Intermediate-Poor Prognosis",
        "Below average survival",
        "Median survival about 9 months. Individualize local and systemic therapy.",
    ),
    Band::new(
        2.5,
        3.5,
        "Intermediate Prognosis",
        "Average survival",
        "Median survival about 12 months. Consider stereotactic radiosurgery or resection with systemic therapy.",
    ),
    Band::new(
        3.5,
        f64::INFINITY,
        "Good Prognosis",
        "Best survival group",
        "Median survival about 17 months. Aggressive local therapy is appropriate.",
    ),
];

const MEDIAN_SURVIVAL_MONTHS: [i64; 4] = [3, 9, 12, 17];

impl Calculator for GiGpa {
    fn id(&self) -> &'static str {
        "gi_gpa"
    }

    fn name(&self) -> &'static str {
        "GI-GPA for Brain Metastases"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_category",
            "kps",
            "extracranial_metastases",
            "number_brain_metastases",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age: AgeCategory = params.token("age_category")?;
        let kps: Kps = params.token("kps")?;
        let extracranial: ExtracranialMetastases = params.token("extracranial_metastases")?;
        let brain: BrainMetastases = params.token("number_brain_metastases")?;

        let score = match age {
            AgeCategory::Under60 => 0.5,
            AgeCategory::AtLeast60 => 0.0,
        } + match kps {
            Kps::Under80 => 0.0,
            Kps::Eighty => 1.0,
            Kps::From90To100 => 2.0,
        } + match extracranial {
            ExtracranialMetastases::Present => 0.0,
            ExtracranialMetastases::Absent => 0.5,
        } + match brain {
            BrainMetastases::MoreThan3 => 0.0,
            BrainMetastases::TwoToThree => 0.5,
            BrainMetastases::Single => 1.0,
        };

        let index = band_index(BANDS, score);
        let band = &BANDS[index];
        let score = round_to(score, 1);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("GI-GPA {score}. {}", band.interpretation))
            .with_detail("median_survival_months", MEDIAN_SURVIVAL_MONTHS[index]))
    }
}
