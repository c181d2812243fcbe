use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Montreal Cognitive Assessment, with one point added for 12 or fewer
/// years of education.
pub struct Moca;

const MAX_SCORE: i64 = 30;

/// Scored domains with their maximum.
const DOMAINS: &[(&str, f64)] = &[
    ("visuospatial_executive", 5.0),
    ("naming", 3.0),
    ("attention", 6.0),
    ("language", 3.0),
    ("abstraction", 2.0),
    ("delayed_recall", 5.0),
    ("orientation", 6.0),
];

// Immediate recall trials are administered but not scored.
const MEMORY_REGISTRATION: ParamRange = ParamRange::integer(0.0, 5.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "less_than_12_years")]
    LessThan12Years,
    #[serde(rename = "12_or_more_years")]
    TwelveOrMoreYears,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Severe Cognitive Impairment",
        "Severe cognitive impairment",
        "Marked deficits across multiple domains. Comprehensive evaluation for dementia and assessment of safety and care needs.",
    ),
    Band::new(
        10.0,
        18.0,
        "Moderate Cognitive Impairment",
        "Moderate cognitive impairment",
        "Significant cognitive deficits. Formal neuropsychological and medical work-up for dementia is indicated.",
    ),
    Band::new(
        18.0,
        26.0,
        "Mild Cognitive Impairment",
        "Possible mild cognitive impairment",
        "Possible mild cognitive impairment. Further evaluation and follow-up testing are recommended.",
    ),
    Band::new(
        26.0,
        f64::INFINITY,
        "Normal Cognition",
        "Normal cognitive function",
        "Normal cognitive function.",
    ),
];

impl Calculator for Moca {
    fn id(&self) -> &'static str {
        "moca"
    }

    fn name(&self) -> &'static str {
        "Montreal Cognitive Assessment (MoCA)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "visuospatial_executive",
            "naming",
            "memory_registration",
            "attention",
            "language",
            "abstraction",
            "delayed_recall",
            "orientation",
            "education_level",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for (field, max) in DOMAINS {
            let points = ParamRange::integer(0.0, *max).check_int(field, params.integer(field)?)?;
            tally.add(field, points);
        }
        MEMORY_REGISTRATION
            .check_int(
                "memory_registration",
                params.integer("memory_registration")?,
            )?;
        let education: Education = params.token("education_level")?;

        let raw = tally.total();
        let score = match education {
            Education::LessThan12Years => (raw + 1).min(MAX_SCORE),
            Education::TwelveOrMoreYears => raw,
        };
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("MoCA {score}/30. {}", band.interpretation))
            .with_detail("raw_score", raw)
            .with_detail("breakdown", tally.breakdown()))
    }
}
