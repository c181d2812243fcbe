use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Cumulative Illness Rating Scale for Geriatrics. Each organ system is rated
/// 0 (no problem) to 4 (extremely severe).
pub struct CirsG;

const RATING: ParamRange = ParamRange::integer(0.0, 4.0);

const SYSTEMS: &[&str] = &[
    "heart",
    "vascular",
    "hematopoietic",
    "respiratory",
    "eent",
    "upper_gi",
    "lower_gi",
    "liver_pancreas_biliary",
    "renal",
    "genitourinary",
    "musculoskeletal_skin",
    "neurologic",
    "endocrine_breast",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        7.0,
        "Low Burden",
        "Minimal illness burden",
        "Minimal illness burden. Routine preventive care and periodic review.",
    ),
    Band::new(
        7.0,
        13.0,
        "Mild Burden",
        "Mild illness burden",
        "Mild illness burden. Regular monitoring of chronic conditions and medication review.",
    ),
    Band::new(
        13.0,
        21.0,
        "Moderate Burden",
        "Moderate illness burden",
        "Moderate illness burden. Coordinate care across specialties and watch for polypharmacy.",
    ),
    Band::new(
        21.0,
        31.0,
        "High Burden",
        "High illness burden",
        "High illness burden. Comprehensive geriatric assessment and multidisciplinary care planning.",
    ),
    Band::new(
        31.0,
        f64::INFINITY,
        "Very High Burden",
        "Very high illness burden",
        "Very high illness burden. Intensive care coordination and goals-of-care discussion.",
    ),
];

impl Calculator for CirsG {
    fn id(&self) -> &'static str {
        "cirs_g"
    }

    fn name(&self) -> &'static str {
        "Cumulative Illness Rating Scale-Geriatric (CIRS-G)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Geriatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "heart",
            "vascular",
            "hematopoietic",
            "respiratory",
            "eent",
            "upper_gi",
            "lower_gi",
            "liver_pancreas_biliary",
            "renal",
            "genitourinary",
            "musculoskeletal_skin",
            "neurologic",
            "endocrine_breast",
            "psychiatric",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in SYSTEMS {
            tally.add(field, RATING.check_int(field, params.integer(field)?)?);
        }
        // Psychiatric illness is rated when assessed.
        if let Some(rating) = params.optional_integer("psychiatric")? {
            tally.add("psychiatric", RATING.check_int("psychiatric", rating)?);
        }

        let score = tally.total();
        let affected = tally.nonzero_count();
        let severity_index = if affected == 0 {
            0.0
        } else {
            round_to(score as f64 / affected as f64, 2)
        };
        let severe = SYSTEMS
            .iter()
            .chain(["psychiatric"].iter())
            .filter(|s| tally.points(s).unwrap_or(0) >= 3)
            .count();

        let band = classify(BANDS, score as f64);
        let mut interpretation = format!(
            "CIRS-G {score} across {affected} affected systems (severity index {severity_index}). {}",
            band.interpretation
        );
        if severe > 0 {
            interpretation.push_str(&format!(
                " {severe} system(s) rated severe or extremely severe."
            ));
        }

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("severity_index", severity_index)
            .with_detail("affected_systems", affected)
            .with_detail("severe_systems", severe)
            .with_detail("breakdown", tally.breakdown()))
    }
}
