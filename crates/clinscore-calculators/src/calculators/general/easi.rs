use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Calculator;

/// Eczema Area and Severity Index (EASI): four body regions, each scored for
/// area (0-6) and four signs (0-3), weighted by the region's share of body
/// surface.
pub struct Easi;

const AREA: ParamRange = ParamRange::integer(0.0, 6.0);
const SIGN: ParamRange = ParamRange::integer(0.0, 3.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "child_0_7")]
    Child,
    #[serde(rename = "adult_8_plus")]
    Adult,
}

/// (region, adult multiplier, child multiplier, area field, sign fields)
const REGIONS: &[(&str, f64, f64, &str, [&str; 4])] = &[
    (
        "head_neck",
        0.1,
        0.2,
        "head_neck_area",
        [
            "head_neck_erythema",
            "head_neck_edema",
            "head_neck_excoriation",
            "head_neck_lichenification",
        ],
    ),
    (
        "upper_extremities",
        0.2,
        0.2,
        "upper_extremities_area",
        [
            "upper_extremities_erythema",
            "upper_extremities_edema",
            "upper_extremities_excoriation",
            "upper_extremities_lichenification",
        ],
    ),
    (
        "trunk",
        0.3,
        0.3,
        "trunk_area",
        [
            "trunk_erythema",
            "trunk_edema",
            "trunk_excoriation",
            "trunk_lichenification",
        ],
    ),
    (
        "lower_extremities",
        0.4,
        0.3,
        "lower_extremities_area",
        [
            "lower_extremities_erythema",
            "lower_extremities_edema",
            "lower_extremities_excoriation",
            "lower_extremities_lichenification",
        ],
    ),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        0.05,
        "Clear",
        "No eczema",
        "No active eczema. Continue emollients and trigger avoidance.",
    ),
    Band::new(
        0.05,
        1.05,
        "Almost Clear",
        "Almost clear eczema",
        "Minimal disease activity. Maintain with emollients and intermittent topical therapy.",
    ),
    Band::new(
        1.05,
        7.05,
        "Mild",
        "Mild eczema",
        "Mild atopic dermatitis. Topical corticosteroids or calcineurin inhibitors with regular emollients.",
    ),
    Band::new(
        7.05,
        21.05,
        "Moderate",
        "Moderate eczema",
        "Moderate atopic dermatitis. Optimise topical therapy and consider phototherapy or dermatology referral.",
    ),
    Band::new(
        21.05,
        50.05,
        "Severe",
        "Severe eczema",
        "Severe atopic dermatitis. Systemic or biologic therapy is usually warranted under dermatology care.",
    ),
    Band::new(
        50.05,
        72.05,
        "Very Severe",
        "Very severe eczema",
        "Very severe atopic dermatitis. Urgent dermatology review for systemic therapy.",
    ),
];

impl Calculator for Easi {
    fn id(&self) -> &'static str {
        "easi"
    }

    fn name(&self) -> &'static str {
        "Eczema Area and Severity Index (EASI)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::General
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_category",
            "head_neck_area",
            "head_neck_erythema",
            "head_neck_edema",
            "head_neck_excoriation",
            "head_neck_lichenification",
            "upper_extremities_area",
            "upper_extremities_erythema",
            "upper_extremities_edema",
            "upper_extremities_excoriation",
            "upper_extremities_lichenification",
            "trunk_area",
            "trunk_erythema",
            "trunk_edema",
            "trunk_excoriation",
            "trunk_lichenification",
            "lower_extremities_area",
            "lower_extremities_erythema",
            "lower_extremities_edema",
            "lower_extremities_excoriation",
            "lower_extremities_lichenification",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = params.token::<AgeCategory>("age_category")?;

        let mut total = 0.0;
        let mut regional = Map::new();
        for (region, adult, child, area_field, signs) in REGIONS {
            let area = AREA.check_int(area_field, params.integer(area_field)?)?;
            let mut severity = 0;
            for sign in signs {
                severity += SIGN.check_int(sign, params.integer(sign)?)?;
            }
            let multiplier = match age {
                AgeCategory::Adult => *adult,
                AgeCategory::Child => *child,
            };
            let score = (severity * area) as f64 * multiplier;
            total += score;
            regional.insert(region.to_string(), Value::from(round_to(score, 2)));
        }

        let total = round_to(total, 1);
        let band = classify(BANDS, total);
        Ok(Assessment::from_band(total, "points", band)
            .with_interpretation(format!("EASI {}. {}", fixed(total, 1), band.interpretation))
            .with_detail("regional_scores", Value::Object(regional)))
    }
}
