use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Single-pool Kt/V by the second-generation Daugirdas formula, with the
/// urea reduction ratio alongside.
pub struct KtvDialysis;

const PRE_BUN: ParamRange = ParamRange::new(5.0, 200.0);
const POST_BUN: ParamRange = ParamRange::new(2.0, 150.0);
const HOURS: ParamRange = ParamRange::above(0.0, 24.0);
const ULTRAFILTRATION: ParamRange = ParamRange::new(0.0, 20.0);
const WEIGHT: ParamRange = ParamRange::new(20.0, 300.0);

pub static HEMODIALYSIS_BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        1.2,
        "Inadequate",
        "Below minimum adequacy threshold",
        "Below the minimum hemodialysis Kt/V of 1.2. Increase session time, blood flow or dialyzer size and check access recirculation.",
    ),
    Band::new(
        1.2,
        1.3,
        "Minimum Adequate (HD)",
        "Meets minimum hemodialysis adequacy",
        "Meets the minimum hemodialysis dose but not the 1.3 target. Consider optimizing the prescription.",
    ),
    Band::new(
        1.3,
        f64::INFINITY,
        "Target Adequate (HD)",
        "Meets target hemodialysis adequacy",
        "Meets the target hemodialysis dose. Continue the current prescription with monthly monitoring.",
    ),
];

pub static PERITONEAL_BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        1.7,
        "Inadequate",
        "Below peritoneal dialysis adequacy threshold",
        "Below the weekly peritoneal dialysis Kt/V target of 1.7. Increase exchange volume or frequency and assess residual function.",
    ),
    Band::new(
        1.7,
        f64::INFINITY,
        "Target Adequate (PD)",
        "Meets peritoneal dialysis adequacy",
        "Meets the peritoneal dialysis adequacy target. Continue the current prescription.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialysisType {
    Hemodialysis,
    PeritonealDialysis,
}

impl DialysisType {
    fn bands(self) -> &'static [Band] {
        match self {
            DialysisType::Hemodialysis => HEMODIALYSIS_BANDS,
            DialysisType::PeritonealDialysis => PERITONEAL_BANDS,
        }
    }
}

/// `-ln(R - 0.008 × t) + (4 - 3.5 × R) × UF / W`, with `R` the post/pre BUN
/// ratio, `t` in hours, `UF` in litres and `W` the post-dialysis weight.
pub fn daugirdas_ktv(
    ratio: f64,
    hours: f64,
    ultrafiltration_l: f64,
    weight_kg: f64,
) -> Option<f64> {
    let corrected = ratio - 0.008 * hours;
    (corrected > 0.0).then(|| -corrected.ln() + (4.0 - 3.5 * ratio) * ultrafiltration_l / weight_kg)
}

impl Calculator for KtvDialysis {
    fn id(&self) -> &'static str {
        "ktv_dialysis"
    }

    fn name(&self) -> &'static str {
        "Kt/V for Dialysis Adequacy"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "pre_dialysis_bun",
            "post_dialysis_bun",
            "dialysis_time_hours",
            "ultrafiltration_volume",
            "post_dialysis_weight",
            "dialysis_type",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let pre = PRE_BUN.check("pre_dialysis_bun", params.number("pre_dialysis_bun")?)?;
        let post = POST_BUN.check("post_dialysis_bun", params.number("post_dialysis_bun")?)?;
        if post >= pre {
            return Err(InvalidParameter::new(
                "post_dialysis_bun",
                "must be lower than pre_dialysis_bun",
            ));
        }
        let hours = HOURS.check("dialysis_time_hours", params.number("dialysis_time_hours")?)?;
        let uf = ULTRAFILTRATION.check(
            "ultrafiltration_volume",
            params.number("ultrafiltration_volume")?,
        )?;
        let weight = WEIGHT.check("post_dialysis_weight", params.number("post_dialysis_weight")?)?;
        let dialysis: DialysisType = params.token("dialysis_type")?;

        let ratio = post / pre;
        let ktv = daugirdas_ktv(ratio, hours, uf, weight)
            .map(|v| round_to(v, 3))
            .ok_or_else(|| {
                InvalidParameter::new(
                    "dialysis_time_hours",
                    "too long for the BUN ratio; urea generation correction exceeds the ratio",
                )
            })?;
        let urr = round_to((pre - post) / pre * 100.0, 1);

        let band = classify(dialysis.bands(), ktv);
        Ok(Assessment::from_band(ktv, "", band)
            .with_interpretation(format!(
                "Kt/V {}, URR {}%. {}",
                fixed(ktv, 3),
                fixed(urr, 1),
                band.interpretation
            ))
            .with_detail("urea_reduction_ratio", urr)
            .with_detail("bun_ratio", round_to(ratio, 3)))
    }
}
