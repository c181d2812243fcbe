use clinscore_core::numeric::fixed;
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, YesNo, classify};

use crate::Calculator;

/// AKIN staging of acute kidney injury from serum creatinine change and
/// urine output. The worse of the two criteria sets decides the stage.
pub struct Akin;

const CREATININE: ParamRange = ParamRange::new(0.1, 15.0);
const CREATININE_INCREASE: ParamRange = ParamRange::new(0.0, 10.0);
const URINE_6H: ParamRange = ParamRange::new(0.0, 50.0);
const URINE_12H: ParamRange = ParamRange::new(0.0, 100.0);
const URINE_24H: ParamRange = ParamRange::new(0.0, 200.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "No AKI",
        "No acute kidney injury",
        "No AKIN criteria met. Continue routine monitoring of creatinine and urine output in at-risk patients.",
    ),
    Band::new(
        1.0,
        2.0,
        "Stage 1",
        "Mild AKI",
        "AKIN stage 1. Identify and treat reversible causes, avoid nephrotoxins and review medication dosing.",
    ),
    Band::new(
        2.0,
        3.0,
        "Stage 2",
        "Moderate AKI",
        "AKIN stage 2. Close monitoring of fluid balance and electrolytes; nephrology input is advisable.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "Stage 3",
        "Severe AKI",
        "AKIN stage 3. High mortality risk; urgent nephrology consultation and assessment for renal replacement therapy.",
    ),
];

fn optional_yes(params: &Params, field: &str) -> Result<bool> {
    Ok(params
        .optional_token::<YesNo>(field)?
        .is_some_and(bool::from))
}

fn optional_in(params: &Params, field: &str, range: ParamRange) -> Result<Option<f64>> {
    params
        .optional_number(field)?
        .map(|v| range.check(field, v))
        .transpose()
}

/// Creatinine criteria: fold change over baseline and absolute rise.
fn creatinine_stage(
    current: f64,
    baseline: Option<f64>,
    increase: Option<f64>,
    criteria: &mut Vec<String>,
) -> i64 {
    let mut stage = 0;
    if let Some(baseline) = baseline {
        let fold = current / baseline;
        let fold_stage = if fold >= 3.0 {
            3
        } else if fold >= 2.0 {
            2
        } else if fold >= 1.5 {
            1
        } else {
            0
        };
        if fold_stage > 0 {
            criteria.push(format!("creatinine {}x baseline", fixed(fold, 1)));
            stage = fold_stage;
        }
    }
    if let Some(increase) = increase {
        if increase >= 0.3 {
            criteria.push(format!("absolute creatinine rise {} mg/dL", fixed(increase, 1)));
            stage = stage.max(1);
        }
        if current >= 4.0 && increase >= 0.5 {
            criteria.push("creatinine ≥4.0 mg/dL with acute rise ≥0.5 mg/dL".to_string());
            stage = 3;
        }
    }
    stage
}

/// Urine criteria. Volumes are mL/kg accumulated over each window.
fn urine_stage(
    over_6h: Option<f64>,
    over_12h: Option<f64>,
    over_24h: Option<f64>,
    anuria: bool,
    criteria: &mut Vec<String>,
) -> i64 {
    if anuria {
        criteria.push("anuria for 12 hours".to_string());
        return 3;
    }
    let mut stage = 0;
    for (volume, hours, limit, window_stage) in [
        (over_24h, 24.0, 0.3, 3),
        (over_12h, 12.0, 0.5, 2),
        (over_6h, 6.0, 0.5, 1),
    ] {
        if let Some(volume) = volume
            && volume / hours < limit
        {
            criteria.push(format!(
                "urine output {} mL/kg/h over {hours} h",
                fixed(volume / hours, 2)
            ));
            stage = stage.max(window_stage);
        }
    }
    stage
}

impl Calculator for Akin {
    fn id(&self) -> &'static str {
        "akin"
    }

    fn name(&self) -> &'static str {
        "AKIN Classification for Acute Kidney Injury"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "current_creatinine",
            "baseline_creatinine",
            "creatinine_increase",
            "urine_output_6h",
            "urine_output_12h",
            "urine_output_24h",
            "anuria_12h",
            "on_rrt",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let current = CREATININE.check("current_creatinine", params.number("current_creatinine")?)?;
        let baseline = optional_in(params, "baseline_creatinine", CREATININE)?;
        let increase = optional_in(params, "creatinine_increase", CREATININE_INCREASE)?;
        let over_6h = optional_in(params, "urine_output_6h", URINE_6H)?;
        let over_12h = optional_in(params, "urine_output_12h", URINE_12H)?;
        let over_24h = optional_in(params, "urine_output_24h", URINE_24H)?;
        let anuria = optional_yes(params, "anuria_12h")?;
        let on_rrt = optional_yes(params, "on_rrt")?;

        let mut criteria = Vec::new();
        let stage = if on_rrt {
            criteria.push("on renal replacement therapy".to_string());
            3
        } else {
            let by_creatinine = creatinine_stage(current, baseline, increase, &mut criteria);
            let by_urine = urine_stage(over_6h, over_12h, over_24h, anuria, &mut criteria);
            by_creatinine.max(by_urine)
        };

        let band = classify(BANDS, stage as f64);
        let interpretation = if criteria.is_empty() {
            band.interpretation.to_string()
        } else {
            format!(
                "{} (criteria met: {}). {}",
                band.stage,
                criteria.join("; "),
                band.interpretation
            )
        };
        Ok(Assessment::from_band(stage, "stage", band)
            .with_interpretation(interpretation)
            .with_detail("criteria_met", criteria))
    }
}
