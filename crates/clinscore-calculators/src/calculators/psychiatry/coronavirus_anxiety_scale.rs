use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Coronavirus Anxiety Scale (Lee 2020). Five physiological reactions to
/// coronavirus-related thoughts or news over the past two weeks, each rated
/// 0 (not at all) to 4 (nearly every day).
pub struct CoronavirusAnxietyScale;

const ITEM: ParamRange = ParamRange::integer(0.0, 4.0);

const ITEMS: &[&str] = &[
    "dizziness",
    "sleep_disturbance",
    "tonic_immobility",
    "appetite_loss",
    "abdominal_distress",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        9.0,
        "Below Threshold",
        "No probable dysfunctional coronavirus anxiety",
        "Score below the cut-off of 9. Coronavirus-related anxiety is unlikely to be clinically dysfunctional.",
    ),
    Band::new(
        9.0,
        f64::INFINITY,
        "Probable Dysfunctional Anxiety",
        "Probable dysfunctional coronavirus anxiety",
        "Score of 9 or more indicates probable dysfunctional coronavirus-related anxiety. Further assessment and supportive or psychological intervention are recommended.",
    ),
];

impl Calculator for CoronavirusAnxietyScale {
    fn id(&self) -> &'static str {
        "coronavirus_anxiety_scale"
    }

    fn name(&self) -> &'static str {
        "Coronavirus Anxiety Scale (CAS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        ITEMS
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in ITEMS {
            tally.add(field, ITEM.check_int(field, params.integer(field)?)?);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("CAS {score}/20. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
