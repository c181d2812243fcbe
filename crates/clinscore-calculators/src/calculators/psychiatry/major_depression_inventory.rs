use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Major Depression Inventory (Bech). Twelve answers on a 0-5 frequency
/// scale over the past two weeks; items 8 and 10 each have two alternatives
/// and only the higher counts, giving ten scored items and a 0-50 total.
pub struct MajorDepressionInventory;

const ITEM: ParamRange = ParamRange::integer(0.0, 5.0);

const SINGLE: &[&str] = &[
    "low_spirits",
    "lost_interest",
    "lacking_energy",
    "less_self_confidence",
    "bad_conscience",
    "life_not_worth_living",
    "difficulty_concentrating",
    "sleep_trouble",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        20.0,
        "No Depression",
        "No or doubtful depression",
        "Score below 20 indicates no or doubtful depression.",
    ),
    Band::new(
        20.0,
        25.0,
        "Mild Depression",
        "Mild depression",
        "Mild depression. Consider watchful waiting, psychoeducation or psychotherapy, and reassess.",
    ),
    Band::new(
        25.0,
        30.0,
        "Moderate Depression",
        "Moderate depression",
        "Moderate depression. Psychotherapy and/or antidepressant treatment is indicated.",
    ),
    Band::new(
        30.0,
        f64::INFINITY,
        "Severe Depression",
        "Severe depression",
        "Severe depression. Prompt psychiatric assessment, combined treatment and suicide risk evaluation.",
    ),
];

fn answer(params: &Params, field: &str) -> Result<i64> {
    ITEM.check_int(field, params.integer(field)?)
}

impl Calculator for MajorDepressionInventory {
    fn id(&self) -> &'static str {
        "major_depression_inventory"
    }

    fn name(&self) -> &'static str {
        "Major Depression Inventory (MDI)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "low_spirits",
            "lost_interest",
            "lacking_energy",
            "less_self_confidence",
            "bad_conscience",
            "life_not_worth_living",
            "difficulty_concentrating",
            "restless",
            "subdued",
            "sleep_trouble",
            "reduced_appetite",
            "increased_appetite",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in SINGLE {
            tally.add(field, answer(params, field)?);
        }
        let psychomotor = answer(params, "restless")?.max(answer(params, "subdued")?);
        let appetite =
            answer(params, "reduced_appetite")?.max(answer(params, "increased_appetite")?);
        tally.add("restless_or_subdued", psychomotor).add("appetite", appetite);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let mut interpretation = format!("MDI {score}/50. {}", band.interpretation);
        if tally.points("life_not_worth_living").unwrap_or(0) >= 3 {
            interpretation.push_str(
                " Frequent thoughts that life is not worth living warrant direct suicide risk assessment.",
            );
        }

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("breakdown", tally.breakdown()))
    }
}
