use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Quick Inventory of Depressive Symptomatology, self-report (16 items).
///
/// Sixteen answers collapse into nine symptom domains: sleep, appetite/weight
/// and psychomotor each score the worst of their items.
pub struct QidsSr16;

const ITEM: ParamRange = ParamRange::integer(0.0, 3.0);

const SLEEP: &[&str] = &["sleep_onset", "sleep_maintenance", "early_awakening", "hypersomnia"];
const APPETITE_WEIGHT: &[&str] = &[
    "appetite_decrease",
    "appetite_increase",
    "weight_decrease",
    "weight_increase",
];
const PSYCHOMOTOR: &[&str] = &["psychomotor_slowing", "psychomotor_agitation"];
const SINGLE: &[&str] = &[
    "sad_mood",
    "concentration",
    "self_view",
    "suicidal_ideation",
    "general_interest",
    "energy_level",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        6.0,
        "No Depression",
        "No depression",
        "No depression present. Score indicates absence of clinically significant depressive symptoms.",
    ),
    Band::new(
        6.0,
        11.0,
        "Mild Depression",
        "Mild depression",
        "Mild depression. Some depressive symptoms present that may warrant monitoring and supportive interventions.",
    ),
    Band::new(
        11.0,
        16.0,
        "Moderate Depression",
        "Moderate depression",
        "Moderate depression. Clinically significant symptoms requiring active treatment with psychotherapy and/or pharmacotherapy.",
    ),
    Band::new(
        16.0,
        21.0,
        "Severe Depression",
        "Severe depression",
        "Severe depression. Requires prompt treatment with close monitoring and psychiatric consultation.",
    ),
    Band::new(
        21.0,
        f64::INFINITY,
        "Very Severe Depression",
        "Very severe depression",
        "Very severe depression. Requires immediate psychiatric evaluation and intensive treatment.",
    ),
];

fn worst_of(params: &Params, fields: &[&str]) -> Result<i64> {
    let mut worst = 0;
    for field in fields {
        worst = worst.max(ITEM.check_int(field, params.integer(field)?)?);
    }
    Ok(worst)
}

impl Calculator for QidsSr16 {
    fn id(&self) -> &'static str {
        "qids_sr16"
    }

    fn name(&self) -> &'static str {
        "Quick Inventory of Depressive Symptomatology (QIDS-SR16)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "sleep_onset",
            "sleep_maintenance",
            "early_awakening",
            "hypersomnia",
            "sad_mood",
            "appetite_decrease",
            "appetite_increase",
            "weight_decrease",
            "weight_increase",
            "concentration",
            "self_view",
            "suicidal_ideation",
            "general_interest",
            "energy_level",
            "psychomotor_slowing",
            "psychomotor_agitation",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .add("sleep", worst_of(params, SLEEP)?)
            .add("appetite_weight", worst_of(params, APPETITE_WEIGHT)?)
            .add("psychomotor", worst_of(params, PSYCHOMOTOR)?);
        for field in SINGLE {
            tally.add(field, ITEM.check_int(field, params.integer(field)?)?);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let mut interpretation = format!("QIDS-SR16 {score}/27. {}", band.interpretation);
        if tally.points("suicidal_ideation").unwrap_or(0) > 0 {
            interpretation.push_str(
                " Suicidal ideation was endorsed and needs direct risk assessment.",
            );
        }

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("domains", tally.breakdown()))
    }
}
