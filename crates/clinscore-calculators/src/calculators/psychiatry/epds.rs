use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Edinburgh Postnatal Depression Scale.
///
/// Each item is entered as the index of the chosen response with 0 the least
/// symptomatic option, so every item contributes its value directly.
pub struct Epds;

const ITEM: ParamRange = ParamRange::integer(0.0, 3.0);

const ITEMS: &[&str] = &[
    "able_to_laugh",
    "looked_forward",
    "blamed_myself",
    "anxious_worried",
    "scared_panicky",
    "things_on_top",
    "unhappy_sleeping",
    "sad_miserable",
    "unhappy_crying",
    "self_harm_thoughts",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Low Risk",
        "Minimal depression symptoms",
        "Low risk for depression. Score suggests minimal depressive symptoms; continue routine perinatal care.",
    ),
    Band::new(
        10.0,
        13.0,
        "Moderate Risk",
        "Possible depression - further assessment needed",
        "Moderate risk for depression. Score suggests possible depressive symptoms; further clinical assessment and repeat screening in 2-4 weeks.",
    ),
    Band::new(
        13.0,
        f64::INFINITY,
        "High Risk",
        "Likely depression - clinical assessment recommended",
        "High risk for depression. Score indicates likely depression requiring diagnostic assessment and treatment planning.",
    ),
];

fn self_harm_level(item: i64) -> &'static str {
    match item {
        0 => "none",
        1 => "low",
        2 => "moderate",
        _ => "high",
    }
}

impl Calculator for Epds {
    fn id(&self) -> &'static str {
        "epds"
    }

    fn name(&self) -> &'static str {
        "Edinburgh Postnatal Depression Scale (EPDS)"
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
        let self_harm = tally.points("self_harm_thoughts").unwrap_or(0);
        let band = classify(BANDS, score as f64);

        let mut interpretation = format!("EPDS {score}/30. {}", band.interpretation);
        if self_harm > 0 {
            interpretation.push_str(
                " Thoughts of self-harm were endorsed: assess suicide risk immediately regardless of the total score.",
            );
        }

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("self_harm_risk", self_harm_level(self_harm))
            .with_detail("breakdown", tally.breakdown()))
    }
}
