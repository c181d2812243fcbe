use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Geriatric Depression Scale, short form. One point per answer in the
/// depressive direction.
pub struct Gds15;

/// (question, answer that scores)
const QUESTIONS: &[(&str, bool)] = &[
    ("q1_satisfied_with_life", false),
    ("q2_dropped_activities", true),
    ("q3_life_empty", true),
    ("q4_often_bored", true),
    ("q5_good_spirits", false),
    ("q6_afraid_bad_happen", true),
    ("q7_happy_most_time", false),
    ("q8_feel_helpless", true),
    ("q9_prefer_stay_home", true),
    ("q10_memory_problems", true),
    ("q11_wonderful_to_be_alive", false),
    ("q12_feel_worthless", true),
    ("q13_full_of_energy", false),
    ("q14_situation_hopeless", true),
    ("q15_others_better_off", true),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        5.0,
        "Normal",
        "Absence of clinically significant depressive symptoms",
        "No clinically significant depressive symptoms. Rescreen periodically.",
    ),
    Band::new(
        5.0,
        8.0,
        "Mild Depression",
        "Suggests mild depression",
        "Suggests mild depression. Clinical evaluation and follow-up, with consideration of psychotherapy.",
    ),
    Band::new(
        8.0,
        10.0,
        "Moderate Depression",
        "Suggests moderate depression",
        "Suggests moderate depression. Comprehensive evaluation; consider psychotherapy and antidepressant treatment.",
    ),
    Band::new(
        10.0,
        f64::INFINITY,
        "Severe Depression",
        "Suggests severe depression",
        "Suggests severe depression. Urgent psychiatric evaluation and immediate suicide risk assessment.",
    ),
];

impl Calculator for Gds15 {
    fn id(&self) -> &'static str {
        "gds_15"
    }

    fn name(&self) -> &'static str {
        "Geriatric Depression Scale (GDS-15)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "q1_satisfied_with_life",
            "q2_dropped_activities",
            "q3_life_empty",
            "q4_often_bored",
            "q5_good_spirits",
            "q6_afraid_bad_happen",
            "q7_happy_most_time",
            "q8_feel_helpless",
            "q9_prefer_stay_home",
            "q10_memory_problems",
            "q11_wonderful_to_be_alive",
            "q12_feel_worthless",
            "q13_full_of_energy",
            "q14_situation_hopeless",
            "q15_others_better_off",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for (field, scoring_answer) in QUESTIONS {
            tally.flag(field, params.yes_no(field)? == *scoring_answer, 1);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("GDS-15 {score}/15. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
