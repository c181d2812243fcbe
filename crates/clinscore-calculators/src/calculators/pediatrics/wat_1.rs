use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Withdrawal Assessment Tool-1 for pediatric opioid and benzodiazepine
/// withdrawal.
pub struct Wat1;

const POST_MENSTRUAL_AGE: ParamRange = ParamRange::integer(25.0, 200.0);
const ITEM: ParamRange = ParamRange::integer(0.0, 3.0);

const ITEMS: &[&str] = &[
    "state_sleep_wake_cycle",
    "tremor",
    "increased_muscle_tone",
    "excoriation",
    "myoclonus_seizures",
    "tachypnea",
    "sweating",
    "fever",
    "frequent_yawning_sneezing",
    "nasal_stuffiness",
    "poor_feeding_vomiting",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "None to Mild",
        "No withdrawal or mild withdrawal symptoms",
        "Continue current management with comfort measures; reassess every 4-12 hours.",
    ),
    Band::new(
        3.0,
        9.0,
        "Mild to Moderate",
        "Mild to moderate withdrawal symptoms",
        "Consider methadone, morphine or clonidine per protocol; monitor every 2-4 hours and notify the attending physician.",
    ),
    Band::new(
        9.0,
        f64::INFINITY,
        "Moderate to Severe",
        "Moderate to severe withdrawal symptoms",
        "Immediate pharmacological treatment with monitoring every 1-2 hours; consider ICU-level care and specialist input.",
    ),
];

fn age_category(weeks: i64) -> (&'static str, &'static str) {
    if weeks < 37 {
        (
            "preterm",
            "For preterm infants, withdrawal may present differently with developmental immaturity.",
        )
    } else if weeks < 52 {
        (
            "term_infant",
            "For young infants, withdrawal may manifest differently than in older children.",
        )
    } else if weeks < 104 {
        (
            "young_infant",
            "For infants, use age-appropriate assessment and intervention strategies.",
        )
    } else {
        (
            "older_child",
            "For older children, consider developmental stage and communication abilities.",
        )
    }
}

impl Calculator for Wat1 {
    fn id(&self) -> &'static str {
        "wat_1_pediatric_withdrawal"
    }

    fn name(&self) -> &'static str {
        "Withdrawal Assessment Tool-1 (WAT-1)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pediatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "post_menstrual_age_weeks",
            "state_sleep_wake_cycle",
            "tremor",
            "increased_muscle_tone",
            "excoriation",
            "myoclonus_seizures",
            "tachypnea",
            "sweating",
            "fever",
            "frequent_yawning_sneezing",
            "nasal_stuffiness",
            "poor_feeding_vomiting",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let weeks = POST_MENSTRUAL_AGE.check_int(
            "post_menstrual_age_weeks",
            params.integer("post_menstrual_age_weeks")?,
        )?;
        let mut tally = Tally::new();
        for field in ITEMS {
            tally.add(field, ITEM.check_int(field, params.integer(field)?)?);
        }

        let (category, note) = age_category(weeks);
        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("WAT-1 {score}/33. {note} {}", band.interpretation))
            .with_detail("age_category", category)
            .with_detail("breakdown", tally.breakdown()))
    }
}
