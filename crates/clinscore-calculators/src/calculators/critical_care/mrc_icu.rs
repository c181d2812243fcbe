use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Medication Regimen Complexity-ICU score.
pub struct MrcIcu;

/// Per-agent counts: (field, points per agent, maximum count).
const COUNTED: &[(&str, i64, f64)] = &[
    ("aminoglycosides", 3, 5.0),
    ("antiarrhythmics", 1, 5.0),
    ("anticoagulants", 1, 5.0),
    ("anticonvulsants", 3, 5.0),
    ("azole_antifungals", 2, 5.0),
    ("blood_products", 2, 10.0),
    ("chemotherapy", 3, 5.0),
    ("vasopressors_inotropes", 1, 5.0),
    ("continuous_opioid_infusions", 2, 3.0),
    ("continuous_sedative_infusions", 2, 3.0),
    ("other_high_complexity_meds", 2, 20.0),
];

const FLAGGED: &[(&str, i64)] = &[
    ("amphotericin_b", 1),
    ("argatroban", 2),
    ("clozapine", 3),
    ("digoxin", 3),
    ("vancomycin", 3),
    ("continuous_infusion_crystalloids", 1),
    ("parenteral_nutrition", 2),
    ("insulin_infusion", 1),
    ("prn_opioids", 1),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Low Complexity",
        "Low medication regimen complexity",
        "Relatively simple medication regimen. Routine pharmacist review.",
    ),
    Band::new(
        10.0,
        20.0,
        "Moderate Complexity",
        "Moderate medication regimen complexity",
        "Intermediate regimen complexity. Regular pharmacist involvement and monitoring for drug interactions are advised.",
    ),
    Band::new(
        20.0,
        f64::INFINITY,
        "High Complexity",
        "High medication regimen complexity",
        "Complex medication regimen with elevated risk of adverse drug events. Dedicated critical care pharmacist involvement is recommended.",
    ),
];

impl Calculator for MrcIcu {
    fn id(&self) -> &'static str {
        "mrc_icu"
    }

    fn name(&self) -> &'static str {
        "Medication Regimen Complexity-ICU (MRC-ICU)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::CriticalCare
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "aminoglycosides",
            "amphotericin_b",
            "antiarrhythmics",
            "anticoagulants",
            "anticonvulsants",
            "argatroban",
            "azole_antifungals",
            "blood_products",
            "chemotherapy",
            "clozapine",
            "digoxin",
            "vancomycin",
            "continuous_infusion_crystalloids",
            "vasopressors_inotropes",
            "continuous_opioid_infusions",
            "continuous_sedative_infusions",
            "parenteral_nutrition",
            "insulin_infusion",
            "prn_opioids",
            "other_high_complexity_meds",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for (field, points, max) in COUNTED {
            let count = ParamRange::integer(0.0, *max).check_int(field, params.integer(field)?)?;
            tally.add(field, count * points);
        }
        for (field, points) in FLAGGED {
            tally.flag(field, params.yes_no(field)?, *points);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("MRC-ICU {score} points. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
