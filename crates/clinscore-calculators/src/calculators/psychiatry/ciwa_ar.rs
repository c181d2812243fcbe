use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// CIWA-Ar: Clinical Institute Withdrawal Assessment for Alcohol, revised.
pub struct CiwaAr;

const ITEM: ParamRange = ParamRange::integer(0.0, 7.0);
const ORIENTATION: ParamRange = ParamRange::integer(0.0, 4.0);

const ITEMS: &[&str] = &[
    "nausea_vomiting",
    "tremor",
    "paroxysmal_sweats",
    "anxiety",
    "agitation",
    "tactile_disturbances",
    "auditory_disturbances",
    "visual_disturbances",
    "headache",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        9.0,
        "Minimal",
        "Absent or minimal withdrawal",
        "Minimal withdrawal. Pharmacological treatment is usually not required; monitor every 4-8 hours with supportive care, hydration and thiamine.",
    ),
    Band::new(
        9.0,
        20.0,
        "Mild to Moderate",
        "Mild to moderate withdrawal",
        "Mild to moderate withdrawal. Consider symptom-triggered benzodiazepine therapy and reassess every 1-2 hours.",
    ),
    Band::new(
        20.0,
        f64::INFINITY,
        "Severe",
        "Severe withdrawal",
        "Severe withdrawal with high risk of delirium tremens and seizures. Aggressive benzodiazepine treatment; consider ICU monitoring.",
    ),
];

impl Calculator for CiwaAr {
    fn id(&self) -> &'static str {
        "ciwa_ar"
    }

    fn name(&self) -> &'static str {
        "CIWA-Ar for Alcohol Withdrawal"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "nausea_vomiting",
            "tremor",
            "paroxysmal_sweats",
            "anxiety",
            "agitation",
            "tactile_disturbances",
            "auditory_disturbances",
            "visual_disturbances",
            "headache",
            "orientation",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in ITEMS {
            tally.add(field, ITEM.check_int(field, params.integer(field)?)?);
        }
        tally.add(
            "orientation",
            ORIENTATION.check_int("orientation", params.integer("orientation")?)?,
        );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("CIWA-Ar {score}/67. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
