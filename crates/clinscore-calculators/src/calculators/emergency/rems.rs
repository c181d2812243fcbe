use clinscore_core::lookup::below;
use clinscore_core::{
    Assessment, Band, ParamRange, Params, Result, Specialty, Tally, band_index, classify,
};

use crate::Calculator;

/// Rapid Emergency Medicine Score: in-hospital mortality for non-surgical
/// emergency patients.
pub struct Rems;

const AGE: ParamRange = ParamRange::integer(0.0, 120.0);
const TEMPERATURE: ParamRange = ParamRange::new(25.0, 45.0);
const MAP: ParamRange = ParamRange::integer(20.0, 250.0);
const HEART_RATE: ParamRange = ParamRange::integer(20.0, 250.0);
const RESPIRATORY_RATE: ParamRange = ParamRange::integer(1.0, 80.0);
const SPO2: ParamRange = ParamRange::integer(50.0, 100.0);
const GCS: ParamRange = ParamRange::integer(3.0, 15.0);

// Ascending thresholds; the first row the value falls below gives the points.
const TEMPERATURE_POINTS: &[(f64, i64)] = &[
    (30.0, 4),
    (32.0, 3),
    (34.0, 2),
    (36.0, 1),
    (38.5, 0),
    (39.0, 1),
    (41.0, 3),
];
const MAP_POINTS: &[(f64, i64)] = &[(50.0, 2), (70.0, 1), (110.0, 0), (130.0, 2), (160.0, 3)];
const HEART_RATE_POINTS: &[(f64, i64)] = &[
    (40.0, 3),
    (55.0, 2),
    (70.0, 1),
    (110.0, 0),
    (140.0, 2),
    (180.0, 3),
];
const RESPIRATORY_RATE_POINTS: &[(f64, i64)] = &[
    (6.0, 3),
    (10.0, 2),
    (12.0, 1),
    (25.0, 0),
    (35.0, 2),
    (50.0, 3),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Very Low Risk",
        "Very low mortality risk",
        "Standard care and routine monitoring.",
    ),
    Band::new(
        3.0,
        6.0,
        "Low Risk",
        "Low mortality risk",
        "Close monitoring recommended.",
    ),
    Band::new(
        6.0,
        10.0,
        "Moderate Risk",
        "Moderate mortality risk",
        "Enhanced monitoring and early senior review.",
    ),
    Band::new(
        10.0,
        12.0,
        "High Risk",
        "High mortality risk",
        "Intensive monitoring; consider critical care involvement.",
    ),
    Band::new(
        12.0,
        22.0,
        "Very High Risk",
        "Very high mortality risk",
        "Critical care assessment and aggressive resuscitation.",
    ),
    Band::new(
        22.0,
        f64::INFINITY,
        "Extremely High Risk",
        "Extremely high mortality risk",
        "Immediate critical care; discuss goals of care.",
    ),
];

const MORTALITY: [&str; 6] = ["0.3%", "2%", "6.7%", "20.3%", ">20%", "approaching 100%"];

impl Calculator for Rems {
    fn id(&self) -> &'static str {
        "rems"
    }

    fn name(&self) -> &'static str {
        "Rapid Emergency Medicine Score (REMS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "body_temperature",
            "mean_arterial_pressure",
            "heart_rate",
            "respiratory_rate",
            "oxygen_saturation",
            "glasgow_coma_scale",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check("age", params.number("age")?)?;
        let temp = TEMPERATURE.check("body_temperature", params.number("body_temperature")?)?;
        let map = MAP.check("mean_arterial_pressure", params.number("mean_arterial_pressure")?)?;
        let hr = HEART_RATE.check("heart_rate", params.number("heart_rate")?)?;
        let rr = RESPIRATORY_RATE.check("respiratory_rate", params.number("respiratory_rate")?)?;
        let spo2 = SPO2.check("oxygen_saturation", params.number("oxygen_saturation")?)?;
        let gcs = GCS.check("glasgow_coma_scale", params.number("glasgow_coma_scale")?)?;

        let mut tally = Tally::new();
        tally
            .add(
                "age",
                below(&[(45.0, 0), (55.0, 2), (65.0, 3), (75.0, 5)], age, 6),
            )
            .add("body_temperature", below(TEMPERATURE_POINTS, temp, 4))
            .add("mean_arterial_pressure", below(MAP_POINTS, map, 4))
            .add("heart_rate", below(HEART_RATE_POINTS, hr, 4))
            .add("respiratory_rate", below(RESPIRATORY_RATE_POINTS, rr, 4))
            .add(
                "oxygen_saturation",
                below(&[(75.0, 4), (86.0, 3), (90.0, 2)], spo2, 0),
            )
            .add(
                "glasgow_coma_scale",
                below(&[(5.0, 4), (8.0, 3), (11.0, 2), (14.0, 1)], gcs, 0),
            );

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let interpretation = format!(
            "REMS {score} points. {} of in-hospital mortality ({}). {}",
            band.description,
            MORTALITY[band_index(BANDS, score as f64)],
            band.interpretation
        );

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("breakdown", tally.breakdown()))
    }
}
