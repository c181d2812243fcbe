use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Glucose infusion rate: `rate (mL/h) × dextrose % × 10 / (weight × 60)`.
pub struct GlucoseInfusionRate;

const RATE: ParamRange = ParamRange::new(0.1, 1000.0);
const DEXTROSE: ParamRange = ParamRange::new(1.0, 50.0);
const WEIGHT: ParamRange = ParamRange::new(0.5, 200.0);

/// Peripheral lines tolerate up to about D12.5.
const PERIPHERAL_MAX_DEXTROSE: f64 = 12.5;

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        4.0,
        "Below Normal Range",
        "Insufficient glucose delivery",
        "Below the physiological requirement of 4-8 mg/kg/min. Risk of hypoglycaemia; consider increasing the rate or concentration.",
    ),
    Band::new(
        4.0,
        8.0,
        "Normal/Physiologic Range",
        "Appropriate glucose delivery",
        "Physiological glucose delivery matching endogenous production. Monitor blood glucose.",
    ),
    Band::new(
        8.0,
        12.0,
        "Moderate/Therapeutic Range",
        "Enhanced glucose delivery",
        "Above basal needs; typical for hypoglycaemia management or nutritional support. Monitor glucose closely.",
    ),
    Band::new(
        12.0,
        18.0,
        "High Therapeutic Range",
        "High glucose delivery for nutrition",
        "High glucose delivery. Watch for hyperglycaemia, and consider hyperinsulinism if this rate is needed to maintain normoglycaemia.",
    ),
    Band::new(
        18.0,
        f64::INFINITY,
        "Excessive Range",
        "Risk of metabolic complications",
        "Exceeds oxidative capacity. Risk of hyperglycaemia, lipogenesis and hepatic steatosis; reassess the prescription.",
    ),
];

pub fn glucose_infusion_rate(rate_ml_h: f64, dextrose_percent: f64, weight_kg: f64) -> f64 {
    rate_ml_h * dextrose_percent * 10.0 / (weight_kg * 60.0)
}

impl Calculator for GlucoseInfusionRate {
    fn id(&self) -> &'static str {
        "glucose_infusion_rate"
    }

    fn name(&self) -> &'static str {
        "Glucose Infusion Rate (GIR)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pediatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["infusion_rate", "dextrose_concentration", "weight"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let rate = RATE.check("infusion_rate", params.number("infusion_rate")?)?;
        let dextrose = DEXTROSE.check(
            "dextrose_concentration",
            params.number("dextrose_concentration")?,
        )?;
        let weight = WEIGHT.check("weight", params.number("weight")?)?;

        let gir = glucose_infusion_rate(rate, dextrose, weight);
        let band = classify(BANDS, gir);
        let mut interpretation = format!(
            "GIR {} mg/kg/min (D{dextrose} at {rate} mL/h, {weight} kg). {}",
            fixed(gir, 2),
            band.interpretation
        );
        if dextrose > PERIPHERAL_MAX_DEXTROSE {
            interpretation.push_str(" Dextrose above 12.5% requires central venous access.");
        }

        Ok(Assessment::from_band(round_to(gir, 2), "mg/kg/min", band)
            .with_interpretation(interpretation)
            .with_detail("fluid_ml_kg_day", round_to(rate * 24.0 / weight, 1)))
    }
}
