use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, classify,
};

use crate::Calculator;

/// Friedewald LDL cholesterol: `TC - HDL - TG/5` (mg/dL).
pub struct LdlCalculated;

const TOTAL_CHOLESTEROL: ParamRange = ParamRange::new(50.0, 1000.0);
const HDL: ParamRange = ParamRange::new(10.0, 200.0);
const TRIGLYCERIDES: ParamRange = ParamRange::new(30.0, 5000.0);

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        100.0,
        "Optimal",
        "Optimal LDL level",
        "LDL at goal for most patients.",
    ),
    Band::new(
        100.0,
        130.0,
        "Near Optimal",
        "Near optimal LDL level",
        "Lifestyle modification; treat if high cardiovascular risk.",
    ),
    Band::new(
        130.0,
        160.0,
        "Borderline High",
        "Borderline high LDL level",
        "Lifestyle modification; consider statin therapy based on overall risk.",
    ),
    Band::new(
        160.0,
        190.0,
        "High",
        "High LDL level",
        "Statin therapy is generally indicated alongside lifestyle modification.",
    ),
    Band::new(
        190.0,
        f64::INFINITY,
        "Very High",
        "Very high LDL level",
        "High-intensity statin therapy is indicated; evaluate for familial hypercholesterolemia.",
    ),
];

fn accuracy(tg: f64, ldl: f64) -> &'static str {
    if tg > 400.0 {
        "Poor"
    } else if (tg > 200.0 && !(70.0..=130.0).contains(&ldl)) || tg < 100.0 {
        "Moderate"
    } else {
        "Good"
    }
}

impl Calculator for LdlCalculated {
    fn id(&self) -> &'static str {
        "ldl_calculated"
    }

    fn name(&self) -> &'static str {
        "LDL Calculated (Friedewald)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["total_cholesterol", "hdl_cholesterol", "triglycerides"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let tc = TOTAL_CHOLESTEROL.check("total_cholesterol", params.number("total_cholesterol")?)?;
        let hdl = HDL.check("hdl_cholesterol", params.number("hdl_cholesterol")?)?;
        let tg = TRIGLYCERIDES.check("triglycerides", params.number("triglycerides")?)?;
        if hdl >= tc {
            return Err(InvalidParameter::new(
                "hdl_cholesterol",
                "must be lower than total_cholesterol",
            ));
        }

        let ldl = round_to(tc - hdl - tg / 5.0, 1);
        let band = classify(BANDS, ldl);
        let accuracy = accuracy(tg, ldl);
        let mut interpretation =
            format!("Calculated LDL {} mg/dL. {}", fixed(ldl, 1), band.interpretation);
        if tg > 400.0 {
            interpretation.push_str(
                " Triglycerides above 400 mg/dL make the Friedewald estimate unreliable; measure LDL directly.",
            );
        }

        Ok(Assessment::from_band(ldl, "mg/dL", band)
            .with_interpretation(interpretation)
            .with_detail("accuracy", accuracy))
    }
}
