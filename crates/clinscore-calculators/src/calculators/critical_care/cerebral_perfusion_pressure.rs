use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, classify,
};

use crate::Calculator;

/// Cerebral perfusion pressure: `MAP − ICP`.
pub struct CerebralPerfusionPressure;

const MAP: ParamRange = ParamRange::new(30.0, 200.0);
const ICP: ParamRange = ParamRange::new(0.0, 80.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        30.0,
        "Critical",
        "Critically low cerebral perfusion",
        "Severe cerebral hypoperfusion with imminent risk of ischemia. Immediate measures to raise MAP and lower ICP are required.",
    ),
    Band::new(
        30.0,
        50.0,
        "Severely Low",
        "High risk of cerebral ischemia",
        "High risk of cerebral ischemia. Urgent intervention to restore perfusion.",
    ),
    Band::new(
        50.0,
        60.0,
        "Low",
        "Below optimal range",
        "CPP below the 60 mmHg target. Consider vasopressors or ICP-lowering therapy.",
    ),
    Band::new(
        60.0,
        80.0,
        "Optimal",
        "Target range for cerebral perfusion",
        "CPP within the 60-80 mmHg target range. Maintain current management.",
    ),
    Band::new(
        80.0,
        100.0,
        "Adequate",
        "Adequate cerebral perfusion",
        "Adequate cerebral perfusion. Monitor for hyperperfusion in patients with impaired autoregulation.",
    ),
    Band::new(
        100.0,
        f64::INFINITY,
        "High",
        "Elevated cerebral perfusion pressure",
        "Elevated CPP may worsen cerebral edema. Balance perfusion against pressure control.",
    ),
];

impl Calculator for CerebralPerfusionPressure {
    fn id(&self) -> &'static str {
        "cerebral_perfusion_pressure"
    }

    fn name(&self) -> &'static str {
        "Cerebral Perfusion Pressure (CPP)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::CriticalCare
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["mean_arterial_pressure", "intracranial_pressure"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let map = MAP.check("mean_arterial_pressure", params.number("mean_arterial_pressure")?)?;
        let icp = ICP.check("intracranial_pressure", params.number("intracranial_pressure")?)?;
        if icp >= map {
            return Err(InvalidParameter::new(
                "intracranial_pressure",
                "must be lower than mean_arterial_pressure",
            ));
        }

        let cpp = map - icp;
        let band = classify(BANDS, cpp);
        Ok(Assessment::from_band(round_to(cpp, 1), "mmHg", band)
            .with_interpretation(format!(
                "CPP {} mmHg. {}",
                fixed(cpp, 1),
                band.interpretation
            ))
            .with_detail("is_adequate", cpp >= 60.0)
            .with_detail("is_critical", cpp < 50.0))
    }
}
