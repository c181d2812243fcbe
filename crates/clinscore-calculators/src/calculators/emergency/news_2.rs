use clinscore_core::{Assessment, Params, Result, Specialty, Tally};
use serde::{Deserialize, Serialize};

use super::news::{HeartRate, RespiratoryRate, SystolicBp, Temperature, grade};
use crate::Calculator;

/// NEWS2 (RCP 2017): NEWS with a second SpO₂ scale for hypercapnic
/// respiratory failure and new confusion folded into consciousness.
pub struct News2;

/// Saturation bands from both SpO₂ scales. Either scale's tokens are
/// accepted and mapped onto the scale in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Saturation {
    #[serde(rename = "83_or_less")]
    UpTo83,
    #[serde(rename = "84_to_85")]
    From84To85,
    #[serde(rename = "86_to_87")]
    From86To87,
    #[serde(rename = "88_to_92")]
    From88To92,
    #[serde(rename = "91_or_less")]
    UpTo91,
    #[serde(rename = "92_to_93")]
    From92To93,
    #[serde(rename = "93_to_94")]
    From93To94,
    #[serde(rename = "94_to_95")]
    From94To95,
    #[serde(rename = "95_to_96")]
    From95To96,
    #[serde(rename = "96_or_more")]
    From96,
    #[serde(rename = "97_or_more")]
    From97,
}

impl Saturation {
    /// Scale 1, for patients without hypercapnic failure.
    pub fn scale_1(self) -> i64 {
        use Saturation::*;
        match self {
            UpTo83 | From84To85 | From86To87 | UpTo91 => 3,
            From88To92 | From92To93 => 2,
            From93To94 | From94To95 => 1,
            From95To96 | From96 | From97 => 0,
        }
    }

    /// Scale 2: 88-92% is the target; high saturations score only on oxygen.
    pub fn scale_2(self, on_oxygen: bool) -> i64 {
        use Saturation::*;
        match (self, on_oxygen) {
            (UpTo83 | UpTo91, _) => 3,
            (From84To85, _) => 2,
            (From86To87, _) => 1,
            (From88To92 | From92To93, _) => 0,
            (From93To94, true) => 1,
            (From95To96, true) => 2,
            (From97, true) => 3,
            (From94To95 | From96, true) => 0,
            (From93To94 | From94To95 | From95To96 | From96 | From97, false) => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consciousness {
    Alert,
    /// New confusion, or responds only to voice or pain, or unresponsive.
    Altered,
}

impl Calculator for News2 {
    fn id(&self) -> &'static str {
        "news_2"
    }

    fn name(&self) -> &'static str {
        "National Early Warning Score 2 (NEWS2)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "respiratory_rate",
            "hypercapnic_respiratory_failure",
            "oxygen_saturation",
            "supplemental_oxygen",
            "temperature",
            "systolic_bp",
            "heart_rate",
            "consciousness",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let hypercapnic = params.yes_no("hypercapnic_respiratory_failure")?;
        let on_oxygen = params.yes_no("supplemental_oxygen")?;
        let saturation: Saturation = params.token("oxygen_saturation")?;
        let spo2 = if hypercapnic {
            saturation.scale_2(on_oxygen)
        } else {
            saturation.scale_1()
        };
        let consciousness: Consciousness = params.token("consciousness")?;

        let mut tally = Tally::new();
        tally
            .add(
                "respiratory_rate",
                params.token::<RespiratoryRate>("respiratory_rate")?.points(),
            )
            .add("oxygen_saturation", spo2)
            .flag("supplemental_oxygen", on_oxygen, 2)
            .add(
                "temperature",
                params.token::<Temperature>("temperature")?.points(),
            )
            .add(
                "systolic_bp",
                params.token::<SystolicBp>("systolic_bp")?.points(),
            )
            .add(
                "heart_rate",
                params.token::<HeartRate>("heart_rate")?.points(),
            )
            .flag("consciousness", consciousness == Consciousness::Altered, 3);

        let total = tally.total();
        let red = tally.max_item() == Some(3);
        let (stage, description, interpretation) = grade(total, red);

        Ok(
            Assessment::new(total, "points", stage, description, interpretation)
                .with_detail("red_score", red)
                .with_detail("spo2_scale", if hypercapnic { 2 } else { 1 })
                .with_detail("breakdown", tally.breakdown()),
        )
    }
}
