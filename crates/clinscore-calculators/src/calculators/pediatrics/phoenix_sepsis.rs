use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty, Tally};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Calculator;

/// Phoenix Sepsis Score (Society of Critical Care Medicine, 2024).
///
/// Four organ systems in children with suspected infection. Sepsis is a total
/// of 2 or more; septic shock is sepsis with at least one cardiovascular
/// point. Laboratory inputs are optional and score 0 when not measured.
pub struct PhoenixSepsis;

const AGE: ParamRange = ParamRange::integer(0.0, 17.0);
const PF_RATIO: ParamRange = ParamRange::above(0.0, 700.0);
const SF_RATIO: ParamRange = ParamRange::above(0.0, 500.0);
const VASOACTIVES: ParamRange = ParamRange::integer(0.0, 6.0);
const LACTATE: ParamRange = ParamRange::new(0.0, 30.0);
const MAP: ParamRange = ParamRange::integer(5.0, 200.0);
const PLATELETS: ParamRange = ParamRange::new(0.0, 2000.0);
const INR: ParamRange = ParamRange::new(0.5, 20.0);
const D_DIMER: ParamRange = ParamRange::new(0.0, 100.0);
const FIBRINOGEN: ParamRange = ParamRange::new(0.0, 15.0);
const GCS: ParamRange = ParamRange::integer(3.0, 15.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespiratorySupport {
    None,
    SupplementalOxygen,
    HighFlowNasalCannula,
    NonInvasiveVentilation,
    InvasiveMechanicalVentilation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PupilReactivity {
    BothReactive,
    /// Unilateral fixed pupil; only bilateral fixed pupils score.
    OneFixed,
    BothFixed,
}

/// Oxygenation measured as PaO2:FiO2 or, failing that, SpO2:FiO2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Oxygenation {
    PaO2FiO2(f64),
    SpO2FiO2(f64),
}

impl Oxygenation {
    /// 0: normal, 1: below 400/292, 2: below 200/220, 3: below 100/148.
    fn severity(self) -> i64 {
        let (value, cutoffs) = match self {
            Oxygenation::PaO2FiO2(v) => (v, [400.0, 200.0, 100.0]),
            Oxygenation::SpO2FiO2(v) => (v, [292.0, 220.0, 148.0]),
        };
        cutoffs.iter().filter(|&&c| value < c).count() as i64
    }
}

pub fn respiratory_points(support: RespiratorySupport, oxygenation: Option<Oxygenation>) -> i64 {
    let Some(oxygenation) = oxygenation else {
        return 0;
    };
    let severity = oxygenation.severity();
    match support {
        RespiratorySupport::None => 0,
        RespiratorySupport::InvasiveMechanicalVentilation => severity,
        _ => severity.min(1),
    }
}

/// Age-specific MAP cut-offs (mmHg): below the first scores 2, below the
/// second scores 1.
fn map_cutoffs(age_years: i64) -> (i64, i64) {
    match age_years {
        0 => (25, 39),
        1 => (31, 44),
        2..=4 => (32, 45),
        5..=11 => (36, 49),
        _ => (38, 52),
    }
}

pub fn cardiovascular_points(
    vasoactives: i64,
    lactate: Option<f64>,
    map: Option<i64>,
    age_years: i64,
) -> i64 {
    let drugs = vasoactives.min(2);
    let lactate = match lactate {
        Some(l) if l >= 11.0 => 2,
        Some(l) if l >= 5.0 => 1,
        _ => 0,
    };
    let (severe, low) = map_cutoffs(age_years);
    let pressure = match map {
        Some(m) if m < severe => 2,
        Some(m) if m < low => 1,
        _ => 0,
    };
    drugs + lactate + pressure
}

impl Calculator for PhoenixSepsis {
    fn id(&self) -> &'static str {
        "phoenix_sepsis"
    }

    fn name(&self) -> &'static str {
        "Phoenix Sepsis Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pediatrics
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "suspected_infection",
            "respiratory_support",
            "pao2_fio2_ratio",
            "spo2_fio2_ratio",
            "vasoactive_medications",
            "lactate",
            "mean_arterial_pressure",
            "platelets",
            "inr",
            "d_dimer",
            "fibrinogen",
            "glasgow_coma_scale",
            "pupil_reactivity",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let infection = params.yes_no("suspected_infection")?;
        let support = params.token::<RespiratorySupport>("respiratory_support")?;
        let pf = optional(params, "pao2_fio2_ratio", PF_RATIO)?;
        let sf = optional(params, "spo2_fio2_ratio", SF_RATIO)?;
        let vasoactives = VASOACTIVES.check_int(
            "vasoactive_medications",
            params.integer("vasoactive_medications")?,
        )?;
        let lactate = optional(params, "lactate", LACTATE)?;
        let map = params
            .optional_integer("mean_arterial_pressure")?
            .map(|v| MAP.check_int("mean_arterial_pressure", v))
            .transpose()?;
        let platelets = optional(params, "platelets", PLATELETS)?;
        let inr = optional(params, "inr", INR)?;
        let d_dimer = optional(params, "d_dimer", D_DIMER)?;
        let fibrinogen = optional(params, "fibrinogen", FIBRINOGEN)?;
        let gcs = GCS.check_int("glasgow_coma_scale", params.integer("glasgow_coma_scale")?)?;
        let pupils = params.token::<PupilReactivity>("pupil_reactivity")?;

        if !infection {
            return Ok(Assessment::new(
                0,
                "points",
                "Not Applicable",
                "No suspected infection",
                "The Phoenix criteria apply only to children with suspected or confirmed infection.",
            ));
        }

        let oxygenation = pf
            .map(Oxygenation::PaO2FiO2)
            .or(sf.map(Oxygenation::SpO2FiO2));

        let mut coagulation = Tally::new();
        coagulation
            .flag("platelets", platelets.is_some_and(|p| p < 100.0), 1)
            .flag("inr", inr.is_some_and(|v| v > 1.3), 1)
            .flag("d_dimer", d_dimer.is_some_and(|v| v > 2.0), 1)
            .flag("fibrinogen", fibrinogen.is_some_and(|v| v < 1.0), 1);

        let neurologic = if pupils == PupilReactivity::BothFixed {
            2
        } else if gcs <= 10 {
            1
        } else {
            0
        };

        let mut systems = Tally::new();
        systems
            .add("respiratory", respiratory_points(support, oxygenation))
            .add(
                "cardiovascular",
                cardiovascular_points(vasoactives, lactate, map, age),
            )
            .add("coagulation", coagulation.total().min(2))
            .add("neurologic", neurologic);

        let score = systems.total();
        let cardiovascular = systems.points("cardiovascular").unwrap_or(0);
        let sepsis = score >= 2;
        let shock = sepsis && cardiovascular >= 1;

        let (stage, description, guidance) = match (sepsis, shock) {
            (true, true) => (
                "Septic Shock",
                "Meets criteria for septic shock",
                "Sepsis with cardiovascular dysfunction. Resuscitate, start antimicrobials within the hour and admit to intensive care.",
            ),
            (true, false) => (
                "Sepsis",
                "Meets criteria for sepsis",
                "Potentially life-threatening organ dysfunction. Prompt antimicrobials, source control and close monitoring for shock.",
            ),
            _ => (
                "No Sepsis",
                "Score does not meet sepsis criteria",
                "Does not meet Phoenix sepsis criteria (2 or more points). Continue to treat the infection and reassess if the child deteriorates.",
            ),
        };

        Ok(Assessment::new(
            score,
            "points",
            stage,
            description,
            format!("Phoenix Sepsis Score {score} points. {guidance}"),
        )
        .with_detail("component_scores", systems.breakdown())
        .with_detail(
            "clinical_status",
            json!({ "sepsis": sepsis, "septic_shock": shock }),
        ))
    }
}

fn optional(params: &Params, field: &str, range: ParamRange) -> Result<Option<f64>> {
    params
        .optional_number(field)?
        .map(|v| range.check(field, v))
        .transpose()
}
