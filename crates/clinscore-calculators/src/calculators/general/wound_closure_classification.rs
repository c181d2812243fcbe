use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Wound closure decision: primary, secondary or tertiary (delayed primary)
/// closure from contamination, tissue loss, timing, perfusion and location.
pub struct WoundClosureClassification;

const HOURS: ParamRange = ParamRange::new(0.0, 168.0);

/// Ideal window for primary closure, hours.
const IDEAL_WINDOW: f64 = 8.0;
/// Extended window for the face, scalp and well-vascularised wounds, hours.
const EXTENDED_WINDOW: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contamination {
    Clean,
    Contaminated,
    GrosslyContaminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TissueLoss {
    Minimal,
    Moderate,
    Significant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vascularization {
    WellVascularized,
    ModeratelyVascularized,
    PoorlyVascularized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    FaceScalp,
    Extremities,
    Trunk,
    HandsFeet,
    Joints,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Closure {
    PrimaryClosure,
    SecondaryClosure,
    TertiaryClosure,
}

impl Closure {
    fn label(self) -> &'static str {
        match self {
            Closure::PrimaryClosure => "primary_closure",
            Closure::SecondaryClosure => "secondary_closure",
            Closure::TertiaryClosure => "tertiary_closure",
        }
    }

    fn stage(self) -> (&'static str, &'static str) {
        match self {
            Closure::PrimaryClosure => ("Primary Closure", "Direct surgical closure indicated"),
            Closure::SecondaryClosure => ("Secondary Closure", "Healing by secondary intention"),
            Closure::TertiaryClosure => (
                "Tertiary (Delayed Primary) Closure",
                "Delayed closure after observation",
            ),
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            Closure::PrimaryClosure => "Irrigate, debride as needed and close primarily with sutures, staples or adhesive. Review for infection in 48-72 hours.",
            Closure::SecondaryClosure => "Leave open to granulate with moist dressings and regular wound care. Consider negative-pressure therapy for large defects.",
            Closure::TertiaryClosure => "Debride and irrigate, pack open and reassess after 3-7 days of observation; close once the wound is clean and free of infection.",
        }
    }
}

/// Latest time, in hours, at which a clean wound may still be closed primarily.
pub fn primary_window(location: Location, vascularization: Vascularization) -> f64 {
    if location == Location::FaceScalp || vascularization == Vascularization::WellVascularized {
        EXTENDED_WINDOW
    } else {
        IDEAL_WINDOW
    }
}

/// Returns the closure type and the rule that selected it.
pub fn classify_wound(
    contamination: Contamination,
    tissue_loss: TissueLoss,
    hours: f64,
    vascularization: Vascularization,
    location: Location,
) -> (Closure, &'static str) {
    if tissue_loss == TissueLoss::Significant {
        return (
            Closure::SecondaryClosure,
            "Significant tissue loss prevents tension-free primary closure",
        );
    }
    if contamination == Contamination::GrosslyContaminated {
        return (
            Closure::TertiaryClosure,
            "Grossly contaminated wound requires debridement and observation",
        );
    }
    if contamination == Contamination::Clean
        && hours <= primary_window(location, vascularization)
        && !(vascularization == Vascularization::PoorlyVascularized && hours > IDEAL_WINDOW)
    {
        return (
            Closure::PrimaryClosure,
            "Clean wound presenting within the primary closure window",
        );
    }
    if contamination == Contamination::Contaminated || hours > EXTENDED_WINDOW {
        return (
            Closure::TertiaryClosure,
            "Contaminated wound or delayed presentation requires observation before closure",
        );
    }
    (
        Closure::SecondaryClosure,
        "Wound characteristics favour healing by secondary intention",
    )
}

impl Calculator for WoundClosureClassification {
    fn id(&self) -> &'static str {
        "wound_closure_classification"
    }

    fn name(&self) -> &'static str {
        "Wound Closure Classification"
    }

    fn specialty(&self) -> Specialty {
        Specialty::General
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "contamination_level",
            "tissue_loss",
            "time_since_injury",
            "vascularization",
            "wound_location",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let contamination = params.token::<Contamination>("contamination_level")?;
        let tissue_loss = params.token::<TissueLoss>("tissue_loss")?;
        let hours = HOURS.check("time_since_injury", params.number("time_since_injury")?)?;
        let vascularization = params.token::<Vascularization>("vascularization")?;
        let location = params.token::<Location>("wound_location")?;

        let (closure, rationale) =
            classify_wound(contamination, tissue_loss, hours, vascularization, location);
        let (stage, description) = closure.stage();

        Ok(Assessment::new(
            closure.label(),
            "categorical",
            stage,
            description,
            format!("{rationale} ({hours:.1} h since injury). {}", closure.guidance()),
        )
        .with_detail("rationale", rationale))
    }
}
