use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Clinical Disease Activity Index for rheumatoid arthritis:
/// `TJC28 + SJC28 + patient global + provider global`, 0 to 76.
pub struct CdaiRheumatoidArthritis;

const JOINTS: ParamRange = ParamRange::integer(0.0, 28.0);
const GLOBAL: ParamRange = ParamRange::new(0.0, 10.0);

// Limits are inclusive upper bounds on a one-decimal score.
pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.85,
        "Remission",
        "Disease in remission",
        "Remission (CDAI 2.8 or less). Maintain current therapy; consider cautious tapering if remission is sustained.",
    ),
    Band::new(
        2.85,
        10.05,
        "Low Activity",
        "Low disease activity",
        "Low disease activity (CDAI above 2.8 to 10). An acceptable target; continue therapy and monitor.",
    ),
    Band::new(
        10.05,
        22.05,
        "Moderate Activity",
        "Moderate disease activity",
        "Moderate disease activity (CDAI above 10 to 22). Consider intensifying treatment in a treat-to-target strategy.",
    ),
    Band::new(
        22.05,
        f64::INFINITY,
        "High Activity",
        "High disease activity",
        "High disease activity (CDAI above 22). Intensify therapy, including escalation to biologic or targeted synthetic DMARDs.",
    ),
];

impl Calculator for CdaiRheumatoidArthritis {
    fn id(&self) -> &'static str {
        "cdai_rheumatoid_arthritis"
    }

    fn name(&self) -> &'static str {
        "Clinical Disease Activity Index (CDAI) for Rheumatoid Arthritis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Rheumatology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "tender_joint_count",
            "swollen_joint_count",
            "patient_global_activity",
            "provider_global_activity",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let tender = JOINTS.check_int("tender_joint_count", params.integer("tender_joint_count")?)?;
        let swollen =
            JOINTS.check_int("swollen_joint_count", params.integer("swollen_joint_count")?)?;
        let patient = GLOBAL.check(
            "patient_global_activity",
            params.number("patient_global_activity")?,
        )?;
        let provider = GLOBAL.check(
            "provider_global_activity",
            params.number("provider_global_activity")?,
        )?;

        let cdai = round_to((tender + swollen) as f64 + patient + provider, 1);
        let band = classify(BANDS, cdai);
        Ok(Assessment::from_band(cdai, "points", band)
            .with_interpretation(format!("CDAI {}. {}", fixed(cdai, 1), band.interpretation))
            .with_detail("joint_count_total", tender + swollen))
    }
}
