use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Clinical Opiate Withdrawal Scale.
pub struct Cows;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingPulse {
    #[serde(rename = "<=80")]
    UpTo80 = 0,
    #[serde(rename = "81-100")]
    From81To100 = 1,
    #[serde(rename = "101-120")]
    From101To120 = 2,
    #[serde(rename = ">120")]
    Over120 = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweating {
    NoChillsFlushing = 0,
    SubjectiveChills = 1,
    FlushedMoistFace = 2,
    BeadsOnBrow = 3,
    StreamingSweat = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restlessness {
    SitsStill,
    DifficultySitting,
    FrequentShifting,
    UnableToSit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PupilSize {
    NormalPinned = 0,
    PossiblyLarger = 1,
    ModeratelyDilated = 2,
    ExtremelyDilated = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoneJointAches {
    NotPresent = 0,
    MildDiffuse = 1,
    SevereDiffuse = 2,
    UnableToSitDiscomfort = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnyNose {
    NotPresent = 0,
    NasalStuffiness = 1,
    RunnyNoseTearing = 2,
    ConstantStreaming = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiUpset {
    NoSymptoms = 0,
    StomachCramps = 1,
    NauseaLooseStool = 2,
    VomitingDiarrhea = 3,
    MultipleEpisodes = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tremor {
    NoTremor = 0,
    BarelyPerceptible = 1,
    ModerateArmsExtended = 2,
    SevereRestTremor = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anxiety {
    None = 0,
    OccasionallyAnxious = 1,
    ModeratelyAnxious = 2,
    ExtremelyAnxious = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gooseflesh {
    NoPiloerection = 0,
    BarelyPerceptible = 1,
    ProminentArms = 2,
    ExtensiveBody = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Yawning {
    NoYawning = 0,
    YawningOnceTwice = 1,
    YawningThreeTimes = 2,
    UnableToConduct = 3,
}

/// Points for each rung of a four-step item whose top rung skips ahead.
fn four_step(rung: i64, top: i64) -> i64 {
    if rung == 3 { top } else { rung }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        5.0,
        "None to Minimal",
        "None to minimal withdrawal symptoms",
        "No withdrawal treatment is necessary. Continue monitoring for symptom development.",
    ),
    Band::new(
        5.0,
        13.0,
        "Mild",
        "Mild withdrawal symptoms",
        "Mild withdrawal. Supportive care with comfort medications and hydration; monitor progression.",
    ),
    Band::new(
        13.0,
        25.0,
        "Moderate",
        "Moderate withdrawal symptoms",
        "Moderate withdrawal. Pharmacologic treatment is indicated; consider buprenorphine induction.",
    ),
    Band::new(
        25.0,
        37.0,
        "Moderately Severe",
        "Moderately severe withdrawal symptoms",
        "Moderately severe withdrawal. Medication-assisted treatment strongly recommended with close medical supervision.",
    ),
    Band::new(
        37.0,
        f64::INFINITY,
        "Severe",
        "Severe withdrawal symptoms",
        "Severe withdrawal. Immediate medical intervention, inpatient treatment and intensive monitoring.",
    ),
];

impl Calculator for Cows {
    fn id(&self) -> &'static str {
        "cows"
    }

    fn name(&self) -> &'static str {
        "Clinical Opiate Withdrawal Scale (COWS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Psychiatry
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "resting_pulse_rate",
            "sweating",
            "restlessness",
            "pupil_size",
            "bone_joint_aches",
            "runny_nose_tearing",
            "gi_upset",
            "tremor",
            "anxiety_irritability",
            "gooseflesh_skin",
            "yawning",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let restlessness = match params.token::<Restlessness>("restlessness")? {
            Restlessness::SitsStill => 0,
            Restlessness::DifficultySitting => 1,
            Restlessness::FrequentShifting => 3,
            Restlessness::UnableToSit => 5,
        };
        let gi_upset = params.token::<GiUpset>("gi_upset")? as i64;

        let pulse = params.token::<RestingPulse>("resting_pulse_rate")? as i64;
        let pupils = params.token::<PupilSize>("pupil_size")? as i64;
        let aches = params.token::<BoneJointAches>("bone_joint_aches")? as i64;
        let runny_nose = params.token::<RunnyNose>("runny_nose_tearing")? as i64;
        let tremor = params.token::<Tremor>("tremor")? as i64;
        let anxiety = params.token::<Anxiety>("anxiety_irritability")? as i64;

        let mut tally = Tally::new();
        tally
            .add("resting_pulse_rate", four_step(pulse, 4))
            .add("sweating", params.token::<Sweating>("sweating")? as i64)
            .add("restlessness", restlessness)
            .add("pupil_size", four_step(pupils, 5))
            .add("bone_joint_aches", four_step(aches, 4))
            .add("runny_nose_tearing", four_step(runny_nose, 4))
            .add("gi_upset", gi_upset)
            .add("tremor", four_step(tremor, 4))
            .add("anxiety_irritability", four_step(anxiety, 4))
            .add(
                "gooseflesh_skin",
                params.token::<Gooseflesh>("gooseflesh_skin")? as i64,
            )
            .add("yawning", params.token::<Yawning>("yawning")? as i64);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("COWS {score}/48. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
