use clinscore_core::{
    Assessment, InvalidParameter, ParamRange, Params, Result, Sex, Specialty, Tally,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// ISTH-SSC Bleeding Assessment Tool. Each bleeding domain is scored 0-4
/// and the total is compared with a population-specific normal range.
pub struct IsthBat;

const DOMAIN: ParamRange = ParamRange::integer(0.0, 4.0);

const DOMAINS: &[&str] = &[
    "epistaxis",
    "cutaneous_bleeding",
    "minor_wounds",
    "oral_cavity",
    "gi_bleeding",
    "hematuria",
    "tooth_extraction",
    "surgery",
    "menorrhagia",
    "postpartum_hemorrhage",
    "muscle_hematomas",
    "hemarthrosis",
    "other_bleeding",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CnsBleeding {
    Never,
    Subdural,
    Intracerebral,
}

impl CnsBleeding {
    pub fn points(self) -> i64 {
        match self {
            CnsBleeding::Never => 0,
            CnsBleeding::Subdural => 3,
            CnsBleeding::Intracerebral => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    AdultMale,
    AdultFemale,
}

impl AgeGroup {
    /// Highest score still considered a typical bleeding pattern.
    pub fn typical_max(self) -> i64 {
        match self {
            AgeGroup::Child => 2,
            AgeGroup::AdultMale => 3,
            AgeGroup::AdultFemale => 5,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::AdultMale => "Adult Male",
            AgeGroup::AdultFemale => "Adult Female",
        }
    }

    fn population(self) -> &'static str {
        match self {
            AgeGroup::Child => "children",
            AgeGroup::AdultMale => "adult males",
            AgeGroup::AdultFemale => "adult females",
        }
    }
}

impl Calculator for IsthBat {
    fn id(&self) -> &'static str {
        "isth_bat"
    }

    fn name(&self) -> &'static str {
        "ISTH-SCC Bleeding Assessment Tool"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "epistaxis",
            "cutaneous_bleeding",
            "minor_wounds",
            "oral_cavity",
            "gi_bleeding",
            "hematuria",
            "tooth_extraction",
            "surgery",
            "menorrhagia",
            "postpartum_hemorrhage",
            "muscle_hematomas",
            "hemarthrosis",
            "cns_bleeding",
            "other_bleeding",
            "age_group",
            "gender",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let group: AgeGroup = params.token("age_group")?;
        let sex: Sex = params.token("gender")?;
        let mismatch = matches!(
            (group, sex),
            (AgeGroup::AdultMale, Sex::Female) | (AgeGroup::AdultFemale, Sex::Male)
        );
        if mismatch {
            return Err(InvalidParameter::new("gender", "does not match age_group"));
        }

        let mut tally = Tally::new();
        for field in DOMAINS {
            tally.add(field, DOMAIN.check_int(field, params.integer(field)?)?);
        }
        tally.add("cns_bleeding", params.token::<CnsBleeding>("cns_bleeding")?.points());

        let score = tally.total();
        let typical = score <= group.typical_max();
        let (pattern, interpretation) = if typical {
            (
                "Typical",
                "Typical bleeding pattern. Low likelihood of an inherited bleeding disorder.",
            )
        } else {
            (
                "Atypical",
                "Atypical bleeding pattern. Increased likelihood of an inherited bleeding disorder; consider hemostatic laboratory evaluation.",
            )
        };

        Ok(Assessment::new(
            score,
            "points",
            format!("{} - {pattern}", group.label()),
            format!("{pattern} bleeding pattern for {}", group.population()),
            format!("Score {score} points for {}: {interpretation}", group.population()),
        )
        .with_detail("typical_max", group.typical_max())
        .with_detail("breakdown", tally.breakdown()))
    }
}
