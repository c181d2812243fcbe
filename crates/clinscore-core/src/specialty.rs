use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical specialty a calculator is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Specialty {
    Cardiology,
    Emergency,
    CriticalCare,
    Hematology,
    Oncology,
    Gastroenterology,
    Nephrology,
    Neurology,
    Psychiatry,
    Pulmonology,
    Endocrinology,
    Pediatrics,
    Rheumatology,
    Geriatrics,
    General,
}

impl Specialty {
    pub const ALL: [Specialty; 15] = [
        Specialty::Cardiology,
        Specialty::Emergency,
        Specialty::CriticalCare,
        Specialty::Hematology,
        Specialty::Oncology,
        Specialty::Gastroenterology,
        Specialty::Nephrology,
        Specialty::Neurology,
        Specialty::Psychiatry,
        Specialty::Pulmonology,
        Specialty::Endocrinology,
        Specialty::Pediatrics,
        Specialty::Rheumatology,
        Specialty::Geriatrics,
        Specialty::General,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiology",
            Specialty::Emergency => "emergency",
            Specialty::CriticalCare => "critical_care",
            Specialty::Hematology => "hematology",
            Specialty::Oncology => "oncology",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::Nephrology => "nephrology",
            Specialty::Neurology => "neurology",
            Specialty::Psychiatry => "psychiatry",
            Specialty::Pulmonology => "pulmonology",
            Specialty::Endocrinology => "endocrinology",
            Specialty::Pediatrics => "pediatrics",
            Specialty::Rheumatology => "rheumatology",
            Specialty::Geriatrics => "geriatrics",
            Specialty::General => "general",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|sp| sp.as_str() == s)
            .ok_or_else(|| format!("unknown specialty: {s}"))
    }
}
