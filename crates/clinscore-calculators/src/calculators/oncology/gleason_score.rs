use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Gleason score for prostate adenocarcinoma with ISUP grade group.
pub struct GleasonScore;

const GRADE: ParamRange = ParamRange::integer(3.0, 5.0);

pub static BANDS: &[Band] = &[
    Band::new(
        6.0,
        7.0,
        "Low-Grade Cancer (Grade Group 1)",
        "Well-differentiated, favorable prognosis",
        "Low-grade disease; candidates may be suitable for active surveillance.",
    ),
    Band::new(
        7.0,
        8.0,
        "Intermediate-Grade Cancer (Grade Group 2-3)",
        "Moderately differentiated, intermediate prognosis",
        "Intermediate-grade disease. Definitive local therapy is usually recommended; 4+3 carries a worse prognosis than 3+4.",
    ),
    Band::new(
        8.0,
        9.0,
        "High-Grade Cancer (Grade Group 4)",
        "Poorly differentiated, unfavorable prognosis",
        "High-grade disease. Multimodal therapy and staging for metastases are recommended.",
    ),
    Band::new(
        9.0,
        f64::INFINITY,
        "Very High-Grade Cancer (Grade Group 5)",
        "Very poorly differentiated, very unfavorable prognosis",
        "Very high-grade disease with high risk of progression. Aggressive multimodal therapy is recommended.",
    ),
];

/// ISUP grade group from the primary and secondary patterns.
pub fn grade_group(primary: i64, secondary: i64) -> i64 {
    match primary + secondary {
        ..=6 => 1,
        7 if primary == 3 => 2,
        7 => 3,
        8 => 4,
        _ => 5,
    }
}

fn pattern_description(grade: i64) -> &'static str {
    match grade {
        3 => "well-formed glands",
        4 => "fused, ill-defined or cribriform glands",
        _ => "no glandular formation",
    }
}

impl Calculator for GleasonScore {
    fn id(&self) -> &'static str {
        "gleason_score"
    }

    fn name(&self) -> &'static str {
        "Gleason Score for Prostate Cancer"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["primary_grade", "secondary_grade"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let primary = GRADE.check_int("primary_grade", params.integer("primary_grade")?)?;
        let secondary = GRADE.check_int("secondary_grade", params.integer("secondary_grade")?)?;

        let total = primary + secondary;
        let group = grade_group(primary, secondary);
        let band = classify(BANDS, total as f64);

        Ok(Assessment::from_band(total, "points", band)
            .with_interpretation(format!(
                "Gleason {primary}+{secondary}={total}, Grade Group {group}. Primary pattern: {}; secondary pattern: {}. {}",
                pattern_description(primary),
                pattern_description(secondary),
                band.interpretation
            ))
            .with_detail("grade_group", group)
            .with_detail("pattern", format!("{primary}+{secondary}")))
    }
}
