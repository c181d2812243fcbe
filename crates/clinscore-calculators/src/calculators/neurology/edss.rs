use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Kurtzke Expanded Disability Status Scale for multiple sclerosis, derived
/// from the seven functional system grades and ambulation.
pub struct Edss;

/// (field, maximum grade)
const FUNCTIONAL_SYSTEMS: &[(&str, f64)] = &[
    ("pyramidal", 6.0),
    ("cerebellar", 5.0),
    ("brainstem", 5.0),
    ("sensory", 6.0),
    ("bowel_bladder", 6.0),
    ("visual", 6.0),
    ("cerebral", 5.0),
];

const AMBULATION: ParamRange = ParamRange::integer(0.0, 10.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Normal",
        "Normal neurological exam",
        "Normal neurological examination, grade 0 in all functional systems.",
    ),
    Band::new(
        1.0,
        2.0,
        "Minimal Disability",
        "No disability, minimal signs",
        "No disability, minimal signs in one or more functional systems.",
    ),
    Band::new(
        2.0,
        3.0,
        "Mild Disability",
        "Minimal disability in one FS",
        "Minimal disability in one functional system.",
    ),
    Band::new(
        3.0,
        4.0,
        "Moderate Disability",
        "Moderate disability in one FS",
        "Moderate disability in one functional system, or mild disability in three or four, while fully ambulatory.",
    ),
    Band::new(
        4.0,
        5.0,
        "Relatively Severe Disability",
        "Fully ambulatory without aid",
        "Fully ambulatory without aid, up and about some 12 hours a day despite relatively severe disability.",
    ),
    Band::new(
        5.0,
        6.0,
        "Disability Severe Enough",
        "Ambulatory without aid for 200m",
        "Ambulatory without aid or rest for about 200 meters; disability impairs full daily activities.",
    ),
    Band::new(
        6.0,
        7.0,
        "Assistance Required",
        "Intermittent or constant assistance required",
        "Intermittent or unilateral constant assistance (cane, crutch, brace) required to walk about 100 meters.",
    ),
    Band::new(
        7.0,
        8.0,
        "Restricted to Wheelchair",
        "Unable to walk beyond 5m",
        "Unable to walk beyond about 5 meters even with aid; essentially restricted to a wheelchair.",
    ),
    Band::new(
        8.0,
        9.0,
        "Restricted to Bed or Chair",
        "Essentially restricted to bed/chair",
        "Essentially restricted to bed or chair or perambulated in a wheelchair; retains many self-care functions.",
    ),
    Band::new(
        9.0,
        10.0,
        "Helpless Bed Patient",
        "Helpless bed patient",
        "Helpless bed patient; can communicate and eat.",
    ),
    Band::new(
        10.0,
        f64::INFINITY,
        "Death due to MS",
        "Death due to MS",
        "Death due to multiple sclerosis.",
    ),
];

/// Visual and bowel/bladder grades are converted before the step is read:
/// visual 5-6 counts as 4, bowel/bladder 6 counts as 5.
fn converted(field: &str, grade: i64) -> i64 {
    match (field, grade) {
        ("visual", g) if g >= 5 => 4,
        ("bowel_bladder", 6) => 5,
        (_, g) => g,
    }
}

/// EDSS step from converted functional system grades and ambulation.
pub fn edss_step(grades: &[i64], ambulation: i64) -> f64 {
    let count = |grade: i64| grades.iter().filter(|&&g| g == grade).count();
    let max = grades.iter().copied().max().unwrap_or(0);
    if count(2) >= 5 {
        return 5.0;
    }
    if ambulation < 5 {
        return match max {
            0 => 0.0,
            1 if count(1) == 1 => 1.0,
            1 => 1.5,
            2 if count(2) == 1 && count(1) <= 1 => 2.0,
            2 => 2.5,
            3 if count(3) == 1 && count(2) <= 1 => 3.0,
            3 => 3.5,
            _ if ambulation >= 4 => 4.5,
            _ => 4.0,
        };
    }
    let half_step_grade = if ambulation <= 6 { 4 } else { 5 };
    match ambulation {
        a if a >= 10 => 10.0,
        a if max >= half_step_grade => a as f64 + 0.5,
        a => a as f64,
    }
}

impl Calculator for Edss {
    fn id(&self) -> &'static str {
        "edss"
    }

    fn name(&self) -> &'static str {
        "Expanded Disability Status Scale (EDSS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "pyramidal",
            "cerebellar",
            "brainstem",
            "sensory",
            "bowel_bladder",
            "visual",
            "cerebral",
            "ambulation",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut grades = Vec::with_capacity(FUNCTIONAL_SYSTEMS.len());
        for (field, max) in FUNCTIONAL_SYSTEMS {
            let grade = ParamRange::integer(0.0, *max).check_int(field, params.integer(field)?)?;
            grades.push(converted(field, grade));
        }
        let ambulation = AMBULATION.check_int("ambulation", params.integer("ambulation")?)?;

        let step = edss_step(&grades, ambulation);
        let band = classify(BANDS, step);
        Ok(Assessment::from_band(step, "points", band)
            .with_interpretation(format!("EDSS {step:.1}. {}", band.interpretation)))
    }
}
