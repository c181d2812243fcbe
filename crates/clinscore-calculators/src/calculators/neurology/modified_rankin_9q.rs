use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};

use crate::Calculator;

/// Modified Rankin Scale from the nine-question structured interview.
pub struct ModifiedRankin9q;

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "No Symptoms",
        "No symptoms at all",
        "No symptoms at all.",
    ),
    Band::new(
        1.0,
        2.0,
        "No Significant Disability",
        "Symptoms present but able to carry out all usual duties",
        "No significant disability despite symptoms; able to carry out all usual duties and activities.",
    ),
    Band::new(
        2.0,
        3.0,
        "Slight Disability",
        "Unable to carry out all previous activities but independent",
        "Slight disability; unable to carry out all previous activities but looks after own affairs without assistance.",
    ),
    Band::new(
        3.0,
        4.0,
        "Moderate Disability",
        "Requires some help but able to walk unassisted",
        "Moderate disability; requires some help but walks without assistance.",
    ),
    Band::new(
        4.0,
        5.0,
        "Moderately Severe Disability",
        "Unable to attend to bodily needs without assistance",
        "Moderately severe disability; unable to walk or attend to bodily needs without assistance.",
    ),
    Band::new(
        5.0,
        f64::INFINITY,
        "Severe Disability",
        "Bedridden and requiring constant nursing care",
        "Severe disability; bedridden, incontinent and requiring constant nursing care.",
    ),
];

/// The questionnaire walks down from the most severe answer.
pub fn rankin_grade(answers: &Answers) -> i64 {
    if answers.bedridden_nursing_care {
        5
    } else if answers.need_help_personal_care || answers.need_help_walking {
        4
    } else if answers.need_help_basic_tasks || answers.need_help_shopping_travel {
        3
    } else if !answers.same_work || !answers.keep_hobbies || !answers.maintain_social_ties {
        2
    } else if answers.symptoms_bothering {
        1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub symptoms_bothering: bool,
    pub same_work: bool,
    pub keep_hobbies: bool,
    pub maintain_social_ties: bool,
    pub need_help_basic_tasks: bool,
    pub need_help_shopping_travel: bool,
    pub need_help_walking: bool,
    pub need_help_personal_care: bool,
    pub bedridden_nursing_care: bool,
}

impl Answers {
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(Self {
            symptoms_bothering: params.yes_no("symptoms_bothering")?,
            same_work: params.yes_no("same_work")?,
            keep_hobbies: params.yes_no("keep_hobbies")?,
            maintain_social_ties: params.yes_no("maintain_social_ties")?,
            need_help_basic_tasks: params.yes_no("need_help_basic_tasks")?,
            need_help_shopping_travel: params.yes_no("need_help_shopping_travel")?,
            need_help_walking: params.yes_no("need_help_walking")?,
            need_help_personal_care: params.yes_no("need_help_personal_care")?,
            bedridden_nursing_care: params.yes_no("bedridden_nursing_care")?,
        })
    }
}

impl Calculator for ModifiedRankin9q {
    fn id(&self) -> &'static str {
        "modified_rankin_9q"
    }

    fn name(&self) -> &'static str {
        "Modified Rankin Scale 9-Question (mRS-9Q)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "symptoms_bothering",
            "same_work",
            "keep_hobbies",
            "maintain_social_ties",
            "need_help_basic_tasks",
            "need_help_shopping_travel",
            "need_help_walking",
            "need_help_personal_care",
            "bedridden_nursing_care",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let grade = rankin_grade(&Answers::from_params(params)?);
        let band = classify(BANDS, grade as f64);
        Ok(Assessment::from_band(grade, "points", band)
            .with_interpretation(format!("mRS {grade}. {}", band.interpretation)))
    }
}
