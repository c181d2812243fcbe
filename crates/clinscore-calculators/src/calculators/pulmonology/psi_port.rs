use clinscore_core::{
    Assessment, Band, ParamRange, Params, Result, Sex, Specialty, Tally, classify,
};

use crate::Calculator;

/// Pneumonia Severity Index (PORT score).
///
/// Step one screens for Class I: age 50 or under with none of the listed
/// comorbidities or abnormal findings. Everyone else is scored with age in
/// years plus weighted findings and placed in Classes II-V.
pub struct PsiPort;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const RESPIRATORY_RATE: ParamRange = ParamRange::integer(5.0, 60.0);
const SYSTOLIC: ParamRange = ParamRange::integer(50.0, 250.0);
const TEMPERATURE: ParamRange = ParamRange::new(30.0, 45.0);
const PULSE: ParamRange = ParamRange::integer(30.0, 200.0);
const BUN: ParamRange = ParamRange::new(1.0, 200.0);
const SODIUM: ParamRange = ParamRange::new(100.0, 170.0);
const GLUCOSE: ParamRange = ParamRange::new(30.0, 800.0);
const HEMATOCRIT: ParamRange = ParamRange::new(10.0, 70.0);
const PH: ParamRange = ParamRange::new(6.5, 8.0);
const PAO2: ParamRange = ParamRange::new(20.0, 200.0);

/// (field, points)
const COMORBIDITIES: &[(&str, i64)] = &[
    ("nursing_home_resident", 10),
    ("neoplastic_disease", 30),
    ("liver_disease", 20),
    ("congestive_heart_failure", 10),
    ("cerebrovascular_disease", 10),
    ("renal_disease", 10),
];

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        71.0,
        "Class II (Low Risk)",
        "Low mortality risk",
        "Low risk for mortality (30-day mortality under 1%). Outpatient treatment recommended.",
    ),
    Band::new(
        71.0,
        91.0,
        "Class III (Low Risk)",
        "Low mortality risk",
        "Low risk for mortality (30-day mortality under 3%). Outpatient treatment or brief observation admission.",
    ),
    Band::new(
        91.0,
        131.0,
        "Class IV (Moderate Risk)",
        "Moderate mortality risk",
        "Moderate risk for mortality (30-day mortality 8-9%). Inpatient admission recommended.",
    ),
    Band::new(
        131.0,
        f64::INFINITY,
        "Class V (High Risk)",
        "High mortality risk",
        "High risk for mortality (30-day mortality around 27-31%). Inpatient admission with consideration of ICU care.",
    ),
];

impl Calculator for PsiPort {
    fn id(&self) -> &'static str {
        "psi_port"
    }

    fn name(&self) -> &'static str {
        "Pneumonia Severity Index (PSI/PORT)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "sex",
            "nursing_home_resident",
            "neoplastic_disease",
            "liver_disease",
            "congestive_heart_failure",
            "cerebrovascular_disease",
            "renal_disease",
            "altered_mental_status",
            "respiratory_rate",
            "systolic_blood_pressure",
            "temperature",
            "pulse",
            "bun",
            "sodium",
            "glucose",
            "hematocrit",
            "pleural_effusion",
            "ph",
            "pao2",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let sex = params.token::<Sex>("sex")?;
        let respiratory_rate =
            RESPIRATORY_RATE.check_int("respiratory_rate", params.integer("respiratory_rate")?)?;
        let systolic = SYSTOLIC.check_int(
            "systolic_blood_pressure",
            params.integer("systolic_blood_pressure")?,
        )?;
        let temperature = TEMPERATURE.check("temperature", params.number("temperature")?)?;
        let pulse = PULSE.check_int("pulse", params.integer("pulse")?)?;
        let bun = BUN.check("bun", params.number("bun")?)?;
        let sodium = SODIUM.check("sodium", params.number("sodium")?)?;
        let glucose = GLUCOSE.check("glucose", params.number("glucose")?)?;
        let hematocrit = HEMATOCRIT.check("hematocrit", params.number("hematocrit")?)?;
        let ph = params
            .optional_number("ph")?
            .map(|v| PH.check("ph", v))
            .transpose()?;
        let pao2 = params
            .optional_number("pao2")?
            .map(|v| PAO2.check("pao2", v))
            .transpose()?;

        let mut comorbidities = Tally::new();
        for (field, points) in COMORBIDITIES {
            comorbidities.flag(field, params.yes_no(field)?, *points);
        }

        let mut findings = Tally::new();
        findings
            .flag(
                "altered_mental_status",
                params.yes_no("altered_mental_status")?,
                20,
            )
            .flag("respiratory_rate", respiratory_rate >= 30, 20)
            .flag("systolic_blood_pressure", systolic < 90, 20)
            .flag("temperature", !(35.0..40.0).contains(&temperature), 15)
            .flag("pulse", pulse >= 125, 10)
            .flag("ph", ph.is_some_and(|v| v < 7.35), 30)
            .flag("bun", bun >= 30.0, 20)
            .flag("sodium", sodium < 130.0, 20)
            .flag("glucose", glucose >= 250.0, 10)
            .flag("hematocrit", hematocrit < 30.0, 10)
            .flag("pao2", pao2.is_some_and(|v| v < 60.0), 10)
            .flag("pleural_effusion", params.yes_no("pleural_effusion")?, 10);

        if age <= 50 && comorbidities.nonzero_count() == 0 && findings.nonzero_count() == 0 {
            return Ok(Assessment::new(
                0,
                "points",
                "Class I (Low Risk)",
                "Low mortality risk",
                "Class I: age 50 or under with no comorbidities or abnormal findings. 30-day mortality under 0.5%; outpatient treatment recommended.",
            ));
        }

        let demographics = if sex.is_female() { age - 10 } else { age };
        let score = demographics + comorbidities.total() + findings.total();
        let band = classify(BANDS, score as f64);

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("PSI {score} points. {}", band.interpretation))
            .with_detail("demographics", demographics)
            .with_detail("comorbidities", comorbidities.breakdown())
            .with_detail("findings", findings.breakdown()))
    }
}
