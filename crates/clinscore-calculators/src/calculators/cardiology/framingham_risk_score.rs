use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Sex, Specialty, Tally, classify};

use crate::Calculator;

/// Framingham 10-year hard coronary heart disease risk (ATP III point
/// tables).
pub struct FraminghamRiskScore;

const AGE: ParamRange = ParamRange::integer(30.0, 79.0);
const TOTAL_CHOLESTEROL: ParamRange = ParamRange::new(100.0, 400.0);
const HDL: ParamRange = ParamRange::new(20.0, 100.0);
const SYSTOLIC: ParamRange = ParamRange::integer(90.0, 200.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        5.0,
        "Low Risk",
        "Low 10-year CHD risk",
        "Emphasise lifestyle modification.",
    ),
    Band::new(
        5.0,
        10.0,
        "Borderline Risk",
        "Borderline 10-year CHD risk",
        "Lifestyle modification; discuss statin therapy if risk enhancers are present.",
    ),
    Band::new(
        10.0,
        20.0,
        "Intermediate Risk",
        "Intermediate 10-year CHD risk",
        "Moderate-intensity statin therapy is reasonable after a risk discussion.",
    ),
    Band::new(
        20.0,
        f64::INFINITY,
        "High Risk",
        "High 10-year CHD risk",
        "High-intensity statin therapy and aggressive risk factor control are recommended.",
    ),
];

struct PointTables {
    /// Ages 30-34, 35-39, ... 75-79.
    age: [i64; 10],
    /// Total cholesterol <160, 160-199, 200-239, 240-279, >=280.
    cholesterol: [i64; 5],
    /// SBP <120, 120-129, 130-139, 140-159, >=160.
    sbp_untreated: [i64; 5],
    sbp_treated: [i64; 5],
    smoking: i64,
    /// 10-year risk % for `risk_floor..` points; clamps at both ends.
    risk_floor: i64,
    risk: &'static [i64],
}

const MALE: PointTables = PointTables {
    age: [-9, -4, 0, 3, 6, 8, 10, 11, 12, 13],
    cholesterol: [0, 4, 7, 9, 11],
    sbp_untreated: [0, 0, 1, 1, 2],
    sbp_treated: [0, 1, 2, 2, 3],
    smoking: 8,
    risk_floor: 4,
    risk: &[1, 2, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 25, 30],
};

const FEMALE: PointTables = PointTables {
    age: [-7, -3, 0, 3, 6, 8, 10, 12, 14, 16],
    cholesterol: [0, 4, 8, 11, 13],
    sbp_untreated: [0, 1, 2, 3, 4],
    sbp_treated: [0, 3, 4, 5, 6],
    smoking: 9,
    risk_floor: 6,
    risk: &[1, 2, 2, 3, 4, 5, 6, 8, 11, 14, 17, 22, 27, 30],
};

impl PointTables {
    fn risk_percent(&self, points: i64) -> i64 {
        let last = self.risk.len() as i64 - 1;
        let index = (points - self.risk_floor).clamp(0, last);
        self.risk[index as usize]
    }
}

fn cholesterol_index(tc: f64) -> usize {
    match tc {
        t if t < 160.0 => 0,
        t if t < 200.0 => 1,
        t if t < 240.0 => 2,
        t if t < 280.0 => 3,
        _ => 4,
    }
}

fn hdl_points(hdl: f64) -> i64 {
    match hdl {
        h if h >= 60.0 => -1,
        h if h >= 50.0 => 0,
        h if h >= 40.0 => 1,
        _ => 2,
    }
}

fn sbp_index(sbp: f64) -> usize {
    match sbp {
        s if s < 120.0 => 0,
        s if s < 130.0 => 1,
        s if s < 140.0 => 2,
        s if s < 160.0 => 3,
        _ => 4,
    }
}

impl Calculator for FraminghamRiskScore {
    fn id(&self) -> &'static str {
        "framingham_risk_score"
    }

    fn name(&self) -> &'static str {
        "Framingham Risk Score for Hard Coronary Heart Disease"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "sex",
            "total_cholesterol",
            "hdl_cholesterol",
            "systolic_bp",
            "bp_treatment",
            "smoking",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let sex: Sex = params.token("sex")?;
        let tc = TOTAL_CHOLESTEROL.check("total_cholesterol", params.number("total_cholesterol")?)?;
        let hdl = HDL.check("hdl_cholesterol", params.number("hdl_cholesterol")?)?;
        let sbp = SYSTOLIC.check("systolic_bp", params.number("systolic_bp")?)?;
        let treated = params.yes_no("bp_treatment")?;
        let smoker = params.yes_no("smoking")?;

        let tables = match sex {
            Sex::Male => &MALE,
            Sex::Female => &FEMALE,
        };
        let sbp_points = if treated {
            tables.sbp_treated
        } else {
            tables.sbp_untreated
        };

        let mut tally = Tally::new();
        tally
            .add("age", tables.age[((age - 30) / 5) as usize])
            .add(
                "total_cholesterol",
                tables.cholesterol[cholesterol_index(tc)],
            )
            .add("hdl_cholesterol", hdl_points(hdl))
            .add("systolic_bp", sbp_points[sbp_index(sbp)])
            .flag("smoking", smoker, tables.smoking);

        let points = tally.total();
        let risk = tables.risk_percent(points);
        let band = classify(BANDS, risk as f64);
        let interpretation = format!(
            "Estimated 10-year risk of hard CHD (MI or coronary death) is {risk}% ({points} points). {}",
            band.interpretation
        );

        Ok(Assessment::from_band(risk, "%", band)
            .with_interpretation(interpretation)
            .with_detail("total_points", points)
            .with_detail("breakdown", tally.breakdown()))
    }
}
