use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// EMBED: eligibility for emergency department-initiated buprenorphine in
/// opioid use disorder.
pub struct Embed;

const COWS: ParamRange = ParamRange::integer(0.0, 48.0);

/// The eleven DSM-5 opioid use disorder criteria.
const DSM5: [&str; 11] = [
    "opioid_larger_amounts",
    "unsuccessful_cut_down",
    "time_obtaining_using",
    "craving_desire",
    "failure_obligations",
    "continued_despite_problems",
    "activities_given_up",
    "hazardous_situations",
    "physical_psychological_problems",
    "tolerance",
    "withdrawal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    NotReady,
}

fn oud_severity(criteria: usize) -> &'static str {
    match criteria {
        6.. => "Severe",
        4..=5 => "Moderate",
        2..=3 => "Mild",
        _ => "No OUD",
    }
}

fn withdrawal_severity(cows: i64) -> &'static str {
    match cows {
        13.. => "Moderate to Severe",
        8..=12 => "Mild to Moderate",
        _ => "None to Mild",
    }
}

impl Calculator for Embed {
    fn id(&self) -> &'static str {
        "embed"
    }

    fn name(&self) -> &'static str {
        "EMBED (ED-Initiated Buprenorphine)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "opioid_larger_amounts",
            "unsuccessful_cut_down",
            "time_obtaining_using",
            "craving_desire",
            "failure_obligations",
            "continued_despite_problems",
            "activities_given_up",
            "hazardous_situations",
            "physical_psychological_problems",
            "tolerance",
            "withdrawal",
            "cows_score",
            "treatment_readiness",
            "pregnancy_status",
            "buprenorphine_waiver",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut criteria = 0;
        for field in DSM5 {
            if params.yes_no(field)? {
                criteria += 1;
            }
        }
        let cows = COWS.check_int("cows_score", params.integer("cows_score")?)?;
        let readiness: Readiness = params.token("treatment_readiness")?;
        let pregnant = params.yes_no("pregnancy_status")?;
        let waiver = params.yes_no("buprenorphine_waiver")?;

        let oud = oud_severity(criteria);
        let withdrawal = withdrawal_severity(cows);
        // Pregnancy is excluded here and needs specialist consultation.
        let eligible = criteria >= 2 && readiness == Readiness::Ready && waiver && !pregnant;

        let (result, stage, description, plan) = match (eligible, cows > 12) {
            (false, _) => (
                "not_candidate",
                "Not Candidate",
                "Not candidate for ED-initiated buprenorphine",
                "Provide naloxone, harm-reduction counselling, and referral to addiction treatment.",
            ),
            (true, true) => (
                "candidate_ed_induction",
                "Candidate - ED Induction",
                "Candidate for emergency department induction",
                "Withdrawal is sufficient for ED induction: give buprenorphine 8 mg sublingual and reassess.",
            ),
            (true, false) => (
                "candidate_home_induction",
                "Candidate - Home Induction",
                "Candidate for home induction protocol",
                "Withdrawal is insufficient for ED induction: provide a home induction prescription and instructions.",
            ),
        };
        let interpretation = format!(
            "{criteria} DSM-5 criteria ({oud}); COWS {cows} ({withdrawal} withdrawal). {plan}"
        );

        Ok(Assessment::new(result, "recommendation", stage, description, interpretation)
            .with_detail("dsm5_criteria", criteria)
            .with_detail("oud_severity", oud)
            .with_detail("withdrawal_severity", withdrawal))
    }
}
