//! clinscore-calculators
//!
//! Clinical risk-scoring calculators. Each calculator is a unit struct that
//! validates a flat parameter map, computes a weighted sum or closed-form
//! formula, and classifies the result into a named stage. Calculators are
//! pure: no I/O, no shared state.

pub mod calculators;
pub mod error;

use clinscore_core::{Assessment, Band, InvalidParameter, Params, Specialty};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use calculators::{
    cardiology, critical_care, emergency, endocrinology, gastroenterology, general, geriatrics,
    hematology, nephrology, neurology, oncology, pediatrics, psychiatry, pulmonology,
    rheumatology,
};
use error::CalculatorError;

/// Trait implemented by each clinical calculator.
pub trait Calculator: Send + Sync {
    /// Stable registry identifier (e.g., "news_2", "khorana_score").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "NEWS2").
    fn name(&self) -> &'static str;

    fn specialty(&self) -> Specialty;

    /// Every field the calculator reads. Anything else is rejected.
    fn parameters(&self) -> &'static [&'static str];

    /// Threshold table the result is classified against, when the
    /// classification is a single banded lookup.
    fn bands(&self) -> &'static [Band] {
        &[]
    }

    /// Validate the parameters and compute the assessment.
    fn calculate(&self, params: &Params) -> Result<Assessment, InvalidParameter>;

    /// [`calculate`](Self::calculate), after rejecting undeclared fields.
    fn evaluate(&self, params: &Params) -> Result<Assessment, InvalidParameter> {
        params.deny_unknown(self.parameters())?;
        self.calculate(params)
    }

    fn summary(&self) -> CalculatorSummary {
        CalculatorSummary {
            id: self.id().to_string(),
            name: self.name().to_string(),
            specialty: self.specialty(),
            parameters: self.parameters().iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Registry listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorSummary {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub parameters: Vec<String>,
}

static CALCULATORS: &[&dyn Calculator] = &[
    // Cardiology
    &cardiology::mean_arterial_pressure::MeanArterialPressure,
    &cardiology::cha2ds2_va::Cha2ds2Va,
    &cardiology::chads2::Chads2,
    &cardiology::chads_65::Chads65,
    &cardiology::crusade_bleeding_risk::CrusadeBleedingRisk,
    &cardiology::framingham_risk_score::FraminghamRiskScore,
    &cardiology::grace_acs_risk::GraceAcsRisk,
    &cardiology::gwtg_heart_failure::GwtgHeartFailure,
    &cardiology::ldl_calculated::LdlCalculated,
    &cardiology::ehmrg::Ehmrg,
    &cardiology::acc_aha_hf_staging::AccAhaHfStaging,
    &cardiology::score2::Score2,
    &cardiology::euroscore_ii::EuroscoreIi,
    &cardiology::gupta_mica::GuptaMica,
    &cardiology::ie_mortality_risk::IeMortalityRisk,
    &cardiology::maggic::Maggic,
    // Emergency
    &emergency::news::News,
    &emergency::news_2::News2,
    &emergency::ottawa_knee_rule::OttawaKneeRule,
    &emergency::triss::Triss,
    &emergency::rems::Rems,
    &emergency::rule_of_nines::RuleOfNines,
    &emergency::mess::Mess,
    &emergency::go_far::GoFar,
    &emergency::kings_college_acetaminophen::KingsCollegeAcetaminophen,
    &emergency::chip_rule::ChipRule,
    &emergency::estimated_ethanol_concentration::EstimatedEthanolConcentration,
    &emergency::modified_brain_injury_guideline::ModifiedBrainInjuryGuideline,
    &emergency::wisconsin_maxillofacial_ct::WisconsinMaxillofacialCt,
    &emergency::embed::Embed,
    &emergency::lrinec_score::LrinecScore,
    // Critical care
    &critical_care::apache_ii::ApacheIi,
    &critical_care::cam_icu::CamIcu,
    &critical_care::cpot::Cpot,
    &critical_care::macocha::Macocha,
    &critical_care::cerebral_perfusion_pressure::CerebralPerfusionPressure,
    &critical_care::mrc_icu::MrcIcu,
    // Hematology
    &hematology::khorana_score::KhoranaScore,
    &hematology::herdoo2::Herdoo2,
    &hematology::caprini_2005::Caprini2005,
    &hematology::geneva_vte_prophylaxis::GenevaVteProphylaxis,
    &hematology::vte_bleed::VteBleed,
    &hematology::impede_vte::ImpedeVte,
    &hematology::cryoprecipitate_dosing::CryoprecipitateDosing,
    &hematology::maximum_allowable_blood_loss::MaximumAllowableBloodLoss,
    &hematology::reticulocyte_production_index::ReticulocyteProductionIndex,
    &hematology::rhd_immune_globulin_dosage::RhdImmuneGlobulinDosage,
    &hematology::isth_bat::IsthBat,
    &hematology::gipss::Gipss,
    &hematology::wpss_mds::WpssMds,
    &hematology::mipss70::Mipss70,
    &hematology::icc_pmf::IccPmf,
    // Oncology
    &oncology::mascc::Mascc,
    &oncology::crash_score::CrashScore,
    &oncology::damico_risk::DamicoRisk,
    &oncology::gleason_score::GleasonScore,
    &oncology::psa_doubling_time::PsaDoublingTime,
    &oncology::gi_gpa::GiGpa,
    &oncology::lent_score::LentScore,
    &oncology::manchester_sclc::ManchesterSclc,
    &oncology::mipi::Mipi,
    &oncology::gelf_criteria::GelfCriteria,
    // Gastroenterology
    &gastroenterology::child_pugh::ChildPugh,
    &gastroenterology::meld_combined::MeldCombined,
    &gastroenterology::glasgow_blatchford::GlasgowBlatchford,
    &gastroenterology::glasgow_imrie::GlasgowImrie,
    &gastroenterology::cdai_crohns::CdaiCrohns,
    &gastroenterology::kruis_ibs::KruisIbs,
    &gastroenterology::manning_ibs::ManningIbs,
    &gastroenterology::mumtaz_score::MumtazScore,
    &gastroenterology::i_see::ISee,
    &gastroenterology::rome_iv_proctalgia_fugax::RomeIvProctalgiaFugax,
    &gastroenterology::wexner_ods::WexnerOds,
    &gastroenterology::rome_iv_rumination::RomeIvRumination,
    &gastroenterology::rome_iv_unspecified_fbd::RomeIvUnspecifiedFbd,
    &gastroenterology::montreal_ibd::MontrealIbd,
    &gastroenterology::clif_c_aclf::ClifCAclf,
    // Nephrology
    &nephrology::akin::Akin,
    &nephrology::ckid_u25_egfr::CkidU25Egfr,
    &nephrology::kinetic_egfr::KineticEgfr,
    &nephrology::ktv_dialysis::KtvDialysis,
    &nephrology::body_fluid_balance::BodyFluidBalance,
    &nephrology::winters_formula::WintersFormula,
    &nephrology::abg_analyzer::AbgAnalyzer,
    // Neurology
    &neurology::modified_nihss::ModifiedNihss,
    &neurology::cpsss::Cpsss,
    &neurology::edss::Edss,
    &neurology::trunk_impairment_scale::TrunkImpairmentScale,
    &neurology::modified_rankin_9q::ModifiedRankin9q,
    &neurology::moca::Moca,
    &neurology::esus_criteria::EsusCriteria,
    &neurology::impact_score::ImpactScore,
    &neurology::mcdonald_ms_2017::McdonaldMs2017,
    // Psychiatry
    &psychiatry::ciwa_ar::CiwaAr,
    &psychiatry::cows::Cows,
    &psychiatry::gds_15::Gds15,
    &psychiatry::epds::Epds,
    &psychiatry::qids_sr16::QidsSr16,
    &psychiatry::major_depression_inventory::MajorDepressionInventory,
    &psychiatry::bush_francis_catatonia::BushFrancisCatatonia,
    &psychiatry::comm::Comm,
    &psychiatry::coronavirus_anxiety_scale::CoronavirusAnxietyScale,
    &psychiatry::wast::Wast,
    // Pulmonology
    &pulmonology::psi_port::PsiPort,
    &pulmonology::gold_copd::GoldCopd,
    &pulmonology::expected_peak_flow::ExpectedPeakFlow,
    &pulmonology::decaf::Decaf,
    &pulmonology::gupta_postoperative_pneumonia::GuptaPostoperativePneumonia,
    &pulmonology::gupta_postoperative_respiratory_failure::GuptaPostoperativeRespiratoryFailure,
    &pulmonology::lung_injury_prediction_score::LungInjuryPredictionScore,
    // Endocrinology
    &endocrinology::burch_wartofsky::BurchWartofsky,
    &endocrinology::myxedema_coma::MyxedemaComa,
    &endocrinology::dka_mpm::DkaMpm,
    // Pediatrics
    &pediatrics::brue::Brue,
    &pediatrics::cheops::Cheops,
    &pediatrics::phoenix_sepsis::PhoenixSepsis,
    &pediatrics::glucose_infusion_rate::GlucoseInfusionRate,
    &pediatrics::wat_1::Wat1,
    // Rheumatology
    &rheumatology::acr_eular_gout::AcrEularGout,
    &rheumatology::cdai_rheumatoid_arthritis::CdaiRheumatoidArthritis,
    // Geriatrics
    &geriatrics::charlson_comorbidity_index::CharlsonComorbidityIndex,
    &geriatrics::clinical_frailty_scale::ClinicalFrailtyScale,
    &geriatrics::cirs_g::CirsG,
    // General
    &general::snellen_visual_acuity::SnellenVisualAcuity,
    &general::wound_closure_classification::WoundClosureClassification,
    &general::mme::Mme,
    &general::easi::Easi,
];

/// Return all registered calculators.
pub fn all_calculators() -> &'static [&'static dyn Calculator] {
    CALCULATORS
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<&'static dyn Calculator> {
    CALCULATORS.iter().copied().find(|c| c.id() == id)
}

pub fn by_specialty(specialty: Specialty) -> impl Iterator<Item = &'static dyn Calculator> {
    CALCULATORS
        .iter()
        .copied()
        .filter(move |c| c.specialty() == specialty)
}

/// Resolve `id` and evaluate it against `params`.
pub fn evaluate(id: &str, params: &Params) -> Result<Assessment, CalculatorError> {
    let calculator =
        get_calculator(id).ok_or_else(|| CalculatorError::UnknownCalculator(id.to_string()))?;

    match calculator.evaluate(params) {
        Ok(assessment) => {
            tracing::debug!(
                calculator = id,
                result = %assessment.result,
                stage = %assessment.stage,
                "calculated"
            );
            Ok(assessment)
        }
        Err(e) => {
            tracing::warn!(
                calculator = id,
                field = %e.field,
                reason = %e.reason,
                "rejected parameters"
            );
            Err(e.into())
        }
    }
}
