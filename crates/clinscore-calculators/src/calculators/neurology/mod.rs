pub mod cpsss;
pub mod edss;
pub mod esus_criteria;
pub mod impact_score;
pub mod mcdonald_ms_2017;
pub mod moca;
pub mod modified_nihss;
pub mod modified_rankin_9q;
pub mod trunk_impairment_scale;
