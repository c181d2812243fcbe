pub mod crash_score;
pub mod damico_risk;
pub mod gelf_criteria;
pub mod gi_gpa;
pub mod gleason_score;
pub mod lent_score;
pub mod manchester_sclc;
pub mod mascc;
pub mod mipi;
pub mod psa_doubling_time;
