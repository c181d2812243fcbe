pub mod acr_eular_gout;
pub mod cdai_rheumatoid_arthritis;
