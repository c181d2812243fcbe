//! Calculators grouped by the specialty they are filed under.

pub mod cardiology;
pub mod critical_care;
pub mod emergency;
pub mod endocrinology;
pub mod gastroenterology;
pub mod general;
pub mod geriatrics;
pub mod hematology;
pub mod nephrology;
pub mod neurology;
pub mod oncology;
pub mod pediatrics;
pub mod psychiatry;
pub mod pulmonology;
pub mod rheumatology;
