pub mod chip_rule;
pub mod embed;
pub mod estimated_ethanol_concentration;
pub mod go_far;
pub mod kings_college_acetaminophen;
pub mod lrinec_score;
pub mod mess;
pub mod modified_brain_injury_guideline;
pub mod news;
pub mod news_2;
pub mod ottawa_knee_rule;
pub mod rems;
pub mod rule_of_nines;
pub mod triss;
pub mod wisconsin_maxillofacial_ct;
