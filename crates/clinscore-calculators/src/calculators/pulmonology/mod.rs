pub mod decaf;
pub mod expected_peak_flow;
pub mod gold_copd;
pub mod gupta_postoperative_pneumonia;
pub mod gupta_postoperative_respiratory_failure;
pub mod lung_injury_prediction_score;
pub mod psi_port;
