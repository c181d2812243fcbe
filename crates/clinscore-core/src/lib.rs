//! clinscore-core
//!
//! Shared vocabulary for the clinical calculators: parameter maps, declared
//! ranges, threshold bands, weighted-sum tallies, and the assessment record
//! every calculator returns. Pure data, no I/O.

pub mod assessment;
pub mod band;
pub mod error;
pub mod lookup;
pub mod numeric;
pub mod params;
pub mod range;
pub mod specialty;
pub mod tally;

pub use assessment::{Assessment, ScoreValue};
pub use band::{Band, band_index, classify, is_contiguous};
pub use error::{InvalidParameter, Result};
pub use params::{Params, Sex, YesNo};
pub use range::ParamRange;
pub use specialty::Specialty;
pub use tally::Tally;
