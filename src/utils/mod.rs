pub mod constants;
pub mod coordinates;
pub mod progress;

pub use constants::*;
pub use coordinates::{parse_finite, NumericError};
pub use progress::ProgressReporter;
