//! Probe Threshold - Nagios range notation for alert conditions.
//!
//! A range names the values that are acceptable; anything outside raises an
//! alert. The `@` prefix inverts that, `~` removes the lower bound.

#![deny(unsafe_code)]

pub mod error;
pub mod number;
pub mod range;

pub use error::{Bound, ThresholdError, ThresholdResult};
pub use number::format_number;
pub use range::ThresholdRange;
