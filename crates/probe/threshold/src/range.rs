//! Threshold range value and its notation.
//!
//! | Text    | Alerts when                |
//! |---------|----------------------------|
//! | `10`    | value < 0 or value > 10    |
//! | `10:`   | value < 10                 |
//! | `~:10`  | value > 10                 |
//! | `10:20` | value < 10 or value > 20   |
//! | `@10:20`| 10 <= value <= 20          |

use crate::error::{Bound, ThresholdError, ThresholdResult};
use crate::number::format_number;
use std::str::FromStr;

/// A parsed alert range.
///
/// Immutable once built. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRange {
    start: f64,
    end: f64,
    inside: bool,
    unbounded_below: bool,
}

impl ThresholdRange {
    /// Parse range notation.
    pub fn parse(text: &str) -> ThresholdResult<Self> {
        if text.is_empty() {
            return Err(ThresholdError::Empty);
        }

        let (inside, body) = match text.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let range = match body.split_once(':') {
            Some((start_token, end_token)) => {
                let (start, unbounded_below) = match start_token {
                    "~" => (0.0, true),
                    "" => (0.0, false),
                    token => (parse_bound(Bound::Start, token)?, false),
                };
                let end = match end_token {
                    "" => f64::INFINITY,
                    token => parse_bound(Bound::End, token)?,
                };
                Self {
                    start,
                    end,
                    inside,
                    unbounded_below,
                }
            }
            None => Self {
                start: 0.0,
                end: parse_bound(Bound::Value, body)?,
                inside,
                unbounded_below: false,
            },
        };

        if !range.unbounded_below && range.end.is_finite() && range.start > range.end {
            return Err(ThresholdError::Inverted {
                start: format_number(range.start),
                end: format_number(range.end),
            });
        }

        Ok(range)
    }

    /// Standard `0..end` range, alerting outside it.
    pub fn up_to(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            inside: false,
            unbounded_below: false,
        }
    }

    /// Whether `value` triggers an alert under this range.
    pub fn violated(&self, value: f64) -> bool {
        let in_range = if self.unbounded_below {
            value <= self.end
        } else {
            self.start <= value && value <= self.end
        };

        if self.inside {
            in_range
        } else {
            !in_range
        }
    }

    /// Lower bound. Meaningless when [`Self::unbounded_below`] is set.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound, possibly `+inf`.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// `@` inversion: alert inside the range instead of outside.
    pub fn inside(&self) -> bool {
        self.inside
    }

    /// `~` start: no lower bound.
    pub fn unbounded_below(&self) -> bool {
        self.unbounded_below
    }

    /// Whether both bounds are finite and the range is not inverted.
    pub fn is_bounded(&self) -> bool {
        !self.inside && !self.unbounded_below && self.end.is_finite()
    }
}

fn parse_bound(bound: Bound, token: &str) -> ThresholdResult<f64> {
    let invalid = || ThresholdError::InvalidNumber {
        bound,
        token: token.to_string(),
    };
    let value: f64 = token.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

impl FromStr for ThresholdRange {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.inside {
            write!(f, "@")?;
        }

        if self.unbounded_below {
            if self.end.is_finite() {
                return write!(f, "~:{}", format_number(self.end));
            }
            return write!(f, "~:");
        }

        if !self.end.is_finite() {
            return write!(f, "{}:", format_number(self.start));
        }

        if self.start == 0.0 && !self.inside {
            return write!(f, "{}", format_number(self.end));
        }

        write!(f, "{}:{}", format_number(self.start), format_number(self.end))
    }
}
