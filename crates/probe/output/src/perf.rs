//! Performance data entries.
//!
//! Rendered as `label=value[unit];warn;crit;min;max`. All four trailing
//! fields are text and always emitted, so consumers can rely on the field
//! count even when a field is empty.

use probe_threshold::format_number;

/// Unit of measurement attached to a perf data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// No unit (counts, percentages reported as plain numbers).
    #[default]
    None,
    /// `%`
    Percent,
    /// `B`
    Bytes,
    /// `s`
    Seconds,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::None => Ok(()),
            Unit::Percent => write!(f, "%"),
            Unit::Bytes => write!(f, "B"),
            Unit::Seconds => write!(f, "s"),
        }
    }
}

/// One measurement in the perf data section.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfDatum {
    pub label: String,
    pub value: f64,
    pub unit: Unit,
    pub warn: String,
    pub crit: String,
    pub min: String,
    pub max: String,
}

impl PerfDatum {
    /// Create a unitless datum with all optional fields empty.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            unit: Unit::None,
            warn: String::new(),
            crit: String::new(),
            min: String::new(),
            max: String::new(),
        }
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the warning and critical fields.
    pub fn with_thresholds(mut self, warn: impl ToString, crit: impl ToString) -> Self {
        self.warn = warn.to_string();
        self.crit = crit.to_string();
        self
    }

    /// Set the minimum field.
    pub fn with_min(mut self, min: impl ToString) -> Self {
        self.min = min.to_string();
        self
    }

    /// Set the maximum field.
    pub fn with_max(mut self, max: impl ToString) -> Self {
        self.max = max.to_string();
        self
    }
}

impl std::fmt::Display for PerfDatum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={}{};{};{};{};{}",
            self.label,
            format_number(self.value),
            self.unit,
            self.warn,
            self.crit,
            self.min,
            self.max
        )
    }
}

/// Join perf data entries with single spaces.
pub fn format_perf_data(data: &[PerfDatum]) -> String {
    data.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
