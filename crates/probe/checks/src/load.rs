//! Load average check.
//!
//! Thresholds are raw load values. When either one is left out it is derived
//! from the CPU count: warning at one runnable task per CPU, critical at two.

use crate::error::{CheckConfigError, CheckConfigResult, RetrievalResult};
use crate::node::{LoadAvg, NodeApi};
use crate::thresholds::{parse_critical, parse_warning, Thresholds};
use probe_output::{Decision, PerfDatum};
use probe_threshold::ThresholdRange;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Averaging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPeriod {
    One,
    #[default]
    Five,
    Fifteen,
}

impl LoadPeriod {
    /// Pick this period's value out of a sample.
    pub fn select(&self, load: &LoadAvg) -> f64 {
        match self {
            LoadPeriod::One => load.load1,
            LoadPeriod::Five => load.load5,
            LoadPeriod::Fifteen => load.load15,
        }
    }
}

impl FromStr for LoadPeriod {
    type Err = CheckConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(LoadPeriod::One),
            "5" => Ok(LoadPeriod::Five),
            "15" => Ok(LoadPeriod::Fifteen),
            other => Err(CheckConfigError::InvalidPeriod(other.to_string())),
        }
    }
}

impl std::fmt::Display for LoadPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadPeriod::One => write!(f, "1"),
            LoadPeriod::Five => write!(f, "5"),
            LoadPeriod::Fifteen => write!(f, "15"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadCheck {
    warning: Option<ThresholdRange>,
    critical: Option<ThresholdRange>,
    period: LoadPeriod,
}

impl LoadCheck {
    pub const NAME: &'static str = "LOAD";

    /// Empty or missing threshold text means "derive from CPU count".
    pub fn new(
        warning: Option<&str>,
        critical: Option<&str>,
        period: &str,
    ) -> CheckConfigResult<Self> {
        let period = period.parse()?;
        let warning = warning
            .filter(|text| !text.is_empty())
            .map(parse_warning)
            .transpose()?;
        let critical = critical
            .filter(|text| !text.is_empty())
            .map(parse_critical)
            .transpose()?;

        if let (Some(warning), Some(critical)) = (warning, critical) {
            Thresholds { warning, critical }.check_ordering();
        }

        Ok(Self {
            warning,
            critical,
            period,
        })
    }

    pub fn period(&self) -> LoadPeriod {
        self.period
    }

    /// Thresholds derived from the CPU count, keeping any configured range.
    pub fn calibrate(&self, cpu_count: usize) -> Thresholds {
        let cpus = cpu_count as f64;
        Thresholds {
            warning: self
                .warning
                .unwrap_or_else(|| ThresholdRange::up_to(cpus)),
            critical: self
                .critical
                .unwrap_or_else(|| ThresholdRange::up_to(2.0 * cpus)),
        }
    }

    /// Load averages first; SystemStat only when a threshold must be derived.
    #[instrument(skip(self, node), fields(check = "load", period = %self.period))]
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        let Some(load) = node.load_avg().await? else {
            return Ok(Decision::unknown("Empty response from Talos API"));
        };

        let thresholds = match (self.warning, self.critical) {
            (Some(warning), Some(critical)) => Thresholds { warning, critical },
            _ => {
                let Some(stat) = node.system_stat().await? else {
                    return Ok(Decision::unknown(
                        "Empty SystemStat response from Talos API",
                    ));
                };
                if stat.cpu_count == 0 {
                    return Ok(Decision::unknown("Invalid data: CPU count is zero"));
                }
                debug!(cpu_count = stat.cpu_count, "calibrating load thresholds");
                self.calibrate(stat.cpu_count)
            }
        };

        Ok(self.evaluate(&load, &thresholds))
    }

    pub fn evaluate(&self, load: &LoadAvg, thresholds: &Thresholds) -> Decision {
        let selected = self.period.select(load);
        let status = thresholds.classify(selected);
        debug!(selected, %status, "load evaluated");

        let datum = |label: &str, value: f64, period: LoadPeriod| {
            let datum = PerfDatum::new(label, value).with_min("0");
            if period == self.period {
                datum.with_thresholds(thresholds.warning, thresholds.critical)
            } else {
                datum
            }
        };

        Decision::new(
            status,
            format!("Load average ({}m) {selected:.2}", self.period),
        )
        .with_perf_data(vec![
            datum("load1", load.load1, LoadPeriod::One),
            datum("load5", load.load5, LoadPeriod::Five),
            datum("load15", load.load15, LoadPeriod::Fifteen),
        ])
    }
}
