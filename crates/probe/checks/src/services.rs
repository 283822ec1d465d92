//! System service health check.
//!
//! Binary assertion: every monitored service must be running and report a
//! healthy (or not yet known) health probe. There is no warning level.

use crate::error::{CheckConfigError, CheckConfigResult, RetrievalResult};
use crate::node::{NodeApi, ServiceInfo};
use probe_output::{Decision, PerfDatum, Status};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Which services take part in the check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    /// Every service the node reports.
    #[default]
    All,
    /// Only the listed ids.
    Include(BTreeSet<String>),
    /// Everything except the listed ids.
    Exclude(BTreeSet<String>),
}

impl ServiceFilter {
    /// Build from the repeatable include and exclude options.
    pub fn from_lists(include: Vec<String>, exclude: Vec<String>) -> CheckConfigResult<Self> {
        match (include.is_empty(), exclude.is_empty()) {
            (true, true) => Ok(ServiceFilter::All),
            (false, true) => Ok(ServiceFilter::Include(include.into_iter().collect())),
            (true, false) => Ok(ServiceFilter::Exclude(exclude.into_iter().collect())),
            (false, false) => Err(CheckConfigError::ConflictingFilters),
        }
    }

    /// Whether the service with this id is monitored.
    pub fn admits(&self, id: &str) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Include(ids) => ids.contains(id),
            ServiceFilter::Exclude(ids) => !ids.contains(id),
        }
    }
}

/// Health assertion over Talos system services.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServicesCheck {
    filter: ServiceFilter,
}

impl ServicesCheck {
    pub const NAME: &'static str = "SERVICES";

    pub fn new(filter: ServiceFilter) -> Self {
        Self { filter }
    }

    #[instrument(skip(self, node), fields(check = "services"))]
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        let response = node.service_list().await?;
        Ok(self.evaluate(response.as_deref()))
    }

    pub fn evaluate(&self, response: Option<&[ServiceInfo]>) -> Decision {
        let Some(services) = response else {
            return Decision::unknown("Empty response from Talos API");
        };
        if services.is_empty() {
            return Decision::unknown("No services in response");
        }

        let monitored: Vec<&ServiceInfo> = services
            .iter()
            .filter(|service| self.filter.admits(&service.id))
            .collect();
        let mut failing: Vec<&ServiceInfo> = monitored
            .iter()
            .copied()
            .filter(|service| !is_healthy(service))
            .collect();
        failing.sort_by(|a, b| a.id.cmp(&b.id));

        let total = monitored.len();
        let unhealthy = failing.len();
        let healthy = total - unhealthy;
        debug!(total, healthy, unhealthy, "services evaluated");

        let perf_data = vec![
            PerfDatum::new("services_total", total as f64).with_min("0"),
            PerfDatum::new("services_healthy", healthy as f64).with_min("0"),
            PerfDatum::new("services_unhealthy", unhealthy as f64).with_min("0"),
        ];

        if failing.is_empty() {
            return Decision::new(Status::Ok, format!("{healthy}/{total} services healthy"))
                .with_perf_data(perf_data);
        }

        let names: Vec<&str> = failing.iter().map(|service| service.id.as_str()).collect();
        let details: Vec<String> = failing.iter().map(|service| describe(service)).collect();

        Decision::critical(format!(
            "{unhealthy}/{total} services unhealthy: {}",
            names.join(", ")
        ))
        .with_details(details.join("\n"))
        .with_perf_data(perf_data)
    }
}

fn is_healthy(service: &ServiceInfo) -> bool {
    service.state == "Running"
        && service
            .health
            .as_ref()
            .is_some_and(|health| health.healthy || health.unknown)
}

fn describe(service: &ServiceInfo) -> String {
    let (health, message) = match &service.health {
        Some(h) if h.healthy => ("healthy", h.last_message.as_str()),
        Some(h) if h.unknown => ("unknown", h.last_message.as_str()),
        Some(h) => ("unhealthy", h.last_message.as_str()),
        None => ("unknown", ""),
    };
    format!(
        "{}: state={}, health={health}, message={}",
        service.id,
        service.state,
        quote(message)
    )
}

/// Double-quote with C-style escapes; other control bytes become `\xNN`.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\x07' => quoted.push_str("\\a"),
            '\x08' => quoted.push_str("\\b"),
            '\x0c' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\x0b' => quoted.push_str("\\v"),
            c if c.is_ascii_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
