//! Probe Output - rendering check decisions for the monitoring scheduler.
//!
//! Everything here is byte-stable: dashboards and graphers parse the status
//! line and perf data, so formatting changes are breaking changes.

#![deny(unsafe_code)]

pub mod bytes;
pub mod decision;
pub mod perf;
pub mod report;
pub mod status;

pub use bytes::human_bytes;
pub use decision::Decision;
pub use perf::{format_perf_data, PerfDatum, Unit};
pub use report::{Report, PREFIX};
pub use status::Status;
