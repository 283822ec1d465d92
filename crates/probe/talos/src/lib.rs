//! Probe Talos - mutual-TLS client for the Talos machine API.
//!
//! Implements [`probe_checks::NodeApi`] over gRPC. Credentials come either
//! from explicit CA/cert/key values (file paths or base64 PEM) or from a
//! talosconfig context.

#![deny(unsafe_code)]

pub mod client;
pub mod config;
mod convert;
pub mod endpoint;
pub mod error;
pub mod pb;
pub mod pem;
pub mod talosconfig;

pub use client::TalosClient;
pub use config::{ConnectionConfig, Credentials, DEFAULT_TIMEOUT};
pub use endpoint::{endpoint_uri, DEFAULT_PORT};
pub use error::{ClientError, ClientResult};
pub use talosconfig::{TalosConfig, TalosContext};
