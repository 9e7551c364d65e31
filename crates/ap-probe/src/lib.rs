//! Asset probe — library crate for the one-shot asset search diagnostic.
//!
//! Re-exports all modules so the end-to-end test crate can drive the
//! probe against a mock server.

pub mod client;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;

pub use client::{AssetClient, ProbeResponse};
pub use config::ProbeConfig;
pub use error::{ProbeError, ProbeResult};
