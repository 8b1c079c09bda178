//! Funding-aware university recommendations for prospective students.
//!
//! The [`recommendation`] module holds the filtering, scoring, and ranking pipeline;
//! [`catalog`] provides the read-only reference data it runs against.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
