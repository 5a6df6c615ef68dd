//! Core library for the `pelt` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, the validated run configuration, the request-scheduling
//! and result-aggregation engine, and the report/persistence consumers of a
//! finished run. The primary user-facing interface is the `pelt`
//! command-line application.
pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod sinks;
