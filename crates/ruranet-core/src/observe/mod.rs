//! # Observability
//!
//! Structured logging via `tracing`. The library only emits events; a binary
//! decides where they go by calling [`init_logging`] once at startup.
//!
//! | Event | Level | Where |
//! |-------|-------|-------|
//! | model bound | debug | [`crate::model::ModelSelector::bind`] |
//! | carrier outside model band | warn | [`crate::model::ModelSelector::bind`] |
//! | sweep start / totals | debug / info | [`crate::coverage::CoverageEvaluator`] |
//! | skipped point | trace | [`crate::coverage::CoverageEvaluator`] |
//!
//! Each sweep runs inside a `coverage` span carrying the model id and radius.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
