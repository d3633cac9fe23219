//! wrapgen-logging - Tracing setup and diagnostics capture
//!
//! This crate provides:
//! - [`DiagnosticsLayer`] tracing layer that records warnings into a sink
//! - [`DiagnosticSink`] shared store of captured [`Diagnostic`]s
//! - [`init_logging`] to install the process-wide subscriber

mod layer;
mod sink;

pub use layer::{DEFAULT_SINK_CAPACITY, DiagnosticsLayer, convert_level_to_filter, init_logging};
pub use sink::{Diagnostic, DiagnosticSink};
pub use wrapgen_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Diagnostic, DiagnosticSink, DiagnosticsLayer, LogLevel, init_logging};
}
