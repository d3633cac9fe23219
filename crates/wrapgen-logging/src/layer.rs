//! Tracing layer that captures diagnostics

use crate::sink::{Diagnostic, DiagnosticSink};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use wrapgen_core::LogLevel;

/// Tracing layer that records events at or above a level into a [`DiagnosticSink`]
pub struct DiagnosticsLayer {
    sink: Arc<DiagnosticSink>,
    min_level: LogLevel,
}

impl DiagnosticsLayer {
    /// Capture warnings and errors into `sink`
    pub fn new(sink: Arc<DiagnosticSink>) -> Self {
        Self {
            sink,
            min_level: LogLevel::Warn,
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn sink(&self) -> &Arc<DiagnosticSink> {
        &self.sink
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl<S> Layer<S> for DiagnosticsLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if level < self.min_level {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.sink.record(Diagnostic {
            level,
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

/// Visitor splitting the message from structured fields
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}

/// Convert LogLevel to tracing LevelFilter
pub fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Entries kept by the sink [`init_logging`] returns
pub const DEFAULT_SINK_CAPACITY: usize = 10_000;

/// Initialize process-wide logging.
///
/// Installs a registry with an `EnvFilter` (`RUST_LOG` wins over `level`),
/// a stderr fmt layer, and a [`DiagnosticsLayer`] feeding the returned sink.
/// If a global subscriber is already set, the existing one is kept and the
/// returned sink stays empty.
///
/// The layer lives as long as the process and records every WARN and ERROR
/// event. The sink is bounded to [`DEFAULT_SINK_CAPACITY`] entries and evicts
/// the oldest first; call [`DiagnosticSink::take`] between batches to drain it.
pub fn init_logging(level: LogLevel) -> Arc<DiagnosticSink> {
    use tracing_subscriber::prelude::*;

    let sink = Arc::new(DiagnosticSink::bounded(DEFAULT_SINK_CAPACITY));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(convert_level_to_filter(level).into()));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(DiagnosticsLayer::new(Arc::clone(&sink)));

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);

    sink
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
