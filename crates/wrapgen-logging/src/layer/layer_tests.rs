#![allow(non_snake_case)]

use super::*;
use tracing_subscriber::prelude::*;

fn capture<F: FnOnce()>(layer: DiagnosticsLayer, f: F) {
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
}

// DiagnosticsLayer tests

#[test]
fn DiagnosticsLayer___convert_level___warn() {
    let result = DiagnosticsLayer::convert_level(&Level::WARN);

    assert_eq!(result, LogLevel::Warn);
}

#[test]
fn DiagnosticsLayer___convert_level___trace() {
    let result = DiagnosticsLayer::convert_level(&Level::TRACE);

    assert_eq!(result, LogLevel::Trace);
}

#[test]
fn DiagnosticsLayer___default_level___captures_warn_and_error_only() {
    let sink = Arc::new(DiagnosticSink::new());

    capture(DiagnosticsLayer::new(Arc::clone(&sink)), || {
        tracing::info!("info message");
        tracing::warn!("warn message");
        tracing::error!("error message");
    });

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.snapshot()[0].message, "warn message");
}

#[test]
fn DiagnosticsLayer___with_min_level___captures_debug() {
    let sink = Arc::new(DiagnosticSink::new());

    capture(
        DiagnosticsLayer::new(Arc::clone(&sink)).with_min_level(LogLevel::Debug),
        || {
            tracing::trace!("trace message");
            tracing::debug!("debug message");
        },
    );

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.snapshot()[0].level, LogLevel::Debug);
}

#[test]
fn DiagnosticsLayer___structured_fields___recorded_separately() {
    let sink = Arc::new(DiagnosticSink::new());

    capture(DiagnosticsLayer::new(Arc::clone(&sink)), || {
        tracing::warn!(field = "entityId", index = 3, "cannot find modifier");
    });

    let captured = sink.snapshot();
    assert_eq!(captured[0].message, "cannot find modifier");
    assert_eq!(captured[0].field("field"), Some("entityId"));
    assert_eq!(captured[0].field("index"), Some("3"));
}

#[test]
fn DiagnosticsLayer___target___is_module_path() {
    let sink = Arc::new(DiagnosticSink::new());

    capture(DiagnosticsLayer::new(Arc::clone(&sink)), || {
        tracing::warn!(target: "wrapgen::reader", "discarded table");
    });

    assert_eq!(sink.snapshot()[0].target, "wrapgen::reader");
}

#[test]
fn convert_level_to_filter___maps_all_levels() {
    assert_eq!(convert_level_to_filter(LogLevel::Trace), LevelFilter::TRACE);
    assert_eq!(convert_level_to_filter(LogLevel::Info), LevelFilter::INFO);
    assert_eq!(convert_level_to_filter(LogLevel::Off), LevelFilter::OFF);
}

#[test]
fn init_logging___repeated_calls___do_not_panic() {
    let _first = init_logging(LogLevel::Warn);
    let _second = init_logging(LogLevel::Debug);
}

#[test]
fn init_logging___sink___is_bounded() {
    let sink = init_logging(LogLevel::Warn);

    assert_eq!(sink.capacity(), Some(DEFAULT_SINK_CAPACITY));
}
