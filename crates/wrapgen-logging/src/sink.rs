//! Shared store of captured diagnostics

use parking_lot::RwLock;
use std::collections::VecDeque;
use wrapgen_core::LogLevel;

/// One captured log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
    /// Structured fields other than the message, in record order
    pub fields: Vec<(String, String)>,
}

impl Diagnostic {
    /// Value of a structured field, if recorded
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Thread-safe collection of diagnostics.
///
/// Generation may fan out across threads, so recording takes a write lock
/// while snapshots only read. A sink built with [`DiagnosticSink::bounded`]
/// keeps only the most recent entries and counts what it evicted.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: RwLock<Entries>,
    capacity: Option<usize>,
}

#[derive(Debug, Default)]
struct Entries {
    items: VecDeque<Diagnostic>,
    dropped: usize,
}

impl DiagnosticSink {
    /// Unbounded sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink holding at most `capacity` entries; the oldest are evicted first
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: RwLock::default(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn record(&self, diagnostic: Diagnostic) {
        let mut entries = self.entries.write();
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                entries.dropped += 1;
                return;
            }
            while entries.items.len() >= capacity {
                entries.items.pop_front();
                entries.dropped += 1;
            }
        }
        entries.items.push_back(diagnostic);
    }

    /// Copy of everything captured so far
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.read().items.iter().cloned().collect()
    }

    /// Number of diagnostics at or above `level`
    pub fn count_at_least(&self, level: LogLevel) -> usize {
        self.entries
            .read()
            .items
            .iter()
            .filter(|d| d.level >= level)
            .count()
    }

    /// Diagnostics whose message contains `needle`
    pub fn matching(&self, needle: &str) -> Vec<Diagnostic> {
        self.entries
            .read()
            .items
            .iter()
            .filter(|d| d.message.contains(needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().items.is_empty()
    }

    /// Entries evicted because the sink was full
    pub fn dropped(&self) -> usize {
        self.entries.read().dropped
    }

    /// Drain all captured diagnostics and reset the eviction count
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut entries = self.entries.write();
        entries.dropped = 0;
        std::mem::take(&mut entries.items).into()
    }
}
