//! Port for structured grouping run logging.
//!
//! Defines the [`GroupingLogger`] trait for recording what each grouping run
//! produced (group generated, pool allocated, members registered).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures run results
//! in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured grouping event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the writer.
#[derive(Debug, Clone)]
pub struct GroupingEvent {
    /// Event type identifier (e.g., "group_generated", "groups_allocated").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GroupingEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging grouping events to a structured log.
///
/// `log` is synchronous and infallible: a failed write never fails the
/// grouping run that produced the event.
pub trait GroupingLogger: Send + Sync {
    fn log(&self, event: GroupingEvent);
}

/// No-op implementation for tests and when run logging is disabled.
pub struct NoGroupingLogger;

impl GroupingLogger for NoGroupingLogger {
    fn log(&self, _event: GroupingEvent) {}
}
