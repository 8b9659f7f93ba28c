//! Logging infrastructure for grouping run records.
//!
//! Provides [`JsonlGroupingLogger`], a JSONL file writer that implements
//! the [`GroupingLogger`](teamforge_application::GroupingLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlGroupingLogger;
