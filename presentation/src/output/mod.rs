//! Output formatting for grouping results

pub mod console;
