//! Application-level configuration.
//!
//! - [`GroupingParams`]: grouping run control (step cap, pool minimum, seed)

pub mod grouping_params;

pub use grouping_params::{DEFAULT_MIN_POOL_SIZE, GroupingParams};
