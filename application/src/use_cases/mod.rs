//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod allocate_groups;
pub mod generate_group;
pub mod manage_members;
pub(crate) mod shared;

pub use shared::GroupingError;
