//! Application layer for teamforge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MIN_POOL_SIZE, GroupingParams};
pub use ports::grouping_logger::{GroupingEvent, GroupingLogger, NoGroupingLogger};
pub use use_cases::GroupingError;
pub use use_cases::allocate_groups::AllocateGroupsUseCase;
pub use use_cases::generate_group::{GenerateGroupInput, GenerateGroupUseCase};
pub use use_cases::manage_members::{ManageMembersUseCase, MemberDraft, MemberError};
