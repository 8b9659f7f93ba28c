//! Domain layer for teamforge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Members and tiers
//!
//! Every member carries a stable id and one of three tiers: junior,
//! intermediate or senior.
//!
//! ## Group formation
//!
//! - **Single group**: a priority policy picks which tier to draw from next
//!   until the group covers every tier, then the group is scored.
//! - **Allocate all**: a deterministic pass splits the whole pool into
//!   senior + intermediate + junior groups and reports who is left over.

pub mod config;
pub mod core;
pub mod grouping;
pub mod member;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use grouping::{
    Action, AllocatedGroup, Allocation, GroupBuilder, GroupDraft, GroupEnv, GroupPolicy,
    GroupResult, GroupState, TierPriorityPolicy, allocate_all, build_group, evaluate,
};
pub use member::{Category, Member, MemberId, MemberRepository, NewMember, assign_ids};
