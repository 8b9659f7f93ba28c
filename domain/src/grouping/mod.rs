//! Group formation
//!
//! Two strategies partition a pool of tiered members into groups:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Single group (policy driven)                                 │
//! │                                                               │
//! │   GroupDraft ──state()──▶ TierPriorityPolicy ──Action──┐      │
//! │       ▲                                                │      │
//! │       └──────────── GroupEnv::step(draft, action) ◀────┘      │
//! │                      (reward, done)                           │
//! ├───────────────────────────────────────────────────────────────┤
//! │  Whole pool (deterministic)                                   │
//! │                                                               │
//! │   tier queues ──▶ S + I + J (+ I) per round ──▶ Allocation    │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scoring is shared: a finished group of 3-5 members earns +3 for a
//! senior, +2 for an intermediate and +1 for a junior; any other size
//! scores -2.

pub mod action;
pub mod allocator;
pub mod builder;
pub mod environment;
pub mod policy;
pub mod reward;
pub mod state;

pub use action::Action;
pub use allocator::{AllocatedGroup, Allocation, allocate_all};
pub use builder::{DEFAULT_MAX_STEPS, GroupBuilder, GroupResult, build_group};
pub use environment::{GroupEnv, Step};
pub use policy::{GroupPolicy, TierPriorityPolicy};
pub use reward::{MAX_GROUP_SIZE, MAX_REWARD, MIN_GROUP_SIZE, evaluate, is_valid_size};
pub use state::{GroupDraft, GroupState};
