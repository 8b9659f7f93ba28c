//! Shared helpers for the grouping use cases.
//!
//! Contains the error type, pool loading and validation, and the random
//! source factory used by GenerateGroup and AllocateGroups.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use teamforge_domain::{Member, MemberId, MemberRepository};
use thiserror::Error;

/// Errors that can occur before a grouping run starts
///
/// A pool that is large enough but cannot form a valid group is *not* an
/// error: it surfaces as a short group with a negative reward.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupingError {
    #[error("Not enough members to form a group: {size} available, at least {min} required")]
    PoolTooSmall { size: usize, min: usize },

    #[error("Member id {0} appears more than once in the pool")]
    DuplicateMember(MemberId),

    #[error("Roster error: {0}")]
    Repository(String),
}

/// Load the current pool from the roster
pub(crate) async fn load_pool<R: MemberRepository>(
    repository: &R,
) -> Result<Vec<Member>, GroupingError> {
    repository
        .list()
        .await
        .map_err(|e| GroupingError::Repository(e.to_string()))
}

/// Reject pools the grouping core should not be handed
pub(crate) fn validate_pool(members: &[Member], min_pool_size: usize) -> Result<(), GroupingError> {
    if members.len() < min_pool_size {
        return Err(GroupingError::PoolTooSmall {
            size: members.len(),
            min: min_pool_size,
        });
    }

    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if !seen.insert(member.id) {
            return Err(GroupingError::DuplicateMember(member.id));
        }
    }
    Ok(())
}

/// Seeded generator when a seed is given, OS entropy otherwise
pub(crate) fn random_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
