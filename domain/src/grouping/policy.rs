//! Tier-selection policy
//!
//! A fixed priority rule deciding which tier to draw from next. There is no
//! learning here: the same state always yields the same action, except for
//! the fallback branch, which draws from the injected random source.

use super::action::Action;
use super::reward::MIN_GROUP_SIZE;
use super::state::GroupState;
use rand::Rng;
use rand::seq::SliceRandom;

/// Decides the next action for a group-in-progress
pub trait GroupPolicy {
    fn select_action<R: Rng + ?Sized>(&self, state: &GroupState, rng: &mut R) -> Action;
}

/// Priority rule: fill missing tiers senior-first, stop once a covered group
/// reaches the minimum size.
///
/// 1. no senior → [`Action::PickSenior`]
/// 2. no intermediate → [`Action::PickIntermediate`]
/// 3. no junior → [`Action::PickJunior`]
/// 4. size ≥ 3 → [`Action::Stop`]
/// 5. otherwise a uniformly random pick
///
/// Rule 5 cannot trigger after rules 1-3 (covering all tiers means size ≥ 3)
/// but keeps the rule total over arbitrary states.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierPriorityPolicy;

impl GroupPolicy for TierPriorityPolicy {
    fn select_action<R: Rng + ?Sized>(&self, state: &GroupState, rng: &mut R) -> Action {
        if state.senior == 0 {
            return Action::PickSenior;
        }
        if state.intermediate == 0 {
            return Action::PickIntermediate;
        }
        if state.junior == 0 {
            return Action::PickJunior;
        }
        if state.size >= MIN_GROUP_SIZE {
            return Action::Stop;
        }
        *Action::PICKS.choose(rng).unwrap_or(&Action::PickSenior)
    }
}
