//! Group-building environment
//!
//! [`GroupEnv`] borrows the member pool and defines the transition function
//! over [`GroupDraft`] values. It keeps no state of its own: every step takes
//! the current draft and returns the next one.

use super::action::Action;
use super::reward::{MAX_GROUP_SIZE, NO_CANDIDATE_PENALTY, evaluate};
use super::state::{GroupDraft, GroupState};
use crate::member::{Category, Member};
use rand::Rng;
use rand::seq::SliceRandom;

/// Outcome of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub draft: GroupDraft,
    pub reward: i32,
    pub done: bool,
}

impl Step {
    pub fn state(&self) -> GroupState {
        self.draft.state()
    }
}

/// Transition function over a fixed member pool
#[derive(Debug, Clone, Copy)]
pub struct GroupEnv<'a> {
    pool: &'a [Member],
}

impl<'a> GroupEnv<'a> {
    pub fn new(pool: &'a [Member]) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &'a [Member] {
        self.pool
    }

    /// Start a new, empty group
    pub fn reset(&self) -> GroupDraft {
        GroupDraft::new()
    }

    /// Members of `category` not already in `draft`
    ///
    /// Membership is checked by id, so two members with the same name and
    /// tier remain distinct candidates.
    pub fn candidates(&self, draft: &GroupDraft, category: Category) -> Vec<&'a Member> {
        self.pool
            .iter()
            .filter(|m| m.is(category) && !draft.contains(m.id))
            .collect()
    }

    /// Apply `action` to `draft`
    ///
    /// - `Stop` finishes the group and scores it.
    /// - A pick with no unused candidate leaves the draft unchanged with a
    ///   `-1` penalty and does not finish.
    /// - A pick that fills the group to the maximum size seals and scores it.
    /// - Any other pick adds a uniformly random candidate with reward `0`.
    pub fn step<R: Rng + ?Sized>(&self, draft: GroupDraft, action: Action, rng: &mut R) -> Step {
        let Some(category) = action.category() else {
            let reward = evaluate(&draft.state());
            return Step {
                draft,
                reward,
                done: true,
            };
        };

        let chosen = self.candidates(&draft, category).choose(rng).copied();
        let Some(member) = chosen else {
            return Step {
                draft,
                reward: NO_CANDIDATE_PENALTY,
                done: false,
            };
        };

        let draft = draft.with(member.clone());
        if draft.len() >= MAX_GROUP_SIZE {
            let reward = evaluate(&draft.state());
            return Step {
                draft,
                reward,
                done: true,
            };
        }

        Step {
            draft,
            reward: 0,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<Member> {
        vec![
            Member::new(1, "S1", Category::Senior),
            Member::new(2, "S2", Category::Senior),
            Member::new(3, "I1", Category::Intermediate),
            Member::new(4, "J1", Category::Junior),
            Member::new(5, "J2", Category::Junior),
            Member::new(6, "J3", Category::Junior),
        ]
    }

    #[test]
    fn test_reset_is_empty() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        assert_eq!(env.reset().state(), GroupState::default());
    }

    #[test]
    fn test_pick_adds_member_with_zero_reward() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        let mut rng = StdRng::seed_from_u64(1);

        let step = env.step(env.reset(), Action::PickIntermediate, &mut rng);
        assert_eq!(step.reward, 0);
        assert!(!step.done);
        assert_eq!(step.draft.members()[0].id, MemberId(3));
        assert_eq!(step.state().intermediate, 1);
    }

    #[test]
    fn test_exhausted_tier_is_penalized_without_change() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        let mut rng = StdRng::seed_from_u64(1);

        let step = env.step(env.reset(), Action::PickIntermediate, &mut rng);
        let before = step.draft.clone();
        let step = env.step(step.draft, Action::PickIntermediate, &mut rng);

        assert_eq!(step.reward, NO_CANDIDATE_PENALTY);
        assert!(!step.done);
        assert_eq!(step.draft, before);
    }

    #[test]
    fn test_stop_scores_group() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        let mut rng = StdRng::seed_from_u64(3);

        let mut draft = env.reset();
        for action in [Action::PickSenior, Action::PickIntermediate, Action::PickJunior] {
            draft = env.step(draft, action, &mut rng).draft;
        }
        let step = env.step(draft, Action::Stop, &mut rng);
        assert!(step.done);
        assert_eq!(step.reward, 6);
    }

    #[test]
    fn test_stop_on_small_group_is_invalid() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        let mut rng = StdRng::seed_from_u64(3);

        let draft = env.step(env.reset(), Action::PickSenior, &mut rng).draft;
        let step = env.step(draft, Action::Stop, &mut rng);
        assert!(step.done);
        assert_eq!(step.reward, -2);
    }

    #[test]
    fn test_group_seals_at_max_size() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        let mut rng = StdRng::seed_from_u64(11);

        let mut draft = env.reset();
        let actions = [
            Action::PickSenior,
            Action::PickSenior,
            Action::PickJunior,
            Action::PickJunior,
        ];
        for action in actions {
            let step = env.step(draft, action, &mut rng);
            assert!(!step.done);
            draft = step.draft;
        }

        let step = env.step(draft, Action::PickJunior, &mut rng);
        assert!(step.done);
        assert_eq!(step.state().size, MAX_GROUP_SIZE);
        // Senior + junior present, no intermediate
        assert_eq!(step.reward, 4);
    }

    #[test]
    fn test_never_repeats_member() {
        let pool = pool();
        let env = GroupEnv::new(&pool);
        let mut rng = StdRng::seed_from_u64(5);

        let mut draft = env.reset();
        for _ in 0..3 {
            draft = env.step(draft, Action::PickJunior, &mut rng).draft;
        }
        let mut ids: Vec<_> = draft.members().iter().map(|m| m.id).collect();
        ids.sort();
        assert_eq!(ids, vec![MemberId(4), MemberId(5), MemberId(6)]);
    }

    #[test]
    fn test_duplicate_names_are_distinct_candidates() {
        let pool = vec![
            Member::new(1, "Sam", Category::Junior),
            Member::new(2, "Sam", Category::Junior),
        ];
        let env = GroupEnv::new(&pool);
        let draft = env.reset().with(pool[0].clone());
        let candidates = env.candidates(&draft, Category::Junior);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, MemberId(2));
    }
}
