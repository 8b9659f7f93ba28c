//! Single-group builder
//!
//! Drives the policy/environment loop until the environment signals done or
//! the step cap is reached.

use super::environment::GroupEnv;
use super::policy::{GroupPolicy, TierPriorityPolicy};
use super::reward::is_valid_size;
use crate::member::Member;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default bound on policy/environment iterations per group
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Result of building one group
///
/// A short group or a negative reward is a normal outcome: callers must
/// check [`GroupResult::is_valid`] rather than expect an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResult {
    pub reward: i32,
    /// Members in selection order
    pub members: Vec<Member>,
    /// Number of policy/environment iterations taken
    pub steps: usize,
    /// Whether the loop was cut off by the step cap before finishing
    pub capped: bool,
}

impl GroupResult {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Size within bounds and a non-negative score
    pub fn is_valid(&self) -> bool {
        is_valid_size(self.size()) && self.reward >= 0
    }
}

/// Builds a single group with a policy over a member pool
#[derive(Debug, Clone)]
pub struct GroupBuilder<P: GroupPolicy = TierPriorityPolicy> {
    policy: P,
    max_steps: usize,
}

impl Default for GroupBuilder<TierPriorityPolicy> {
    fn default() -> Self {
        Self::new(TierPriorityPolicy)
    }
}

impl<P: GroupPolicy> GroupBuilder<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Override the step cap (at least one step is always taken)
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Build one group from `members`
    ///
    /// If the cap is hit before the environment finishes, the draft and the
    /// reward of the last step taken are returned as they are.
    pub fn build<R: Rng + ?Sized>(&self, members: &[Member], rng: &mut R) -> GroupResult {
        let env = GroupEnv::new(members);
        let mut draft = env.reset();
        let mut reward = 0;

        for step_number in 1..=self.max_steps {
            let action = self.policy.select_action(&draft.state(), rng);
            let step = env.step(draft, action, rng);
            draft = step.draft;
            reward = step.reward;

            if step.done {
                return GroupResult {
                    reward,
                    members: draft.into_members(),
                    steps: step_number,
                    capped: false,
                };
            }
        }

        GroupResult {
            reward,
            members: draft.into_members(),
            steps: self.max_steps,
            capped: true,
        }
    }
}

/// Build one group with the default policy and step cap
pub fn build_group<R: Rng + ?Sized>(members: &[Member], rng: &mut R) -> GroupResult {
    GroupBuilder::new(TierPriorityPolicy).build(members, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::{Category, MemberId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_minimal_pool_builds_full_group() {
        let pool = vec![
            Member::new(1, "S1", Category::Senior),
            Member::new(2, "I1", Category::Intermediate),
            Member::new(3, "J1", Category::Junior),
        ];

        let result = build_group(&pool, &mut rng());

        let ids: Vec<_> = result.members.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MemberId(1), MemberId(2), MemberId(3)]);
        assert_eq!(result.reward, 6);
        assert_eq!(result.steps, 4);
        assert!(!result.capped);
        assert!(result.is_valid());
    }

    #[test]
    fn test_selection_order_is_senior_intermediate_junior() {
        let pool = vec![
            Member::new(1, "J1", Category::Junior),
            Member::new(2, "J2", Category::Junior),
            Member::new(3, "I1", Category::Intermediate),
            Member::new(4, "S1", Category::Senior),
            Member::new(5, "S2", Category::Senior),
        ];

        let result = build_group(&pool, &mut rng());

        let tiers: Vec<_> = result.members.iter().map(|m| m.category).collect();
        assert_eq!(
            tiers,
            vec![Category::Senior, Category::Intermediate, Category::Junior]
        );
        assert_eq!(result.reward, 6);
    }

    #[test]
    fn test_no_seniors_hits_cap() {
        let pool = vec![
            Member::new(1, "I1", Category::Intermediate),
            Member::new(2, "J1", Category::Junior),
            Member::new(3, "J2", Category::Junior),
        ];

        let result = build_group(&pool, &mut rng());

        assert!(result.capped);
        assert_eq!(result.steps, DEFAULT_MAX_STEPS);
        assert!(result.members.is_empty());
        assert_eq!(result.reward, -1);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_missing_junior_keeps_partial_group() {
        let pool = vec![
            Member::new(1, "S1", Category::Senior),
            Member::new(2, "I1", Category::Intermediate),
            Member::new(3, "I2", Category::Intermediate),
        ];

        let result = build_group(&pool, &mut rng());

        assert!(result.capped);
        assert_eq!(result.size(), 2);
        assert_eq!(result.reward, -1);
    }

    #[test]
    fn test_empty_pool_terminates() {
        let result = build_group(&[], &mut rng());
        assert!(result.capped);
        assert!(result.members.is_empty());
        assert!(result.reward <= -1);
    }

    #[test]
    fn test_custom_step_cap() {
        let builder = GroupBuilder::new(TierPriorityPolicy).with_max_steps(3);
        let result = builder.build(&[], &mut rng());
        assert_eq!(result.steps, 3);

        let builder = GroupBuilder::new(TierPriorityPolicy).with_max_steps(0);
        assert_eq!(builder.max_steps(), 1);
    }

    #[test]
    fn test_result_serializes() {
        let pool = vec![
            Member::new(1, "S1", Category::Senior),
            Member::new(2, "I1", Category::Intermediate),
            Member::new(3, "J1", Category::Junior),
        ];
        let result = build_group(&pool, &mut rng());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["reward"], 6);
        assert_eq!(json["members"][0]["name"], "S1");
    }
}
