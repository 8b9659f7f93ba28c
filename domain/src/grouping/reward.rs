//! Group scoring

use super::state::GroupState;

/// Smallest size of a valid group
pub const MIN_GROUP_SIZE: usize = 3;
/// Largest size of a valid group; drafts are sealed when they reach it
pub const MAX_GROUP_SIZE: usize = 5;

/// Reward for a finished group whose size is outside the valid range
pub const INVALID_GROUP_PENALTY: i32 = -2;
/// Reward for asking for a tier that has no unused members left
pub const NO_CANDIDATE_PENALTY: i32 = -1;

pub const SENIOR_BONUS: i32 = 3;
pub const INTERMEDIATE_BONUS: i32 = 2;
pub const JUNIOR_BONUS: i32 = 1;

/// Best possible score: all three tiers represented
pub const MAX_REWARD: i32 = SENIOR_BONUS + INTERMEDIATE_BONUS + JUNIOR_BONUS;

/// Whether a group of this size is acceptable
pub fn is_valid_size(size: usize) -> bool {
    (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&size)
}

/// Terminal evaluation of a finished group
///
/// # Example
///
/// ```
/// use teamforge_domain::grouping::{GroupState, evaluate};
///
/// let full = GroupState { size: 3, senior: 1, intermediate: 1, junior: 1 };
/// assert_eq!(evaluate(&full), 6);
///
/// let too_small = GroupState { size: 2, senior: 1, intermediate: 1, junior: 0 };
/// assert_eq!(evaluate(&too_small), -2);
/// ```
pub fn evaluate(state: &GroupState) -> i32 {
    if !is_valid_size(state.size) {
        return INVALID_GROUP_PENALTY;
    }

    let mut reward = 0;
    if state.senior >= 1 {
        reward += SENIOR_BONUS;
    }
    if state.intermediate >= 1 {
        reward += INTERMEDIATE_BONUS;
    }
    if state.junior >= 1 {
        reward += JUNIOR_BONUS;
    }
    reward
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(senior: usize, intermediate: usize, junior: usize) -> GroupState {
        GroupState {
            size: senior + intermediate + junior,
            senior,
            intermediate,
            junior,
        }
    }

    #[test]
    fn test_all_tiers_is_max() {
        assert_eq!(evaluate(&state(1, 1, 1)), MAX_REWARD);
        assert_eq!(evaluate(&state(1, 2, 2)), 6);
    }

    #[test]
    fn test_partial_tiers() {
        assert_eq!(evaluate(&state(3, 0, 0)), 3);
        assert_eq!(evaluate(&state(0, 2, 1)), 3);
        assert_eq!(evaluate(&state(2, 0, 1)), 4);
        assert_eq!(evaluate(&state(0, 0, 4)), 1);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(evaluate(&state(0, 0, 0)), INVALID_GROUP_PENALTY);
        assert_eq!(evaluate(&state(1, 1, 0)), INVALID_GROUP_PENALTY);
        assert_eq!(evaluate(&state(2, 2, 2)), INVALID_GROUP_PENALTY);
    }

    #[test]
    fn test_size_bounds() {
        assert!(!is_valid_size(2));
        assert!(is_valid_size(3));
        assert!(is_valid_size(5));
        assert!(!is_valid_size(6));
    }
}
