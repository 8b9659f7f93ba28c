//! Deterministic multi-group allocation
//!
//! Partitions a whole pool into groups in one pass, without randomness.
//!
//! ```text
//! seniors:       S1 S2 S3        ──┐
//! intermediates: I1 I2 I3        ──┼─▶ [S1 I1 J1 I2] [S2 I3 J2]  leftover: S3 J3
//! juniors:       J1 J2 J3        ──┘
//! ```
//!
//! Each round takes the head of every tier queue and, while intermediates
//! remain, one extra intermediate. Allocation stops as soon as any queue is
//! empty. The procedure is greedy and first-come-first-served: it does not
//! search for a tier ratio that would place more members.

use super::reward::MAX_REWARD;
use crate::member::{Category, Member};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A group produced by the allocator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedGroup {
    /// Sequential id, starting at 1
    pub group_id: usize,
    pub members: Vec<Member>,
    pub reward: i32,
}

impl AllocatedGroup {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Result of allocating a whole pool
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub groups: Vec<AllocatedGroup>,
    /// Members that could not be placed, in their original pool order
    pub leftover: Vec<Member>,
}

impl Allocation {
    /// Number of members handed to the allocator
    pub fn supplied(&self) -> usize {
        self.placed() + self.leftover.len()
    }

    /// Number of members placed in a group
    pub fn placed(&self) -> usize {
        self.groups.iter().map(AllocatedGroup::size).sum()
    }

    pub fn unplaced(&self) -> usize {
        self.leftover.len()
    }

    pub fn is_complete(&self) -> bool {
        self.leftover.is_empty()
    }
}

/// Partition `members` into groups of senior + intermediate + junior, plus
/// one extra intermediate when available.
///
/// Every produced group contains all three tiers and so carries the maximum
/// reward.
///
/// # Example
///
/// ```
/// use teamforge_domain::{Category, Member, grouping::allocate_all};
///
/// let pool = vec![
///     Member::new(1, "Ada", Category::Senior),
///     Member::new(2, "Bob", Category::Intermediate),
///     Member::new(3, "Cy", Category::Junior),
///     Member::new(4, "Di", Category::Junior),
/// ];
/// let allocation = allocate_all(&pool);
/// assert_eq!(allocation.groups.len(), 1);
/// assert_eq!(allocation.groups[0].group_id, 1);
/// assert_eq!(allocation.unplaced(), 1);
/// ```
pub fn allocate_all(members: &[Member]) -> Allocation {
    let mut seniors = tier_queue(members, Category::Senior);
    let mut intermediates = tier_queue(members, Category::Intermediate);
    let mut juniors = tier_queue(members, Category::Junior);
    let mut placed = vec![false; members.len()];

    let mut groups = Vec::new();
    while !seniors.is_empty() && !intermediates.is_empty() && !juniors.is_empty() {
        let mut picks = Vec::with_capacity(4);
        picks.extend(seniors.pop_front());
        picks.extend(intermediates.pop_front());
        picks.extend(juniors.pop_front());
        picks.extend(intermediates.pop_front());

        for &index in &picks {
            placed[index] = true;
        }

        groups.push(AllocatedGroup {
            group_id: groups.len() + 1,
            members: picks.iter().map(|&index| members[index].clone()).collect(),
            reward: MAX_REWARD,
        });
    }

    let leftover = members
        .iter()
        .zip(&placed)
        .filter(|(_, placed)| !**placed)
        .map(|(member, _)| member.clone())
        .collect();

    Allocation { groups, leftover }
}

/// Pool positions of one tier's members, in pool order
fn tier_queue(members: &[Member], category: Category) -> VecDeque<usize> {
    members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is(category))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(seniors: usize, intermediates: usize, juniors: usize) -> Vec<Member> {
        let mut members = Vec::new();
        let mut id = 0;
        for (count, prefix, category) in [
            (seniors, "S", Category::Senior),
            (intermediates, "I", Category::Intermediate),
            (juniors, "J", Category::Junior),
        ] {
            for n in 1..=count {
                id += 1;
                members.push(Member::new(id, format!("{}{}", prefix, n), category));
            }
        }
        members
    }

    fn names(members: &[Member]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_two_of_each() {
        let allocation = allocate_all(&pool(2, 2, 2));

        assert_eq!(allocation.groups.len(), 1);
        let group = &allocation.groups[0];
        assert_eq!(group.group_id, 1);
        assert_eq!(group.reward, 6);
        assert_eq!(names(&group.members), vec!["S1", "I1", "J1", "I2"]);
        assert_eq!(names(&allocation.leftover), vec!["S2", "J2"]);
        assert_eq!(allocation.supplied(), 6);
        assert_eq!(allocation.placed(), 4);
    }

    #[test]
    fn test_three_of_each() {
        let allocation = allocate_all(&pool(3, 3, 3));

        assert_eq!(allocation.groups.len(), 2);
        assert_eq!(
            names(&allocation.groups[0].members),
            vec!["S1", "I1", "J1", "I2"]
        );
        assert_eq!(names(&allocation.groups[1].members), vec!["S2", "I3", "J2"]);
        assert_eq!(allocation.groups[1].group_id, 2);
        assert_eq!(names(&allocation.leftover), vec!["S3", "J3"]);
    }

    #[test]
    fn test_single_tier_pool_places_nobody() {
        let allocation = allocate_all(&pool(0, 0, 5));

        assert!(allocation.groups.is_empty());
        assert_eq!(allocation.unplaced(), 5);
        assert_eq!(allocation.placed(), 0);
        assert!(!allocation.is_complete());
    }

    #[test]
    fn test_exact_fit_is_complete() {
        let allocation = allocate_all(&pool(2, 4, 2));

        assert_eq!(allocation.groups.len(), 2);
        assert!(allocation.groups.iter().all(|g| g.size() == 4));
        assert!(allocation.is_complete());
    }

    #[test]
    fn test_leftover_keeps_pool_order() {
        let members = vec![
            Member::new(10, "J1", Category::Junior),
            Member::new(11, "S1", Category::Senior),
            Member::new(12, "J2", Category::Junior),
            Member::new(13, "I1", Category::Intermediate),
            Member::new(14, "S2", Category::Senior),
        ];

        let allocation = allocate_all(&members);

        assert_eq!(names(&allocation.groups[0].members), vec!["S1", "I1", "J1"]);
        assert_eq!(names(&allocation.leftover), vec!["J2", "S2"]);
    }

    #[test]
    fn test_large_pool_leftovers_in_pool_order() {
        // Interleave tiers so leftovers of different tiers alternate in the pool
        let members: Vec<Member> = (0..6000u64)
            .map(|i| {
                let category = match i % 6 {
                    0 => Category::Senior,
                    1 => Category::Intermediate,
                    _ => Category::Junior,
                };
                Member::new(i + 1, format!("m{}", i + 1), category)
            })
            .collect();

        let allocation = allocate_all(&members);

        // 1000 seniors, 1000 intermediates: two intermediates per group
        assert_eq!(allocation.groups.len(), 500);
        assert_eq!(allocation.placed(), 2000);
        assert_eq!(allocation.unplaced(), 4000);

        let leftover_ids: Vec<u64> = allocation.leftover.iter().map(|m| m.id.value()).collect();
        assert!(leftover_ids.windows(2).all(|w| w[0] < w[1]));

        let mut seen = std::collections::HashSet::new();
        for member in allocation.groups.iter().flat_map(|g| &g.members) {
            assert!(seen.insert(member.id));
        }
        assert!(allocation.leftover.iter().all(|m| !seen.contains(&m.id)));
    }

    #[test]
    fn test_duplicate_entries_are_tracked_by_position() {
        let ada = Member::new(1, "Ada", Category::Senior);
        let members = vec![
            ada.clone(),
            ada,
            Member::new(2, "Bob", Category::Intermediate),
            Member::new(3, "Cy", Category::Junior),
        ];

        let allocation = allocate_all(&members);

        assert_eq!(allocation.placed(), 3);
        assert_eq!(names(&allocation.leftover), vec!["Ada"]);
    }

    #[test]
    fn test_empty_pool() {
        let allocation = allocate_all(&[]);
        assert_eq!(allocation, Allocation::default());
        assert_eq!(allocation.supplied(), 0);
    }

    #[test]
    fn test_deterministic() {
        let members = pool(4, 5, 3);
        assert_eq!(allocate_all(&members), allocate_all(&members));
    }
}
