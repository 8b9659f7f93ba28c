//! Group-in-progress values
//!
//! [`GroupDraft`] is the group being built, threaded by value through the
//! builder loop. [`GroupState`] is the read-only snapshot the policy sees.

use crate::member::{Category, Member, MemberId};
use serde::{Deserialize, Serialize};

/// Composition snapshot of a group-in-progress
///
/// Always derived by counting the draft's members; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupState {
    pub size: usize,
    pub senior: usize,
    pub intermediate: usize,
    pub junior: usize,
}

impl GroupState {
    /// Count the members of a group by tier
    pub fn of(members: &[Member]) -> Self {
        members.iter().fold(Self::default(), |mut state, member| {
            state.size += 1;
            match member.category {
                Category::Senior => state.senior += 1,
                Category::Intermediate => state.intermediate += 1,
                Category::Junior => state.junior += 1,
            }
            state
        })
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Senior => self.senior,
            Category::Intermediate => self.intermediate,
            Category::Junior => self.junior,
        }
    }

    /// Whether every tier is represented at least once
    pub fn covers_all_tiers(&self) -> bool {
        self.senior > 0 && self.intermediate > 0 && self.junior > 0
    }
}

/// A group under construction, in selection order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDraft {
    members: Vec<Member>,
}

impl GroupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    pub fn state(&self) -> GroupState {
        GroupState::of(&self.members)
    }

    /// Return a new draft with `member` appended
    pub fn with(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }
}
