//! Member entities

use super::category::Category;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable member identifier
///
/// Uniqueness within a pool is what the grouping core relies on; two members
/// may share a name and a tier but never an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, or an error at `u64::MAX`
    pub fn next(&self) -> Result<Self, DomainError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(DomainError::IdsExhausted(self.0))
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A person available for grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    /// Display name (opaque to the grouping core)
    pub name: String,
    pub category: Category,
}

impl Member {
    pub fn new(id: u64, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
            category,
        }
    }

    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}

/// A member that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub category: Category,
}

impl NewMember {
    /// Create a new member registration, rejecting blank names
    pub fn new(name: impl Into<String>, category: Category) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidMember(
                "name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: trimmed.to_string(),
            category,
        })
    }

    /// Attach an id, producing a full [`Member`]
    pub fn with_id(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            category: self.category,
        }
    }
}

/// Give `new_members` ids following the highest id in `existing`
///
/// The first id of an empty roster is 1. Fails without assigning anything
/// when the id space is exhausted.
pub fn assign_ids(
    existing: &[Member],
    new_members: Vec<NewMember>,
) -> Result<Vec<Member>, DomainError> {
    let mut last = existing.iter().map(|m| m.id).max().unwrap_or(MemberId(0));
    let mut assigned = Vec::with_capacity(new_members.len());
    for member in new_members {
        last = last.next()?;
        assigned.push(member.with_id(last));
    }
    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_next() {
        assert_eq!(MemberId(0).next(), Ok(MemberId(1)));
        assert_eq!(MemberId(41).next().unwrap().value(), 42);
        assert_eq!(
            MemberId(u64::MAX).next(),
            Err(DomainError::IdsExhausted(u64::MAX))
        );
    }

    #[test]
    fn test_assign_ids_continues_after_highest() {
        let existing = vec![
            Member::new(3, "a", Category::Junior),
            Member::new(1, "b", Category::Senior),
        ];
        let added = assign_ids(
            &existing,
            vec![
                NewMember::new("c", Category::Junior).unwrap(),
                NewMember::new("d", Category::Senior).unwrap(),
            ],
        )
        .unwrap();
        let ids: Vec<_> = added.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MemberId(4), MemberId(5)]);

        let first = assign_ids(&[], vec![NewMember::new("e", Category::Junior).unwrap()]);
        assert_eq!(first.unwrap()[0].id, MemberId(1));
    }

    #[test]
    fn test_assign_ids_uses_last_free_id() {
        let existing = vec![Member::new(u64::MAX - 1, "a", Category::Junior)];
        let added = assign_ids(&existing, vec![NewMember::new("b", Category::Junior).unwrap()]);
        assert_eq!(added.unwrap()[0].id, MemberId(u64::MAX));
    }

    #[test]
    fn test_assign_ids_fails_when_exhausted() {
        let existing = vec![Member::new(u64::MAX, "a", Category::Junior)];
        let result = assign_ids(&existing, vec![NewMember::new("b", Category::Junior).unwrap()]);
        assert_eq!(result, Err(DomainError::IdsExhausted(u64::MAX)));

        // Nothing to assign needs no id
        assert_eq!(assign_ids(&existing, vec![]), Ok(vec![]));
    }

    #[test]
    fn test_member_serializes_flat_id() {
        let member = Member::new(7, "Ada", Category::Senior);
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["category"], "senior");
    }

    #[test]
    fn test_new_member_trims_name() {
        let member = NewMember::new("  Grace ", Category::Junior).unwrap();
        assert_eq!(member.name, "Grace");
    }

    #[test]
    fn test_new_member_rejects_blank_name() {
        assert!(NewMember::new("   ", Category::Junior).is_err());
    }

    #[test]
    fn test_with_id() {
        let member = NewMember::new("Linus", Category::Intermediate)
            .unwrap()
            .with_id(MemberId(3));
        assert_eq!(member, Member::new(3, "Linus", Category::Intermediate));
        assert!(member.is(Category::Intermediate));
    }
}
