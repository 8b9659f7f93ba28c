//! Process-local roster, used with `--roster :memory:` and in tests.

use async_trait::async_trait;
use teamforge_domain::{DomainError, Member, MemberRepository, NewMember, assign_ids};
use tokio::sync::RwLock;

/// Roster held in memory for the lifetime of the process
#[derive(Default)]
pub struct InMemoryRoster {
    members: RwLock<Vec<Member>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the roster with existing members
    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members: RwLock::new(members),
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryRoster {
    type Error = DomainError;

    async fn list(&self) -> Result<Vec<Member>, Self::Error> {
        Ok(self.members.read().await.clone())
    }

    async fn add(&self, member: NewMember) -> Result<Member, Self::Error> {
        let mut members = self.members.write().await;
        let mut added = assign_ids(&members, vec![member])?;
        let member = added.pop().ok_or_else(|| {
            DomainError::InvalidMember("registration produced no member".to_string())
        })?;
        members.push(member.clone());
        Ok(member)
    }

    async fn add_bulk(&self, new_members: Vec<NewMember>) -> Result<Vec<Member>, Self::Error> {
        let mut members = self.members.write().await;
        let added = assign_ids(&members, new_members)?;
        members.extend(added.iter().cloned());
        Ok(added)
    }
}
