//! Member repository trait

use super::entities::{Member, NewMember};
use async_trait::async_trait;

/// Repository trait for the member roster
///
/// This is a domain-level abstraction over wherever members are stored.
/// Implementations live in the infrastructure layer and are responsible for
/// assigning ids: one past the current maximum, starting at 1.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// All members, in registration order
    async fn list(&self) -> Result<Vec<Member>, Self::Error>;

    /// Register a single member and return it with its assigned id
    async fn add(&self, member: NewMember) -> Result<Member, Self::Error>;

    /// Register several members at once, preserving input order
    async fn add_bulk(&self, members: Vec<NewMember>) -> Result<Vec<Member>, Self::Error>;
}
