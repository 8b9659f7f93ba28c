//! Manage Members use case
//!
//! Registers members in the roster and lists them.

use crate::ports::grouping_logger::{GroupingEvent, GroupingLogger, NoGroupingLogger};
use std::sync::Arc;
use teamforge_domain::{Category, DomainError, Member, MemberRepository, NewMember};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while managing the roster
#[derive(Error, Debug)]
pub enum MemberError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("Roster error: {0}")]
    Repository(String),
}

/// A registration request as received from the outside (e.g. an import file)
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub category: String,
}

impl MemberDraft {
    /// Validate the name and parse the tier
    pub fn parse(&self) -> Result<NewMember, DomainError> {
        let category: Category = self.category.parse()?;
        NewMember::new(&self.name, category)
    }
}

/// Use case for registering and listing members
pub struct ManageMembersUseCase<R: MemberRepository + 'static> {
    repository: Arc<R>,
    logger: Arc<dyn GroupingLogger>,
}

impl<R: MemberRepository + 'static> ManageMembersUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            logger: Arc::new(NoGroupingLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GroupingLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Register a single member
    pub async fn register(&self, name: &str, category: Category) -> Result<Member, MemberError> {
        let member = NewMember::new(name, category)?;
        let member = self
            .repository
            .add(member)
            .await
            .map_err(|e| MemberError::Repository(e.to_string()))?;

        info!("Registered member {} ({})", member.id, member.category);
        self.log_registered(std::slice::from_ref(&member));
        Ok(member)
    }

    /// Register several members; nothing is stored if any entry is invalid
    pub async fn register_bulk(&self, drafts: &[MemberDraft]) -> Result<Vec<Member>, MemberError> {
        let members = drafts
            .iter()
            .map(MemberDraft::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let members = self
            .repository
            .add_bulk(members)
            .await
            .map_err(|e| MemberError::Repository(e.to_string()))?;

        info!("Registered {} members", members.len());
        self.log_registered(&members);
        Ok(members)
    }

    /// All registered members
    pub async fn list(&self) -> Result<Vec<Member>, MemberError> {
        self.repository
            .list()
            .await
            .map_err(|e| MemberError::Repository(e.to_string()))
    }

    fn log_registered(&self, members: &[Member]) {
        self.logger.log(GroupingEvent::new(
            "members_registered",
            serde_json::json!({
                "count": members.len(),
                "member_ids": members.iter().map(|m| m.id).collect::<Vec<_>>(),
            }),
        ));
    }
}
