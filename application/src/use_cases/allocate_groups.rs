//! Allocate Groups use case
//!
//! Splits the whole roster into groups with the deterministic allocator.

use crate::config::GroupingParams;
use crate::ports::grouping_logger::{GroupingEvent, GroupingLogger, NoGroupingLogger};
use crate::use_cases::shared::{GroupingError, load_pool, validate_pool};
use std::sync::Arc;
use teamforge_domain::{Allocation, MemberRepository, allocate_all};
use tracing::{info, warn};

/// Use case for assigning every member of the roster to a group
pub struct AllocateGroupsUseCase<R: MemberRepository + 'static> {
    repository: Arc<R>,
    params: GroupingParams,
    logger: Arc<dyn GroupingLogger>,
}

impl<R: MemberRepository + 'static> AllocateGroupsUseCase<R> {
    pub fn new(repository: Arc<R>, params: GroupingParams) -> Self {
        Self {
            repository,
            params,
            logger: Arc::new(NoGroupingLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GroupingLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case
    ///
    /// Members the allocator could not place are returned in
    /// [`Allocation::leftover`]; that is not an error.
    pub async fn execute(&self) -> Result<Allocation, GroupingError> {
        let members = load_pool(self.repository.as_ref()).await?;
        validate_pool(&members, self.params.min_pool_size)?;

        info!("Allocating {} members into groups", members.len());
        let allocation = allocate_all(&members);

        info!(
            "Formed {} groups, placed {} of {} members",
            allocation.groups.len(),
            allocation.placed(),
            allocation.supplied()
        );
        if !allocation.is_complete() {
            warn!("{} members could not be grouped", allocation.unplaced());
        }

        self.logger.log(GroupingEvent::new(
            "groups_allocated",
            serde_json::json!({
                "pool_size": members.len(),
                "groups": allocation.groups.len(),
                "placed": allocation.placed(),
                "unplaced": allocation.unplaced(),
            }),
        ));

        Ok(allocation)
    }
}
