//! Generate Group use case
//!
//! Loads the roster and builds a single group with the tier priority policy.

use crate::config::GroupingParams;
use crate::ports::grouping_logger::{GroupingEvent, GroupingLogger, NoGroupingLogger};
use crate::use_cases::shared::{GroupingError, load_pool, random_source, validate_pool};
use std::sync::Arc;
use teamforge_domain::{GroupBuilder, GroupResult, MemberRepository, TierPriorityPolicy};
use tracing::{debug, info, warn};

/// Input for the GenerateGroup use case
#[derive(Debug, Clone, Default)]
pub struct GenerateGroupInput {
    /// Overrides the configured seed for this run
    pub seed: Option<u64>,
}

impl GenerateGroupInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Use case for building one group from the roster
pub struct GenerateGroupUseCase<R: MemberRepository + 'static> {
    repository: Arc<R>,
    params: GroupingParams,
    logger: Arc<dyn GroupingLogger>,
}

impl<R: MemberRepository + 'static> GenerateGroupUseCase<R> {
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
    /// Returns `Ok` with a possibly invalid group when the pool lacks a tier;
    /// only unusable inputs (pool too small, duplicate ids, roster failure)
    /// produce an error.
    pub async fn execute(&self, input: GenerateGroupInput) -> Result<GroupResult, GroupingError> {
        let members = load_pool(self.repository.as_ref()).await?;
        validate_pool(&members, self.params.min_pool_size)?;

        let seed = input.seed.or(self.params.seed);
        info!("Generating a group from {} members", members.len());
        debug!("Step cap {}, seed {:?}", self.params.max_steps, seed);

        let mut rng = random_source(seed);
        let result = GroupBuilder::new(TierPriorityPolicy)
            .with_max_steps(self.params.max_steps)
            .build(&members, &mut rng);

        if result.is_valid() {
            info!(
                "Built group of {} with reward {} in {} steps",
                result.size(),
                result.reward,
                result.steps
            );
        } else {
            warn!(
                "Could not build a valid group: size {}, reward {}{}",
                result.size(),
                result.reward,
                if result.capped { " (step cap reached)" } else { "" }
            );
        }

        self.logger.log(GroupingEvent::new(
            "group_generated",
            serde_json::json!({
                "pool_size": members.len(),
                "reward": result.reward,
                "size": result.size(),
                "steps": result.steps,
                "capped": result.capped,
                "seed": seed,
                "member_ids": result.members.iter().map(|m| m.id).collect::<Vec<_>>(),
            }),
        ));

        Ok(result)
    }
}
