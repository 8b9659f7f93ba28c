//! Builder actions

use crate::core::error::DomainError;
use crate::member::Category;
use serde::{Deserialize, Serialize};

/// A single decision while building a group
///
/// The numeric indices (0-3) are part of the contract and are what
/// [`Action::index`] and `TryFrom<u8>` convert between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PickSenior,
    PickIntermediate,
    PickJunior,
    Stop,
}

impl Action {
    /// The three drawing actions, excluding `Stop`
    pub const PICKS: [Action; 3] = [
        Action::PickSenior,
        Action::PickIntermediate,
        Action::PickJunior,
    ];

    pub fn pick(category: Category) -> Self {
        match category {
            Category::Senior => Action::PickSenior,
            Category::Intermediate => Action::PickIntermediate,
            Category::Junior => Action::PickJunior,
        }
    }

    /// The tier this action draws from, or `None` for `Stop`
    pub fn category(&self) -> Option<Category> {
        match self {
            Action::PickSenior => Some(Category::Senior),
            Action::PickIntermediate => Some(Category::Intermediate),
            Action::PickJunior => Some(Category::Junior),
            Action::Stop => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Action::PickSenior => 0,
            Action::PickIntermediate => 1,
            Action::PickJunior => 2,
            Action::Stop => 3,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Action::Stop)
    }
}

impl TryFrom<u8> for Action {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::PickSenior),
            1 => Ok(Action::PickIntermediate),
            2 => Ok(Action::PickJunior),
            3 => Ok(Action::Stop),
            other => Err(DomainError::InvalidAction(other)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.category() {
            Some(category) => write!(f, "pick {}", category),
            None => write!(f, "stop"),
        }
    }
}
