//! Skill tier value object

use serde::{Deserialize, Serialize};

/// Skill tier of a member
///
/// A closed enumeration: every member belongs to exactly one tier.
///
/// # Example
///
/// ```
/// use teamforge_domain::Category;
///
/// let tier: Category = "Senior".parse().unwrap();
/// assert_eq!(tier, Category::Senior);
/// assert_eq!(tier.as_str(), "senior");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Junior,
    Intermediate,
    Senior,
}

impl Category {
    /// All tiers, in the order the group policy draws them
    pub const DRAW_ORDER: [Category; 3] =
        [Category::Senior, Category::Intermediate, Category::Junior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Junior => "junior",
            Category::Intermediate => "intermediate",
            Category::Senior => "senior",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Ok(Category::Junior),
            "intermediate" => Ok(Category::Intermediate),
            "senior" => Ok(Category::Senior),
            other => Err(crate::core::error::DomainError::UnknownCategory(
                other.to_string(),
            )),
        }
    }
}
