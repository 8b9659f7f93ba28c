//! Members of the grouping pool.
//!
//! - [`category::Category`]: the three skill tiers
//! - [`entities::Member`]: an identified member with a tier
//! - [`repository::MemberRepository`]: roster storage abstraction

pub mod category;
pub mod entities;
pub mod repository;

pub use category::Category;
pub use entities::{Member, MemberId, NewMember, assign_ids};
pub use repository::MemberRepository;
