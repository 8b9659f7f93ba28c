//! Member roster adapters implementing [`MemberRepository`](teamforge_domain::MemberRepository)

mod json_roster;
mod memory;

pub use json_roster::{JsonRosterRepository, RosterError};
pub use memory::InMemoryRoster;
