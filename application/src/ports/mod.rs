//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Roster storage is a domain trait ([`teamforge_domain::MemberRepository`]).

pub mod grouping_logger;
