//! Presentation layer for teamforge
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{
    AddMemberArgs, Cli, Command, GroupsCommand, MembersCommand, OutputFormatArg,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
