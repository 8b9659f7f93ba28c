//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use teamforge_domain::{Category, DomainError, OutputFormat};

/// Output format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Colored, human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    value.parse().map_err(|e: DomainError| e.to_string())
}

/// CLI arguments for teamforge
#[derive(Parser, Debug)]
#[command(name = "teamforge")]
#[command(author, version, about = "Balanced team formation by skill tier")]
#[command(long_about = r#"
Teamforge forms small working groups from a roster of members, each tagged
junior, intermediate or senior.

`groups generate` builds a single group of 3 to 5 members, preferring one
member from every tier. `groups allocate` splits the whole roster into as
many balanced groups as it can and reports who could not be placed.

Configuration files are loaded from (in priority order):
1. TEAMFORGE_* environment variables (e.g. TEAMFORGE_GROUPING__SEED=7)
2. --config <path>        Explicit config file
3. ./teamforge.toml       Project-level config
4. ~/.config/teamforge/config.toml   Global config

Example:
  teamforge members add "Ada Lovelace" --category senior
  teamforge members import people.json
  teamforge groups generate --seed 42
  teamforge -o json groups allocate
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Roster file to read and write (`:memory:` for a throwaway roster)
    #[arg(long, value_name = "PATH", global = true)]
    pub roster: Option<PathBuf>,

    /// Output format (overrides `[output] format`)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the member roster
    #[command(subcommand)]
    Members(MembersCommand),

    /// Form groups from the roster
    #[command(subcommand)]
    Groups(GroupsCommand),
}

#[derive(Subcommand, Debug)]
pub enum MembersCommand {
    /// Register a single member
    Add(AddMemberArgs),

    /// Register every member listed in a JSON file
    ///
    /// The file holds an array of `{"name": ..., "category": ...}` objects.
    /// Nothing is stored unless every entry is valid.
    Import {
        /// JSON file to import
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List registered members
    List,
}

#[derive(Args, Debug)]
pub struct AddMemberArgs {
    /// Member display name
    pub name: String,

    /// Skill tier: junior, intermediate or senior
    #[arg(short, long, value_parser = parse_category)]
    pub category: Category,
}

#[derive(Subcommand, Debug)]
pub enum GroupsCommand {
    /// Build one group with the tier-priority policy
    Generate {
        /// Seed for reproducible tie-breaking (overrides `[grouping] seed`)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Partition the whole roster into balanced groups
    Allocate,
}
