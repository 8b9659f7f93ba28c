//! CLI entrypoint for teamforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use teamforge_application::{
    AllocateGroupsUseCase, GenerateGroupInput, GenerateGroupUseCase, GroupingLogger,
    GroupingParams, ManageMembersUseCase, MemberDraft, NoGroupingLogger,
};
use teamforge_domain::MemberRepository;
use teamforge_infrastructure::{
    ConfigLoader, FileConfig, InMemoryRoster, JsonRosterRepository, JsonlGroupingLogger,
};
use teamforge_presentation::{
    Cli, Command, ConsoleFormatter, GroupsCommand, MembersCommand, OutputConfig,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Roster path that selects a throwaway in-memory roster
const MEMORY_ROSTER: &str = ":memory:";

/// Everything a command needs besides the roster
struct RunContext {
    params: GroupingParams,
    logger: Arc<dyn GroupingLogger>,
    output: OutputConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_config(cli.config.as_ref(), cli.no_config)?;

    let output = OutputConfig::resolve(
        config.output.format,
        config.output.color,
        cli.output.map(Into::into),
        cli.no_color,
    );
    output.apply_color();

    // === Dependency Injection ===
    let logger: Arc<dyn GroupingLogger> = match &config.logging.run_log {
        Some(path) => match JsonlGroupingLogger::new(path) {
            Some(logger) => {
                info!("Recording runs to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoGroupingLogger),
        },
        None => Arc::new(NoGroupingLogger),
    };

    let ctx = RunContext {
        params: config.grouping.to_params(),
        logger,
        output,
    };

    let roster_path = cli
        .roster
        .unwrap_or_else(|| PathBuf::from(&config.roster.path));

    if roster_path == Path::new(MEMORY_ROSTER) {
        info!("Using an in-memory roster");
        run(Arc::new(InMemoryRoster::new()), command, &ctx).await
    } else {
        info!("Using roster {}", roster_path.display());
        run(Arc::new(JsonRosterRepository::new(roster_path)), command, &ctx).await
    }
}

fn load_config(path: Option<&PathBuf>, no_config: bool) -> Result<FileConfig> {
    let config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path).map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        bail!(
            "Invalid configuration: {}",
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    Ok(config)
}

async fn run<R: MemberRepository + 'static>(
    repository: Arc<R>,
    command: Command,
    ctx: &RunContext,
) -> Result<()> {
    let json = ctx.output.is_json();

    let rendered = match command {
        Command::Members(members) => {
            let use_case =
                ManageMembersUseCase::new(repository).with_logger(ctx.logger.clone());

            match members {
                MembersCommand::Add(args) => {
                    let member = use_case.register(&args.name, args.category).await?;
                    if json {
                        ConsoleFormatter::format_json(&member)
                    } else {
                        ConsoleFormatter::format_registered(std::slice::from_ref(&member))
                    }
                }
                MembersCommand::Import { file } => {
                    let content = tokio::fs::read_to_string(&file)
                        .await
                        .with_context(|| format!("Failed to read {}", file.display()))?;
                    let drafts: Vec<MemberDraft> = serde_json::from_str(&content)
                        .with_context(|| format!("Failed to parse {}", file.display()))?;

                    let added = use_case.register_bulk(&drafts).await?;
                    if json {
                        ConsoleFormatter::format_json(&added)
                    } else {
                        ConsoleFormatter::format_registered(&added)
                    }
                }
                MembersCommand::List => {
                    let members = use_case.list().await?;
                    if json {
                        ConsoleFormatter::format_json(&members)
                    } else {
                        ConsoleFormatter::format_members(&members)
                    }
                }
            }
        }
        Command::Groups(GroupsCommand::Generate { seed }) => {
            let use_case = GenerateGroupUseCase::new(repository, ctx.params.clone())
                .with_logger(ctx.logger.clone());

            let mut input = GenerateGroupInput::new();
            if let Some(seed) = seed {
                input = input.with_seed(seed);
            }

            let result = use_case.execute(input).await?;
            if json {
                ConsoleFormatter::format_json(&result)
            } else {
                ConsoleFormatter::format_group(&result)
            }
        }
        Command::Groups(GroupsCommand::Allocate) => {
            let use_case = AllocateGroupsUseCase::new(repository, ctx.params.clone())
                .with_logger(ctx.logger.clone());

            let allocation = use_case.execute().await?;
            if json {
                ConsoleFormatter::format_json(&allocation)
            } else {
                ConsoleFormatter::format_allocation(&allocation)
            }
        }
    };

    println!("{}", rendered);
    Ok(())
}
