use crate::logging::{init_logging_with_config, LogConfig};
use crate::route_file::{load_routes, parse_method};
use crate::router::{CompiledPattern, Router};
use crate::runtime_config::RuntimeConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for routekit
///
/// Inspects YAML route files and exercises the matcher from a shell.
#[derive(Parser)]
#[command(name = "routekit")]
#[command(about = "Route table inspection and matching", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print every route of a route file in match order
    Routes {
        /// Route file (defaults to $ROUTEKIT_ROUTES_FILE)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Match a request against a route file and print the result as JSON
    Match {
        /// Route file (defaults to $ROUTEKIT_ROUTES_FILE)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: String,

        /// Request path, e.g. /users/42
        path: String,
    },
    /// Show the matcher a pattern compiles to
    Compile {
        /// Route pattern, e.g. /users/:id/files/*
        pattern: String,
    },
}

/// Outcome of a command, mapped to the process exit status by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NoMatch,
}

/// Parse arguments, initialise logging and run the selected command.
///
/// # Errors
///
/// Propagates route-file and pattern errors with context.
pub fn run_cli() -> Result<Outcome> {
    let cli = Cli::parse();
    init_logging_with_config(&LogConfig::from_env())?;
    let config = RuntimeConfig::from_env();
    let mut stdout = std::io::stdout().lock();
    run_command(&cli.command, &config, &mut stdout)
}

/// Execute one command, writing its report to `out`.
///
/// # Errors
///
/// Propagates route-file, method and pattern errors with context.
pub fn run_command(
    command: &Commands,
    config: &RuntimeConfig,
    out: &mut impl std::io::Write,
) -> Result<Outcome> {
    match command {
        Commands::Routes { file } => {
            let router = load(file.as_deref(), config)?;
            writeln!(out, "[routes] count={}", router.len())?;
            for line in router.routes_summary() {
                writeln!(out, "[route] {line}")?;
            }
            Ok(Outcome::Success)
        }
        Commands::Match { file, method, path } => {
            let router = load(file.as_deref(), config)?;
            let method = parse_method(method)?;
            match router.match_route(&method, path) {
                Some(found) => {
                    let json = serde_json::to_string_pretty(&found)
                        .context("Failed to serialize match")?;
                    writeln!(out, "{json}")?;
                    Ok(Outcome::Success)
                }
                None => {
                    writeln!(out, "no match for {method} {path}")?;
                    Ok(Outcome::NoMatch)
                }
            }
        }
        Commands::Compile { pattern } => {
            let compiled = CompiledPattern::compile(pattern)?;
            let names: Vec<&str> = compiled.param_names().iter().map(|n| n.as_ref()).collect();
            writeln!(out, "pattern:   {compiled}")?;
            writeln!(out, "regex:     {}", compiled.regex_str())?;
            writeln!(out, "params:    {}", names.join(", "))?;
            writeln!(out, "wildcards: {}", compiled.wildcard_count())?;
            Ok(Outcome::Success)
        }
    }
}

fn load(file: Option<&Path>, config: &RuntimeConfig) -> Result<Router<String>> {
    let path = file
        .map(Path::to_path_buf)
        .or_else(|| config.routes_file.clone())
        .context("No route file given; pass --file or set ROUTEKIT_ROUTES_FILE")?;
    load_routes(&path, config)
}
