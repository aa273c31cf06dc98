// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clientry - a terminal customer dashboard.
//!
//! This is the binary entry point for the Clientry CLI.

mod dash;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

/// Clientry - a terminal customer dashboard.
#[derive(Parser, Debug)]
#[command(name = "clientry", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive dashboard (default).
    Dash,
    /// Fetch the customer list once, print it, and exit.
    List {
        /// Apply this filter query before printing.
        #[arg(long)]
        query: Option<String>,
        /// Print the visible set as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match &cli.config {
        Some(path) => clientry_config::load_and_validate_path(path),
        None => clientry_config::load_and_validate(),
    };
    let config = match config {
        Ok(config) => config,
        Err(errors) => {
            clientry_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let result = match cli.command {
        Some(Commands::List { query, json }) => {
            list::run_list(&config, query.as_deref(), json).await
        }
        Some(Commands::Config) => print_config(&config),
        Some(Commands::Dash) | None => dash::run_dash(&config).await,
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Prints the resolved configuration as TOML.
fn print_config(
    config: &clientry_config::ClientryConfig,
) -> Result<(), clientry_core::ClientryError> {
    let rendered = toml::to_string_pretty(config).map_err(|e| {
        clientry_core::ClientryError::Internal(format!("failed to render config: {e}"))
    })?;
    print!("{rendered}");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so they never interleave with the rendered table.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clientry={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["clientry"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_parses_list_flags() {
        let cli = Cli::parse_from(["clientry", "list", "--query", "ann", "--json"]);
        match cli.command {
            Some(Commands::List { query, json }) => {
                assert_eq!(query.as_deref(), Some("ann"));
                assert!(json);
            }
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn cli_accepts_global_config_path() {
        let cli = Cli::parse_from(["clientry", "dash", "--config", "/tmp/c.toml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
    }

    #[test]
    fn resolved_config_renders_as_toml() {
        let config = clientry_config::ClientryConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("base_url"));
    }
}
