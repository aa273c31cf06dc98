// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `clientry dash` command implementation.
//!
//! Launches the interactive dashboard: one customer fetch behind a spinner,
//! then a readline loop where every submitted line replaces the filter
//! query and re-renders the table. Slash commands handle everything that is
//! not a query.

use std::io::IsTerminal;
use std::time::Duration;

use clientry_api::CustomerApi;
use clientry_config::ClientryConfig;
use clientry_core::{ClientryError, CustomerId};
use clientry_dashboard::{Dashboard, LoadState, format_detail, format_failed, format_footer, format_table};
use colored::Colorize;
use indicatif::ProgressBar;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// Runs the `clientry dash` interactive dashboard.
///
/// Fetches the customer list exactly once, renders one of the three views,
/// and (when the fetch succeeded) enters the filter loop.
pub async fn run_dash(config: &ClientryConfig) -> Result<(), ClientryError> {
    let api = CustomerApi::new(&config.api.base_url)?;
    let use_color = std::io::stdout().is_terminal();

    // Loading view: spinner until the single fetch settles.
    let mut dashboard = Dashboard::new();
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading customers...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    dashboard.load(&api).await;
    spinner.finish_and_clear();

    if let LoadState::Failed(message) = dashboard.state() {
        // Failed view. Re-running the binary is the retry path.
        eprintln!("{}", format_failed(message, use_color));
        std::process::exit(1);
    }

    println!("{}", "clientry dash".bold().green());
    println!(
        "Type a query to filter by name or email, {} for commands.",
        "/help".yellow()
    );
    render(&dashboard, config, use_color);

    let mut rl = DefaultEditor::new().map_err(|e| {
        ClientryError::Internal(format!("failed to initialize readline: {e}"))
    })?;

    let prompt = format!("{}> ", "filter".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if let Some(command) = trimmed.strip_prefix('/') {
                    let _ = rl.add_history_entry(&line);
                    let mut parts = command.split_whitespace();
                    match parts.next() {
                        Some("quit") | Some("exit") => break,
                        Some("help") => print_help(),
                        Some("show") => {
                            show_customer(&api, parts.next(), config, use_color).await;
                        }
                        _ => {
                            eprintln!(
                                "{}: unknown command /{command}; try /help",
                                "error".red()
                            );
                        }
                    }
                    continue;
                }

                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(&line);
                }

                // Every submitted line is a query-change event; an empty
                // line clears the filter.
                debug!(query = trimmed, "query changed");
                dashboard.set_query(trimmed);
                render(&dashboard, config, use_color);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Renders the Ready view: table plus visible/total footer.
fn render(dashboard: &Dashboard, config: &ClientryConfig, use_color: bool) {
    println!();
    print!(
        "{}",
        format_table(
            dashboard.visible(),
            &config.dashboard.date_format,
            use_color
        )
    );
    let footer = format_footer(dashboard.visible().len(), dashboard.total());
    if use_color {
        println!("  {}", footer.dimmed());
    } else {
        println!("  {footer}");
    }
    println!();
}

/// Handles `/show <id>`: fetches and prints one detail card.
async fn show_customer(
    api: &CustomerApi,
    arg: Option<&str>,
    config: &ClientryConfig,
    use_color: bool,
) {
    let id = match arg.and_then(|a| a.parse::<i64>().ok()) {
        Some(n) => CustomerId(n),
        None => {
            eprintln!("{}: usage: /show <id>", "error".red());
            return;
        }
    };

    match api.customer_detail(id).await {
        Ok(detail) => {
            println!();
            print!(
                "{}",
                format_detail(&detail, &config.dashboard.date_format, use_color)
            );
            println!();
        }
        Err(e) => eprintln!("{}: {e}", "error".red()),
    }
}

/// Prints the slash-command summary.
fn print_help() {
    println!("  <text>       filter by first name, last name, or email");
    println!("  <empty>      clear the filter");
    println!("  /show <id>   show one customer's profile and order count");
    println!("  /quit        exit the dashboard");
}
