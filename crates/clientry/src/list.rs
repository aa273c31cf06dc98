// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `clientry list` command implementation.
//!
//! One-shot, scriptable variant of the dashboard: fetch once, apply an
//! optional query through the same filter, print a table or JSON, exit.

use std::io::IsTerminal;

use clientry_api::CustomerApi;
use clientry_config::ClientryConfig;
use clientry_core::ClientryError;
use clientry_dashboard::{Dashboard, LoadState, format_failed, format_footer, format_table};

/// Runs the `clientry list` command.
///
/// Exits with code 1 when the fetch fails; the failure message goes to
/// stderr (or to stdout as JSON in `--json` mode).
pub async fn run_list(
    config: &ClientryConfig,
    query: Option<&str>,
    json: bool,
) -> Result<(), ClientryError> {
    let api = CustomerApi::new(&config.api.base_url)?;
    let use_color = std::io::stdout().is_terminal();

    let mut dashboard = Dashboard::new();
    dashboard.load(&api).await;

    if let LoadState::Failed(message) = dashboard.state() {
        if json {
            println!("{}", serde_json::json!({ "error": message }));
        } else {
            eprintln!("{}", format_failed(message, use_color));
        }
        std::process::exit(1);
    }

    if let Some(query) = query {
        dashboard.set_query(query);
    }

    print!("{}", render_output(&dashboard, config, json, use_color));
    Ok(())
}

/// Builds the full stdout payload for a settled dashboard.
fn render_output(
    dashboard: &Dashboard,
    config: &ClientryConfig,
    json: bool,
    use_color: bool,
) -> String {
    if json {
        let body = serde_json::to_string_pretty(dashboard.visible())
            .unwrap_or_else(|_| "[]".to_string());
        return format!("{body}\n");
    }

    let mut out = format_table(
        dashboard.visible(),
        &config.dashboard.date_format,
        use_color,
    );
    out.push_str("  ");
    out.push_str(&format_footer(dashboard.visible().len(), dashboard.total()));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use clientry_dashboard::NO_CUSTOMERS_PLACEHOLDER;
    use clientry_test_utils::fixtures::ann_and_bob;

    use super::*;

    fn ready_dashboard() -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.apply_fetch_result(Ok(ann_and_bob()));
        dashboard
    }

    #[test]
    fn table_output_includes_footer() {
        let dashboard = ready_dashboard();
        let out = render_output(&dashboard, &ClientryConfig::default(), false, false);
        assert!(out.contains("ann@x.com"));
        assert!(out.ends_with("2/2 customers\n"));
    }

    #[test]
    fn filtered_table_counts_visible_only() {
        let mut dashboard = ready_dashboard();
        dashboard.set_query("an");
        let out = render_output(&dashboard, &ClientryConfig::default(), false, false);
        assert!(out.contains("Ann"));
        assert!(!out.contains("Bob"));
        assert!(out.contains("1/2 customers"));
    }

    #[test]
    fn unmatched_query_prints_placeholder() {
        let mut dashboard = ready_dashboard();
        dashboard.set_query("zz");
        let out = render_output(&dashboard, &ClientryConfig::default(), false, false);
        assert!(out.contains(NO_CUSTOMERS_PLACEHOLDER));
        assert!(out.contains("0/2 customers"));
    }

    #[test]
    fn json_output_is_the_visible_set() {
        let mut dashboard = ready_dashboard();
        dashboard.set_query("bob");
        let out = render_output(&dashboard, &ClientryConfig::default(), true, false);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["email"], "bob@x.com");
        assert_eq!(rows[0]["user_id"], 2);
    }
}
