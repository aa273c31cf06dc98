// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text rendering for the Ready table, the failed view, and detail cards.
//!
//! Pure string builders; the binary decides where the output goes and
//! whether color is in play.

use chrono::{DateTime, Local, Utc};
use clientry_core::{Customer, CustomerDetail};
use colored::Colorize;

/// Placeholder row shown when no record matches the query.
pub const NO_CUSTOMERS_PLACEHOLDER: &str = "No customers found.";

/// Table column headers, in render order.
const HEADERS: [&str; 5] = ["Customer ID", "First Name", "Last Name", "Email", "Created At"];

/// Gap between columns.
const GUTTER: &str = "  ";

/// Formats a creation timestamp using the local date convention.
///
/// Converts to the local timezone and applies the configured strftime
/// pattern (default `%x`).
pub fn format_created_at(created_at: &DateTime<Utc>, date_format: &str) -> String {
    created_at
        .with_timezone(&Local)
        .format(date_format)
        .to_string()
}

/// Renders the customer table: header, separator, one row per visible
/// record, or the placeholder row when the visible set is empty.
pub fn format_table(customers: &[Customer], date_format: &str, use_color: bool) -> String {
    let rows: Vec<[String; 5]> = customers
        .iter()
        .map(|c| {
            [
                c.user_id.to_string(),
                c.first_name.clone(),
                c.last_name.clone(),
                c.email.clone(),
                format_created_at(&c.created_at, date_format),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.len();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();

    let mut header_line = String::from(GUTTER);
    for (i, header) in HEADERS.iter().enumerate() {
        let cell = format!("{header:<width$}", width = widths[i]);
        if use_color {
            header_line.push_str(&cell.bold().to_string());
        } else {
            header_line.push_str(&cell);
        }
        if i + 1 < HEADERS.len() {
            header_line.push_str(GUTTER);
        }
    }
    out.push_str(header_line.trim_end());
    out.push('\n');

    let rule_width =
        widths.iter().sum::<usize>() + GUTTER.len() * (HEADERS.len() - 1);
    out.push_str(GUTTER);
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(GUTTER);
        out.push_str(NO_CUSTOMERS_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    for row in &rows {
        let mut line = String::from(GUTTER);
        for (i, cell) in row.iter().enumerate() {
            line.push_str(&format!("{cell:<width$}", width = widths[i]));
            if i + 1 < row.len() {
                line.push_str(GUTTER);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// "visible/total customers" footer under the table.
pub fn format_footer(visible: usize, total: usize) -> String {
    format!("{visible}/{total} customers")
}

/// The failed view: one human-readable line carrying the fetch error.
pub fn format_failed(message: &str, use_color: bool) -> String {
    let line = format!("Error fetching data: {message}");
    if use_color {
        line.red().to_string()
    } else {
        line
    }
}

/// Renders an extended profile card for one customer.
///
/// Absent demographics are omitted rather than shown as blanks.
pub fn format_detail(detail: &CustomerDetail, date_format: &str, use_color: bool) -> String {
    let mut out = String::new();

    let title = format!("customer {}", detail.user_id);
    out.push_str(GUTTER);
    if use_color {
        out.push_str(&title.bold().to_string());
    } else {
        out.push_str(&title);
    }
    out.push('\n');
    out.push_str(GUTTER);
    out.push_str(&"-".repeat(35));
    out.push('\n');

    let mut field = |label: &str, value: String| {
        out.push_str(&format!("    {label:<9} {value}\n"));
    };

    field("Name:", format!("{} {}", detail.first_name, detail.last_name));
    field("Email:", detail.email.clone());
    if let Some(age) = detail.age {
        field("Age:", age.to_string());
    }
    if let Some(gender) = &detail.gender {
        field("Gender:", gender.clone());
    }
    match (&detail.city, &detail.country) {
        (Some(city), Some(country)) => field("Location:", format!("{city}, {country}")),
        (Some(city), None) => field("Location:", city.clone()),
        (None, Some(country)) => field("Location:", country.clone()),
        (None, None) => {}
    }
    field(
        "Created:",
        format_created_at(&detail.created_at, date_format),
    );
    field("Orders:", detail.order_count.to_string());

    out
}

#[cfg(test)]
mod tests {
    use clientry_test_utils::fixtures::{ann_and_bob, dana_detail};

    use super::*;

    #[test]
    fn table_contains_header_and_all_rows() {
        let table = format_table(&ann_and_bob(), "%Y-%m-%d", false);
        assert!(table.contains("Customer ID"));
        assert!(table.contains("Created At"));
        assert!(table.contains("ann@x.com"));
        assert!(table.contains("bob@x.com"));
        // Two header lines + two rows.
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn empty_table_shows_placeholder_row() {
        let table = format_table(&[], "%Y-%m-%d", false);
        assert!(table.contains(NO_CUSTOMERS_PLACEHOLDER));
        assert!(!table.contains("@"));
    }

    #[test]
    fn rows_preserve_input_order() {
        let table = format_table(&ann_and_bob(), "%Y-%m-%d", false);
        let ann = table.find("Ann").expect("Ann row present");
        let bob = table.find("Bob").expect("Bob row present");
        assert!(ann < bob);
    }

    #[test]
    fn columns_align_on_the_widest_cell() {
        let table = format_table(&ann_and_bob(), "%Y-%m-%d", false);
        // The email column starts at the same offset in every row even
        // though "Lee" and "Ng" differ in width.
        let offsets: Vec<usize> = table
            .lines()
            .filter_map(|line| line.find("@x.com"))
            .collect();
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets[0], offsets[1]);
    }

    #[test]
    fn created_at_uses_local_date_convention() {
        let customers = ann_and_bob();
        let rendered = format_created_at(&customers[0].created_at, "%Y-%m-%d");
        // Jan 15 cannot shift across a year boundary in any timezone.
        assert!(rendered.starts_with("2024"), "got: {rendered}");
    }

    #[test]
    fn footer_counts_visible_and_total() {
        assert_eq!(format_footer(1, 2), "1/2 customers");
        assert_eq!(format_footer(0, 0), "0/0 customers");
    }

    #[test]
    fn failed_view_carries_the_message() {
        let line = format_failed("API returned 500: boom", false);
        assert_eq!(line, "Error fetching data: API returned 500: boom");
    }

    #[test]
    fn detail_card_renders_all_known_fields() {
        let card = format_detail(&dana_detail(), "%Y-%m-%d", false);
        assert!(card.contains("customer 4"));
        assert!(card.contains("Name:     Dana Okafor"));
        assert!(card.contains("Email:    dana@example.net"));
        assert!(card.contains("Age:      34"));
        assert!(card.contains("Location: Lagos, Nigeria"));
        assert!(card.contains("Orders:   12"));
    }

    #[test]
    fn detail_card_omits_absent_demographics() {
        let mut detail = dana_detail();
        detail.age = None;
        detail.city = None;
        detail.country = None;

        let card = format_detail(&detail, "%Y-%m-%d", false);
        assert!(!card.contains("Age:"));
        assert!(!card.contains("Location:"));
        assert!(card.contains("Gender:"));
    }
}
