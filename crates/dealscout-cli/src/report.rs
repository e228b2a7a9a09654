//! Report rendering: terminal table, Markdown export, CSV export.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use dealscout_core::Deal;

/// Renders deals as an aligned terminal table, one row per deal, ranked from
/// the caller's sort order.
pub(crate) fn render_table(deals: &[Deal]) -> String {
    let header = [
        "#", "Provider", "Title", "Price", "Departure", "Party", "Food", "Drinks",
    ];
    let mut rows: Vec<[String; 8]> = vec![header.map(str::to_string)];
    for (rank, deal) in deals.iter().enumerate() {
        rows.push([
            (rank + 1).to_string(),
            deal.provider.clone(),
            deal.title.clone(),
            format_price(deal.price_cad),
            deal.departure_city.clone(),
            deal.party_score.to_string(),
            deal.food_score.to_string(),
            deal.drinks_score.to_string(),
        ]);
    }

    let mut widths = [0usize; 8];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (cell, &width) in row.iter().zip(&widths) {
            let _ = write!(line, "{cell:<width$}  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Renders deals as a Markdown document with a generated-at line.
pub(crate) fn to_markdown(deals: &[Deal], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("# Vacation deal scan\n\n");
    let _ = writeln!(
        out,
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    if deals.is_empty() {
        out.push_str("No matching deals found.\n");
        return out;
    }

    out.push_str("| # | Provider | Title | Price (CAD) | Departure | Party | Food | Drinks | Link |\n");
    out.push_str("|--:|---|---|--:|---|--:|--:|--:|---|\n");
    for (rank, deal) in deals.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            rank + 1,
            escape_md(&deal.provider),
            escape_md(&deal.title),
            deal.price_cad,
            escape_md(&deal.departure_city),
            deal.party_score,
            deal.food_score,
            deal.drinks_score,
            escape_md(&deal.link),
        );
    }
    out
}

/// Renders deals as CSV with a header row.
pub(crate) fn to_csv(deals: &[Deal]) -> String {
    let mut out =
        String::from("rank,provider,title,price_cad,departure,party,food,drinks,link\n");
    for (rank, deal) in deals.iter().enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            rank + 1,
            escape_csv(&deal.provider),
            escape_csv(&deal.title),
            deal.price_cad,
            escape_csv(&deal.departure_city),
            deal.party_score,
            deal.food_score,
            deal.drinks_score,
            escape_csv(&deal.link),
        );
    }
    out
}

/// `1499` → `$1,499`.
fn format_price(price_cad: u32) -> String {
    let digits = price_cad.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn escape_md(field: &str) -> String {
    field.replace('|', "\\|")
}

/// Quotes a CSV field when it contains a separator, quote, or newline;
/// embedded quotes are doubled.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
