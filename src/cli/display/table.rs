//! Table builder wrapper around comfy-table for consistent list display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;

use super::format::count_label;

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render the table with a count header, or `empty_message` when there are no rows.
pub fn render_list(entity_name: &str, table: &Table, total: usize, empty_message: &str) -> String {
    if total == 0 {
        return empty_message.to_string();
    }
    let label = count_label(total, entity_name, &format!("{entity_name}s"));
    let (count, name) = label.split_once(' ').unwrap_or((label.as_str(), ""));
    format!("{} {}:\n{}", style(count).bold(), name, table)
}
