//! Fixed-width text tables

/// Marker appended to values cut to fit their column
pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

/// Fit `value` into exactly `width` characters: truncate with an ellipsis
/// when too long, pad with spaces when too short
pub fn fit(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len > width {
        if width == 0 {
            return String::new();
        }
        let mut cut: String = value.chars().take(width - 1).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        format!("{value:<width$}")
    }
}

/// Render one row; columns are separated by two spaces and trailing
/// whitespace is trimmed
pub fn render_row(columns: &[Column], cells: &[&str]) -> String {
    columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| fit(cell, column.width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Header, dashed rule and one line per row
pub fn render_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    let mut lines = vec![render_row(columns, &headers)];

    let rule: Vec<String> = columns.iter().map(|c| "-".repeat(c.width)).collect();
    let rule_cells: Vec<&str> = rule.iter().map(String::as_str).collect();
    lines.push(render_row(columns, &rule_cells));

    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(render_row(columns, &cells));
    }

    lines.join("\n")
}
