//! SQL rendering for generated data.
//!
//! Every table becomes one insert block: a `-- <Table> test data` comment line
//! followed by a single multi-row `INSERT` statement. Blocks are separated by a
//! blank line.

use crate::generator::{GeneratedData, Row, TableData};
use std::io::{self, Write};

/// Separator placed between consecutive insert blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Comment line that precedes a table's insert block
pub fn block_header(table_name: &str) -> String {
    format!("-- {} test data", table_name)
}

/// Render one table as a commented, multi-row INSERT statement
pub fn render_table(table: &TableData) -> String {
    let mut out = block_header(table.name());
    out.push('\n');

    if table.rows.is_empty() {
        out.push_str("-- (no rows)\n");
        return out;
    }

    out.push_str(&format!(
        "INSERT INTO {} ({}) VALUES\n",
        table.name(),
        table.table.columns.join(", ")
    ));
    let tuples: Vec<String> = table.rows.iter().map(render_row).collect();
    out.push_str(&tuples.join(",\n"));
    out.push_str(";\n");
    out
}

fn render_row(row: &Row) -> String {
    let values: Vec<String> = row.iter().map(|v| v.to_sql()).collect();
    format!("({})", values.join(", "))
}

/// Render all tables, in order, as the full output text
pub fn render_to_string(data: &GeneratedData) -> String {
    data.tables
        .iter()
        .map(render_table)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Write the rendered output, returning the number of bytes written
pub fn render_to_writer<W: Write>(data: &GeneratedData, mut writer: W) -> io::Result<u64> {
    let output = render_to_string(data);
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(output.len() as u64)
}
