//! Presentation adapter for listing results.
//!
//! # Responsibility
//! - Turn typed rows into ordered column-to-value maps.
//! - Render those maps as a plain text table with an `(index)` column.
//!
//! # Invariants
//! - Column order follows the row type's field order.
//! - Absent values render as `null`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered column name to value mapping for one result row.
pub type TableRow = Map<String, Value>;

const INDEX_HEADER: &str = "(index)";
const EMPTY_NOTICE: &str = "(no rows)";

/// Converts typed rows into uniform table rows.
///
/// Non-object values (which the roster row types never produce) end up in a
/// single `value` column.
pub fn to_table_rows<T: Serialize>(items: &[T]) -> serde_json::Result<Vec<TableRow>> {
    items
        .iter()
        .map(|item| {
            Ok(match serde_json::to_value(item)? {
                Value::Object(map) => map,
                other => {
                    let mut map = Map::new();
                    map.insert("value".to_string(), other);
                    map
                }
            })
        })
        .collect()
}

/// Renders rows as a boxed text table.
///
/// Columns are taken from the first row, in order; later rows with missing
/// columns show an empty cell.
pub fn render_table(rows: &[TableRow]) -> String {
    let Some(first) = rows.first() else {
        return format!("{EMPTY_NOTICE}\n");
    };

    let mut headers = vec![INDEX_HEADER.to_string()];
    headers.extend(first.keys().cloned());

    let body = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut cells = vec![index.to_string()];
            cells.extend(
                first
                    .keys()
                    .map(|column| row.get(column).map(cell_text).unwrap_or_default()),
            );
            cells
        })
        .collect::<Vec<_>>();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            body.iter()
                .map(|cells| cells[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    push_border(&mut out, &widths, '┌', '┬', '┐');
    push_cells(&mut out, &widths, &headers);
    push_border(&mut out, &widths, '├', '┼', '┤');
    for cells in &body {
        push_cells(&mut out, &widths, cells);
    }
    push_border(&mut out, &widths, '└', '┴', '┘');
    out
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(text) => format!("'{text}'"),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() && float.fract() == 0.0 => format!("{float:.0}"),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

fn push_border(out: &mut String, widths: &[usize], left: char, middle: char, right: char) {
    out.push(left);
    for (position, width) in widths.iter().enumerate() {
        if position > 0 {
            out.push(middle);
        }
        out.push_str(&"─".repeat(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn push_cells(out: &mut String, widths: &[usize], cells: &[String]) {
    out.push('│');
    for (position, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if position > 0 {
            out.push('│');
        }
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(width - cell.chars().count()));
        out.push(' ');
    }
    out.push('│');
    out.push('\n');
}
