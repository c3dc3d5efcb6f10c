//! Rendering of decoded transport content.
//!
//! Consumes only the decoder's structured output: raw records are dumped
//! verbatim (escaped), then the first observation is shown as one table
//! row per variable.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use xpt_decode::dates::as_date;
use xpt_decode::{DecodedValue, TransportDocument, Value};

/// Dump every consumed raw record in file order.
pub fn print_records(document: &TransportDocument) {
    println!("[Header records - Namestr records - Observation header]");
    for record in &document.headers {
        println!("{}: {}", record.kind(), render_record(record.raw()));
    }
    for variable in &document.variables {
        println!("NAMESTR: {}", render_record(&variable.raw));
    }
    println!(
        "{}: {}",
        document.observation_header.kind(),
        render_record(document.observation_header.raw())
    );
}

/// Print the first observation, one row per variable.
pub fn print_observation(document: &TransportDocument) {
    println!();
    println!("[Observation #1]");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("No."),
        header_cell("Name"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Length"),
        header_cell("Format"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for decoded in &document.values {
        let variable = &decoded.variable;
        table.add_row(vec![
            Cell::new(variable.varnum),
            Cell::new(variable.trimmed_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(variable.trimmed_label()),
            Cell::new(variable.var_type),
            Cell::new(variable.length),
            Cell::new(variable.format.render()),
            value_cell(decoded),
        ]);
    }
    println!("{table}");
}

/// Escape a raw record for terminal output.
fn render_record(bytes: &[u8]) -> String {
    format!("b'{}'", bytes.escape_ascii())
}

fn value_cell(decoded: &DecodedValue) -> Cell {
    match &decoded.value {
        Value::Text(text) => Cell::new(format!("'{text}'")),
        Value::Number(number) => {
            if decoded.variable.format.is_date() {
                match as_date(*number) {
                    Some(date) => Cell::new(date),
                    None => Cell::new(number),
                }
            } else {
                Cell::new(number)
            }
        }
        Value::Missing => Cell::new("<missing>").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
