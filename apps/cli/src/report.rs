//! Tabular cost report rendering.

use std::io::{self, Write};

use rateio_core::allocation::AllocationResult;
use rateio_core::formatting::format_amount;

use crate::style::Style;

const HEADERS: [&str; 4] = ["Nome/Ticker", "Valor Inicial", "Custo (+)", "Valor Final (=)"];

/// Renders the per-asset cost table for one allocated note.
pub fn render<W: Write>(out: &mut W, result: &AllocationResult, style: &Style) -> io::Result<()> {
    let rows: Vec<[String; 4]> = result
        .iter()
        .map(|entry| {
            [
                entry.name.clone(),
                format_amount(entry.original_value),
                format_amount(entry.share),
                format_amount(entry.final_value),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", style.bold("Relatório de Custos"))?;
    write_rule(out, &widths, '┌', '┬', '┐')?;

    write!(out, "│")?;
    for (header, width) in HEADERS.iter().zip(&widths) {
        let cell = format!("{header:<width$}");
        write!(out, " {} │", style.bold(&cell))?;
    }
    writeln!(out)?;
    write_rule(out, &widths, '├', '┼', '┤')?;

    for row in &rows {
        let name = format!("{:<width$}", row[0], width = widths[0]);
        let initial = format!("{:>width$}", row[1], width = widths[1]);
        let cost = format!("{:>width$}", row[2], width = widths[2]);
        let final_value = format!("{:>width$}", row[3], width = widths[3]);
        writeln!(
            out,
            "│ {} │ {} │ {} │ {} │",
            style.cyan(&name),
            initial,
            style.red(&cost),
            style.green(&final_value)
        )?;
    }

    write_rule(out, &widths, '└', '┴', '┘')
}

fn write_rule<W: Write>(
    out: &mut W,
    widths: &[usize; 4],
    left: char,
    mid: char,
    right: char,
) -> io::Result<()> {
    write!(out, "{left}")?;
    for (i, width) in widths.iter().enumerate() {
        write!(out, "{}", "─".repeat(width + 2))?;
        write!(out, "{}", if i + 1 == widths.len() { right } else { mid })?;
    }
    writeln!(out)
}
