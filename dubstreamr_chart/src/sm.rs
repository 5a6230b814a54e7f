// Chart-file note rows.
//
// Emits the note block of a doubles chart in the common simfile layout: one
// line per row with eight columns (P1 left/down/up/right, then P2), `1` for
// a tap and `0` for nothing. Measures are separated by a `,` line and the
// block ends with `;`.

use crate::RenderError;
use crate::layout::{Row, measures};
use dubstreamr_steps::StepRecord;
use std::fmt::Write;

/// Number of columns in a doubles chart row.
pub const COLUMNS: usize = 8;

fn row_text(row: Row) -> String {
    let mut line = ['0'; COLUMNS];
    if let Some(panel) = row {
        line[panel.index()] = '1';
    }
    line.iter().collect()
}

/// Render the history as chart-file rows, `note` rows per measure.
pub fn render_sm(
    history: &[StepRecord],
    offset: usize,
    note: usize,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for (i, measure) in measures(history, offset, note)?.into_iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        for row in measure {
            let _ = writeln!(out, "{}", row_text(row));
        }
    }
    out.push_str(";\n");
    Ok(out)
}
