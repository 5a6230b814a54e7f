// Two-pad text diagram.
//
// Each row is 17 characters: both pads drawn side by side, split by `:`,
// with the stepped panel shown as an arrow glyph. Blank rows leave both pads
// empty. A separator row closes every measure.
//
//   |<      :       |   P1 Left
//   |       :  v    |   P2 Down
//   |-------+-------|   end of measure

use crate::RenderError;
use crate::layout::{Row, measures};
use dubstreamr_steps::StepRecord;
use std::fmt::Write;

/// Glyph row for each panel, indexed by `Panel::index()`.
const PANEL_ROWS: [&str; 8] = [
    "|<      :       |",
    "|  v    :       |",
    "|    ^  :       |",
    "|      >:       |",
    "|       :<      |",
    "|       :  v    |",
    "|       :    ^  |",
    "|       :      >|",
];

const BLANK_ROW: &str = "|       :       |";

const MEASURE_SEPARATOR: &str = "|-------+-------|";

/// Width of every diagram row.
pub const ROW_WIDTH: usize = 17;

fn row_text(row: Row) -> &'static str {
    match row {
        Some(panel) => PANEL_ROWS[panel.index()],
        None => BLANK_ROW,
    }
}

/// Render the history as a diagram, `note` rows per measure.
pub fn render_diagram(
    history: &[StepRecord],
    offset: usize,
    note: usize,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for measure in measures(history, offset, note)? {
        for row in measure {
            let _ = writeln!(out, "{}", row_text(row));
        }
        let _ = writeln!(out, "{}", MEASURE_SEPARATOR);
    }
    Ok(out)
}
