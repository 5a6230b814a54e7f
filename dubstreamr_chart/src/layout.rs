// Measure layout shared by the text renderers.
//
// A chart is a stream of rows: `offset` blank rows, then one row per step.
// The stream is cut into measures of `note` rows each, and the last measure
// is padded with blank rows so every measure is complete. Chart files need
// whole measures; the diagram uses the same framing so both outputs line up.

use crate::RenderError;
use dubstreamr_steps::{Panel, StepRecord};
use std::iter;

/// A row of the chart: the panel stepped on, or `None` for a blank row.
pub type Row = Option<Panel>;

/// Lay the history out as complete measures of `note` rows.
pub fn measures(
    history: &[StepRecord],
    offset: usize,
    note: usize,
) -> Result<Vec<Vec<Row>>, RenderError> {
    if note == 0 {
        return Err(RenderError::ZeroNote);
    }

    let mut rows: Vec<Row> = Vec::with_capacity(offset + history.len() + note);
    rows.extend(iter::repeat_n(None, offset));
    rows.extend(history.iter().map(|record| Some(record.panel)));
    let padding = (note - rows.len() % note) % note;
    rows.extend(iter::repeat_n(None, padding));

    Ok(rows.chunks(note).map(<[Row]>::to_vec).collect())
}
