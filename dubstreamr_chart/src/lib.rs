// Dubstreamr chart output.
//
// Turns the step history produced by `dubstreamr_steps` into text:
// - layout.rs: Shared row stream (leading offset rows, one row per step,
//   measures of `note` rows, final measure padded)
// - diagram.rs: Human-readable two-pad diagram, one 17-character row per step
// - sm.rs: Chart-file note rows (8 one-hot columns, `,` between measures)
// - json.rs: The raw step records as JSON, for inspection and tooling
//
// `ChartFormat` ties the three together for the `generate` binary.

pub mod diagram;
pub mod json;
pub mod layout;
pub mod sm;

use dubstreamr_steps::StepRecord;
use std::path::Path;
use thiserror::Error;

/// Errors raised while rendering or writing a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rows per measure must be at least 1")]
    ZeroNote,

    #[error("failed to serialize chart: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

/// Output encodings for a generated chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Two-pad text diagram with measure separators.
    Diagram,
    /// One-hot chart-file rows.
    Sm,
    /// Step records as JSON.
    Json,
}

impl ChartFormat {
    /// Render `history` in this format.
    ///
    /// `offset` blank rows come before the first step; `note` is the number
    /// of rows per measure. Both are ignored by the JSON format.
    pub fn render(
        self,
        history: &[StepRecord],
        offset: usize,
        note: usize,
    ) -> Result<String, RenderError> {
        match self {
            ChartFormat::Diagram => diagram::render_diagram(history, offset, note),
            ChartFormat::Sm => sm::render_sm(history, offset, note),
            ChartFormat::Json => Ok(json::render_json(history)?),
        }
    }
}

/// Render a chart and write it to `path`.
pub fn write_chart(
    format: ChartFormat,
    history: &[StepRecord],
    offset: usize,
    note: usize,
    path: &Path,
) -> Result<(), RenderError> {
    let text = format.render(history, offset, note)?;
    std::fs::write(path, text)?;
    Ok(())
}
