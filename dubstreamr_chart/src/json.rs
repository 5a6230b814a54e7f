// JSON export of the step history.
//
// Writes one object per step with plain indices (panel 0-7, foot slot 0/1)
// and the rotation in degrees, which is easier to read and to feed into
// other tools than the typed records.

use dubstreamr_steps::StepRecord;
use serde::Serialize;

/// Serialized form of a `StepRecord`.
#[derive(Debug, Serialize)]
struct JsonStep {
    panel: usize,
    weight: usize,
    rotation_degrees: f64,
    planted: bool,
    crossed: Option<usize>,
    stand: u32,
}

impl From<&StepRecord> for JsonStep {
    fn from(record: &StepRecord) -> Self {
        JsonStep {
            panel: record.panel.index(),
            weight: record.weight.index(),
            rotation_degrees: record.rotation_degrees(),
            planted: record.planted,
            crossed: record.crossed.map(|foot| foot.index()),
            stand: record.stand,
        }
    }
}

/// Render the history as a pretty-printed JSON array.
pub fn render_json(history: &[StepRecord]) -> serde_json::Result<String> {
    let steps: Vec<JsonStep> = history.iter().map(JsonStep::from).collect();
    serde_json::to_string_pretty(&steps)
}
