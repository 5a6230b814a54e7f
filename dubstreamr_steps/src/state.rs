// Dancer state: the single mutable entity of a chart run.
//
// The state is a small `Copy` record. The validator reads it through a shared
// reference; the executor (`step.rs`) takes it by reference and returns the
// next state, so there is never more than one owner of "the current feet".
//
// Foot slots are not labeled left/right. In the opening stance foot A is on
// the lesser-x panel, so a rotation near 0 means facing forward; after that,
// handedness is only implied by the tracked rotation.
//
// `StepRecord` is the snapshot appended to the history after every accepted
// step, and is what the renderers consume.

use crate::pad::Panel;
use serde::{Deserialize, Serialize};

/// One of the dancer's two feet, identified by state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foot {
    A = 0,
    B = 1,
}

impl Foot {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite foot.
    pub fn other(self) -> Foot {
        match self {
            Foot::A => Foot::B,
            Foot::B => Foot::A,
        }
    }
}

/// Where the dancer stands and how they are twisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DancerState {
    /// Panel under each foot, indexed by `Foot::index()`.
    pub feet: [Panel; 2],
    /// The foot that last moved and now carries the weight.
    pub weight: Foot,
    /// Unwrapped bearing from foot A to foot B, in radians.
    pub rotation: f64,
    /// The foot that crossed over when |rotation| passed π/2, if any.
    pub crossed: Option<Foot>,
    /// The anchor (non-crossed) foot has not moved since the crossover began.
    /// Only meaningful while `crossed` is set.
    pub planted: bool,
    /// Consecutive steps where the moving foot stayed on its own panel.
    pub stand: u32,
}

impl DancerState {
    /// The state just before the two opening steps onto `left` and `right`.
    ///
    /// Each foot starts where the other is about to land, so both opening
    /// placements count as real moves. Weight is on foot B, so the first
    /// step moves foot A onto `left` and the second moves foot B onto `right`.
    pub fn before_opening(left: Panel, right: Panel) -> Self {
        DancerState {
            feet: [right, left],
            weight: Foot::B,
            rotation: 0.0,
            crossed: None,
            planted: false,
            stand: 0,
        }
    }

    pub fn foot(&self, foot: Foot) -> Panel {
        self.feet[foot.index()]
    }

    /// The foot that moves next.
    pub fn free_foot(&self) -> Foot {
        self.weight.other()
    }
}

/// History entry for one accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Panel the moving foot landed on.
    pub panel: Panel,
    /// The foot that moved (and now bears weight).
    pub weight: Foot,
    /// Rotation after the step, in radians.
    pub rotation: f64,
    pub planted: bool,
    pub crossed: Option<Foot>,
    pub stand: u32,
}

impl StepRecord {
    /// Snapshot a state right after `panel` was stepped on.
    pub fn capture(state: &DancerState, panel: Panel) -> Self {
        StepRecord {
            panel,
            weight: state.weight,
            rotation: state.rotation,
            planted: state.planted,
            crossed: state.crossed,
            stand: state.stand,
        }
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foot_other() {
        assert_eq!(Foot::A.other(), Foot::B);
        assert_eq!(Foot::B.other(), Foot::A);
        assert_eq!(Foot::A.index(), 0);
        assert_eq!(Foot::B.index(), 1);
    }

    #[test]
    fn test_before_opening() {
        let state = DancerState::before_opening(Panel::P1Right, Panel::P2Left);
        assert_eq!(state.feet, [Panel::P2Left, Panel::P1Right]);
        assert_eq!(state.free_foot(), Foot::A);
        assert_eq!(state.rotation, 0.0);
        assert_eq!(state.crossed, None);
    }

    #[test]
    fn test_capture() {
        let mut state = DancerState::before_opening(Panel::P1Left, Panel::P1Right);
        state.rotation = std::f64::consts::FRAC_PI_2;
        state.stand = 2;
        let record = StepRecord::capture(&state, Panel::P1Up);
        assert_eq!(record.panel, Panel::P1Up);
        assert_eq!(record.weight, Foot::B);
        assert_eq!(record.stand, 2);
        assert!((record.rotation_degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = StepRecord {
            panel: Panel::P2Down,
            weight: Foot::A,
            rotation: -2.5,
            planted: true,
            crossed: Some(Foot::A),
            stand: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""panel":"P2Down""#), "{json}");
        let back: StepRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_state_json_roundtrip() {
        let mut state = DancerState::before_opening(Panel::P1Up, Panel::P2Left);
        state.rotation = 0.75;
        state.stand = 3;
        let json = serde_json::to_string(&state).unwrap();
        let back: DancerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
