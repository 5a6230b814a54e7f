// The step executor: applies an accepted step to the dancer state.
//
// The free foot takes the weight and lands on the chosen panel. Rotation is
// re-measured as the bearing from foot A to foot B, unwrapped against the
// previous rotation so continuous twisting keeps its sign and magnitude.
//
// Crossover bookkeeping:
// - Passing |rotation| > π/2 while uncrossed marks the foot that just moved
//   as crossed, with the anchor planted.
// - Any real move by a foot other than the crossed one unplants the anchor.
// - Dropping below π/2 clears the crossover.
//
// The executor trusts its caller: it does not re-check validity. The walk
// only ever feeds it panels the validator accepted, or the forced no-op.

use crate::pad::{self, Panel, is_above, is_below};
use crate::state::DancerState;
use std::f64::consts::FRAC_PI_2;

/// Return the state after the free foot lands on `panel`.
pub fn apply_step(state: &DancerState, panel: Panel) -> DancerState {
    let mut next = *state;
    next.weight = state.weight.other();

    let moved = next.foot(next.weight) != panel;
    if next.crossed != Some(next.weight) && moved {
        next.planted = false;
    }
    next.stand = if moved { 0 } else { state.stand + 1 };

    next.feet[next.weight.index()] = panel;

    let rotation = pad::unwrapped_angle(next.feet[0], next.feet[1], state.rotation);
    if next.crossed.is_none() && is_above(rotation.abs(), FRAC_PI_2) {
        next.crossed = Some(next.weight);
        next.planted = true;
    } else if is_below(rotation.abs(), FRAC_PI_2) {
        next.crossed = None;
    }
    next.rotation = rotation;

    next
}
