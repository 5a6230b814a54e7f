// The step-validity predicate.
//
// Given the dancer's state, decide whether the free (non-weight-bearing)
// foot may land on a candidate panel. Rules are checked in a fixed order and
// the first one that fires decides:
//
//  1. Staying put is a no-op, allowed only while `stand < max_stand_count`.
//  2. Never step onto the weight-bearing foot's panel.
//  3. Speed: the free foot may travel at most `max_move_distance`.
//  4. Stretch: the feet may end at most `max_stretch_distance` apart.
//  5. Rotation bound: |rotation| may not pass π, and a crossed stance
//     (|rotation| > π/2) must keep the feet within `max_cross_distance`.
//  6. No instant flip: one step may not twist more than half a turn.
//  7. From a full center cross, the next step must start uncrossing.
//  8. With advanced crossovers allowed, everything else is accepted.
//  9. While crossed, an anchor move must reduce |rotation|, and the crossed
//     foot may only deepen the cross if the anchor is still planted.
//
// The predicate is pure: it never touches the state, and the same inputs
// always give the same answer. `check_step` says which rule fired, which the
// walk logs at trace level and the tests assert on.

use crate::config::StepConfig;
use crate::pad::{self, Panel, is_above, is_below};
use crate::state::DancerState;
use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;

/// Why a candidate step was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("already stood still for the maximum number of steps")]
    StandLimit,
    #[error("panel is under the weight-bearing foot")]
    Footswitch,
    #[error("foot would travel too far")]
    TooFar,
    #[error("feet would end too far apart")]
    Overstretched,
    #[error("body would turn past a half turn")]
    OverRotated,
    #[error("crossed stance would be too wide")]
    WideCrossover,
    #[error("step would twist more than half a turn at once")]
    InstantFlip,
    #[error("full center cross must start uncrossing")]
    CenterCross,
    #[error("anchor foot must help uncross")]
    AnchorMustUncross,
    #[error("crossover can only deepen while the anchor is planted")]
    DeepenWithoutPlant,
}

/// Check a candidate step, naming the first rule it breaks.
pub fn check_step(
    state: &DancerState,
    candidate: Panel,
    config: &StepConfig,
) -> Result<(), Rejection> {
    let mover = state.free_foot();
    let mut feet = state.feet;
    feet[mover.index()] = candidate;

    if feet == state.feet {
        return if state.stand < config.max_stand_count {
            Ok(())
        } else {
            Err(Rejection::StandLimit)
        };
    }

    if candidate == state.foot(state.weight) {
        return Err(Rejection::Footswitch);
    }

    if is_above(pad::distance(state.foot(mover), candidate), config.max_move_distance) {
        return Err(Rejection::TooFar);
    }

    let spread = pad::distance(feet[0], feet[1]);
    if is_above(spread, config.max_stretch_distance) {
        return Err(Rejection::Overstretched);
    }

    let new_angle = pad::unwrapped_angle(feet[0], feet[1], state.rotation);
    let crossed_stance = is_above(new_angle.abs(), FRAC_PI_2);

    if is_above(new_angle.abs(), PI) {
        return Err(Rejection::OverRotated);
    }
    if crossed_stance && is_above(spread, config.max_cross_distance) {
        return Err(Rejection::WideCrossover);
    }
    if is_above((new_angle - state.rotation).abs(), PI) {
        return Err(Rejection::InstantFlip);
    }

    // The center panels with the feet swapped: A on the right, B on the left.
    let [center_left, center_right] = Panel::CENTER;
    let center_crossed = state.feet == [center_right, center_left];
    if center_crossed && crossed_stance {
        return Err(Rejection::CenterCross);
    }

    if config.allow_advanced_crossovers {
        return Ok(());
    }

    let uncrossing = is_below(new_angle.abs(), state.rotation.abs());
    if state.crossed == Some(state.weight) && !uncrossing {
        return Err(Rejection::AnchorMustUncross);
    }
    if state.crossed == Some(mover) && !uncrossing && !state.planted {
        return Err(Rejection::DeepenWithoutPlant);
    }

    Ok(())
}

/// Whether the free foot may land on `candidate`.
pub fn is_valid(state: &DancerState, candidate: Panel, config: &StepConfig) -> bool {
    check_step(state, candidate, config).is_ok()
}

/// Every panel the free foot may land on, in panel order.
pub fn valid_steps(state: &DancerState, config: &StepConfig) -> Vec<Panel> {
    Panel::ALL
        .into_iter()
        .filter(|&candidate| match check_step(state, candidate, config) {
            Ok(()) => true,
            Err(reason) => {
                tracing::trace!(?candidate, %reason, "rejected step");
                false
            }
        })
        .collect()
}
