// Dubstreamr step generator.
//
// Procedurally generates a doubles dance-pad chart: a sequence of foot
// placements over the eight panels of two pads, constrained so that a human
// could plausibly dance it (reach, speed, body twist, crossover recovery).
// Generation is a random walk over the panels, where each candidate step is
// screened by a rule-based validator against the dancer's current state.
//
// Architecture:
// - pad.rs: Fixed panel table, distances, bearings, least-twist unwrapping,
//   tolerance comparisons for boundary angles
// - config.rs: Tunable thresholds (`StepConfig`), JSON loading + validation
// - state.rs: Dancer state (feet, weight, rotation, crossover flags) and the
//   per-step history record
// - validate.rs: The step-validity predicate, with named rejection reasons
// - step.rs: The executor that applies an accepted step to the state
// - walk.rs: Opening stance, random steps with no-op fallback, full runs
//
// The generator is deterministic given a seeded RNG. Rendering lives in the
// `dubstreamr_chart` crate.

pub mod config;
pub mod pad;
pub mod state;
pub mod step;
pub mod validate;
pub mod walk;

pub use config::{ConfigError, StepConfig};
pub use pad::Panel;
pub use state::{DancerState, Foot, StepRecord};
pub use validate::{Rejection, check_step, is_valid, valid_steps};
pub use walk::{Walker, run};
