// Random walk driver: turns the validator and executor into a chart.
//
// A `Walker` owns one run's dancer state and history. It opens with two
// steps that put the feet on a random pair of panels in different columns,
// then repeatedly steps onto a uniformly random valid panel. When no panel is
// valid, the free foot is re-placed where it already is (a forced no-op), so
// the walk never stalls.
//
// The RNG is passed in by the caller (`&mut impl Rng`), keeping runs
// reproducible under a seeded generator.

use crate::config::{ConfigError, StepConfig, min_opening_stretch};
use crate::pad::{self, Panel, is_above};
use crate::state::{DancerState, StepRecord};
use crate::step::apply_step;
use crate::validate::valid_steps;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One chart-generation run in progress.
#[derive(Debug, Clone)]
pub struct Walker {
    config: StepConfig,
    state: DancerState,
    history: Vec<StepRecord>,
}

impl Walker {
    /// Validate `config` and open on a random pair of panels.
    ///
    /// The first panel is uniform over the pad; the second is uniform over
    /// panels in a different column within `max_stretch_distance` of it.
    pub fn initialize_start(config: StepConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;

        let first = Panel::ALL[rng.random_range(0..Panel::ALL.len())];
        let partners: Vec<Panel> = Panel::ALL
            .into_iter()
            .filter(|p| p.x() != first.x())
            .filter(|&p| !is_above(pad::distance(first, p), config.max_stretch_distance))
            .collect();
        let second = partners
            .choose(rng)
            .copied()
            .ok_or_else(|| ConfigError::StretchTooShort {
                value: config.max_stretch_distance,
                required: min_opening_stretch(),
            })?;

        Walker::with_opening(config, first, second)
    }

    /// Validate `config` and open on a given pair of panels.
    ///
    /// The panels must sit in different columns and within
    /// `max_stretch_distance` of each other. The lesser-x panel is stepped on
    /// first with foot A, then the other with foot B, which is left bearing
    /// the weight.
    pub fn with_opening(
        config: StepConfig,
        first: Panel,
        second: Panel,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if first.x() == second.x()
            || is_above(pad::distance(first, second), config.max_stretch_distance)
        {
            return Err(ConfigError::InvalidOpening { first, second });
        }

        let (left, right) = if first.x() < second.x() {
            (first, second)
        } else {
            (second, first)
        };
        tracing::debug!(?left, ?right, "opening stance");

        let mut walker = Walker {
            config,
            state: DancerState::before_opening(left, right),
            history: Vec::new(),
        };
        walker.step(left);
        walker.step(right);
        Ok(walker)
    }

    // Unchecked: callers pass the opening pair, a validated panel, or the
    // free foot's own panel.
    fn step(&mut self, panel: Panel) {
        self.state = apply_step(&self.state, panel);
        let record = StepRecord::capture(&self.state, panel);
        tracing::debug!(
            step = self.history.len(),
            ?panel,
            foot = ?record.weight,
            degrees = record.rotation_degrees(),
            crossed = ?record.crossed,
            planted = record.planted,
            stand = record.stand,
            "step"
        );
        self.history.push(record);
    }

    /// Take one uniformly random valid step, or stand still if none exists.
    ///
    /// Returns the panel stepped on.
    pub fn random_step(&mut self, rng: &mut impl Rng) -> Panel {
        let candidates = valid_steps(&self.state, &self.config);
        let panel = match candidates.choose(rng) {
            Some(&panel) => panel,
            None => {
                let panel = self.state.foot(self.state.free_foot());
                tracing::debug!(?panel, "no valid step, standing in place");
                panel
            }
        };
        self.step(panel);
        panel
    }

    pub fn state(&self) -> &DancerState {
        &self.state
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    pub fn into_history(self) -> Vec<StepRecord> {
        self.history
    }
}

/// Generate a chart of `measures * beats_per_measure` steps.
///
/// The two opening steps count toward the total.
pub fn run(
    measures: usize,
    beats_per_measure: usize,
    config: StepConfig,
    rng: &mut impl Rng,
) -> Result<Vec<StepRecord>, ConfigError> {
    let steps = measures.saturating_mul(beats_per_measure);
    if steps < 2 {
        return Err(ConfigError::ChartTooShort { steps });
    }

    let mut walker = Walker::initialize_start(config, rng)?;
    for _ in 2..steps {
        walker.random_step(rng);
    }
    Ok(walker.into_history())
}
