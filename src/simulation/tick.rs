//! Tick orchestration
//!
//! One call per render frame. The step order matters: structures settle
//! their operational flags and do their work against the previous tick's
//! power numbers, then the power sums are refreshed, then population and
//! rank read the freshly settled state.

use crate::colony::state::ColonyState;
use crate::simulation::{population, power, production, rank};

/// Advance the colony by exactly one tick
pub fn tick(state: &mut ColonyState) {
    state.game_time += 1;
    production::update_structures(state);
    power::recompute_power(state);
    population::adjust_population(state);
    rank::evaluate_rank_up(state);
    state
        .alerts
        .discard_expired(state.game_time, state.config.alert_display_ticks);
}
