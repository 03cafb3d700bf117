//! Rank progression
//!
//! The colony advances one rank per evaluation when its value crosses the
//! next threshold. A value jump past several thresholds still climbs one
//! level at a time, continuing on subsequent ticks.

use tracing::info;

use crate::colony::state::ColonyState;

/// Advance at most one rank level if the next threshold is met
pub fn evaluate_rank_up(state: &mut ColonyState) {
    let next_index = state.rank_index + 1;
    let Some(next) = state.catalog.ranks().get(next_index) else {
        return;
    };
    if state.city_value >= next.threshold_value {
        state.rank_index = next_index;
        let name = state.catalog.ranks()[next_index].name.clone();
        info!(rank = %name, city_value = state.city_value, "rank up");
        state
            .alerts
            .push(format!("Promoted to {name}!"), state.game_time);
    }
}
