//! Power balance aggregation
//!
//! Capacity is the configured base plus every operational generator; demand
//! is the sum of operational consumer draw. Offline structures contribute
//! zero to both sides, so an offline generator yields nothing and an offline
//! consumer costs nothing.

use crate::colony::state::ColonyState;

/// Recompute both power sums from the current operational flags
pub fn recompute_power(state: &mut ColonyState) {
    let mut capacity = state.config.base_power as i64;
    let mut demand = 0i64;
    for structure in &state.structures {
        if structure.operational {
            capacity += structure.def.power_gen as i64;
            demand += structure.def.power_draw as i64;
        }
    }
    state.power_capacity = capacity;
    state.power_demand = demand;
}

/// True when capacity covers demand, from the last settled balance
pub fn has_sufficient_power(state: &ColonyState) -> bool {
    state.power_capacity >= state.power_demand
}
