//! Housing capacity and population pacing
//!
//! Population drifts toward the sum of operational housing capacity: one
//! step up per growth interval while below, one step down per (shorter)
//! decline interval while above. The time multiplier shortens both
//! intervals, floored at one tick.

use tracing::trace;

use crate::colony::state::ColonyState;
use crate::colony::structure::RuntimeState;

/// Refresh the housing capacity sum from operational housing structures
pub fn recompute_housing(state: &mut ColonyState) {
    state.housing_capacity = state
        .structures
        .iter()
        .map(|s| s.housing_capacity() as u64)
        .sum();
}

/// Step population toward capacity on interval boundaries. Paused colonies
/// skip adjustment but still refresh derived occupancy.
pub fn adjust_population(state: &mut ColonyState) {
    recompute_housing(state);
    if state.multiplier > 0 {
        let capacity = state.housing_capacity;
        if state.population < capacity {
            let interval = (state.config.growth_period_ticks() / state.multiplier).max(1);
            if state.game_time % interval == 0 {
                state.population = (state.population + 1).min(capacity);
                trace!(population = state.population, capacity, "population grew");
            }
        } else if state.population > capacity {
            let interval = (state.config.decline_period_ticks() / state.multiplier).max(1);
            if state.game_time % interval == 0 {
                state.population = state.population.saturating_sub(1);
                trace!(population = state.population, capacity, "population declined");
            }
        }
    }
    distribute_occupants(state);
}

/// Assign population to operational housing in placement order; any
/// over-capacity remainder goes unhoused until the decline catches up
fn distribute_occupants(state: &mut ColonyState) {
    let mut remaining = state.population;
    for structure in &mut state.structures {
        let room = structure.housing_capacity() as u64;
        if let RuntimeState::Housing { occupants } = &mut structure.state {
            let assigned = remaining.min(room);
            *occupants = assigned as u32;
            remaining -= assigned;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::config::ColonyConfig;
    use crate::core::types::GridPos;
    use crate::simulation::tick;

    fn state() -> ColonyState {
        ColonyState::new(ColonyConfig::default(), Catalog::with_defaults(), 9).unwrap()
    }

    #[test]
    fn test_population_grows_every_growth_interval() {
        let mut s = state();
        s.place_structure("HAB_DOME", GridPos::new(0, 0)).unwrap();
        s.place_structure("HAB_DOME", GridPos::new(2, 0)).unwrap();
        assert_eq!(s.population, 10);

        // Growth fires each 5 seconds at 60 ticks per second
        for _ in 0..300 {
            tick::tick(&mut s);
        }
        assert_eq!(s.population, 11);
        for _ in 0..300 {
            tick::tick(&mut s);
        }
        assert_eq!(s.population, 12);
    }

    #[test]
    fn test_population_declines_faster_than_it_grows() {
        let mut s = state();
        // No housing at all: the starting ten decline every 2 seconds
        for _ in 0..120 {
            tick::tick(&mut s);
        }
        assert_eq!(s.population, 9);
        for _ in 0..1200 {
            tick::tick(&mut s);
        }
        assert_eq!(s.population, 0, "population floors at zero");
    }

    #[test]
    fn test_growth_step_never_overshoots_capacity() {
        let mut s = state();
        s.place_structure("HAB_DOME", GridPos::new(0, 0)).unwrap();
        s.population = 10;
        s.housing_capacity = 10;
        adjust_population(&mut s);
        assert_eq!(s.population, 10);
    }

    #[test]
    fn test_multiplier_shortens_intervals() {
        let mut s = state();
        s.place_structure("HAB_DOME", GridPos::new(0, 0)).unwrap();
        s.place_structure("HAB_DOME", GridPos::new(2, 0)).unwrap();
        s.set_multiplier(10);

        // 300-tick growth interval shrinks to 30 ticks
        for _ in 0..30 {
            tick::tick(&mut s);
        }
        assert_eq!(s.population, 11);
    }

    #[test]
    fn test_occupants_fill_housing_in_placement_order() {
        let mut s = state();
        s.place_structure("HAB_DOME", GridPos::new(0, 0)).unwrap();
        s.place_structure("HAB_DOME", GridPos::new(2, 0)).unwrap();
        s.population = 13;
        s.game_time = 7;
        adjust_population(&mut s);

        let occupants: Vec<u32> = s
            .structures
            .iter()
            .filter_map(|b| match b.state {
                RuntimeState::Housing { occupants } => Some(occupants),
                _ => None,
            })
            .collect();
        assert_eq!(occupants, vec![10, 3]);
    }

    #[test]
    fn test_offline_housing_sheds_capacity() {
        let mut s = state();
        s.place_structure("HAB_DOME", GridPos::new(0, 0)).unwrap();
        recompute_housing(&mut s);
        assert_eq!(s.housing_capacity, 10);
        s.structures[0].operational = false;
        recompute_housing(&mut s);
        assert_eq!(s.housing_capacity, 0);
    }
}
