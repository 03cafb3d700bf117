//! Per-structure operational evaluation and behavior work
//!
//! Runs once per tick, before the power sums are refreshed, so every
//! structure sees the same settled balance from the previous tick.
//! Offline structures keep their footprint and state but do no work.

use tracing::{debug, trace};

use crate::catalog::Behavior;
use crate::colony::state::ColonyState;
use crate::colony::structure::RuntimeState;
use crate::simulation::power;

/// Settle each structure's operational flag, then perform income,
/// extraction, and conversion work for the tick.
pub fn update_structures(state: &mut ColonyState) {
    let sufficient = power::has_sufficient_power(state);
    let payout_tick = state.game_time % state.config.ticks_per_second == 0;
    let multiplier = state.multiplier;
    let ticks_per_second = state.config.ticks_per_second;

    let ColonyState {
        structures,
        nodes,
        stockpile,
        credits,
        ..
    } = state;

    for structure in structures.iter_mut() {
        // Generators never self-disable; consumers follow the global
        // balance; structures touching no power always run.
        structure.operational = if structure.def.is_generator() {
            true
        } else if structure.def.is_consumer() {
            sufficient
        } else {
            true
        };
        if !structure.operational {
            continue;
        }

        match &structure.def.behavior {
            Behavior::Income { rate } => {
                let payout = rate * multiplier;
                if payout_tick && payout > 0 {
                    *credits += payout as i64;
                    trace!(key = %structure.def.key, payout, "income paid");
                }
            }
            Behavior::Extractor {
                resource,
                rate,
                node,
            } => {
                let on_node = match node {
                    Some(required) => nodes.node_at(structure.origin) == Some(required.as_str()),
                    None => true,
                };
                let yield_amount = rate * multiplier;
                if payout_tick && on_node && yield_amount > 0 {
                    stockpile.add(resource, yield_amount);
                    trace!(key = %structure.def.key, %resource, yield_amount, "extracted");
                }
            }
            Behavior::Converter {
                input,
                input_amount,
                output,
                output_rate,
                cycle_seconds,
            } => {
                if let RuntimeState::Converter { timer_ticks } = &mut structure.state {
                    // A timer held at the threshold by a stall must not fire
                    // while paused; pause does no conversion work at all.
                    if multiplier == 0 {
                        continue;
                    }
                    *timer_ticks += multiplier;
                    let required = cycle_seconds * ticks_per_second;
                    if *timer_ticks >= required {
                        let cycles = *timer_ticks / required;
                        let mut stalled = false;
                        for _ in 0..cycles {
                            if stockpile.consume(input, *input_amount) {
                                stockpile.add(output, *output_rate);
                                debug!(
                                    key = %structure.def.key,
                                    %input, %output, "conversion cycle complete"
                                );
                            } else {
                                stalled = true;
                                break;
                            }
                        }
                        // A stalled converter holds at the threshold so the
                        // next tick retries immediately instead of waiting a
                        // whole cycle again.
                        *timer_ticks = if stalled {
                            required
                        } else {
                            *timer_ticks % required
                        };
                    }
                }
            }
            Behavior::Passive | Behavior::Housing { .. } => {}
        }
    }
}
