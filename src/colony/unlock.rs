//! Unlock gating
//!
//! A building type is available when every condition on its definition is
//! satisfied by the colony's current population, rank, and researched
//! technologies. A definition with no conditions is always available.

use ahash::AHashSet;

use crate::catalog::{Catalog, UnlockConditions};

/// Snapshot of the progression facts unlock checks read
pub struct UnlockContext<'a> {
    pub population: u64,
    pub rank_index: usize,
    pub researched: &'a AHashSet<String>,
}

/// True when every listed condition holds
pub fn is_unlocked(conditions: &UnlockConditions, catalog: &Catalog, ctx: &UnlockContext) -> bool {
    if let Some(min_pop) = conditions.min_population {
        if ctx.population < min_pop {
            return false;
        }
    }
    if let Some(rank_name) = &conditions.min_rank {
        // A rank name not in the table can never be reached
        match catalog.rank_index(rank_name) {
            Some(required) if ctx.rank_index >= required => {}
            _ => return false,
        }
    }
    if let Some(tech) = &conditions.technology {
        if !ctx.researched.contains(tech) {
            return false;
        }
    }
    true
}
