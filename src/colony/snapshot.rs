//! Snapshot export/import
//!
//! A flat JSON record of everything the engine cannot re-derive: economy
//! numbers, progression, placements, and optionally the resource-node
//! layout. Importing rebuilds the occupancy grid by replaying footprint
//! claims; credits and colony value come from the record, never from
//! re-charging placements.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::colony::state::ColonyState;
use crate::colony::stockpile::Stockpile;
use crate::colony::structure::Structure;
use crate::core::error::{ColonyError, Result};
use crate::core::types::{GridPos, Tick};
use crate::grid::{GridIndex, NodeGrid};
use crate::simulation::{population, power};

/// One placed structure, by type key and footprint origin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedStructure {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: u32,
    pub y: u32,
}

/// Wire format consumed and produced by the persistence collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub credits: i64,
    pub population: u64,
    pub resources: Stockpile,
    pub structures: Vec<PlacedStructure>,
    pub grid_width: u32,
    pub grid_height: u32,
    pub game_time: Tick,
    pub rank_index: usize,
    pub city_value: u64,
    pub technologies: Vec<String>,
    /// Row-major node-type layout; absent means "keep the generated layout"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Vec<Option<String>>>>,
}

/// Capture the current colony as a snapshot record
pub fn export_state(state: &ColonyState) -> Snapshot {
    let mut technologies: Vec<String> = state.researched.iter().cloned().collect();
    technologies.sort();
    Snapshot {
        credits: state.credits,
        population: state.population,
        resources: state.stockpile.clone(),
        structures: state
            .structures
            .iter()
            .map(|s| PlacedStructure {
                kind: s.def.key.clone(),
                x: s.origin.x,
                y: s.origin.y,
            })
            .collect(),
        grid_width: state.config.grid_width,
        grid_height: state.config.grid_height,
        game_time: state.game_time,
        rank_index: state.rank_index,
        city_value: state.city_value,
        technologies,
        nodes: Some(state.nodes.to_layout()),
    }
}

/// Restore a colony from a snapshot record.
///
/// The structure list and grid are rebuilt before any state is replaced, so
/// a rejected snapshot leaves the colony untouched.
pub fn import_state(state: &mut ColonyState, snapshot: &Snapshot) -> Result<()> {
    let mut grid = GridIndex::new(state.config.grid_width, state.config.grid_height);
    let mut structures = Vec::with_capacity(snapshot.structures.len());
    for placed in &snapshot.structures {
        let def = state
            .catalog
            .building(&placed.kind)
            .ok_or_else(|| {
                ColonyError::InvalidSnapshot(format!("unknown building type '{}'", placed.kind))
            })?
            .clone();
        let origin = GridPos::new(placed.x, placed.y);
        if !grid.footprint_in_bounds(origin, def.footprint) {
            return Err(ColonyError::InvalidSnapshot(format!(
                "{} at {} falls outside the grid",
                placed.kind, origin
            )));
        }
        if let Some(cell) = grid.first_occupied(origin, def.footprint) {
            return Err(ColonyError::InvalidSnapshot(format!(
                "overlapping footprints at {cell}"
            )));
        }
        let structure = Structure::new(def, origin);
        grid.claim(structure.id, origin, structure.def.footprint);
        structures.push(structure);
    }

    let nodes = match &snapshot.nodes {
        Some(layout) => Some(NodeGrid::from_layout(layout).ok_or_else(|| {
            ColonyError::InvalidSnapshot("malformed node layout".to_string())
        })?),
        None => None,
    };

    let rank_count = state.catalog.ranks().len();
    if snapshot.rank_index >= rank_count {
        return Err(ColonyError::InvalidSnapshot(format!(
            "rank index {} out of range (only {} ranks)",
            snapshot.rank_index, rank_count
        )));
    }

    state.structures = structures;
    state.grid = grid;
    if let Some(nodes) = nodes {
        state.nodes = nodes;
    }
    state.credits = snapshot.credits;
    state.population = snapshot.population;
    state.stockpile = snapshot.resources.clone();
    state.game_time = snapshot.game_time;
    state.rank_index = snapshot.rank_index;
    state.city_value = snapshot.city_value;
    state.researched = snapshot.technologies.iter().cloned().collect();

    if snapshot.grid_width != state.config.grid_width
        || snapshot.grid_height != state.config.grid_height
    {
        warn!(
            snapshot_dims = %format!("{}x{}", snapshot.grid_width, snapshot.grid_height),
            config_dims = %format!("{}x{}", state.config.grid_width, state.config.grid_height),
            "snapshot grid dimensions differ from configuration"
        );
        state.alerts.push(
            format!(
                "Snapshot grid is {}x{}, expected {}x{}",
                snapshot.grid_width,
                snapshot.grid_height,
                state.config.grid_width,
                state.config.grid_height
            ),
            state.game_time,
        );
    }

    power::recompute_power(state);
    population::recompute_housing(state);
    info!(
        structures = state.structures.len(),
        game_time = state.game_time,
        "snapshot imported"
    );
    Ok(())
}

/// Serialize a snapshot to the JSON wire format
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse a snapshot from JSON, mapping malformed payloads to
/// `InvalidSnapshot`
pub fn from_json(raw: &str) -> Result<Snapshot> {
    serde_json::from_str(raw).map_err(|e| ColonyError::InvalidSnapshot(e.to_string()))
}
