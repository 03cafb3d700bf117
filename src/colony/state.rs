//! Colony state
//!
//! The single mutable aggregate the simulation systems operate on. All grid
//! mutations go through `place_structure`, `remove_structure`, and snapshot
//! import so the occupancy index never drifts from the structure list.

use ahash::AHashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::colony::alerts::AlertQueue;
use crate::colony::stockpile::Stockpile;
use crate::colony::structure::Structure;
use crate::colony::unlock::{is_unlocked, UnlockContext};
use crate::core::config::ColonyConfig;
use crate::core::error::{ColonyError, Result};
use crate::core::types::{GridPos, StructureId, Tick};
use crate::grid::{GridIndex, NodeGrid};
use crate::simulation::{power, rank};

pub struct ColonyState {
    pub config: ColonyConfig,
    pub catalog: Catalog,
    pub structures: Vec<Structure>,
    /// Occupancy index derived from `structures`
    pub grid: GridIndex,
    pub nodes: NodeGrid,
    pub credits: i64,
    /// Sum of the cost of everything currently built
    pub city_value: u64,
    pub population: u64,
    pub housing_capacity: u64,
    /// Settled power numbers from the end of the last tick
    pub power_capacity: i64,
    pub power_demand: i64,
    pub game_time: Tick,
    /// Time scale applied to all timed effects; 0 pauses them
    pub multiplier: u64,
    pub rank_index: usize,
    /// Building type armed for construction; stays armed across placements
    pub selected_building_type: Option<String>,
    pub researched: AHashSet<String>,
    pub stockpile: Stockpile,
    pub alerts: AlertQueue,
}

impl ColonyState {
    /// Fresh colony with resource nodes generated from the given seed
    pub fn new(config: ColonyConfig, catalog: Catalog, seed: u64) -> Result<Self> {
        config.validate().map_err(ColonyError::InvalidConfig)?;
        catalog.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let nodes = NodeGrid::generate(&config, catalog.node_types(), &mut rng);
        let stockpile = Stockpile::with_resources(catalog.resources());
        Ok(Self {
            grid: GridIndex::new(config.grid_width, config.grid_height),
            nodes,
            credits: config.initial_credits,
            city_value: 0,
            population: config.initial_population,
            housing_capacity: 0,
            power_capacity: config.base_power as i64,
            power_demand: 0,
            game_time: 0,
            multiplier: 1,
            rank_index: 0,
            selected_building_type: None,
            researched: AHashSet::new(),
            stockpile,
            alerts: AlertQueue::new(),
            structures: Vec::new(),
            config,
            catalog,
        })
    }

    /// Net power after demand, from the last settled balance
    pub fn power_balance(&self) -> i64 {
        self.power_capacity - self.power_demand
    }

    pub fn current_rank(&self) -> &str {
        self.catalog
            .rank_name(self.rank_index)
            .unwrap_or("Unranked")
    }

    pub fn unlock_context(&self) -> UnlockContext<'_> {
        UnlockContext {
            population: self.population,
            rank_index: self.rank_index,
            researched: &self.researched,
        }
    }

    /// Building types currently available to place
    pub fn available_buildings(&self) -> Vec<&str> {
        let ctx = self.unlock_context();
        self.catalog
            .buildings()
            .iter()
            .filter(|def| is_unlocked(&def.unlock, &self.catalog, &ctx))
            .map(|def| def.key.as_str())
            .collect()
    }

    /// Place a structure of the given type with its footprint anchored at
    /// `origin`. Charges the cost and adds it to the colony value.
    pub fn place_structure(&mut self, key: &str, origin: GridPos) -> Result<StructureId> {
        let def = self
            .catalog
            .building(key)
            .ok_or_else(|| ColonyError::UnknownBuildingType(key.to_string()))?
            .clone();

        if self.credits < def.cost as i64 {
            self.alerts
                .push(format!("Not enough credits for {}", def.name), self.game_time);
            return Err(ColonyError::InsufficientFunds {
                cost: def.cost,
                credits: self.credits,
            });
        }
        let ctx = self.unlock_context();
        if !is_unlocked(&def.unlock, &self.catalog, &ctx) {
            self.alerts
                .push(format!("{} is still locked", def.name), self.game_time);
            return Err(ColonyError::Locked(def.name.clone()));
        }
        if !self.grid.footprint_in_bounds(origin, def.footprint) {
            return Err(ColonyError::OutOfBounds(origin));
        }
        if let Some(occupied) = self.grid.first_occupied(origin, def.footprint) {
            return Err(ColonyError::TileOccupied(occupied));
        }

        // Building on the wrong node is allowed; the extractor just idles
        if let crate::catalog::Behavior::Extractor {
            node: Some(required),
            ..
        } = &def.behavior
        {
            if self.nodes.node_at(origin) != Some(required.as_str()) {
                warn!(%key, %origin, %required, "extractor placed off its node type");
                self.alerts.push(
                    format!("{} is not on a {} and will not produce", def.name, required),
                    self.game_time,
                );
            }
        }

        self.credits -= def.cost as i64;
        self.city_value += def.cost;
        let structure = Structure::new(def, origin);
        let id = structure.id;
        self.grid.claim(id, origin, structure.def.footprint);
        info!(%key, %origin, "placed structure");
        self.structures.push(structure);
        power::recompute_power(self);
        rank::evaluate_rank_up(self);
        Ok(id)
    }

    /// Remove whatever structure claims the given cell. Demolition refunds
    /// nothing; only the colony value drops.
    pub fn remove_structure(&mut self, pos: GridPos) -> Result<StructureId> {
        let id = self
            .grid
            .occupant(pos)
            .ok_or(ColonyError::NothingToRemove(pos))?;
        let idx = self
            .structures
            .iter()
            .position(|s| s.id == id)
            .ok_or(ColonyError::NothingToRemove(pos))?;
        // Occupant distribution walks this list in placement order, so the
        // order must survive demolition
        let structure = self.structures.remove(idx);
        self.grid
            .release(id, structure.origin, structure.def.footprint);
        self.city_value = self.city_value.saturating_sub(structure.def.cost);
        info!(key = %structure.def.key, pos = %pos, "removed structure");
        self.alerts
            .push(format!("{} demolished", structure.def.name), self.game_time);
        power::recompute_power(self);
        rank::evaluate_rank_up(self);
        Ok(id)
    }

    /// Research a technology, spending credits
    pub fn research(&mut self, tech_id: &str) -> Result<()> {
        let tech = self
            .catalog
            .technology(tech_id)
            .ok_or_else(|| ColonyError::UnknownTechnology(tech_id.to_string()))?;
        if self.researched.contains(tech_id) {
            return Ok(());
        }
        if self.credits < tech.cost as i64 {
            return Err(ColonyError::InsufficientFunds {
                cost: tech.cost,
                credits: self.credits,
            });
        }
        let cost = tech.cost;
        let name = tech.name.clone();
        self.credits -= cost as i64;
        self.researched.insert(tech_id.to_string());
        self.alerts
            .push(format!("Research complete: {name}"), self.game_time);
        debug!(%tech_id, "technology researched");
        Ok(())
    }

    /// Arm a building type for construction, or `None` to leave
    /// construction mode. The key must exist in the catalog.
    pub fn select_building_type(&mut self, key: Option<&str>) -> Result<()> {
        if let Some(key) = key {
            if self.catalog.building(key).is_none() {
                return Err(ColonyError::UnknownBuildingType(key.to_string()));
            }
        }
        self.selected_building_type = key.map(str::to_string);
        Ok(())
    }

    pub fn selected_building_type(&self) -> Option<&str> {
        self.selected_building_type.as_deref()
    }

    pub fn structure_at(&self, pos: GridPos) -> Option<&Structure> {
        let id = self.grid.occupant(pos)?;
        self.structures.iter().find(|s| s.id == id)
    }

    /// Toggle selection of the structure under the cell; clears any other
    /// selection. Clicking empty ground clears selection.
    pub fn select_at(&mut self, pos: GridPos) {
        let target = self.grid.occupant(pos);
        for s in &mut self.structures {
            s.selected = target == Some(s.id) && !s.selected;
        }
    }

    pub fn selected_structure(&self) -> Option<&Structure> {
        self.structures.iter().find(|s| s.selected)
    }

    /// Set the time multiplier; 0 pauses all timed effects
    pub fn set_multiplier(&mut self, multiplier: u64) {
        self.multiplier = multiplier;
    }

    pub fn is_paused(&self) -> bool {
        self.multiplier == 0
    }
}
