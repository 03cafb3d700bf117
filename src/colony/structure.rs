//! Placed structure entity
//!
//! A structure is an instance of a catalog building type anchored at a grid
//! origin. It carries its own operational/selected flags and a runtime
//! sub-state for the behavior categories that need one.

use crate::catalog::{Behavior, BuildingDef};
use crate::core::config::ColonyConfig;
use crate::core::types::{GridPos, PixelRect, StructureId, Tick};

/// Per-category mutable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeState {
    /// Passive, income, and extractor structures keep no per-tick state
    None,
    /// Housing tracks its current occupants
    Housing { occupants: u32 },
    /// Converters accumulate fractional-cycle progress in ticks
    Converter { timer_ticks: Tick },
}

impl RuntimeState {
    /// Initial runtime state for a behavior category
    pub fn for_behavior(behavior: &Behavior) -> Self {
        match behavior {
            Behavior::Housing { .. } => RuntimeState::Housing { occupants: 0 },
            Behavior::Converter { .. } => RuntimeState::Converter { timer_ticks: 0 },
            _ => RuntimeState::None,
        }
    }
}

/// A building instance placed on the grid
#[derive(Debug, Clone)]
pub struct Structure {
    pub id: StructureId,
    /// Immutable definition, copied out of the catalog at placement
    pub def: BuildingDef,
    /// Top-left tile of the footprint
    pub origin: GridPos,
    /// Eligibility to perform behavior this tick, settled each tick from the
    /// previous tick's power numbers
    pub operational: bool,
    pub selected: bool,
    pub state: RuntimeState,
}

impl Structure {
    pub fn new(def: BuildingDef, origin: GridPos) -> Self {
        let state = RuntimeState::for_behavior(&def.behavior);
        Self {
            id: StructureId::new(),
            def,
            origin,
            // New structures count toward the balance immediately; the first
            // tick after placement settles the flag from real numbers.
            operational: true,
            selected: false,
            state,
        }
    }

    /// All grid cells this structure owns
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.def.footprint.cells(self.origin)
    }

    /// Pixel-space bounds for display collaborators
    pub fn pixel_rect(&self, config: &ColonyConfig) -> PixelRect {
        PixelRect::from_grid(self.origin, self.def.footprint, config.tile_size)
    }

    /// Housing capacity contributed while operational
    pub fn housing_capacity(&self) -> u32 {
        if self.operational {
            self.def.housing_capacity()
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_new_structure_starts_operational() {
        let catalog = Catalog::with_defaults();
        let def = catalog.building("HAB_DOME").unwrap().clone();
        let s = Structure::new(def, GridPos::new(2, 3));
        assert!(s.operational);
        assert!(!s.selected);
        assert_eq!(s.state, RuntimeState::Housing { occupants: 0 });
    }

    #[test]
    fn test_converter_gets_timer_state() {
        let catalog = Catalog::with_defaults();
        let def = catalog.building("FACTORY_PARTS").unwrap().clone();
        let s = Structure::new(def, GridPos::new(0, 0));
        assert_eq!(s.state, RuntimeState::Converter { timer_ticks: 0 });
    }

    #[test]
    fn test_offline_housing_contributes_no_capacity() {
        let catalog = Catalog::with_defaults();
        let def = catalog.building("HAB_DOME").unwrap().clone();
        let mut s = Structure::new(def, GridPos::new(0, 0));
        assert_eq!(s.housing_capacity(), 10);
        s.operational = false;
        assert_eq!(s.housing_capacity(), 0);
    }

    #[test]
    fn test_pixel_rect_scales_with_tile_size() {
        let catalog = Catalog::with_defaults();
        let config = ColonyConfig::default();
        let def = catalog.building("COMMAND_CENTER").unwrap().clone();
        let s = Structure::new(def, GridPos::new(2, 1));
        let rect = s.pixel_rect(&config);
        assert_eq!(rect.x, 64);
        assert_eq!(rect.y, 32);
        assert_eq!(rect.width, 64);
        assert_eq!(rect.height, 64);
    }

    #[test]
    fn test_cells_match_footprint() {
        let catalog = Catalog::with_defaults();
        let def = catalog.building("COMMAND_CENTER").unwrap().clone();
        let s = Structure::new(def, GridPos::new(5, 5));
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells.len(), 4, "command center covers 2x2 tiles");
        assert!(cells.contains(&GridPos::new(6, 6)));
    }
}
