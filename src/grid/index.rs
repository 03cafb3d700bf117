//! Occupancy index - which structure owns each tile
//!
//! A derived view over the colony's structure list: only the code paths that
//! mutate the structure list (placement, removal, snapshot import) touch it,
//! so the two can never disagree.

use crate::core::types::{Footprint, GridPos, StructureId};

/// Two-dimensional occupancy map keyed by tile coordinates
#[derive(Debug, Clone)]
pub struct GridIndex {
    width: u32,
    height: u32,
    cells: Vec<Option<StructureId>>,
}

impl GridIndex {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Whether every cell of the footprint lies inside the grid
    ///
    /// Checked with widened arithmetic so a footprint anchored near the
    /// top-right corner cannot wrap.
    pub fn footprint_in_bounds(&self, origin: GridPos, footprint: Footprint) -> bool {
        (origin.x as u64 + footprint.width as u64) <= self.width as u64
            && (origin.y as u64 + footprint.height as u64) <= self.height as u64
    }

    pub fn occupant(&self, pos: GridPos) -> Option<StructureId> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    /// First already-owned cell of the footprint, if any
    pub fn first_occupied(&self, origin: GridPos, footprint: Footprint) -> Option<GridPos> {
        footprint.cells(origin).find(|c| self.occupant(*c).is_some())
    }

    /// Claim every footprint cell for `id`; the caller has already verified
    /// bounds and exclusivity
    pub fn claim(&mut self, id: StructureId, origin: GridPos, footprint: Footprint) {
        for cell in footprint.cells(origin) {
            let idx = self.index(cell);
            debug_assert!(self.cells[idx].is_none(), "claiming an occupied cell");
            self.cells[idx] = Some(id);
        }
    }

    /// Release every footprint cell held by `id`
    pub fn release(&mut self, id: StructureId, origin: GridPos, footprint: Footprint) {
        for cell in footprint.cells(origin) {
            if !self.in_bounds(cell) {
                continue;
            }
            let idx = self.index(cell);
            debug_assert_eq!(self.cells[idx], Some(id), "releasing a foreign cell");
            self.cells[idx] = None;
        }
    }

    /// Total number of owned cells (for consistency checks)
    pub fn occupied_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn index(&self, pos: GridPos) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }
}
