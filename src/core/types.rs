//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Unique identifier for placed structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructureId(pub Uuid);

impl StructureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StructureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StructureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile coordinate on the colony grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular footprint in tiles (width x height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Iterate all cells the footprint covers when anchored at `origin`
    pub fn cells(&self, origin: GridPos) -> impl Iterator<Item = GridPos> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |dy| (0..w).map(move |dx| GridPos::new(origin.x + dx, origin.y + dy)))
    }

    pub fn tile_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Pixel-space rectangle derived from a grid footprint (for display collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Project a grid-anchored footprint into pixel space
    pub fn from_grid(origin: GridPos, footprint: Footprint, tile_size: u32) -> Self {
        Self {
            x: origin.x * tile_size,
            y: origin.y * tile_size,
            width: footprint.width * tile_size,
            height: footprint.height * tile_size,
        }
    }
}
