//! Resource-node layout - read-only terrain generated once per world
//!
//! Nodes are laid down as rectangular patches with partial fill, then never
//! change. Extractors consult the node under their origin tile each payout.

use crate::catalog::NodeTypeDef;
use crate::core::config::ColonyConfig;
use crate::core::types::GridPos;
use rand::Rng;

/// Sparse map of resource node type keys, one optional entry per tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<String>>,
}

impl NodeGrid {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    /// Generate a fresh layout: for each node type, a handful of rectangular
    /// patches dropped at random clear spots, each filled at 70% density.
    pub fn generate<R: Rng>(config: &ColonyConfig, node_types: &[NodeTypeDef], rng: &mut R) -> Self {
        let mut grid = Self::empty(config.grid_width, config.grid_height);

        for node_type in node_types {
            for _ in 0..config.node_patches_per_type {
                // A patch may fail to find clear ground; give up after a few tries
                for _attempt in 0..10 {
                    let patch_w = rng.gen_range(config.node_patch_min..=config.node_patch_max);
                    let patch_h = rng.gen_range(config.node_patch_min..=config.node_patch_max);
                    let start_x = rng.gen_range(0..=config.grid_width - patch_w);
                    let start_y = rng.gen_range(0..=config.grid_height - patch_h);

                    let clear = (0..patch_h).all(|dy| {
                        (0..patch_w).all(|dx| {
                            grid.node_at(GridPos::new(start_x + dx, start_y + dy)).is_none()
                        })
                    });
                    if !clear {
                        continue;
                    }

                    for dy in 0..patch_h {
                        for dx in 0..patch_w {
                            if rng.gen::<f32>() < 0.7 {
                                grid.set(
                                    GridPos::new(start_x + dx, start_y + dy),
                                    Some(node_type.key.clone()),
                                );
                            }
                        }
                    }
                    break;
                }
            }
        }

        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn node_at(&self, pos: GridPos) -> Option<&str> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells[self.index(pos)].as_deref()
    }

    pub fn node_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Row-major nested layout for the snapshot schema
    pub fn to_layout(&self) -> Vec<Vec<Option<String>>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[self.index(GridPos::new(x, y))].clone())
                    .collect()
            })
            .collect()
    }

    /// Rebuild from a snapshot layout; `None` when the rows are ragged
    pub fn from_layout(layout: &[Vec<Option<String>>]) -> Option<Self> {
        let height = layout.len() as u32;
        let width = layout.first().map(|row| row.len()).unwrap_or(0) as u32;
        if layout.iter().any(|row| row.len() as u32 != width) {
            return None;
        }
        let mut grid = Self::empty(width, height);
        for (y, row) in layout.iter().enumerate() {
            for (x, node) in row.iter().enumerate() {
                grid.set(GridPos::new(x as u32, y as u32), node.clone());
            }
        }
        Some(grid)
    }

    fn set(&mut self, pos: GridPos, node: Option<String>) {
        let idx = self.index(pos);
        self.cells[idx] = node;
    }

    fn index(&self, pos: GridPos) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }
}
