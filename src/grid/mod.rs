//! Grid layer - tile occupancy and the resource-node terrain map

pub mod index;
pub mod nodes;

pub use index::GridIndex;
pub use nodes::NodeGrid;
