pub mod config;
pub mod error;
pub mod types;

pub use config::ColonyConfig;
pub use error::{CatalogError, ColonyError, Result};
pub use types::{Footprint, GridPos, PixelRect, StructureId, Tick};
