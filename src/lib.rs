//! Nova Outpost - Colony Economy Simulation Engine

pub mod catalog;
pub mod colony;
pub mod core;
pub mod grid;
pub mod simulation;

pub use catalog::Catalog;
pub use colony::ColonyState;
pub use crate::core::config::ColonyConfig;
pub use crate::core::error::{ColonyError, Result};
