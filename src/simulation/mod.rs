//! Per-tick systems operating on a `ColonyState`

pub mod population;
pub mod power;
pub mod production;
pub mod rank;
pub mod tick;

pub use tick::tick;
