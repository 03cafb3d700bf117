//! Colony aggregate: economy state, placed structures, alerts, snapshots

pub mod alerts;
pub mod snapshot;
pub mod state;
pub mod stockpile;
pub mod structure;
pub mod unlock;

pub use alerts::{Alert, AlertQueue};
pub use snapshot::{export_state, import_state, PlacedStructure, Snapshot};
pub use state::ColonyState;
pub use stockpile::Stockpile;
pub use structure::{RuntimeState, Structure};
pub use unlock::{is_unlocked, UnlockContext};
