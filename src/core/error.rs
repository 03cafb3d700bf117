use crate::core::types::GridPos;
use thiserror::Error;

/// Recoverable engine errors plus the startup-fatal catalog case.
///
/// Everything except `Catalog` is reported back to the caller and surfaced
/// through the alert queue; the running session continues.
#[derive(Error, Debug)]
pub enum ColonyError {
    #[error("Insufficient credits: need {cost}, have {credits}")]
    InsufficientFunds { cost: u64, credits: i64 },

    #[error("Building type is locked: {0}")]
    Locked(String),

    #[error("Placement out of bounds at {0}")]
    OutOfBounds(GridPos),

    #[error("Tile already occupied at {0}")]
    TileOccupied(GridPos),

    #[error("Nothing to remove at {0}")]
    NothingToRemove(GridPos),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Unknown building type: {0}")]
    UnknownBuildingType(String),

    #[error("Unknown technology: {0}")]
    UnknownTechnology(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Startup-time configuration errors. A malformed catalog entry is fatal
/// before the simulation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Failed to read catalog file: {0}")]
    IoError(String),

    #[error("Building '{key}' is malformed: {reason}")]
    MalformedBuilding { key: String, reason: String },

    #[error("Duplicate building key: {0}")]
    DuplicateBuilding(String),

    #[error("Building '{key}' unlock refers to unknown rank '{rank}'")]
    UnknownRank { key: String, rank: String },

    #[error("Building '{key}' unlock refers to unknown technology '{tech}'")]
    UnknownTech { key: String, tech: String },

    #[error("Building '{key}' extracts from unknown node type '{node}'")]
    UnknownNodeType { key: String, node: String },

    #[error("Rank table is empty")]
    EmptyRankTable,
}

pub type Result<T> = std::result::Result<T, ColonyError>;
