//! Rank ladder and technology definitions

use serde::{Deserialize, Serialize};

/// A colony rank with the city value required to reach it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDef {
    pub name: String,
    /// Minimum city value (sum of placed structure costs) for this rank
    pub threshold_value: u64,
}

/// A researchable technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechDef {
    pub id: String,
    pub name: String,
    /// Research cost in credits
    pub cost: u64,
    pub description: String,
}

/// A resource node type placed on the terrain at worldgen time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeDef {
    pub key: String,
    pub name: String,
}
