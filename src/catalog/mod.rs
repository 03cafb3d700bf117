//! Static catalog - building types, resources, node types, ranks, technologies
//!
//! Loaded once at startup and immutable for the session. A malformed entry is
//! a fatal configuration error before the simulation begins.

pub mod building;
pub mod progression;

pub use building::{Behavior, BuildingDef, UnlockConditions};
pub use progression::{NodeTypeDef, RankDef, TechDef};

use crate::core::error::CatalogError;
use crate::core::types::Footprint;
use ahash::AHashMap;
use serde::Deserialize;

/// The complete immutable catalog for a session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    buildings: Vec<BuildingDef>,
    building_index: AHashMap<String, usize>,
    ranks: Vec<RankDef>,
    technologies: Vec<TechDef>,
    node_types: Vec<NodeTypeDef>,
    resources: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: the baseline colony structures, ore and oil
    /// production chains, six ranks, and the manufacturing technology.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        for resource in ["RAW_ORE", "CONSTRUCTION_PARTS", "FOOD_UNITS", "CRUDE_OIL", "FUEL"] {
            catalog.resources.push(resource.to_string());
        }

        catalog.node_types = vec![
            NodeTypeDef {
                key: "ORE_DEPOSIT".into(),
                name: "Ore Deposit".into(),
            },
            NodeTypeDef {
                key: "OIL_FIELD".into(),
                name: "Oil Field".into(),
            },
        ];

        catalog.ranks = vec![
            RankDef { name: "Outpost Surveyor".into(), threshold_value: 0 },
            RankDef { name: "Colony Starter".into(), threshold_value: 10_000 },
            RankDef { name: "Colony Supervisor".into(), threshold_value: 50_000 },
            RankDef { name: "Urban Planner".into(), threshold_value: 150_000 },
            RankDef { name: "System Governor".into(), threshold_value: 500_000 },
            RankDef { name: "Elite Urbanist".into(), threshold_value: 1_000_000 },
        ];

        catalog.technologies = vec![TechDef {
            id: "basic_manufacturing".into(),
            name: "Basic Manufacturing".into(),
            cost: 5_000,
            description: "Enables production of construction parts.".into(),
        }];

        let defs = vec![
            BuildingDef {
                key: "COMMAND_CENTER".into(),
                name: "Command Center".into(),
                cost: 5_000,
                power_draw: 10,
                power_gen: 0,
                footprint: Footprint::new(2, 2),
                behavior: Behavior::Passive,
                unlock: UnlockConditions::none(),
            },
            BuildingDef {
                key: "HAB_DOME".into(),
                name: "Habitation Dome".into(),
                cost: 500,
                power_draw: 2,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Housing { capacity: 10 },
                unlock: UnlockConditions::none(),
            },
            BuildingDef {
                key: "SOLAR_PANEL_ARRAY".into(),
                name: "Solar Array".into(),
                cost: 1_000,
                power_draw: 0,
                power_gen: 20,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Passive,
                unlock: UnlockConditions::none(),
            },
            BuildingDef {
                key: "POWER_CONDUIT".into(),
                name: "Power Conduit".into(),
                cost: 50,
                power_draw: 0,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Passive,
                unlock: UnlockConditions::none(),
            },
            BuildingDef {
                key: "RESOURCE_EXTRACTOR".into(),
                name: "Ore Extractor".into(),
                cost: 1_500,
                power_draw: 5,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Extractor {
                    resource: "RAW_ORE".into(),
                    rate: 1,
                    node: Some("ORE_DEPOSIT".into()),
                },
                unlock: UnlockConditions {
                    min_population: Some(20),
                    ..UnlockConditions::none()
                },
            },
            BuildingDef {
                key: "PUMPJACK".into(),
                name: "Pumpjack".into(),
                cost: 1_800,
                power_draw: 8,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Extractor {
                    resource: "CRUDE_OIL".into(),
                    rate: 1,
                    node: Some("OIL_FIELD".into()),
                },
                unlock: UnlockConditions {
                    min_population: Some(30),
                    ..UnlockConditions::none()
                },
            },
            BuildingDef {
                key: "FACTORY_PARTS".into(),
                name: "Parts Factory".into(),
                cost: 2_000,
                power_draw: 15,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Converter {
                    input: "RAW_ORE".into(),
                    input_amount: 2,
                    output: "CONSTRUCTION_PARTS".into(),
                    output_rate: 1,
                    cycle_seconds: 5,
                },
                unlock: UnlockConditions {
                    min_population: Some(50),
                    technology: Some("basic_manufacturing".into()),
                    ..UnlockConditions::none()
                },
            },
            BuildingDef {
                key: "FUEL_REFINERY".into(),
                name: "Fuel Refinery".into(),
                cost: 2_500,
                power_draw: 20,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Converter {
                    input: "CRUDE_OIL".into(),
                    input_amount: 2,
                    output: "FUEL".into(),
                    output_rate: 1,
                    cycle_seconds: 5,
                },
                unlock: UnlockConditions {
                    min_rank: Some("Colony Starter".into()),
                    ..UnlockConditions::none()
                },
            },
            BuildingDef {
                key: "TRADE_COMPLEX".into(),
                name: "Trade Complex".into(),
                cost: 3_000,
                power_draw: 10,
                power_gen: 0,
                footprint: Footprint::new(2, 1),
                behavior: Behavior::Income { rate: 5 },
                unlock: UnlockConditions {
                    min_rank: Some("Colony Supervisor".into()),
                    ..UnlockConditions::none()
                },
            },
            BuildingDef {
                key: "LIFE_SUPPORT_NEXUS".into(),
                name: "Life Support Nexus".into(),
                cost: 2_500,
                power_draw: 20,
                power_gen: 0,
                footprint: Footprint::new(1, 1),
                behavior: Behavior::Passive,
                unlock: UnlockConditions {
                    min_rank: Some("Colony Supervisor".into()),
                    ..UnlockConditions::none()
                },
            },
        ];

        for def in defs {
            catalog
                .add_building(def)
                .expect("default catalog entries are well-formed");
        }

        catalog
            .validate()
            .expect("default catalog passes validation");
        catalog
    }

    /// Add a building definition, rejecting duplicates and malformed entries
    pub fn add_building(&mut self, def: BuildingDef) -> Result<(), CatalogError> {
        def.check()?;
        if self.building_index.contains_key(&def.key) {
            return Err(CatalogError::DuplicateBuilding(def.key));
        }
        self.building_index
            .insert(def.key.clone(), self.buildings.len());
        self.buildings.push(def);
        Ok(())
    }

    pub fn building(&self, key: &str) -> Option<&BuildingDef> {
        self.building_index.get(key).map(|&i| &self.buildings[i])
    }

    pub fn buildings(&self) -> &[BuildingDef] {
        &self.buildings
    }

    pub fn ranks(&self) -> &[RankDef] {
        &self.ranks
    }

    /// Index of a rank by name; unknown names are unsatisfiable unlock gates
    pub fn rank_index(&self, name: &str) -> Option<usize> {
        self.ranks.iter().position(|r| r.name == name)
    }

    pub fn rank_name(&self, index: usize) -> Option<&str> {
        self.ranks.get(index).map(|r| r.name.as_str())
    }

    pub fn technologies(&self) -> &[TechDef] {
        &self.technologies
    }

    pub fn technology(&self, id: &str) -> Option<&TechDef> {
        self.technologies.iter().find(|t| t.id == id)
    }

    pub fn node_types(&self) -> &[NodeTypeDef] {
        &self.node_types
    }

    pub fn node_type(&self, key: &str) -> Option<&NodeTypeDef> {
        self.node_types.iter().find(|n| n.key == key)
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Cross-reference integrity, fatal at startup if violated
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.ranks.is_empty() {
            return Err(CatalogError::EmptyRankTable);
        }
        for def in &self.buildings {
            if let Some(rank) = &def.unlock.min_rank {
                if self.rank_index(rank).is_none() {
                    return Err(CatalogError::UnknownRank {
                        key: def.key.clone(),
                        rank: rank.clone(),
                    });
                }
            }
            if let Some(tech) = &def.unlock.technology {
                if self.technology(tech).is_none() {
                    return Err(CatalogError::UnknownTech {
                        key: def.key.clone(),
                        tech: tech.clone(),
                    });
                }
            }
            if let Behavior::Extractor { node: Some(node), .. } = &def.behavior {
                if self.node_type(node).is_none() {
                    return Err(CatalogError::UnknownNodeType {
                        key: def.key.clone(),
                        node: node.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse a full catalog from TOML
    pub fn parse_toml(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            toml::from_str(content).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut catalog = Self::new();
        catalog.resources = raw.resources;
        catalog.node_types = raw.node_types;
        catalog.ranks = raw.ranks;
        catalog.technologies = raw.technologies;
        for building in raw.buildings {
            catalog.add_building(building.into_def()?)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::parse_toml(&content)
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    resources: Vec<String>,
    #[serde(default)]
    node_types: Vec<NodeTypeDef>,
    #[serde(default)]
    ranks: Vec<RankDef>,
    #[serde(default)]
    technologies: Vec<TechDef>,
    #[serde(default)]
    buildings: Vec<building::RawBuilding>,
}
