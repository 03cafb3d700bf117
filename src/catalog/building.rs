//! Building type definitions - what can be constructed and how it behaves
//!
//! Each definition is immutable catalog data: cost, power profile, footprint,
//! a behavior variant carrying only the fields its category needs, and the
//! unlock conditions gating construction.

use crate::core::error::CatalogError;
use crate::core::types::Footprint;
use serde::{Deserialize, Serialize};

/// What a structure of this type does while operational
///
/// Generator/consumer classification is not part of this enum: it keys on
/// the `power_gen`/`power_draw` fields of [`BuildingDef`], since any
/// category may draw power (an extractor is also a consumer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// No per-tick work (conduits, the command center)
    Passive,
    /// Provides housing capacity while operational
    Housing { capacity: u32 },
    /// Accrues credits once per real-time second
    Income { rate: u64 },
    /// Produces a raw resource once per real-time second, optionally only
    /// when placed on a matching resource node
    Extractor {
        resource: String,
        rate: u64,
        node: Option<String>,
    },
    /// Consumes an input resource and produces an output on a timed cycle
    Converter {
        input: String,
        input_amount: u64,
        output: String,
        output_rate: u64,
        cycle_seconds: u64,
    },
}

/// Conditions gating a building type's availability
///
/// Absence of a condition means it does not apply; empty conditions mean the
/// type is always unlocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockConditions {
    /// Minimum colony population
    #[serde(default)]
    pub min_population: Option<u64>,
    /// Minimum rank, by rank name
    #[serde(default)]
    pub min_rank: Option<String>,
    /// Required technology id
    #[serde(default)]
    pub technology: Option<String>,
}

impl UnlockConditions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.min_population.is_none() && self.min_rank.is_none() && self.technology.is_none()
    }
}

/// An immutable building type definition (catalog entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDef {
    /// Unique key ("HAB_DOME")
    pub key: String,
    /// Human-readable name ("Habitation Dome")
    pub name: String,
    /// Placement cost in credits
    pub cost: u64,
    /// Power drawn while operational
    pub power_draw: u32,
    /// Power generated while operational
    pub power_gen: u32,
    /// Footprint in tiles
    pub footprint: Footprint,
    /// Behavior category and its data
    pub behavior: Behavior,
    /// Conditions gating construction
    pub unlock: UnlockConditions,
}

impl BuildingDef {
    /// Generators never self-disable (no damage model)
    pub fn is_generator(&self) -> bool {
        self.power_gen > 0
    }

    pub fn is_consumer(&self) -> bool {
        self.power_draw > 0
    }

    /// Housing capacity, zero for non-housing types
    pub fn housing_capacity(&self) -> u32 {
        match self.behavior {
            Behavior::Housing { capacity } => capacity,
            _ => 0,
        }
    }

    /// Structural well-formedness, checked once at catalog load
    pub(crate) fn check(&self) -> Result<(), CatalogError> {
        let malformed = |reason: &str| CatalogError::MalformedBuilding {
            key: self.key.clone(),
            reason: reason.to_string(),
        };
        if self.key.is_empty() {
            return Err(CatalogError::MalformedBuilding {
                key: "<empty>".into(),
                reason: "empty key".into(),
            });
        }
        if self.footprint.width == 0 || self.footprint.height == 0 {
            return Err(malformed("footprint must cover at least one tile"));
        }
        match &self.behavior {
            Behavior::Passive => {}
            Behavior::Housing { capacity } => {
                if *capacity == 0 {
                    return Err(malformed("housing capacity must be positive"));
                }
            }
            Behavior::Income { rate } => {
                if *rate == 0 {
                    return Err(malformed("income rate must be positive"));
                }
            }
            Behavior::Extractor { resource, rate, .. } => {
                if resource.is_empty() {
                    return Err(malformed("extractor missing output resource"));
                }
                if *rate == 0 {
                    return Err(malformed("extractor output rate must be positive"));
                }
            }
            Behavior::Converter {
                input,
                input_amount,
                output,
                output_rate,
                cycle_seconds,
            } => {
                if input.is_empty() || output.is_empty() {
                    return Err(malformed("converter missing input or output resource"));
                }
                if *input_amount == 0 || *output_rate == 0 {
                    return Err(malformed("converter amounts must be positive"));
                }
                if *cycle_seconds == 0 {
                    return Err(malformed("converter cycle must be positive"));
                }
            }
        }
        Ok(())
    }
}

// === TOML schema ===
//
// Catalog files use a flat per-building table with a `category` string;
// the raw struct is converted into the typed definition, rejecting entries
// whose category is missing its required fields.

#[derive(Debug, Deserialize)]
pub(crate) struct RawBuilding {
    key: String,
    name: String,
    cost: u64,
    #[serde(default)]
    power_draw: u32,
    #[serde(default)]
    power_gen: u32,
    #[serde(default = "default_tile")]
    width: u32,
    #[serde(default = "default_tile")]
    height: u32,
    category: String,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(default)]
    income_rate: Option<u64>,
    #[serde(default)]
    resource: Option<String>,
    #[serde(default)]
    output_rate: Option<u64>,
    #[serde(default)]
    node: Option<String>,
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    input_amount: Option<u64>,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    cycle_seconds: Option<u64>,
    #[serde(default)]
    unlock: Option<RawUnlock>,
}

fn default_tile() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawUnlock {
    #[serde(default)]
    pop: Option<u64>,
    #[serde(default)]
    rank: Option<String>,
    #[serde(default)]
    tech: Option<String>,
}

impl RawBuilding {
    pub(crate) fn into_def(self) -> Result<BuildingDef, CatalogError> {
        let missing = |field: &str| CatalogError::MalformedBuilding {
            key: self.key.clone(),
            reason: format!("category '{}' requires field '{}'", self.category, field),
        };

        let behavior = match self.category.as_str() {
            "passive" => Behavior::Passive,
            "housing" => Behavior::Housing {
                capacity: self.capacity.ok_or_else(|| missing("capacity"))?,
            },
            "income" => Behavior::Income {
                rate: self.income_rate.ok_or_else(|| missing("income_rate"))?,
            },
            "extractor" => Behavior::Extractor {
                resource: self.resource.clone().ok_or_else(|| missing("resource"))?,
                rate: self.output_rate.ok_or_else(|| missing("output_rate"))?,
                node: self.node.clone(),
            },
            "converter" => Behavior::Converter {
                input: self.input.clone().ok_or_else(|| missing("input"))?,
                input_amount: self.input_amount.ok_or_else(|| missing("input_amount"))?,
                output: self.output.clone().ok_or_else(|| missing("output"))?,
                output_rate: self.output_rate.ok_or_else(|| missing("output_rate"))?,
                cycle_seconds: self.cycle_seconds.ok_or_else(|| missing("cycle_seconds"))?,
            },
            other => {
                return Err(CatalogError::MalformedBuilding {
                    key: self.key,
                    reason: format!("unknown category '{}'", other),
                })
            }
        };

        let unlock = match self.unlock {
            Some(raw) => UnlockConditions {
                min_population: raw.pop,
                min_rank: raw.rank,
                technology: raw.tech,
            },
            None => UnlockConditions::none(),
        };

        let def = BuildingDef {
            key: self.key,
            name: self.name,
            cost: self.cost,
            power_draw: self.power_draw,
            power_gen: self.power_gen,
            footprint: Footprint::new(self.width, self.height),
            behavior,
            unlock,
        };
        def.check()?;
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passive(key: &str) -> BuildingDef {
        BuildingDef {
            key: key.into(),
            name: key.into(),
            cost: 100,
            power_draw: 0,
            power_gen: 0,
            footprint: Footprint::new(1, 1),
            behavior: Behavior::Passive,
            unlock: UnlockConditions::none(),
        }
    }

    #[test]
    fn test_generator_classification() {
        let mut def = passive("SOLAR");
        def.power_gen = 20;
        assert!(def.is_generator());
        assert!(!def.is_consumer());
    }

    #[test]
    fn test_housing_capacity_for_non_housing_is_zero() {
        assert_eq!(passive("CONDUIT").housing_capacity(), 0);
    }

    #[test]
    fn test_check_rejects_zero_footprint() {
        let mut def = passive("BAD");
        def.footprint = Footprint::new(0, 1);
        assert!(def.check().is_err());
    }

    #[test]
    fn test_check_rejects_zero_cycle_converter() {
        let mut def = passive("REFINERY");
        def.behavior = Behavior::Converter {
            input: "CRUDE_OIL".into(),
            input_amount: 2,
            output: "FUEL".into(),
            output_rate: 1,
            cycle_seconds: 0,
        };
        assert!(def.check().is_err());
    }

    #[test]
    fn test_raw_converter_requires_input_amount() {
        let toml_src = r#"
            key = "FACTORY"
            name = "Factory"
            cost = 2000
            power_draw = 15
            category = "converter"
            input = "RAW_ORE"
            output = "CONSTRUCTION_PARTS"
            output_rate = 1
            cycle_seconds = 5
        "#;
        let raw: RawBuilding = toml::from_str(toml_src).unwrap();
        let err = raw.into_def().unwrap_err();
        assert!(
            matches!(err, CatalogError::MalformedBuilding { .. }),
            "missing input_amount should be a malformed-building error, got {err:?}"
        );
    }

    #[test]
    fn test_raw_unlock_conditions_parsed() {
        let toml_src = r#"
            key = "FACTORY"
            name = "Factory"
            cost = 2000
            category = "passive"

            [unlock]
            pop = 50
            tech = "basic_manufacturing"
        "#;
        let raw: RawBuilding = toml::from_str(toml_src).unwrap();
        let def = raw.into_def().unwrap();
        assert_eq!(def.unlock.min_population, Some(50));
        assert_eq!(def.unlock.technology.as_deref(), Some("basic_manufacturing"));
        assert!(def.unlock.min_rank.is_none());
    }
}
