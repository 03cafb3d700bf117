//! Stockpile - colony-level resource storage

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Resource quantities by catalog resource id; quantities never go negative
///
/// Serializes as a plain resource-id to quantity map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stockpile {
    amounts: AHashMap<String, u64>,
}

impl Stockpile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-initialized stockpile for a known resource list, so display
    /// queries see every resource from tick zero
    pub fn with_resources<'a, I: IntoIterator<Item = &'a String>>(resources: I) -> Self {
        Self {
            amounts: resources.into_iter().map(|r| (r.clone(), 0)).collect(),
        }
    }

    pub fn get(&self, resource: &str) -> u64 {
        self.amounts.get(resource).copied().unwrap_or(0)
    }

    pub fn add(&mut self, resource: &str, amount: u64) {
        *self.amounts.entry(resource.to_string()).or_insert(0) += amount;
    }

    pub fn has(&self, resource: &str, amount: u64) -> bool {
        self.get(resource) >= amount
    }

    /// Debit up to `amount`, returning what was actually removed
    pub fn remove(&mut self, resource: &str, amount: u64) -> u64 {
        match self.amounts.get_mut(resource) {
            Some(current) => {
                let removed = amount.min(*current);
                *current -= removed;
                removed
            }
            None => 0,
        }
    }

    /// Consume exactly `amount` or nothing; true on success
    pub fn consume(&mut self, resource: &str, amount: u64) -> bool {
        if !self.has(resource, amount) {
            return false;
        }
        self.remove(resource, amount);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
