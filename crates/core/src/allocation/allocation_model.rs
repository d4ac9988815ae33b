//! Allocation models for proportional settlement distribution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cost breakdown for a single asset line of a settled note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    /// Asset name or ticker as supplied by the caller.
    pub name: String,
    /// Declared value before settlement costs, preserved exactly.
    pub original_value: Decimal,
    /// This asset's portion of the surplus or deficit, rounded to cents.
    pub share: Decimal,
    /// Original value plus the allocated share, rounded to cents.
    pub final_value: Decimal,
}

/// Insertion-ordered allocation result keyed by asset name.
///
/// Re-using a name overwrites the earlier entry in place, keeping its
/// original position. Callers that need distinct lines must supply
/// distinct names; the allocator does not validate uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    entries: Vec<AssetAllocation>,
}

impl AllocationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any existing entry with the same name.
    pub fn insert(&mut self, entry: AssetAllocation) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Looks up an entry by asset name.
    pub fn get(&self, name: &str) -> Option<&AssetAllocation> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, AssetAllocation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AllocationResult {
    type Item = &'a AssetAllocation;
    type IntoIter = std::slice::Iter<'a, AssetAllocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(name: &str, value: Decimal) -> AssetAllocation {
        AssetAllocation {
            name: name.to_string(),
            original_value: value,
            share: Decimal::ZERO,
            final_value: value,
        }
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut result = AllocationResult::new();
        result.insert(entry("PETR4", dec!(100)));
        result.insert(entry("VALE3", dec!(200)));
        result.insert(entry("PETR4", dec!(300)));

        assert_eq!(result.len(), 2);
        let names: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["PETR4", "VALE3"]);
        assert_eq!(result.get("PETR4").unwrap().original_value, dec!(300));
    }

    #[test]
    fn test_get_missing_name() {
        let result = AllocationResult::new();
        assert!(result.get("PETR4").is_none());
        assert!(result.is_empty());
    }
}
