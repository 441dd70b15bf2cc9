//! Slice-to-attribute lookup
//!
//! Selecting a pie slice opens a histogram of some attribute. Which attribute
//! belongs to which slice is an explicit table, by default mapping every
//! category key to its own column.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::CategoryGroup;
use crate::error::{EngineError, EngineResult};

/// Category key → attribute name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrillDown {
    table: BTreeMap<String, String>,
}

impl DrillDown {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity table over every category of `groups`
    pub fn from_groups<'a>(groups: impl IntoIterator<Item = &'a CategoryGroup>) -> Self {
        let table = groups
            .into_iter()
            .flat_map(|g| g.keys())
            .map(|k| (k.to_string(), k.to_string()))
            .collect();
        Self { table }
    }

    /// Route `key` to `attribute`, builder style
    pub fn with_entry(mut self, key: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.insert(key, attribute);
        self
    }

    /// Route `key` to `attribute`, returning the previous attribute
    pub fn insert(&mut self, key: impl Into<String>, attribute: impl Into<String>) -> Option<String> {
        self.table.insert(key.into(), attribute.into())
    }

    /// Apply every entry of `overrides` on top of this table
    pub fn extend(&mut self, overrides: &BTreeMap<String, String>) {
        for (key, attribute) in overrides {
            self.table.insert(key.clone(), attribute.clone());
        }
    }

    /// Attribute to inspect when `key` is selected
    pub fn attribute_for(&self, key: &str) -> EngineResult<&str> {
        self.table
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| EngineError::MissingField {
                field: key.to_string(),
            })
    }

    /// Number of routed keys
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no key is routed
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over `(key, attribute)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Variant;

    #[test]
    fn test_identity_routing() {
        let groups = CategoryGroup::builtin();
        let table = DrillDown::from_groups(&groups);

        assert_eq!(table.len(), 16);
        assert_eq!(table.attribute_for("white_inflow_CT").unwrap(), "white_inflow_CT");
    }

    #[test]
    fn test_override() {
        let group = CategoryGroup::income(Variant::Base);
        let table = DrillDown::from_groups([&group]).with_entry("Under $50K_CT", "median_income");

        assert_eq!(table.attribute_for("Under $50K_CT").unwrap(), "median_income");
        assert_eq!(table.attribute_for("Over $200K_CT").unwrap(), "Over $200K_CT");
    }

    #[test]
    fn test_unknown_key() {
        let table = DrillDown::new();
        assert!(matches!(
            table.attribute_for("nope"),
            Err(EngineError::MissingField { .. })
        ));
    }
}
