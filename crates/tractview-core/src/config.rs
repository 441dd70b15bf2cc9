//! Configuration for tractview-core
//!
//! Names the columns the engine reads, the category groups shown as pies,
//! histogram settings and the slice-to-attribute routing overrides. The
//! default reproduces the census-tract dashboard.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tractview_stats::HistogramOptions;

use crate::category::CategoryGroup;
use crate::drilldown::DrillDown;
use crate::error::{ConfigError, ConfigResult};
use crate::report::{ReportOptions, DEFAULT_PREVIEW_ROWS};

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Region identifier column
    pub id_field: String,
    /// Population column weighting pie shares
    pub weight_field: String,
    /// Population column weighting attribute means; `None` skips the weighted mean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_weight_field: Option<String>,
    /// Regions listed in an attribute preview
    pub preview_rows: usize,
    /// Histogram layout
    pub histogram: HistogramOptions,
    /// Category groups, in display order
    pub groups: Vec<CategoryGroup>,
    /// Category key → attribute overrides applied on top of identity routing
    pub drilldown: BTreeMap<String, String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            id_field: "GEOID".to_string(),
            weight_field: "total_population_CT".to_string(),
            summary_weight_field: Some("total_population".to_string()),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            histogram: HistogramOptions::default(),
            groups: CategoryGroup::builtin(),
            drilldown: BTreeMap::new(),
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.id_field.is_empty() {
            return Err(invalid("id_field", "must not be empty"));
        }

        if self.weight_field.is_empty() {
            return Err(invalid("weight_field", "must not be empty"));
        }

        if self.summary_weight_field.as_deref() == Some("") {
            return Err(invalid("summary_weight_field", "must not be empty when set"));
        }

        if self.histogram.bin_count == 0 {
            return Err(invalid("histogram.bin_count", "must be at least 1"));
        }

        let mut names = HashSet::new();
        for group in &self.groups {
            if !names.insert(group.name()) {
                return Err(ConfigError::DuplicateKey {
                    key: group.name().to_string(),
                    context: "category groups".to_string(),
                });
            }
        }

        // Overrides may only reroute keys that some group actually shows.
        for key in self.drilldown.keys() {
            if !self.groups.iter().any(|g| g.get(key).is_some()) {
                return Err(invalid(
                    "drilldown",
                    &format!("'{}' is not a category key of any group", key),
                ));
            }
        }

        Ok(())
    }

    /// Find a category group by name
    pub fn group(&self, name: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Routing table: identity over every group, then the overrides
    pub fn drilldown_table(&self) -> DrillDown {
        let mut table = DrillDown::from_groups(&self.groups);
        table.extend(&self.drilldown);
        table
    }

    /// Options for attribute reports
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            weight_field: self.summary_weight_field.clone(),
            histogram: self.histogram,
            preview_rows: self.preview_rows,
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
