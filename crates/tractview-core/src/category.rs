//! Category groups
//!
//! A category group is a named, non-empty set of mutually exclusive
//! attribute columns (race shares, income-bracket shares, ...) each with a
//! label and a fixed display color. Membership and colors are fixed when the
//! group is built and never depend on the data.
//!
//! The dashboard's four groups come from two families (race, income) in two
//! variants (base, inflow). Each family is a single template; the variant
//! only changes how column keys and labels are spelled.

use serde::{Deserialize, Serialize};

use crate::color::{palette, Color};
use crate::error::{ConfigError, ConfigResult};

/// Suffix shared by every census-tract column
pub const TRACT_SUFFIX: &str = "_CT";

/// One category of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Column holding this category's per-row fraction
    pub key: String,
    /// Display label
    pub label: String,
    /// Display color
    pub color: Color,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: Color) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color,
        }
    }
}

/// A named, non-empty set of categories with unique keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCategoryGroup")]
pub struct CategoryGroup {
    name: String,
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RawCategoryGroup {
    name: String,
    categories: Vec<Category>,
}

impl TryFrom<RawCategoryGroup> for CategoryGroup {
    type Error = ConfigError;

    fn try_from(raw: RawCategoryGroup) -> Result<Self, Self::Error> {
        CategoryGroup::new(raw.name, raw.categories)
    }
}

impl CategoryGroup {
    /// Create a group, rejecting empty groups and repeated keys
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> ConfigResult<Self> {
        let name = name.into();

        if categories.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("category group '{}'", name),
                message: "must contain at least one category".to_string(),
            });
        }

        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.key == category.key) {
                return Err(ConfigError::DuplicateKey {
                    key: category.key.clone(),
                    context: format!("category group '{}'", name),
                });
            }
        }

        Ok(Self { name, categories })
    }

    /// Race shares of the resident (base) or inflow population
    pub fn race(variant: Variant) -> Self {
        CategoryFamily::RACE.group(variant)
    }

    /// Household income-bracket shares of the resident or inflow population
    pub fn income(variant: Variant) -> Self {
        CategoryFamily::INCOME.group(variant)
    }

    /// The four groups shown by the dashboard
    pub fn builtin() -> Vec<Self> {
        [CategoryFamily::RACE, CategoryFamily::INCOME]
            .iter()
            .flat_map(|family| [family.group(Variant::Base), family.group(Variant::Inflow)])
            .collect()
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Column keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    /// Find a category by key
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Number of categories (always at least one)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; groups are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Measurement variant of a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Resident population
    Base,
    /// Migration inflow population
    Inflow,
}

impl Variant {
    fn key_infix(self) -> &'static str {
        match self {
            Variant::Base => "",
            Variant::Inflow => "_inflow",
        }
    }

    fn label_infix(self) -> &'static str {
        match self {
            Variant::Base => "",
            Variant::Inflow => " Inflow",
        }
    }

    fn name_suffix(self) -> &'static str {
        match self {
            Variant::Base => "",
            Variant::Inflow => "_inflow",
        }
    }
}

/// Template for a family of category groups
///
/// Each stem is `(key stem, label stem)`; a category's key is
/// `{key stem}{variant infix}_CT` and its color is taken by position from the
/// categorical palette.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFamily {
    pub name: &'static str,
    pub stems: &'static [(&'static str, &'static str)],
}

impl CategoryFamily {
    pub const RACE: CategoryFamily = CategoryFamily {
        name: "race",
        stems: &[
            ("white", "White"),
            ("black", "Black"),
            ("asian", "Asian"),
            ("hispanic", "Hispanic"),
        ],
    };

    pub const INCOME: CategoryFamily = CategoryFamily {
        name: "income",
        stems: &[
            ("Under $50K", "Under $50K"),
            ("$50K - $100K", "$50K - $100K"),
            ("$100K - $200K", "$100K - $200K"),
            ("Over $200K", "Over $200K"),
        ],
    };

    /// Build the group for one variant
    pub fn group(&self, variant: Variant) -> CategoryGroup {
        let categories = self
            .stems
            .iter()
            .enumerate()
            .map(|(i, (key, label))| {
                Category::new(
                    format!("{}{}{}", key, variant.key_infix(), TRACT_SUFFIX),
                    format!("{}{}{}", label, variant.label_infix(), TRACT_SUFFIX),
                    palette::categorical(i),
                )
            })
            .collect();

        CategoryGroup {
            name: format!("{}{}", self.name, variant.name_suffix()),
            categories,
        }
    }
}
