//! In-memory tabular data
//!
//! A `Dataset` is one identifier column (region codes such as GEOIDs) plus any
//! number of named numeric columns, all with the same number of rows. The row
//! index is the only key that correlates values across columns.
//!
//! Missing values are stored as NaN. The engine treats every non-finite value
//! as missing.

use crate::error::{EngineError, EngineResult};

/// A named numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// One value per row; NaN marks a missing value
    pub values: Vec<f64>,
}

/// An immutable snapshot of tabular data
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    id_field: String,
    ids: Vec<String>,
    columns: Vec<Column>,
}

impl Dataset {
    /// Create a dataset with only its identifier column
    pub fn new(id_field: impl Into<String>, ids: Vec<String>) -> Self {
        Self {
            id_field: id_field.into(),
            ids,
            columns: Vec::new(),
        }
    }

    /// Create a dataset from an identifier column and numeric columns
    pub fn from_columns<I, S>(id_field: impl Into<String>, ids: Vec<String>, columns: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut dataset = Self::new(id_field, ids);
        for (name, values) in columns {
            dataset.add_column(name, values)?;
        }
        Ok(dataset)
    }

    /// Add a column, builder style
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> EngineResult<Self> {
        self.add_column(name, values)?;
        Ok(self)
    }

    /// Add a column
    ///
    /// Fails when the column length differs from the row count or the name
    /// is already taken (including the identifier field's name).
    pub fn add_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> EngineResult<()> {
        let name = name.into();

        if values.len() != self.ids.len() {
            return Err(EngineError::InvalidDataset {
                message: format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    values.len(),
                    self.ids.len()
                ),
            });
        }

        if name == self.id_field || self.has_column(&name) {
            return Err(EngineError::InvalidDataset {
                message: format!("duplicate column '{}'", name),
            });
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.ids.len()
    }

    /// Check if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Name of the identifier column
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// All region identifiers, in row order
    pub fn region_ids(&self) -> &[String] {
        &self.ids
    }

    /// Region identifier of one row
    pub fn region_id(&self, row: usize) -> EngineResult<&str> {
        self.ids
            .get(row)
            .map(String::as_str)
            .ok_or(EngineError::IndexOutOfRange {
                index: row,
                len: self.ids.len(),
            })
    }

    /// Values of a column by name
    pub fn column(&self, name: &str) -> EngineResult<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| EngineError::missing(name))
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// A single value; `None` when it is missing
    pub fn value(&self, name: &str, row: usize) -> EngineResult<Option<f64>> {
        let column = self.column(name)?;
        column
            .get(row)
            .map(|v| v.is_finite().then_some(*v))
            .ok_or(EngineError::IndexOutOfRange {
                index: row,
                len: column.len(),
            })
    }

    /// Fail with `MissingField` on the first absent column
    pub fn require<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> EngineResult<()> {
        for name in names {
            if !self.has_column(name) {
                return Err(EngineError::missing(name));
            }
        }
        Ok(())
    }
}
