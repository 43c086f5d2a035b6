//! Tabular data model: cells, columns, datasets.
//!
//! A [`Dataset`] is an ordered table of equal-length named columns. The only
//! structural invariant the transforms rely on is that every column has the
//! same number of rows; row iteration goes over the cells directly, so there
//! is no positional-index precondition to maintain.

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

/// The value at one row of a column.
///
/// Text transforms operate on `Text` cells. Only tokenization transitions a
/// cell between `Text` and `Tokens`. `Other` carries non-text payloads
/// (numbers, dates, ...) through row filters untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Tokens(Vec<String>),
    Other(serde_json::Value),
}

impl Cell {
    /// Returns the text payload, or an invalid-input error naming the row.
    pub fn as_text(&self, row: usize) -> Result<&str> {
        match self {
            Cell::Text(s) => Ok(s),
            Cell::Tokens(_) => Err(CleanError::InvalidInput(format!(
                "row {row} holds a token sequence; expected text (detokenize first)"
            ))),
            Cell::Other(_) => Err(CleanError::InvalidInput(format!(
                "row {row} holds a non-text value; expected text"
            ))),
        }
    }

    /// Returns the token payload, or an invalid-input error naming the row.
    pub fn as_tokens(&self, row: usize) -> Result<&[String]> {
        match self {
            Cell::Tokens(t) => Ok(t),
            Cell::Text(_) => Err(CleanError::InvalidInput(format!(
                "row {row} holds text; expected a token sequence (tokenize first)"
            ))),
            Cell::Other(_) => Err(CleanError::InvalidInput(format!(
                "row {row} holds a non-text value; expected a token sequence"
            ))),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// A named sequence of cells, one per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Builds a text column from plain strings.
    pub fn from_strings<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self {
            name: name.into(),
            cells: values.into_iter().map(|v| Cell::Text(v.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text view of every cell, for assertions and table post-processing.
    pub fn texts(&self) -> Result<Vec<&str>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(row, cell)| cell.as_text(row))
            .collect()
    }
}

/// An ordered table of equal-length named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Builds a dataset from columns, validating that all lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let rows = first.len();
            for column in &columns {
                if column.len() != rows {
                    return Err(CleanError::InvalidInput(format!(
                        "column '{}' has {} rows, expected {}",
                        column.name,
                        column.len(),
                        rows
                    )));
                }
            }
        }
        Ok(Self { columns })
    }

    /// Materializes a single named series as a one-column table.
    pub fn from_series<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self {
            columns: vec![Column::from_strings(name, values)],
        }
    }

    /// Number of rows (zero for a table with no columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CleanError::InvalidInput(format!("no column named '{name}'")))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Replaces a column with a new one of the same length.
    pub(crate) fn replace_column(&mut self, name: &str, replacement: Column) -> Result<()> {
        let rows = self.row_count();
        if replacement.len() != rows {
            return Err(CleanError::InvalidInput(format!(
                "replacement for column '{name}' has {} rows, expected {rows}",
                replacement.len()
            )));
        }
        let slot = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| CleanError::InvalidInput(format!("no column named '{name}'")))?;
        *slot = replacement;
        Ok(())
    }

    /// Keeps only the rows whose mask entry is true, across every column.
    pub(crate) fn retain_rows(&mut self, mask: &[bool]) {
        for column in &mut self.columns {
            let mut keep = mask.iter();
            column.cells.retain(|_| *keep.next().unwrap_or(&false));
        }
    }
}
