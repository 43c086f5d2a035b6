//! Column pipeline runner.
//!
//! [`ColumnRunner`] binds an owned dataset to one text column and chains
//! transforms over it by value. Every transform sees an immutable view of
//! the column and yields a new owned column; the runner rebinds, so there is
//! no hidden aliasing of caller data.

use tracing::{debug, info};

use crate::dataset::{Cell, Dataset};
use crate::error::{CleanError, Result};
use crate::transforms::Transform;

/// A shape-changing row predicate over the bound column.
pub trait RowFilter: Send + Sync {
    fn keep(&self, row: usize, cell: &Cell) -> Result<bool>;
    fn name(&self) -> &str;
}

/// Keeps only rows whose cell splits into more than `min_words`
/// space-separated tokens.
pub struct WordCountFilter {
    min_words: usize,
}

impl WordCountFilter {
    pub fn new() -> Self {
        Self { min_words: 2 }
    }

    pub fn min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }
}

impl Default for WordCountFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl RowFilter for WordCountFilter {
    fn keep(&self, row: usize, cell: &Cell) -> Result<bool> {
        let text = cell.as_text(row)?;
        Ok(text.split(' ').count() > self.min_words)
    }

    fn name(&self) -> &str {
        "word_count_filter"
    }
}

/// Applies transforms to a designated column of an owned dataset.
pub struct ColumnRunner {
    data: Dataset,
    column: String,
}

impl ColumnRunner {
    /// Binds a dataset to a column, failing if the column does not exist.
    pub fn new(data: Dataset, column: impl Into<String>) -> Result<Self> {
        let column = column.into();
        if !data.has_column(&column) {
            return Err(CleanError::InvalidInput(format!(
                "no column named '{column}'"
            )));
        }
        Ok(Self { data, column })
    }

    /// Binds a single named series as a one-column dataset.
    pub fn from_series<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        let name = name.into();
        let data = Dataset::from_series(name.clone(), values);
        Self { data, column: name }
    }

    /// Rewrites the bound column with one transform. Row count is preserved;
    /// a transform returning a different length is rejected.
    pub fn apply(mut self, transform: &dyn Transform) -> Result<Self> {
        debug!(transform = transform.name(), column = %self.column, "applying transform");
        let rewritten = transform.apply(self.data.column(&self.column)?)?;
        self.data.replace_column(&self.column, rewritten)?;
        Ok(self)
    }

    /// Drops rows across every column by evaluating the filter over the
    /// bound column. The mask is fully evaluated before any row is dropped,
    /// so a bad cell never leaves the dataset partially filtered.
    pub fn filter(mut self, filter: &dyn RowFilter) -> Result<Self> {
        let mask = self
            .data
            .column(&self.column)?
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| filter.keep(row, cell))
            .collect::<Result<Vec<_>>>()?;

        let before = self.data.row_count();
        self.data.retain_rows(&mask);
        info!(
            filter = filter.name(),
            column = %self.column,
            before,
            after = self.data.row_count(),
            "filtered rows"
        );
        Ok(self)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    pub fn column_name(&self) -> &str {
        &self.column
    }

    /// Releases the dataset.
    pub fn finish(self) -> Dataset {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::Lowercase;

    #[test]
    fn binding_a_missing_column_fails() {
        let data = Dataset::from_series("text", vec!["a"]);
        assert!(ColumnRunner::new(data, "body").is_err());
    }

    #[test]
    fn apply_preserves_row_count() {
        let runner = ColumnRunner::from_series("text", vec!["A", "B", "C"]);
        let out = runner.apply(&Lowercase).unwrap().finish();
        assert_eq!(out.row_count(), 3);
    }

    #[test]
    fn word_count_filter_keeps_strictly_more_than_min() {
        let runner = ColumnRunner::from_series("text", vec!["a b c", "a", "a b"]);
        let out = runner.filter(&WordCountFilter::new()).unwrap().finish();
        let texts = out.column("text").unwrap().texts().unwrap();
        assert_eq!(texts, vec!["a b c"]);
    }
}
