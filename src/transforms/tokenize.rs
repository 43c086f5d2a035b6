//! Tokenization: the only transforms that transition a cell between its
//! text and token-sequence representations.

use crate::dataset::{Cell, Column};
use crate::error::Result;
use crate::transforms::Transform;

/// Splits every text cell on a single literal space into a token sequence.
///
/// This is not a general whitespace split: consecutive spaces produce empty
/// tokens. Detokenizing is the exact inverse only for input with no
/// consecutive-space runs and no leading or trailing space.
pub struct WordTokenize;

impl Transform for WordTokenize {
    fn apply(&self, column: &Column) -> Result<Column> {
        let cells = column
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                let text = cell.as_text(row)?;
                Ok(Cell::Tokens(
                    text.split(' ').map(str::to_string).collect(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Column::new(column.name.clone(), cells))
    }

    fn name(&self) -> &str {
        "word_tokenize"
    }
}

/// Joins every token-sequence cell back into one string with single spaces.
pub struct WordDetokenize;

impl Transform for WordDetokenize {
    fn apply(&self, column: &Column) -> Result<Column> {
        let cells = column
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                let tokens = cell.as_tokens(row)?;
                Ok(Cell::Text(tokens.join(" ")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Column::new(column.name.clone(), cells))
    }

    fn name(&self) -> &str {
        "word_detokenize"
    }
}
