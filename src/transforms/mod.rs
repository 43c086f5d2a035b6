//! The transform catalog.
//!
//! Every transform is a pure rewrite of one column: it takes an immutable
//! view and returns a new owned column of the same length, leaving the
//! caller to decide whether to rebind or keep the original. Validation of
//! parameters and rule tables happens before the per-row loop, so a bad
//! argument never produces partially-rewritten output.

pub mod sentence;
pub mod tokenize;
pub mod word;

pub use sentence::{
    AdditionalCleaning, Lowercase, RemoveAccent, RemoveDigit, RemoveEmail, RemoveEmoji,
    RemoveHashtag, RemoveHtml, RemoveMention, RemovePlural, RemovePunctuation,
    RemoveSingleCharacter, RemoveSpace, RemoveUrl, RemoveWhitespace,
};
pub use tokenize::{WordDetokenize, WordTokenize};
pub use word::{Lemmatize, RemoveStopwords, Stemmatize};

use crate::dataset::Column;
use crate::error::Result;

/// A row-count-preserving rewrite of one column.
pub trait Transform: Send + Sync {
    fn apply(&self, column: &Column) -> Result<Column>;
    fn name(&self) -> &str;
}
