//! # textclean
//!
//! Row-wise text cleaning for small in-memory tabular datasets.
//!
//! ## Architecture Overview
//!
//! The crate is organized into four pieces:
//! - **Dataset model**: named columns of text, token-sequence, or opaque
//!   cells, with an equal-length invariant
//! - **Transform catalog**: pure, independently testable column rewrites
//!   (case folding, punctuation/URL/HTML/email/digit/emoji removal,
//!   whitespace normalization, stopwords, lemmatization, stemming,
//!   tokenization)
//! - **Pipeline runner**: chains transforms and row filters over one column
//!   of an owned dataset
//! - **Resource loading**: an injectable source of the remote rule tables
//!   (stopword lists, lemma/stem rules, accent map)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use textclean::{ColumnRunner, Lowercase, RemoveUrl, RemoveWhitespace};
//!
//! fn main() -> textclean::Result<()> {
//!     let cleaned = ColumnRunner::from_series(
//!         "review",
//!         vec!["Great read: https://example.com  loved it"],
//!     )
//!     .apply(&Lowercase)?
//!     .apply(&RemoveUrl)?
//!     .apply(&RemoveWhitespace)?
//!     .finish();
//!
//!     println!("{:?}", cleaned.column("review")?.texts()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod resources;

/// The transform catalog: per-sentence rewrites, word-level rule-table
/// transforms, and tokenization.
pub mod transforms;

// Re-export main types for convenience
pub use config::{standard_pipeline, CleanConfig};
pub use dataset::{Cell, Column, Dataset};
pub use error::{CleanError, Result};
pub use pipeline::{ColumnRunner, RowFilter, WordCountFilter};
pub use resources::{
    HttpResourceLoader, Language, Resource, ResourceLoader, RuleTable, StaticResourceLoader,
};
pub use transforms::{
    AdditionalCleaning, Lemmatize, Lowercase, RemoveAccent, RemoveDigit, RemoveEmail, RemoveEmoji,
    RemoveHashtag, RemoveHtml, RemoveMention, RemovePlural, RemovePunctuation,
    RemoveSingleCharacter, RemoveSpace, RemoveStopwords, RemoveUrl, RemoveWhitespace, Stemmatize,
    Transform, WordDetokenize, WordTokenize,
};
