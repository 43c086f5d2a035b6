//! Cleaning configuration and the canonical pipeline built from it.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::pipeline::ColumnRunner;
use crate::resources::{Language, ResourceLoader, DEFAULT_BASE_URL};
use crate::transforms::{
    AdditionalCleaning, Lowercase, RemoveDigit, RemoveEmail, RemoveEmoji, RemoveHashtag,
    RemoveHtml, RemoveMention, RemovePunctuation, RemoveSingleCharacter, RemoveSpace,
    RemoveStopwords, RemoveUrl, RemoveWhitespace,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default)]
    pub remove_accents: bool,

    // Stopword adjustments
    #[serde(default)]
    pub keep_stopwords: Vec<String>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    // Extra caller patterns for additional cleaning
    #[serde(default)]
    pub extra_patterns: Vec<String>,

    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_plural_word_length")]
    pub plural_word_length: usize,

    #[serde(default = "default_resource_base_url")]
    pub resource_base_url: String,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            lowercase: default_lowercase(),
            remove_accents: false,
            keep_stopwords: Vec::new(),
            extra_stopwords: Vec::new(),
            extra_patterns: Vec::new(),
            min_words: default_min_words(),
            plural_word_length: default_plural_word_length(),
            resource_base_url: default_resource_base_url(),
        }
    }
}

fn default_language() -> Language {
    Language::English
}

fn default_lowercase() -> bool {
    true
}

fn default_min_words() -> usize {
    2
}

fn default_plural_word_length() -> usize {
    5
}

fn default_resource_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Runs the canonical cleaning chain over one column: case folding, pattern
/// stripping, whitespace normalization, stopword removal, single-character
/// cleanup. Returns the cleaned dataset.
pub fn standard_pipeline<L: ResourceLoader>(
    data: Dataset,
    column: &str,
    config: &CleanConfig,
    loader: L,
) -> Result<Dataset> {
    let stopwords = RemoveStopwords::new(loader)
        .language(config.language)
        .lowercase(config.lowercase)
        .remove_accents(config.remove_accents)
        .keep(config.keep_stopwords.clone())
        .extra(config.extra_stopwords.clone());

    let runner = ColumnRunner::new(data, column)?
        .apply(&Lowercase)?
        .apply(&RemoveUrl)?
        .apply(&RemoveHtml)?
        .apply(&RemoveEmail)?
        .apply(&RemoveMention)?
        .apply(&RemoveHashtag)?
        .apply(&RemoveEmoji)?
        .apply(&AdditionalCleaning::with_patterns(&config.extra_patterns)?)?
        .apply(&RemovePunctuation)?
        .apply(&RemoveDigit)?
        .apply(&RemoveWhitespace)?
        .apply(&RemoveSpace)?
        .apply(&stopwords)?
        .apply(&RemoveSingleCharacter)?;

    Ok(runner.finish())
}
