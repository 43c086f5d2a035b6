//! Word-level transforms driven by remote rule tables: stopword removal,
//! lemmatization, stemming. Each optionally lowercases first and optionally
//! accent-normalizes both the corpus and the rule table before applying it.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::dataset::Column;
use crate::error::{CleanError, Result};
use crate::resources::{Language, Resource, ResourceLoader};
use crate::transforms::sentence::{rewrite_text, AccentRules};
use crate::transforms::Transform;

fn compile_rule(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| CleanError::Resource(format!("invalid rule pattern '{pattern}': {e}")))
}

/// Lowercases the column up front when requested.
fn prepare(column: &Column, lowercase: bool) -> Result<Column> {
    if lowercase {
        rewrite_text(column, |text| text.to_lowercase())
    } else {
        Ok(column.clone())
    }
}

/// Accent-normalizes a column and a rule list together, enforcing that the
/// list's cardinality is unchanged by the normalization.
fn normalize_accents(
    loader: &dyn ResourceLoader,
    column: Column,
    rules: Vec<String>,
) -> Result<(Column, Vec<String>)> {
    let accents = AccentRules::fetch(loader)?;
    let before = rules.len();
    let column = rewrite_text(&column, |text| accents.apply(text))?;
    let rules: Vec<String> = rules.into_iter().map(|r| accents.apply(&r)).collect();
    if rules.len() != before {
        return Err(CleanError::Consistency(format!(
            "rule table changed size under accent normalization: {} -> {}",
            before,
            rules.len()
        )));
    }
    Ok((column, rules))
}

// ============================================================================
// Stopword removal
// ============================================================================

/// Drops stopword tokens from every cell, split on single spaces.
///
/// The effective set is the fetched list for the language, minus the `keep`
/// entries, plus the `extra` entries, de-duplicated.
pub struct RemoveStopwords<L> {
    loader: L,
    language: Language,
    lowercase: bool,
    remove_accents: bool,
    keep: Vec<String>,
    extra: Vec<String>,
}

impl<L: ResourceLoader> RemoveStopwords<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            language: Language::English,
            lowercase: true,
            remove_accents: false,
            keep: Vec::new(),
            extra: Vec::new(),
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn remove_accents(mut self, remove_accents: bool) -> Self {
        self.remove_accents = remove_accents;
        self
    }

    /// Stopwords to keep in the corpus even if the fetched list names them.
    pub fn keep<S: Into<String>>(mut self, words: Vec<S>) -> Self {
        self.keep = words.into_iter().map(Into::into).collect();
        self
    }

    /// Stopwords to drop in addition to the fetched list.
    pub fn extra<S: Into<String>>(mut self, words: Vec<S>) -> Self {
        self.extra = words.into_iter().map(Into::into).collect();
        self
    }
}

impl<L: ResourceLoader> Transform for RemoveStopwords<L> {
    fn apply(&self, column: &Column) -> Result<Column> {
        let column = prepare(column, self.lowercase)?;

        let mut stopwords = self
            .loader
            .load(Resource::Stopwords(self.language))?
            .into_list()?;
        stopwords.retain(|word| !self.keep.contains(word));
        stopwords.extend(self.extra.iter().cloned());
        debug!(
            language = %self.language,
            count = stopwords.len(),
            "loaded stopword list"
        );

        let (column, stopwords) = if self.remove_accents {
            normalize_accents(&self.loader, column, stopwords)?
        } else {
            (column, stopwords)
        };

        let set: HashSet<String> = stopwords.into_iter().collect();
        rewrite_text(&column, |text| {
            text.split(' ')
                .filter(|word| !set.contains(*word))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    fn name(&self) -> &str {
        "remove_stopword"
    }
}

// ============================================================================
// Lemmatization
// ============================================================================

/// Rewrites inflected forms to their lemma using the fetched pattern map.
///
/// Every pattern/replacement pair applies as a case-insensitive substitution
/// over the whole cell, in file order: later rules can re-match text
/// rewritten by earlier ones.
pub struct Lemmatize<L> {
    loader: L,
    language: Language,
    lowercase: bool,
    remove_accents: bool,
}

impl<L: ResourceLoader> Lemmatize<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            language: Language::English,
            lowercase: true,
            remove_accents: false,
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn remove_accents(mut self, remove_accents: bool) -> Self {
        self.remove_accents = remove_accents;
        self
    }
}

impl<L: ResourceLoader> Transform for Lemmatize<L> {
    fn apply(&self, column: &Column) -> Result<Column> {
        let column = prepare(column, self.lowercase)?;

        let pairs = self
            .loader
            .load(Resource::Lemmas(self.language))?
            .into_pairs()?;
        debug!(language = %self.language, count = pairs.len(), "loaded lemma map");

        let (column, pairs) = if self.remove_accents {
            let accents = AccentRules::fetch(&self.loader)?;
            let before = pairs.len();
            let column = rewrite_text(&column, |text| accents.apply(text))?;
            let pairs: Vec<(String, String)> = pairs
                .into_iter()
                .map(|(pattern, value)| (accents.apply(&pattern), accents.apply(&value)))
                .collect();
            if pairs.len() != before {
                return Err(CleanError::Consistency(format!(
                    "lemma map changed size under accent normalization: {} -> {}",
                    before,
                    pairs.len()
                )));
            }
            (column, pairs)
        } else {
            (column, pairs)
        };

        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| Ok((compile_rule(&pattern)?, replacement)))
            .collect::<Result<Vec<_>>>()?;

        rewrite_text(&column, |text| {
            let mut cell = text.to_string();
            for (pattern, replacement) in &rules {
                cell = pattern.replace_all(&cell, replacement.as_str()).into_owned();
            }
            cell
        })
    }

    fn name(&self) -> &str {
        "lemmatize"
    }
}

// ============================================================================
// Stemming
// ============================================================================

/// Deletes suffix patterns from the fetched stem-rule list, reducing words
/// toward their root. Patterns apply in file order.
pub struct Stemmatize<L> {
    loader: L,
    language: Language,
    lowercase: bool,
    remove_accents: bool,
}

impl<L: ResourceLoader> Stemmatize<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            language: Language::English,
            lowercase: true,
            remove_accents: false,
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn remove_accents(mut self, remove_accents: bool) -> Self {
        self.remove_accents = remove_accents;
        self
    }
}

impl<L: ResourceLoader> Transform for Stemmatize<L> {
    fn apply(&self, column: &Column) -> Result<Column> {
        let column = prepare(column, self.lowercase)?;

        let patterns = self
            .loader
            .load(Resource::Stems(self.language))?
            .into_list()?;
        debug!(language = %self.language, count = patterns.len(), "loaded stem rules");

        let (column, patterns) = if self.remove_accents {
            normalize_accents(&self.loader, column, patterns)?
        } else {
            (column, patterns)
        };

        let rules = patterns
            .iter()
            .map(|pattern| compile_rule(pattern))
            .collect::<Result<Vec<_>>>()?;

        rewrite_text(&column, |text| {
            let mut cell = text.to_string();
            for pattern in &rules {
                cell = pattern.replace_all(&cell, "").into_owned();
            }
            cell
        })
    }

    fn name(&self) -> &str {
        "stemmatize"
    }
}
