//! Per-sentence transforms: each rewrites every text cell of a column
//! independently, preserving row count. All are idempotent on text already
//! clean of the targeted pattern.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::dataset::{Cell, Column};
use crate::error::{CleanError, Result};
use crate::resources::{Resource, ResourceLoader};
use crate::transforms::Transform;

/// Maps every text cell through `f`, failing on non-text cells.
pub(crate) fn rewrite_text<F>(column: &Column, f: F) -> Result<Column>
where
    F: Fn(&str) -> String,
{
    let cells = column
        .cells
        .iter()
        .enumerate()
        .map(|(row, cell)| cell.as_text(row).map(|text| Cell::Text(f(text))))
        .collect::<Result<Vec<_>>>()?;
    Ok(Column::new(column.name.clone(), cells))
}

// ============================================================================
// Fixed patterns
// ============================================================================

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s\-–'‘’]").unwrap());

static DASH_APOSTROPHE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-–'‘’]").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S+|www\.\S+").unwrap());

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<.*?>").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").unwrap());

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}",
        "\u{1F300}-\u{1F5FF}",
        "\u{1F680}-\u{1F6FF}",
        "\u{1F1E0}-\u{1F1FF}",
        "\u{2500}-\u{2BEF}",
        "\u{2702}-\u{27B0}",
        "\u{24C2}-\u{1F251}",
        "\u{1F926}-\u{1F937}",
        "\u{10000}-\u{10FFFF}",
        "\u{2640}-\u{2642}",
        "\u{2600}-\u{2B55}",
        "\u{200D}",
        "\u{23CF}",
        "\u{23E9}",
        "\u{231A}",
        "\u{FE0F}",
        "]+",
    ))
    .unwrap()
});

static PLURAL_S: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)s\b").unwrap());

/// Baseline patterns for [`AdditionalCleaning`]: control characters, curly
/// quote/bracket/ellipsis variants, trademark/currency symbols, misc symbols.
const ADDITIONAL_PATTERNS: [&str; 6] = [
    r"\n",
    r"\t",
    r"\r",
    "[‘’„“„”“”「」『』…]",
    "[¤¶‰™©®]",
    "[▶➤¿∎≤≥⋅﹣°☒]",
];

// ============================================================================
// Catalog
// ============================================================================

/// Folds every character to lowercase.
pub struct Lowercase;

impl Transform for Lowercase {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| text.to_lowercase())
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

/// Strips everything except word characters, whitespace, dashes and
/// apostrophe variants, then maps the surviving dashes/apostrophes to spaces.
pub struct RemovePunctuation;

impl Transform for RemovePunctuation {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| {
            let stripped = NON_WORD.replace_all(text, "");
            DASH_APOSTROPHE.replace_all(&stripped, " ").into_owned()
        })
    }

    fn name(&self) -> &str {
        "remove_punctuation"
    }
}

/// Strips `http(s)://...` and `www....` tokens.
pub struct RemoveUrl;

impl Transform for RemoveUrl {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| URL.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_url"
    }
}

/// Strips `<...>` tag-like spans, non-greedy.
pub struct RemoveHtml;

impl Transform for RemoveHtml {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| HTML_TAG.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_html"
    }
}

/// Strips email-address-shaped tokens.
pub struct RemoveEmail;

impl Transform for RemoveEmail {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| EMAIL.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_email"
    }
}

/// Strips maximal runs of digits.
pub struct RemoveDigit;

impl Transform for RemoveDigit {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| DIGITS.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_digit"
    }
}

/// Trims leading and trailing whitespace.
pub struct RemoveSpace;

impl Transform for RemoveSpace {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| text.trim().to_string())
    }

    fn name(&self) -> &str {
        "remove_space"
    }
}

/// Collapses runs of whitespace to a single space.
pub struct RemoveWhitespace;

impl Transform for RemoveWhitespace {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| {
            WHITESPACE_RUN.replace_all(text, " ").into_owned()
        })
    }

    fn name(&self) -> &str {
        "remove_whitespace"
    }
}

/// Strips `@word` tokens.
pub struct RemoveMention;

impl Transform for RemoveMention {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| MENTION.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_mention"
    }
}

/// Strips `#word` tokens.
pub struct RemoveHashtag;

impl Transform for RemoveHashtag {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| HASHTAG.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_hashtag"
    }
}

/// Strips characters in a fixed set of Unicode emoji/symbol ranges.
pub struct RemoveEmoji;

impl Transform for RemoveEmoji {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| EMOJI.replace_all(text, "").into_owned())
    }

    fn name(&self) -> &str {
        "remove_emoji"
    }
}

/// Strips control characters, curly quotes/brackets/ellipses, trademark and
/// currency symbols, misc symbols, plus any caller-supplied patterns.
pub struct AdditionalCleaning {
    patterns: Vec<Regex>,
}

impl AdditionalCleaning {
    pub fn new() -> Self {
        let patterns = ADDITIONAL_PATTERNS
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .unwrap()
            })
            .collect();
        Self { patterns }
    }

    /// Adds caller patterns to the baseline set. Patterns are compiled
    /// here so an invalid one fails before any row is touched.
    pub fn with_patterns<S: AsRef<str>>(extra: &[S]) -> Result<Self> {
        let mut cleaning = Self::new();
        for pattern in extra {
            let compiled = RegexBuilder::new(pattern.as_ref())
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    CleanError::InvalidArgument(format!(
                        "invalid pattern '{}': {e}",
                        pattern.as_ref()
                    ))
                })?;
            cleaning.patterns.push(compiled);
        }
        Ok(cleaning)
    }
}

impl Default for AdditionalCleaning {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for AdditionalCleaning {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| {
            let mut cell = text.to_string();
            for pattern in &self.patterns {
                cell = pattern.replace_all(&cell, "").into_owned();
            }
            cell
        })
    }

    fn name(&self) -> &str {
        "additional_cleaning"
    }
}

// ============================================================================
// Accent handling
// ============================================================================

/// The remote accent map, compiled into case-insensitive substitutions.
/// Rules apply in file order.
pub(crate) struct AccentRules {
    rules: Vec<(Regex, String)>,
}

impl AccentRules {
    pub(crate) fn fetch(loader: &dyn ResourceLoader) -> Result<Self> {
        let pairs = loader.load(Resource::Accents)?.into_pairs()?;
        Self::compile(pairs)
    }

    pub(crate) fn compile(pairs: Vec<(String, String)>) -> Result<Self> {
        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| {
                let compiled = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        CleanError::Resource(format!("invalid accent pattern '{pattern}': {e}"))
                    })?;
                Ok((compiled, replacement))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub(crate) fn apply(&self, text: &str) -> String {
        let mut cell = text.to_string();
        for (pattern, replacement) in &self.rules {
            cell = pattern.replace_all(&cell, replacement.as_str()).into_owned();
        }
        cell
    }
}

/// Rewrites accented characters to their unaccented equivalents using the
/// remote accent map, optionally lowercasing first.
pub struct RemoveAccent<L> {
    loader: L,
    lowercase: bool,
}

impl<L: ResourceLoader> RemoveAccent<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            lowercase: true,
        }
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl<L: ResourceLoader> Transform for RemoveAccent<L> {
    fn apply(&self, column: &Column) -> Result<Column> {
        let rules = AccentRules::fetch(&self.loader)?;
        rewrite_text(column, |text| {
            if self.lowercase {
                rules.apply(&text.to_lowercase())
            } else {
                rules.apply(text)
            }
        })
    }

    fn name(&self) -> &str {
        "remove_accent"
    }
}

// ============================================================================
// Token-shape transforms over text cells
// ============================================================================

/// Drops tokens of one character or less, split on single spaces.
pub struct RemoveSingleCharacter;

impl Transform for RemoveSingleCharacter {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| {
            text.split(' ')
                .filter(|word| word.chars().count() > 1)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    fn name(&self) -> &str {
        "remove_single_character"
    }
}

/// Strips a trailing plural `s` from tokens longer than `word_length`.
pub struct RemovePlural {
    word_length: usize,
}

impl RemovePlural {
    pub fn new() -> Self {
        Self { word_length: 5 }
    }

    pub fn word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }
}

impl Default for RemovePlural {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for RemovePlural {
    fn apply(&self, column: &Column) -> Result<Column> {
        rewrite_text(column, |text| {
            text.split(' ')
                .map(|word| {
                    if word.chars().count() > self.word_length {
                        PLURAL_S.replace_all(word, "").into_owned()
                    } else {
                        word.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    fn name(&self) -> &str {
        "remove_plural"
    }
}
