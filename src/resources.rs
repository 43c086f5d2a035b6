//! Rule-table loading.
//!
//! Stopword lists, lemma maps, stem lists and the accent map live in remote
//! plain-text files. Loading is an injectable capability: transforms depend
//! on the [`ResourceLoader`] trait, so callers can swap the default HTTP
//! fetcher for an in-memory or on-disk source without touching transform
//! logic. Tables are fetched fresh on every call and never cached.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CleanError, Result};

/// Base URL of the well-known rule-table files.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/lprtk/pyTCTK/main/ressources";

/// Supported rule-table languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "english" => Ok(Language::English),
            "french" => Ok(Language::French),
            other => Err(CleanError::InvalidArgument(format!(
                "language must be 'english' or 'french': got '{other}'"
            ))),
        }
    }
}

/// One of the well-known remote rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Accented-character map, shared across languages. Pairs.
    Accents,
    /// One stopword per line. List.
    Stopwords(Language),
    /// `pattern replacement` per line. Pairs, file order significant.
    Lemmas(Language),
    /// One deletion pattern per line. List, file order significant.
    Stems(Language),
}

impl Resource {
    /// Path of the backing file relative to the resource base URL.
    pub fn rel_path(&self) -> String {
        match self {
            Resource::Accents => "accents/accents.txt".to_string(),
            Resource::Stopwords(lang) => format!("stopwords/{lang}.txt"),
            Resource::Lemmas(lang) => format!("lemme/{lang}.txt"),
            Resource::Stems(lang) => format!("stemme/{lang}.txt"),
        }
    }

    fn file_name(&self) -> String {
        self.rel_path().replace('/', "_")
    }

    fn shape(&self) -> TableShape {
        match self {
            Resource::Accents | Resource::Lemmas(_) => TableShape::Pairs,
            Resource::Stopwords(_) | Resource::Stems(_) => TableShape::List,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rel_path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableShape {
    List,
    Pairs,
}

/// A parsed rule table. Pair tables keep file order: later rules may
/// re-match text rewritten by earlier ones, so order is part of the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleTable {
    List(Vec<String>),
    Pairs(Vec<(String, String)>),
}

impl RuleTable {
    pub fn into_list(self) -> Result<Vec<String>> {
        match self {
            RuleTable::List(items) => Ok(items),
            RuleTable::Pairs(_) => Err(CleanError::Resource(
                "expected a list table, got a pair table".to_string(),
            )),
        }
    }

    pub fn into_pairs(self) -> Result<Vec<(String, String)>> {
        match self {
            RuleTable::Pairs(pairs) => Ok(pairs),
            RuleTable::List(_) => Err(CleanError::Resource(
                "expected a pair table, got a list table".to_string(),
            )),
        }
    }
}

/// Loads a parsed rule table for a given resource.
pub trait ResourceLoader: Send + Sync {
    fn load(&self, resource: Resource) -> Result<RuleTable>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Arc<T> {
    fn load(&self, resource: Resource) -> Result<RuleTable> {
        (**self).load(resource)
    }
}

// ============================================================================
// HTTP loader
// ============================================================================

/// Fetches rule tables over HTTP through a transient local file.
///
/// Every call re-fetches: GET, write to a scratch path, parse, then remove
/// the file unconditionally before returning. A failed fetch surfaces as a
/// network error; a failed removal as an I/O error. No retries, no cache.
pub struct HttpResourceLoader {
    client: reqwest::blocking::Client,
    base_url: String,
    scratch_dir: PathBuf,
}

impl HttpResourceLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            scratch_dir: std::env::temp_dir(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    fn fetch_to_file(&self, resource: Resource) -> Result<PathBuf> {
        let url = format!("{}/{}", self.base_url, resource.rel_path());
        debug!(%url, "fetching rule table");
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(CleanError::Network(format!(
                "GET {url} returned status {}",
                response.status()
            )));
        }
        let body = response.bytes()?;
        let path = self
            .scratch_dir
            .join(format!("textclean-{}-{}", std::process::id(), resource.file_name()));
        fs::write(&path, &body)?;
        Ok(path)
    }
}

impl Default for HttpResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLoader for HttpResourceLoader {
    fn load(&self, resource: Resource) -> Result<RuleTable> {
        let path = self.fetch_to_file(resource)?;
        let contents = read_and_discard(&path)?;
        parse_table(resource.shape(), &contents)
    }
}

/// Reads a transient file and removes it unconditionally before returning.
fn read_and_discard(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path);
    fs::remove_file(path)?;
    Ok(contents?)
}

fn parse_table(shape: TableShape, contents: &str) -> Result<RuleTable> {
    match shape {
        TableShape::List => Ok(RuleTable::List(
            contents.split_whitespace().map(str::to_string).collect(),
        )),
        TableShape::Pairs => {
            let mut pairs = Vec::new();
            for (lineno, line) in contents.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(pattern), Some(value), None) => {
                        pairs.push((pattern.to_string(), value.to_string()));
                    }
                    _ => {
                        return Err(CleanError::Resource(format!(
                            "line {}: expected two whitespace-separated fields, got '{line}'",
                            lineno + 1
                        )));
                    }
                }
            }
            Ok(RuleTable::Pairs(pairs))
        }
    }
}

// ============================================================================
// Static loader
// ============================================================================

/// In-memory rule tables, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticResourceLoader {
    tables: HashMap<Resource, RuleTable>,
}

impl StaticResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, resource: Resource, table: RuleTable) -> Self {
        self.tables.insert(resource, table);
        self
    }
}

impl ResourceLoader for StaticResourceLoader {
    fn load(&self, resource: Resource) -> Result<RuleTable> {
        self.tables
            .get(&resource)
            .cloned()
            .ok_or_else(|| CleanError::Resource(format!("no table registered for '{resource}'")))
    }
}
