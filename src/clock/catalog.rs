use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde::Deserialize;
use thiserror::Error;

use super::lookup::{LookupError, QuoteLookup};
use super::quote::Quote;
use super::time::TimeOfDay;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the JSON import format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRecord {
    time: String,
    quote_first: String,
    quote_time: String,
    quote_last: String,
    title: String,
    author: String,
    gutenberg_reference: String,
    hash: String,
}

impl From<QuoteRecord> for Quote {
    fn from(record: QuoteRecord) -> Self {
        Self {
            time: record.time,
            quote_first: record.quote_first,
            quote_time: record.quote_time,
            quote_last: record.quote_last,
            title: record.title,
            author: record.author,
            gutenberg_reference: record.gutenberg_reference,
            id: record.hash,
        }
    }
}

/// In-memory, read-only quote index.
#[derive(Debug, Clone, Default)]
pub struct QuoteCatalog {
    by_time: HashMap<String, Vec<Quote>>,
    by_id: HashMap<String, Quote>,
}

impl QuoteCatalog {
    /// Build a catalog; later quotes with an already-seen id are ignored.
    pub fn from_quotes(quotes: impl IntoIterator<Item = Quote>) -> Self {
        let mut catalog = Self::default();
        for quote in quotes {
            if catalog.by_id.contains_key(&quote.id) {
                continue;
            }
            catalog
                .by_time
                .entry(quote.time.clone())
                .or_default()
                .push(quote.clone());
            catalog.by_id.insert(quote.id.clone(), quote);
        }
        catalog
    }

    /// Parse the JSON import format: an array of quote records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<QuoteRecord> = serde_json::from_str(json)?;
        Ok(Self::from_quotes(records.into_iter().map(Quote::from)))
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = Self::from_json(&content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::info!("Loaded {} quotes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl QuoteLookup for QuoteCatalog {
    fn random_excluding(&self, at: TimeOfDay, excluding: &[String]) -> Result<Quote, LookupError> {
        let candidates: Vec<&Quote> = self
            .by_time
            .get(&at.key())
            .map(|quotes| {
                quotes
                    .iter()
                    .filter(|quote| !excluding.contains(&quote.id))
                    .collect()
            })
            .unwrap_or_default();

        candidates
            .choose(&mut rand::thread_rng())
            .map(|quote| (*quote).clone())
            .ok_or(LookupError::NotFound)
    }

    fn fetch(&self, id: &str) -> Result<Quote, LookupError> {
        self.by_id.get(id).cloned().ok_or(LookupError::NotFound)
    }
}
