use chrono::Utc;
use rand::Rng;
use nr_core::{Article, Error, NewsSource, Result};

use crate::catalog::{CatalogEntry, CRYPTO_NEWS};

/// Hands out a uniformly random item from a fixed list on every fetch.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    name: String,
    entries: Vec<CatalogEntry>,
}

impl CatalogSource {
    pub fn new() -> Self {
        Self {
            name: "Crypto news".to_string(),
            entries: CRYPTO_NEWS.to_vec(),
        }
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Validation("A news catalog needs at least one entry".to_string()));
        }
        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn stamp(index: usize, entry: &CatalogEntry) -> Article {
        let now = Utc::now();
        Article {
            id: format!("news-{}-{}", now.timestamp_millis(), index),
            title: entry.title.to_string(),
            content: entry.content.to_string(),
            source_name: entry.source_name.to_string(),
            source_url: entry.source_url.to_string(),
            published_at: now,
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsSource for CatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Article {
        let index = rand::thread_rng().gen_range(0..self.entries.len());
        let article = Self::stamp(index, &self.entries[index]);
        tracing::debug!("📰 Picked catalog entry {}: {}", index, article.title);
        article
    }
}
