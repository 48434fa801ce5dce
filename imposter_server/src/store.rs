use std::collections::HashMap;

use async_trait::async_trait;
use imposter_core::Category;
use log::debug;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

/// A word row before translation.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredWord {
    pub id: String,
    pub word_en: String,
    pub category: String,
    pub difficulty: f64,
}

#[async_trait]
pub trait WordStore: Send + Sync {
    async fn random_word(&self, category: Option<Category>) -> anyhow::Result<Option<StoredWord>>;

    /// Every known translation of `word_en`, keyed by language code.
    async fn translations(&self, word_en: &str) -> anyhow::Result<HashMap<String, String>>;
}

/// Public bucket holding one `<id>.webp` per word.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn image_url(&self, word_id: &str) -> Option<String>;
}

pub struct PgWordStore {
    pool: PgPool,
}

const RANDOM_WORD: &str = "
SELECT id::text AS id, word_en, category, difficulty::float8 AS difficulty
FROM words
WHERE $1::text IS NULL OR category = $1
ORDER BY random()
LIMIT 1";

const TRANSLATIONS: &str = "
SELECT lang, term
FROM word_translations
WHERE word_en = $1";

impl PgWordStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PgWordStore { pool })
    }
}

#[async_trait]
impl WordStore for PgWordStore {
    async fn random_word(&self, category: Option<Category>) -> anyhow::Result<Option<StoredWord>> {
        let row = sqlx::query(RANDOM_WORD)
            .bind(category.map(|c| c.slug()))
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| -> anyhow::Result<StoredWord> {
            Ok(StoredWord {
                id: row.try_get("id")?,
                word_en: row.try_get("word_en")?,
                category: row.try_get("category")?,
                difficulty: row.try_get("difficulty")?,
            })
        })
        .transpose()
    }

    async fn translations(&self, word_en: &str) -> anyhow::Result<HashMap<String, String>> {
        let rows = sqlx::query(TRANSLATIONS)
            .bind(word_en)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| -> anyhow::Result<(String, String)> {
                Ok((row.try_get("lang")?, row.try_get("term")?))
            })
            .collect()
    }
}

pub struct HttpImageStore {
    base_url: Option<String>,
    client: reqwest::Client,
}

impl HttpImageStore {
    pub fn new(base_url: Option<String>, client: reqwest::Client) -> Self {
        HttpImageStore {
            base_url: base_url.map(|b| b.trim_end_matches('/').to_string()),
            client,
        }
    }

    pub fn url_for(&self, word_id: &str) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{base}/{word_id}.webp"))
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn image_url(&self, word_id: &str) -> Option<String> {
        let url = self.url_for(word_id)?;
        match self.client.head(&url).send().await {
            Ok(response) if response.status().is_success() => Some(url),
            Ok(response) => {
                debug!("no stored image for {word_id}: {}", response.status());
                None
            }
            Err(e) => {
                debug!("stored image check failed for {word_id}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::HttpImageStore;

    #[test]
    fn url_for_should_address_images_by_word_id() {
        let store = HttpImageStore::new(
            Some("https://cdn.test/word-images/".to_string()),
            reqwest::Client::new(),
        );
        assert_eq!(
            store.url_for("42").as_deref(),
            Some("https://cdn.test/word-images/42.webp")
        );
    }

    #[test]
    fn url_for_should_be_absent_without_a_bucket() {
        let store = HttpImageStore::new(None, reqwest::Client::new());
        assert_eq!(store.url_for("42"), None);
    }
}
