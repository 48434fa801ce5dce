use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::{
    error::ResolveError,
    image::ImagePick,
    language::{Category, Language},
    word::WordRecord,
};

/// Term Resolver seam: one random word per call.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_word(
        &self,
        lang: Language,
        category: Option<Category>,
    ) -> Result<WordRecord, ResolveError>;
}

/// Photo-search provider with its usage-accounting call.
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Highest-relevance photo for `term`, if any.
    async fn search(&self, term: &str) -> Result<Option<ImagePick>, ResolveError>;

    /// Marks the photo behind `download_location` as used. Returns the
    /// provider-confirmed file URL when it reports one.
    async fn confirm_download(&self, download_location: &str)
        -> Result<Option<String>, ResolveError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(ImagePick),
    Continue,
}

#[async_trait]
pub trait ImageStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(&self, word: &WordRecord) -> Result<Resolution, ResolveError>;
}

/// Image kept next to the word in the store, addressed by its id.
pub struct StoredImage;

#[async_trait]
impl ImageStrategy for StoredImage {
    fn name(&self) -> &'static str {
        "store"
    }

    async fn resolve(&self, word: &WordRecord) -> Result<Resolution, ResolveError> {
        Ok(match &word.image_url {
            Some(url) if !url.trim().is_empty() => Resolution::Resolved(ImagePick::stored(url.clone())),
            _ => Resolution::Continue,
        })
    }
}

pub struct SearchImage {
    provider: Arc<dyn PhotoProvider>,
}

impl SearchImage {
    pub fn new(provider: Arc<dyn PhotoProvider>) -> Self {
        SearchImage { provider }
    }
}

#[async_trait]
impl ImageStrategy for SearchImage {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn resolve(&self, word: &WordRecord) -> Result<Resolution, ResolveError> {
        // always the canonical term, never the localized one
        Ok(match self.provider.search(&word.word_en).await? {
            Some(pick) => Resolution::Resolved(pick),
            None => Resolution::Continue,
        })
    }
}

/// Ordered strategy chain, short-circuiting on the first resolved image.
pub struct ImageResolver {
    strategies: Vec<Box<dyn ImageStrategy>>,
}

impl ImageResolver {
    pub fn new(strategies: Vec<Box<dyn ImageStrategy>>) -> Self {
        ImageResolver { strategies }
    }

    /// Store lookup first, photo search second.
    pub fn standard(provider: Arc<dyn PhotoProvider>) -> Self {
        ImageResolver::new(vec![
            Box::new(StoredImage),
            Box::new(SearchImage::new(provider)),
        ])
    }

    pub async fn resolve(&self, word: &WordRecord) -> Option<ImagePick> {
        for strategy in &self.strategies {
            match strategy.resolve(word).await {
                Ok(Resolution::Resolved(pick)) => {
                    debug!("image for {} resolved by {}", word.word_en, strategy.name());
                    return Some(pick);
                }
                Ok(Resolution::Continue) => {}
                Err(e) => warn!(
                    "image strategy {} failed for {}: {e}",
                    strategy.name(),
                    word.word_en
                ),
            }
        }
        None
    }
}

/// Fire-and-forget accounting call; failures are swallowed.
pub async fn confirm_usage(provider: &dyn PhotoProvider, download_location: &str) -> Option<String> {
    match provider.confirm_download(download_location).await {
        Ok(url) => url,
        Err(e) => {
            debug!("download accounting failed: {e}");
            None
        }
    }
}
