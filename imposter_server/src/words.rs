use imposter_core::{word::localized_term, Category, Language, WordRecord};
use log::{error, warn};

use crate::{
    error::ApiError,
    store::{ImageStore, WordStore},
};

/// Draws one random word, localizes it and looks up its stored image.
pub async fn lookup_word(
    words: &dyn WordStore,
    images: &dyn ImageStore,
    lang: Language,
    category: Option<Category>,
) -> Result<WordRecord, ApiError> {
    let stored = match words.random_word(category).await {
        Ok(Some(word)) => word,
        Ok(None) => return Err(ApiError::NoWord),
        Err(e) => {
            error!("random word lookup failed: {e:#}");
            return Err(ApiError::Internal);
        }
    };

    let terms = match words.translations(&stored.word_en).await {
        Ok(terms) => terms,
        Err(e) => {
            // untranslated is still playable
            warn!("translation lookup for {} failed: {e:#}", stored.word_en);
            Default::default()
        }
    };
    let term = if lang.is_canonical() {
        stored.word_en.clone()
    } else {
        localized_term(&stored.word_en, terms.get(&lang.code()).map(String::as_str))
    };
    let image_url = images.image_url(&stored.id).await;

    Ok(WordRecord {
        id: stored.id,
        word_en: stored.word_en,
        term,
        lang: Some(lang),
        terms: (!terms.is_empty()).then_some(terms),
        category: stored.category,
        difficulty: stored.difficulty,
        image_url,
    })
}
