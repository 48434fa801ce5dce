use std::{str::FromStr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use imposter_core::{
    api::{DownloadResponse, SearchResponse},
    Category, Language, WordRecord,
};
use log::{error, info, warn};
use serde::Deserialize;

use crate::{
    error::ApiError,
    store::{ImageStore, WordStore},
    unsplash::PhotoSearchApi,
    words::lookup_word,
};

#[derive(Clone)]
pub struct AppState {
    pub words: Arc<dyn WordStore>,
    pub images: Arc<dyn ImageStore>,
    pub photos: Arc<dyn PhotoSearchApi>,
    pub default_lang: Language,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/word", get(word))
        .route("/api/unsplash", get(search))
        .route("/api/unsplash/download", get(download))
        .route("/api/unsplash/test-download", get(test_download))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
pub struct WordQuery {
    lang: Option<String>,
    category: Option<String>,
}

async fn word(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Json<WordRecord>, ApiError> {
    let lang = match query.lang.as_deref().map(str::trim) {
        None | Some("") => state.default_lang,
        Some(code) => Language::from_str(code).map_err(|_| ApiError::UnsupportedLang)?,
    };
    let category =
        Category::from_slug(query.category.as_deref()).map_err(|_| ApiError::UnknownCategory)?;

    let word = lookup_word(state.words.as_ref(), state.images.as_ref(), lang, category).await?;
    info!("served word {} ({lang})", word.id);
    Ok(Json(word))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let q = query.q.unwrap_or_default();
    if q.trim().is_empty() {
        return Ok(Json(SearchResponse::default()));
    }
    match state.photos.search(q.trim()).await {
        Ok(photos) => Ok(Json(SearchResponse { photos })),
        Err(e) => {
            warn!("photo search for {q} failed: {e:#}");
            Err(ApiError::SearchFailed(e.to_string()))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    url: Option<String>,
}

async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> (StatusCode, Json<DownloadResponse>) {
    let rejected = (StatusCode::BAD_REQUEST, Json(DownloadResponse::default()));
    let Some(url) = query.url.filter(|u| !u.trim().is_empty()) else {
        return rejected;
    };
    if !state.photos.accepts_download_location(&url) {
        warn!("refusing download trigger for foreign url {url}");
        return rejected;
    }
    match state.photos.trigger_download(&url).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            warn!("download trigger failed: {e:#}");
            (StatusCode::OK, Json(DownloadResponse::default()))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TestDownloadQuery {
    q: Option<String>,
    count: Option<String>,
}

async fn test_download(
    State(state): State<AppState>,
    Query(query): Query<TestDownloadQuery>,
) -> Response {
    if !state.photos.has_key() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Missing UNSPLASH_ACCESS_KEY").into_response();
    }
    let q = query.q.unwrap_or_default().trim().to_string();
    if q.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Error: q parameter missing. Example: /api/unsplash/test-download?q=cabbage&count=3",
        )
            .into_response();
    }
    let runs = query
        .count
        .and_then(|c| c.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, 10);

    match state.photos.test_download_report(&q, runs).await {
        Ok(report) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"unsplash-test-report.txt\"",
                ),
            ],
            report,
        )
            .into_response(),
        Err(e) => {
            error!("test download failed: {e:#}");
            ApiError::Internal.into_response()
        }
    }
}
