use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use imposter_core::api::ErrorBody;

#[derive(Debug)]
pub enum ApiError {
    NoWord,
    UnsupportedLang,
    UnknownCategory,
    SearchFailed(String),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NoWord => (StatusCode::NOT_FOUND, ErrorBody::new(ErrorBody::NO_WORD)),
            ApiError::UnsupportedLang => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(ErrorBody::UNSUPPORTED_LANG),
            ),
            ApiError::UnknownCategory => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(ErrorBody::UNKNOWN_CATEGORY),
            ),
            ApiError::SearchFailed(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: ErrorBody::SEARCH_FAILED.to_string(),
                    detail: Some(detail),
                },
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(ErrorBody::INTERNAL),
            ),
        };
        (status, Json(body)).into_response()
    }
}
