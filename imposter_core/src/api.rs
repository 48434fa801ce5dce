use serde::{Deserialize, Serialize};

use crate::image::{canonical_photo_url, Attribution, ImagePick};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub const NO_WORD: &'static str = "no_word";
    pub const INTERNAL: &'static str = "internal_error";
    pub const UNSUPPORTED_LANG: &'static str = "unsupported_lang";
    pub const UNKNOWN_CATEGORY: &'static str = "unknown_category";
    pub const SEARCH_FAILED: &'static str = "unsplash_search_failed";

    pub fn new(error: &str) -> Self {
        ErrorBody {
            error: error.to_string(),
            detail: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchPhoto {
    pub url: Option<String>,
    pub author: Option<String>,
    pub author_link: Option<String>,
    #[serde(alias = "source_link")]
    pub photo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_location: Option<String>,
}

impl SearchPhoto {
    pub fn into_pick(self) -> Option<ImagePick> {
        let url = self.url.filter(|u| !u.trim().is_empty())?;
        Some(ImagePick {
            url: canonical_photo_url(&url),
            attribution: Some(Attribution {
                author: self.author,
                author_link: self.author_link,
                photo_link: self.photo_link,
            }),
            download_location: self.download_location,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub photos: Vec<SearchPhoto>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DownloadResponse {
    pub ok: bool,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}
