use async_trait::async_trait;
use imposter_core::{
    api::{DownloadResponse, ErrorBody, SearchResponse},
    Category, ImagePick, Language, PhotoProvider, ResolveError, WordRecord, WordSource,
};
use log::debug;
use reqwest::{Client, Url};

/// Talks to `imposter_server` for words, photos and usage accounting.
pub struct ApiClient {
    base: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base: &str, client: Client) -> anyhow::Result<Self> {
        let base = Url::parse(base)?;
        Ok(ApiClient { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ResolveError> {
        self.base
            .join(path)
            .map_err(|e| ResolveError::Provider(e.to_string()))
    }
}

fn provider_error(e: reqwest::Error) -> ResolveError {
    ResolveError::Provider(e.to_string())
}

#[async_trait]
impl WordSource for ApiClient {
    async fn fetch_word(
        &self,
        lang: Language,
        category: Option<Category>,
    ) -> Result<WordRecord, ResolveError> {
        let mut query = vec![("lang", lang.code())];
        if let Some(category) = category {
            query.push(("category", category.slug()));
        }
        let response = self
            .client
            .get(self.endpoint("api/word")?)
            .query(&query)
            .send()
            .await
            .map_err(provider_error)?;

        if response.status().is_success() {
            return response.json().await.map_err(provider_error);
        }
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) if body.error == ErrorBody::NO_WORD => Err(ResolveError::NoWord),
            Ok(body) => Err(ResolveError::Provider(format!("{status}: {}", body.error))),
            Err(_) => Err(ResolveError::Provider(status.to_string())),
        }
    }
}

#[async_trait]
impl PhotoProvider for ApiClient {
    async fn search(&self, term: &str) -> Result<Option<ImagePick>, ResolveError> {
        let response = self
            .client
            .get(self.endpoint("api/unsplash")?)
            .query(&[("q", term)])
            .send()
            .await
            .map_err(provider_error)?;
        if !response.status().is_success() {
            return Err(ResolveError::Provider(response.status().to_string()));
        }
        let body: SearchResponse = response.json().await.map_err(provider_error)?;
        Ok(body.photos.into_iter().next().and_then(|p| p.into_pick()))
    }

    async fn confirm_download(
        &self,
        download_location: &str,
    ) -> Result<Option<String>, ResolveError> {
        let body: DownloadResponse = self
            .client
            .get(self.endpoint("api/unsplash/download")?)
            .query(&[("url", download_location)])
            .send()
            .await
            .map_err(provider_error)?
            .json()
            .await
            .map_err(provider_error)?;
        debug!("download accounting answered ok={}", body.ok);
        if !body.ok {
            return Err(ResolveError::Provider("download not counted".to_string()));
        }
        Ok(body.file_url)
    }
}
