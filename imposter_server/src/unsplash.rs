use anyhow::{bail, Context};
use async_trait::async_trait;
use imposter_core::api::{DownloadResponse, SearchPhoto};
use log::{debug, warn};
use reqwest::{header::HeaderMap, Client, RequestBuilder, Url};
use serde::Deserialize;

#[async_trait]
pub trait PhotoSearchApi: Send + Sync {
    fn has_key(&self) -> bool;

    /// Download locations must point at the provider API, nowhere else.
    fn accepts_download_location(&self, url: &str) -> bool;

    /// At most one photo, the most relevant.
    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchPhoto>>;

    async fn trigger_download(&self, download_location: &str) -> anyhow::Result<DownloadResponse>;

    async fn test_download_report(&self, query: &str, runs: usize) -> anyhow::Result<String>;
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    id: String,
    urls: Option<PhotoUrls>,
    user: Option<User>,
    links: Option<PhotoLinks>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
    small: Option<String>,
}

#[derive(Debug, Deserialize)]
struct User {
    name: Option<String>,
    links: Option<UserLinks>,
}

#[derive(Debug, Deserialize)]
struct UserLinks {
    html: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoLinks {
    html: Option<String>,
    download_location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackedDownload {
    url: Option<String>,
}

impl From<Photo> for SearchPhoto {
    fn from(p: Photo) -> Self {
        let (author, author_link) = match p.user {
            Some(user) => (user.name, user.links.and_then(|l| l.html)),
            None => (None, None),
        };
        let (photo_link, download_location) = match p.links {
            Some(links) => (links.html, links.download_location),
            None => (None, None),
        };
        SearchPhoto {
            url: p.urls.and_then(|u| u.regular.or(u.small)),
            author,
            author_link,
            photo_link,
            download_location,
        }
    }
}

pub struct UnsplashClient {
    api: Url,
    access_key: String,
    client: Client,
}

impl UnsplashClient {
    pub fn new(api: &str, access_key: String, client: Client) -> anyhow::Result<Self> {
        let api = Url::parse(api).with_context(|| format!("invalid provider url {api}"))?;
        Ok(UnsplashClient {
            api,
            access_key,
            client,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        Ok(self.api.join(path)?)
    }

    async fn photo_download_location(&self, photo_id: &str) -> anyhow::Result<Option<String>> {
        let url = self.endpoint(&format!("photos/{photo_id}"))?;
        let photo: Photo = self
            .authorized(self.client.get(url))
            .send()
            .await?
            .json()
            .await?;
        Ok(photo.links.and_then(|l| l.download_location))
    }
}

fn header_or_dash(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

#[async_trait]
impl PhotoSearchApi for UnsplashClient {
    fn has_key(&self) -> bool {
        !self.access_key.trim().is_empty()
    }

    fn accepts_download_location(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(url) => {
                url.scheme() == self.api.scheme()
                    && url.host_str() == self.api.host_str()
                    && url.port_or_known_default() == self.api.port_or_known_default()
            }
            Err(_) => false,
        }
    }

    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchPhoto>> {
        let response = self
            .authorized(self.client.get(self.endpoint("search/photos")?))
            .query(&[("query", query), ("per_page", "1")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("{status}: {detail}");
        }
        let results: SearchResults = response.json().await?;
        debug!("search for {query} returned {} photo(s)", results.results.len());
        Ok(results.results.into_iter().take(1).map(SearchPhoto::from).collect())
    }

    async fn trigger_download(&self, download_location: &str) -> anyhow::Result<DownloadResponse> {
        let response = self
            .authorized(self.client.get(download_location))
            .send()
            .await?;
        if !response.status().is_success() {
            warn!("download trigger answered {}", response.status());
            return Ok(DownloadResponse {
                ok: false,
                file_url: None,
            });
        }
        let tracked: TrackedDownload = response.json().await.unwrap_or(TrackedDownload { url: None });
        Ok(DownloadResponse {
            ok: true,
            file_url: tracked.url,
        })
    }

    async fn test_download_report(&self, query: &str, runs: usize) -> anyhow::Result<String> {
        let mut lines = vec![
            "Unsplash Test Download Report".to_string(),
            format!(
                "App Key Prefix: {}",
                self.access_key.chars().take(8).collect::<String>()
            ),
            format!("Query: {query}"),
            format!("Runs: {runs}"),
            String::new(),
        ];

        for run in 1..=runs {
            lines.push(format!("--- Run #{run} ---"));
            let search = self
                .authorized(self.client.get(self.endpoint("search/photos")?))
                .query(&[("query", query), ("per_page", "1")])
                .send()
                .await?;
            lines.push(format!("search_status: {}", search.status().as_u16()));
            let first = search
                .json::<SearchResults>()
                .await
                .ok()
                .and_then(|r| r.results.into_iter().next());
            let Some(photo) = first else {
                lines.push("ERROR: no search results".to_string());
                lines.push(String::new());
                continue;
            };

            let Some(location) = self.photo_download_location(&photo.id).await? else {
                lines.push("ERROR: photo has no download_location".to_string());
                lines.push(String::new());
                continue;
            };
            lines.push(format!("photo_id: {}", photo.id));
            lines.push(format!("download_location: {location}"));

            let download = self.authorized(self.client.get(&location)).send().await?;
            let status = download.status();
            let headers = download.headers().clone();
            let tracked: Option<TrackedDownload> = download.json().await.ok();
            lines.push(format!("download_status: {}", status.as_u16()));
            lines.push(format!("x-request-id: {}", header_or_dash(&headers, "x-request-id")));
            lines.push(format!("rate_limit: {}", header_or_dash(&headers, "x-ratelimit-limit")));
            lines.push(format!(
                "rate_remaining: {}",
                header_or_dash(&headers, "x-ratelimit-remaining")
            ));
            lines.push(format!(
                "file_url: {}",
                tracked.and_then(|t| t.url).unwrap_or_else(|| "-".to_string())
            ));
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }
}
