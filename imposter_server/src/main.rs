use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use imposter_server::{
    router,
    store::{HttpImageStore, PgWordStore},
    unsplash::{PhotoSearchApi, UnsplashClient},
    AppState, ServerConfig,
};
use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ServerConfig::parse();

    let http = reqwest::Client::builder()
        .user_agent(concat!("imposter_server/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let words = PgWordStore::connect(&config.database_url, config.max_connections)
        .await
        .context("could not connect to the word store")?;
    let photos = UnsplashClient::new(
        &config.unsplash_api,
        config.unsplash_access_key.clone(),
        http.clone(),
    )?;
    if !photos.has_key() {
        warn!("UNSPLASH_ACCESS_KEY is not set, photo search will fail");
    }

    let state = AppState {
        words: Arc::new(words),
        images: Arc::new(HttpImageStore::new(config.image_store_url.clone(), http)),
        photos: Arc::new(photos),
        default_lang: config.default_lang,
    };

    let listener = TcpListener::bind(config.bind).await?;
    info!("listening on http://{}", config.bind);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
