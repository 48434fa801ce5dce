use std::net::SocketAddr;

use clap::Parser;
use imposter_core::Language;

pub const DEFAULT_UNSPLASH_API: &str = "https://api.unsplash.com";

#[derive(Parser, Debug, Clone)]
#[command(name = "imposter_server", version, about = "Word and photo API for the Imposter party games")]
pub struct ServerConfig {
    #[arg(long, env = "IMPOSTER_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,
    #[arg(long, env = "DATABASE_URL", help = "Postgres URL of the word store")]
    pub database_url: String,
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", default_value = "", hide_env_values = true)]
    pub unsplash_access_key: String,
    #[arg(long, env = "UNSPLASH_API", default_value = DEFAULT_UNSPLASH_API)]
    pub unsplash_api: String,
    #[arg(
        long,
        env = "IMAGE_STORE_URL",
        help = "Public base URL of the word image bucket, images live at <base>/<id>.webp"
    )]
    pub image_store_url: Option<String>,
    #[arg(long, env = "IMPOSTER_DEFAULT_LANG", default_value = "krd")]
    pub default_lang: Language,
    #[arg(long, env = "IMPOSTER_DB_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}
