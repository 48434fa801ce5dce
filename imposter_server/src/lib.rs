pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod unsplash;
pub mod words;

pub use config::ServerConfig;
pub use routes::{router, AppState};
