use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use imposter_core::{Category, GameMode, GameSession, ImageResolver, Language, RoundComposer};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{api_client::ApiClient, cli_game::CliGame};

mod api_client;
mod cli_action;
mod cli_game;

/// Pass-the-device word game in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Base URL of imposter_server
    #[arg(long, env = "IMPOSTER_SERVER", default_value = "http://localhost:3000")]
    server: String,

    #[arg(long, default_value = "krd")]
    lang: Language,

    /// Category slug; any category when omitted
    #[arg(long, value_parser = parse_category)]
    category: Option<Category>,

    #[arg(long, default_value = "imposter")]
    mode: GameMode,

    #[arg(long)]
    players: Option<usize>,

    /// Seed for impostor selection, for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "imposter_kurdish")]
    utm_source: String,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|_| format!("unknown category: {s}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let client = reqwest::Client::builder()
        .user_agent(concat!("imposter_ui_cli/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let api = Arc::new(
        ApiClient::new(&args.server, client)
            .with_context(|| format!("invalid server url {}", args.server))?,
    );
    let images = Arc::new(ImageResolver::standard(api.clone()));
    let composer = RoundComposer::new(api.clone(), images);

    let mut session = GameSession::new(args.mode, args.lang, args.category);
    if let Some(players) = args.players {
        session.set_player_count(players)?;
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("playing against {}", args.server);

    CliGame::new(session, composer, api, rng, args.utm_source)
        .run()
        .await
}
