//! Podcaster - podcast episode browser and player
use anyhow::Context;
use clap::{Parser, Subcommand};
use podcaster_catalog::CatalogClient;
use podcaster_playback::{EngineDriver, PlaybackManager};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod player;
mod view;

use config::AppConfig;
use player::LoggingEngine;

#[derive(Parser)]
#[command(name = "podcaster")]
#[command(about = "Browse and play podcast episodes", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PODCASTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest episodes
    List,
    /// Play the listing starting at a queue index
    Play {
        /// Queue index as shown by `list`
        index: usize,
    },
    /// Play a single episode by id
    Episode {
        /// Episode id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "podcaster=info,podcaster_playback=info,podcaster_catalog=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let client = CatalogClient::new(config.catalog.clone())?;

    tracing::info!(api = %client.base_url(), "Podcaster starting");

    match cli.command {
        Commands::List => {
            let listing = client.home_listing().await?;
            print!("{}", view::render_listing(&listing));
        }
        Commands::Play { index } => {
            let listing = client.home_listing().await?;
            let mut manager = new_player(&config);
            manager
                .play_list(listing.playlist(), index)
                .with_context(|| format!("Cannot start playback at {}", index))?;
            player::run(&mut manager, io::stdin().lock(), io::stdout())?;
        }
        Commands::Episode { id } => {
            let episode = client.episode(&id).await?;
            let mut manager = new_player(&config);
            manager.play(episode.to_episode());
            player::run(&mut manager, io::stdin().lock(), io::stdout())?;
        }
    }

    Ok(())
}

fn new_player(config: &AppConfig) -> PlaybackManager {
    let mut manager = PlaybackManager::new(config.playback.clone());
    EngineDriver::new(LoggingEngine::default()).attach(&mut manager);
    manager
}
