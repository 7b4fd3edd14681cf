//! Podcaster Catalog
//!
//! Fetches episodes from the content API and prepares them for the home
//! page and the player.
//!
//! # Features
//!
//! - **Fetching**: newest episodes (`_limit`, sorted by publication date) and
//!   single episodes by id
//! - **Display**: `HH:MM:SS` durations and pt-BR `d MMM yy` dates
//! - **Listing**: latest releases / all episodes split sharing one queue
//!
//! # Example
//!
//! ```ignore
//! use podcaster_catalog::{CatalogClient, CatalogConfig};
//! use podcaster_playback::PlaybackManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!     let listing = client.home_listing().await?;
//!
//!     let mut player = PlaybackManager::default();
//!     if let Some(index) = listing.all_index(0) {
//!         player.play_list(listing.playlist(), index)?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod format;
mod listing;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use format::{format_duration, format_published_at};
pub use listing::HomeListing;
pub use types::{ApiEpisode, ApiFile, CatalogConfig, EpisodeSummary};
