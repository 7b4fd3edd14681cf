//! Home page listing: latest releases followed by everything else.

use crate::types::EpisodeSummary;
use podcaster_playback::Episode;
use std::sync::Arc;

/// Episodes split into the two home page sections.
///
/// Both sections play from one shared queue, latest releases first, so a
/// row in the "all episodes" table starts playback at its row index offset
/// by the number of latest releases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeListing {
    pub latest: Vec<EpisodeSummary>,
    pub all: Vec<EpisodeSummary>,
}

impl HomeListing {
    /// Split newest-first episodes after the first `latest_count`.
    pub fn split(mut episodes: Vec<EpisodeSummary>, latest_count: usize) -> Self {
        let at = latest_count.min(episodes.len());
        let all = episodes.split_off(at);
        Self {
            latest: episodes,
            all,
        }
    }

    /// Queue for the player: latest releases then all episodes.
    pub fn playlist(&self) -> Vec<Arc<Episode>> {
        self.latest
            .iter()
            .chain(&self.all)
            .map(|summary| Arc::new(summary.to_episode()))
            .collect()
    }

    /// Queue index of row `row` in the latest releases section.
    pub fn latest_index(&self, row: usize) -> Option<usize> {
        (row < self.latest.len()).then_some(row)
    }

    /// Queue index of row `row` in the all episodes table.
    pub fn all_index(&self, row: usize) -> Option<usize> {
        (row < self.all.len()).then_some(row + self.latest.len())
    }

    pub fn len(&self) -> usize {
        self.latest.len() + self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> EpisodeSummary {
        EpisodeSummary {
            id: id.to_string(),
            title: format!("Episode {}", id),
            members: "Rocketseat".to_string(),
            thumbnail: String::new(),
            published_at: "22 jan 21".to_string(),
            duration: 600,
            duration_as_string: "00:10:00".to_string(),
            url: format!("https://example.com/{}.m4a", id),
        }
    }

    fn listing(n: usize) -> HomeListing {
        HomeListing::split((0..n).map(|i| summary(&i.to_string())).collect(), 2)
    }

    #[test]
    fn split_after_latest_count() {
        let listing = listing(5);
        assert_eq!(listing.latest.len(), 2);
        assert_eq!(listing.all.len(), 3);
        assert_eq!(listing.all[0].id, "2");
    }

    #[test]
    fn split_with_fewer_episodes_than_latest_count() {
        let listing = listing(1);
        assert_eq!(listing.latest.len(), 1);
        assert!(listing.all.is_empty());
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn playlist_keeps_section_order() {
        let titles: Vec<String> = listing(4)
            .playlist()
            .iter()
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(
            titles,
            vec!["Episode 0", "Episode 1", "Episode 2", "Episode 3"]
        );
    }

    #[test]
    fn row_indices_map_into_playlist() {
        let listing = listing(5);

        assert_eq!(listing.latest_index(1), Some(1));
        assert_eq!(listing.latest_index(2), None);
        assert_eq!(listing.all_index(0), Some(2));
        assert_eq!(listing.all_index(2), Some(4));
        assert_eq!(listing.all_index(3), None);
    }

    #[test]
    fn empty_listing() {
        let listing = HomeListing::split(Vec::new(), 2);
        assert!(listing.is_empty());
        assert!(listing.playlist().is_empty());
        assert_eq!(listing.latest_index(0), None);
    }
}
