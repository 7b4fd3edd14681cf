//! Text rendering of the home listing

use podcaster_catalog::{EpisodeSummary, HomeListing};

fn row(out: &mut String, index: usize, episode: &EpisodeSummary) {
    out.push_str(&format!(
        "{:>3}  {}\n     {} | {} | {}\n",
        index, episode.title, episode.members, episode.published_at, episode.duration_as_string
    ));
}

/// Render both sections, numbering rows by their queue index
pub fn render_listing(listing: &HomeListing) -> String {
    let mut out = String::new();

    out.push_str("Últimos lançamentos\n");
    for (row_index, episode) in listing.latest.iter().enumerate() {
        if let Some(index) = listing.latest_index(row_index) {
            row(&mut out, index, episode);
        }
    }

    out.push_str("\nTodos episódios\n");
    for (row_index, episode) in listing.all.iter().enumerate() {
        if let Some(index) = listing.all_index(row_index) {
            row(&mut out, index, episode);
        }
    }

    out
}
