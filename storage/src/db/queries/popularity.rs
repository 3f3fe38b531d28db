//! Aggregate queries over like counts.
use crate::db::Catalog;

/// The first item with the strictly greatest positive like count.
///
/// Later items only win by having more likes, so ties go to whichever was created first.
fn most_liked<'a, T>(items: &'a [T], likes: impl Fn(&T) -> u64) -> Option<&'a T> {
    let mut best = None;
    let mut max = 0;
    for item in items {
        let count = likes(item);
        if count > max {
            max = count;
            best = Some(item);
        }
    }
    best
}

impl Catalog {
    /// Name of the artist with the most likes, or an empty string if no artist has any.
    #[must_use]
    pub fn most_popular_artist(&self) -> String {
        most_liked(&self.artists, |artist| artist.likes)
            .map(|artist| artist.name.to_string())
            .unwrap_or_default()
    }

    /// Title of the song with the most likes, or an empty string if no song has any.
    #[must_use]
    pub fn most_popular_song(&self) -> String {
        most_liked(&self.songs, |song| song.likes)
            .map(|song| song.title.to_string())
            .unwrap_or_default()
    }
}
