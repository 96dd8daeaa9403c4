//! Album and song state for the selected artist

use crate::display_types::{Album, Song};
use dioxus::prelude::*;

/// Number of songs revealed per "load more" step.
pub const SONG_PAGE_SIZE: usize = 10;

/// State for the album view: the artist's albums, the selected album, and
/// the capped song listing. The album and song fetches keep independent
/// loading/error flags.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AlbumListState {
    /// Albums of the selected artist
    pub albums: Vec<Album>,
    /// Whether the album fetch is in flight
    pub loading: bool,
    /// Error message if the album fetch failed
    pub error: Option<String>,
    /// Sequence number of the newest album fetch
    pub albums_seq: u64,

    /// The selected album, if any. The song section renders only once this
    /// is set.
    pub selected_album: Option<Album>,

    /// Songs of the selected artist, in server order. The server keys the
    /// song collection by artist, not by album.
    pub songs: Vec<Song>,
    /// Whether the song fetch is in flight
    pub songs_loading: bool,
    /// Error message if the song fetch failed
    pub songs_error: Option<String>,
    /// Sequence number of the newest song fetch
    pub songs_seq: u64,

    /// How many songs are revealed; resets to one page on album selection
    pub display_limit: usize,
}

impl Default for AlbumListState {
    fn default() -> Self {
        Self {
            albums: Vec::new(),
            // the album fetch starts as soon as the view mounts
            loading: true,
            error: None,
            albums_seq: 0,
            selected_album: None,
            songs: Vec::new(),
            songs_loading: false,
            songs_error: None,
            songs_seq: 0,
            display_limit: SONG_PAGE_SIZE,
        }
    }
}

impl AlbumListState {
    /// The revealed slice of the song collection: the first `display_limit`
    /// songs in server order.
    pub fn visible_songs(&self) -> &[Song] {
        &self.songs[..self.songs.len().min(self.display_limit)]
    }

    /// Whether songs remain beyond the current limit. The "load more"
    /// control renders only while this holds.
    pub fn has_more_songs(&self) -> bool {
        self.songs.len() > self.display_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| Song {
                id: format!("s{i}"),
                title: format!("Song {i}"),
                length: "3:21".to_string(),
            })
            .collect()
    }

    fn state_with(total: usize, limit: usize) -> AlbumListState {
        AlbumListState {
            songs: songs(total),
            display_limit: limit,
            ..Default::default()
        }
    }

    #[test]
    fn visible_songs_capped_at_display_limit() {
        let state = state_with(25, 10);
        assert_eq!(state.visible_songs().len(), 10);
        assert_eq!(state.visible_songs()[0].id, "s0");
        assert_eq!(state.visible_songs()[9].id, "s9");
    }

    #[test]
    fn visible_songs_capped_at_total_when_limit_exceeds_it() {
        let state = state_with(7, 10);
        assert_eq!(state.visible_songs().len(), 7);
    }

    #[test]
    fn empty_collection_shows_nothing_and_no_control() {
        let state = state_with(0, 10);
        assert!(state.visible_songs().is_empty());
        assert!(!state.has_more_songs());
    }

    #[test]
    fn control_shown_only_while_songs_remain() {
        assert!(state_with(25, 10).has_more_songs());
        assert!(state_with(25, 20).has_more_songs());
        assert!(!state_with(25, 25).has_more_songs());
        assert!(!state_with(25, 30).has_more_songs());
        assert!(!state_with(10, 10).has_more_songs());
    }

    #[test]
    fn load_more_walkthrough_over_25_songs() {
        // 25 songs: 10 visible, then 20, then all 25 with no control left.
        let mut state = state_with(25, SONG_PAGE_SIZE);
        assert_eq!(state.visible_songs().len(), 10);
        assert!(state.has_more_songs());

        state.display_limit += SONG_PAGE_SIZE;
        assert_eq!(state.visible_songs().len(), 20);
        assert!(state.has_more_songs());

        state.display_limit += SONG_PAGE_SIZE;
        assert_eq!(state.visible_songs().len(), 25);
        assert!(!state.has_more_songs());
    }

    #[test]
    fn display_limit_uncapped_internally() {
        let mut state = state_with(5, SONG_PAGE_SIZE);
        state.display_limit += 3 * SONG_PAGE_SIZE;
        assert_eq!(state.display_limit, 40);
        assert_eq!(state.visible_songs().len(), 5);
    }

    #[test]
    fn default_starts_loading_albums_with_one_page_window() {
        let state = AlbumListState::default();
        assert!(state.loading);
        assert!(!state.songs_loading);
        assert!(state.selected_album.is_none());
        assert_eq!(state.display_limit, SONG_PAGE_SIZE);
    }

    #[test]
    fn visible_songs_preserves_server_order() {
        let state = state_with(3, 10);
        let titles: Vec<_> = state.visible_songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Song 0", "Song 1", "Song 2"]);
    }
}
