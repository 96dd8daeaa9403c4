//! Selected-artist state store

use crate::display_types::Artist;
use dioxus::prelude::*;

/// State for the selected artist, fetched when a list row is clicked.
///
/// `artist.is_some()` is the "an artist is selected" predicate: it switches
/// the top level from the artist list to the album view.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ArtistDetailState {
    /// The selected artist's detail record
    pub artist: Option<Artist>,
    /// Whether the detail fetch is in flight
    pub loading: bool,
    /// Error message if the detail fetch failed
    pub error: Option<String>,
    /// Sequence number of the newest detail fetch
    pub fetch_seq: u64,
}
