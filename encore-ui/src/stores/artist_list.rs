//! Artist collection state store

use crate::display_types::Artist;
use dioxus::prelude::*;

/// State for the artist list view
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ArtistListState {
    /// Artists in server order
    pub artists: Vec<Artist>,
    /// Whether the collection fetch is in flight
    pub loading: bool,
    /// Error message if the collection fetch failed
    pub error: Option<String>,
    /// Sequence number of the newest collection fetch; a completing fetch
    /// that no longer matches is discarded
    pub fetch_seq: u64,
}

impl Default for ArtistListState {
    fn default() -> Self {
        Self {
            artists: Vec::new(),
            // the collection fetch starts on mount
            loading: true,
            error: None,
            fetch_seq: 0,
        }
    }
}
