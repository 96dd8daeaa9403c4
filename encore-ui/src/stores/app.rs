//! Top-level application state store

use super::album_list::AlbumListState;
use super::artist_detail::ArtistDetailState;
use super::artist_list::ArtistListState;
use dioxus::prelude::*;

/// Top-level application state combining the per-view sub-states.
/// Components access fields via lensing: `state.album_list().songs()`.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Artist collection state
    pub artist_list: ArtistListState,
    /// Selected-artist state
    pub artist_detail: ArtistDetailState,
    /// Album and song state for the selected artist
    pub album_list: AlbumListState,
}
