//! Store-updating fetch orchestration
//!
//! Async `load_*` functions fetch from the API and write the results into
//! `Store<AppState>` through lenses. Each fetch bumps its store's sequence
//! number before starting and re-checks it after the response arrives, so a
//! superseded fetch never overwrites newer state. Failures surface through
//! the owning triple's error flag and are logged.

use crate::api;
use dioxus::prelude::*;
use encore_ui::stores::album_list::SONG_PAGE_SIZE;
use encore_ui::stores::{
    AlbumListStateStoreExt, AppState, AppStateStoreExt, ArtistDetailStateStoreExt,
    ArtistListStateStoreExt,
};
use tracing::error;

/// Load the artist collection into the store.
pub async fn load_artists(state: Store<AppState>) {
    let seq = *state.artist_list().fetch_seq().read() + 1;
    state.artist_list().fetch_seq().set(seq);
    state.artist_list().loading().set(true);
    state.artist_list().error().set(None);

    let result = api::fetch_artists().await;
    if *state.artist_list().fetch_seq().read() != seq {
        return;
    }
    match result {
        Ok(artists) => {
            state.artist_list().artists().set(artists);
        }
        Err(e) => {
            error!("Error fetching artists: {e}");
            state.artist_list().error().set(Some(e));
        }
    }
    state.artist_list().loading().set(false);
}

/// Fetch the clicked artist's detail record and store it as the selection.
///
/// The detail fetch keeps its own triple; the album view re-fetches the
/// album list itself once the selection lands.
pub async fn load_artist_detail(state: Store<AppState>, artist_id: String) {
    let seq = *state.artist_detail().fetch_seq().read() + 1;
    state.artist_detail().fetch_seq().set(seq);
    state.artist_detail().loading().set(true);
    state.artist_detail().error().set(None);

    let result = api::fetch_artist(&artist_id).await;
    if *state.artist_detail().fetch_seq().read() != seq {
        return;
    }
    match result {
        Ok((artist, _albums)) => {
            state.artist_detail().artist().set(Some(artist));
        }
        Err(e) => {
            error!("Error fetching artist details: {e}");
            state.artist_detail().error().set(Some(e));
        }
    }
    state.artist_detail().loading().set(false);
}

/// Load the selected artist's albums. Runs whenever the artist id changes.
pub async fn load_albums(state: Store<AppState>, artist_id: String) {
    let seq = *state.album_list().albums_seq().read() + 1;
    state.album_list().albums_seq().set(seq);
    state.album_list().loading().set(true);
    state.album_list().error().set(None);

    let result = api::fetch_artist(&artist_id).await;
    if *state.album_list().albums_seq().read() != seq {
        return;
    }
    match result {
        Ok((_artist, albums)) => {
            state.album_list().albums().set(albums);
        }
        Err(e) => {
            error!("Error fetching albums: {e}");
            state.album_list().error().set(Some(e));
        }
    }
    state.album_list().loading().set(false);
}

/// Load the selected artist's songs. The endpoint is keyed by artist only;
/// selecting a different album under the same artist re-fetches the same
/// set.
pub async fn load_songs(state: Store<AppState>, artist_id: String) {
    let seq = *state.album_list().songs_seq().read() + 1;
    state.album_list().songs_seq().set(seq);
    state.album_list().songs_loading().set(true);
    state.album_list().songs_error().set(None);

    let result = api::fetch_songs(&artist_id).await;
    if *state.album_list().songs_seq().read() != seq {
        return;
    }
    match result {
        Ok(songs) => {
            state.album_list().songs().set(songs);
        }
        Err(e) => {
            error!("Error fetching songs: {e}");
            state.album_list().songs_error().set(Some(e));
        }
    }
    state.album_list().songs_loading().set(false);
}

/// Select an album and reset the song window to the first page. Resets the
/// window even when the clicked album is already selected.
pub fn select_album(state: Store<AppState>, album_id: &str) {
    let album = state
        .album_list()
        .albums()
        .read()
        .iter()
        .find(|a| a.id == album_id)
        .cloned();
    if let Some(album) = album {
        state.album_list().selected_album().set(Some(album));
        state.album_list().display_limit().set(SONG_PAGE_SIZE);
    }
}

/// Reveal the next page of songs. The limit grows without an internal cap;
/// rendering clamps to the collection length.
pub fn load_more_songs(state: Store<AppState>) {
    let limit = *state.album_list().display_limit().read();
    state.album_list().display_limit().set(limit + SONG_PAGE_SIZE);
}

/// Clear the selection, drop all album/song state, and reload the artist
/// collection.
///
/// The sequence fields are bumped rather than zeroed: a fetch that was in
/// flight when reset was pressed must never match a sequence issued
/// afterwards.
pub fn reset(state: Store<AppState>) {
    let next_detail_seq = *state.artist_detail().fetch_seq().read() + 1;
    state.artist_detail().fetch_seq().set(next_detail_seq);
    state.artist_detail().artist().set(None);
    state.artist_detail().loading().set(false);
    state.artist_detail().error().set(None);

    let next_albums_seq = *state.album_list().albums_seq().read() + 1;
    state.album_list().albums_seq().set(next_albums_seq);
    let next_songs_seq = *state.album_list().songs_seq().read() + 1;
    state.album_list().songs_seq().set(next_songs_seq);
    state.album_list().albums().set(Vec::new());
    state.album_list().loading().set(true);
    state.album_list().error().set(None);
    state.album_list().selected_album().set(None);
    state.album_list().songs().set(Vec::new());
    state.album_list().songs_loading().set(false);
    state.album_list().songs_error().set(None);
    state.album_list().display_limit().set(SONG_PAGE_SIZE);

    spawn(load_artists(state));
}
