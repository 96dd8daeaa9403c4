//! Album view for the selected artist - the album list plus, once an album
//! is selected, the capped song section.

use crate::components::helpers::{ErrorDisplay, LoadingIndicator};
use crate::components::song_list::SongListView;
use crate::display_types::Album;
use crate::stores::album_list::{AlbumListState, AlbumListStateStoreExt};
use dioxus::prelude::*;

/// Album list view component
///
/// Accepts `ReadStore<AlbumListState>`. The album and song fetches render
/// through independent loading/error flags; the song section appears only
/// once an album is selected.
#[component]
pub fn AlbumListView(
    state: ReadStore<AlbumListState>,
    /// Called with the album id when an album row is clicked
    on_album_click: EventHandler<String>,
    /// Called when the "load more" control is clicked
    on_load_more: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let albums = state.albums().read().clone();
    let selected_album = state.selected_album().read().clone();

    // The song slice is a pure function of the whole sub-state.
    let read = state.read();
    let visible_songs = read.visible_songs().to_vec();
    let has_more = read.has_more_songs();
    let songs_loading = read.songs_loading;
    let songs_error = read.songs_error.clone();
    drop(read);

    let selected_id = selected_album.as_ref().map(|a| a.id.clone());

    rsx! {
        div { class: "mt-4",
            h2 { class: "text-2xl font-bold mb-4", "Albums:" }
            if loading {
                LoadingIndicator { message: "Loading albums...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { context: "Error fetching albums".to_string(), message: err }
            } else {
                ul { class: "divide-y divide-gray-200 rounded-xl",
                    for album in albums.iter() {
                        AlbumRow {
                            key: "{album.id}",
                            album: album.clone(),
                            selected: selected_id.as_deref() == Some(album.id.as_str()),
                            on_click: on_album_click,
                        }
                    }
                }
            }
            if selected_album.is_some() {
                SongListView {
                    songs: visible_songs,
                    has_more,
                    loading: songs_loading,
                    error: songs_error,
                    on_load_more,
                }
            }
        }
    }
}

/// Single album row; the selected album is highlighted
#[component]
fn AlbumRow(album: Album, selected: bool, on_click: EventHandler<String>) -> Element {
    let album_id = album.id.clone();
    let row_class = if selected {
        "py-2 cursor-pointer font-bold bg-gray-200"
    } else {
        "py-2 cursor-pointer font-bold"
    };
    rsx! {
        li {
            class: "{row_class}",
            onclick: move |_| on_click.call(album_id.clone()),
            "{album.title}"
            span { class: "flex font-semibold", "{album.description}" }
        }
    }
}
