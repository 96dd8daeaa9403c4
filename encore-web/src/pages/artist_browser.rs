//! Artist browser page - owns the store and wires fetches to the views

use crate::app_service;
use dioxus::prelude::*;
use encore_ui::stores::{
    AlbumListStateStoreExt, AppState, AppStateStoreExt, ArtistDetailStateStoreExt,
};
use encore_ui::{AlbumListView, ArtistListView, ErrorDisplay, LoadingIndicator, ResetButton};

/// Top-level page: the artist list, or the album view once an artist is
/// selected. The reset control renders in every state.
#[component]
pub fn ArtistBrowser() -> Element {
    let state = use_store(AppState::default);

    // Initial artist collection fetch.
    use_future(move || app_service::load_artists(state));

    // Re-fetch the albums whenever the selected artist changes.
    use_effect(move || {
        let artist_id = state
            .artist_detail()
            .artist()
            .read()
            .as_ref()
            .map(|a| a.id.clone());
        if let Some(artist_id) = artist_id {
            spawn(app_service::load_albums(state, artist_id));
        }
    });

    // The song fetch is keyed by the selected album and the artist id;
    // either changing re-runs it. The endpoint itself varies only by
    // artist, so an album switch re-fetches the same set.
    use_effect(move || {
        let album_selected = state.album_list().selected_album().read().is_some();
        let artist_id = state
            .artist_detail()
            .artist()
            .read()
            .as_ref()
            .map(|a| a.id.clone());
        if album_selected {
            if let Some(artist_id) = artist_id {
                spawn(app_service::load_songs(state, artist_id));
            }
        }
    });

    let detail_loading = *state.artist_detail().loading().read();
    let detail_error = state.artist_detail().error().read().clone();
    let selected_artist = state.artist_detail().artist().read().clone();

    rsx! {
        div { class: "max-w-2xl mx-auto p-4",
            if detail_loading {
                LoadingIndicator { message: "Loading artist...".to_string() }
            } else if let Some(err) = detail_error {
                ErrorDisplay {
                    context: "Error fetching artist details".to_string(),
                    message: err,
                }
            } else if let Some(artist) = selected_artist {
                div { class: "border-b-2 pb-4 mb-4 text-center",
                    h2 { class: "text-2xl font-bold mb-2 bg-gray-300 rounded-xl py-2 px-4 inline-block",
                        "Artist: {artist.name}"
                    }
                    AlbumListView {
                        state: state.album_list(),
                        on_album_click: move |album_id: String| {
                            app_service::select_album(state, &album_id);
                        },
                        on_load_more: move |_| {
                            app_service::load_more_songs(state);
                        },
                    }
                }
            } else {
                ArtistListView {
                    state: state.artist_list(),
                    on_artist_click: move |artist_id: String| {
                        spawn(app_service::load_artist_detail(state, artist_id));
                    },
                }
            }
            ResetButton { on_click: move |_| app_service::reset(state) }
        }
    }
}
