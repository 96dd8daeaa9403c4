//! Artist list view - pure rendering, no data fetching

use crate::components::helpers::{ErrorDisplay, LoadingIndicator};
use crate::display_types::Artist;
use crate::stores::artist_list::{ArtistListState, ArtistListStateStoreExt};
use dioxus::prelude::*;

/// Artist list view component
///
/// Accepts `ReadStore<ArtistListState>` and lenses into the fields it needs.
/// While the collection fetch is pending only the indicator renders; a
/// failed fetch renders its reason and no list.
#[component]
pub fn ArtistListView(
    state: ReadStore<ArtistListState>,
    /// Called with the artist id when a row is clicked
    on_artist_click: EventHandler<String>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let artists = state.artists().read().clone();

    rsx! {
        h1 { class: "text-3xl font-bold mb-4", "Artists" }
        if loading {
            LoadingIndicator {}
        } else if let Some(err) = error {
            ErrorDisplay { context: "Error fetching data".to_string(), message: err }
        } else {
            ul { class: "divide-y divide-gray-200",
                for artist in artists.iter() {
                    ArtistRow {
                        key: "{artist.id}",
                        artist: artist.clone(),
                        on_click: on_artist_click,
                    }
                }
            }
        }
    }
}

/// Single artist row
#[component]
fn ArtistRow(artist: Artist, on_click: EventHandler<String>) -> Element {
    let artist_id = artist.id.clone();
    rsx! {
        li {
            class: "py-4 cursor-pointer hover:bg-gray-100",
            onclick: move |_| on_click.call(artist_id.clone()),
            h2 { class: "text-xl font-bold", "{artist.name}" }
        }
    }
}
