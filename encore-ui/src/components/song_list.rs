//! Song section for the selected album

use crate::components::helpers::{ErrorDisplay, LoadingIndicator};
use crate::display_types::Song;
use dioxus::prelude::*;

/// Capped song listing with a "load more" control while songs remain.
///
/// Receives the already-sliced visible songs; the parent computes the slice
/// from its state so this component stays a plain renderer.
#[component]
pub fn SongListView(
    /// The revealed slice of the song collection, in server order
    songs: Vec<Song>,
    /// Whether songs remain beyond the revealed slice
    has_more: bool,
    loading: bool,
    error: Option<String>,
    on_load_more: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mt-4",
            h2 { class: "text-2xl font-bold mb-4", "Songs:" }
            if loading {
                LoadingIndicator { message: "Loading songs...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { context: "Error fetching songs".to_string(), message: err }
            } else {
                ul { class: "divide-y divide-gray-200",
                    for song in songs.iter() {
                        SongRow { key: "{song.id}", song: song.clone() }
                    }
                }
                if has_more {
                    button {
                        class: "mt-4 px-4 py-2 bg-blue-500 text-white rounded-md shadow-md hover:bg-blue-600",
                        "data-testid": "load-more",
                        onclick: move |_| on_load_more.call(()),
                        "Load more songs"
                    }
                }
            }
        }
    }
}

/// Single song row: title and length
#[component]
fn SongRow(song: Song) -> Element {
    rsx! {
        li { class: "py-2",
            span { class: "font-semibold", "{song.title}" }
            " - {song.length}"
        }
    }
}
