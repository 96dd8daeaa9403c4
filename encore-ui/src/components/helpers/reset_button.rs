//! Reset control returning to the artist list

use dioxus::prelude::*;

/// Always-visible button that clears the selection and reloads the artists
#[component]
pub fn ResetButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "mt-4 px-4 py-2 bg-gray-300 text-gray-800 rounded-md shadow-md hover:bg-gray-400",
            "data-testid": "reset-button",
            onclick: move |_| on_click.call(()),
            "Reset"
        }
    }
}
