//! Inline loading indicator

use dioxus::prelude::*;

/// Plain-text line shown while a fetch is in flight
#[component]
pub fn LoadingIndicator(
    /// Message to display (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        p { class: "text-gray-600", "{message}" }
    }
}
