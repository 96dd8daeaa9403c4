//! Fetch failure message

use dioxus::prelude::*;

/// Renders a failed fetch with its reason
#[component]
pub fn ErrorDisplay(
    /// Lead-in naming the fetch that failed
    context: String,
    /// The failure reason
    message: String,
) -> Element {
    rsx! {
        p { class: "text-red-600", "{context}: {message}" }
    }
}
