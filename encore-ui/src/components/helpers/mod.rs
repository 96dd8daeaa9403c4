//! Common helper UI components

mod error_display;
mod loading_indicator;
mod reset_button;

pub use error_display::ErrorDisplay;
pub use loading_indicator::LoadingIndicator;
pub use reset_button::ResetButton;
