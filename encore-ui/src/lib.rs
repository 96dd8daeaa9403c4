//! encore-ui - display types, state stores, and pure view components
//!
//! No data fetching happens here. encore-web owns the API layer and writes
//! into the stores; these components render from `ReadStore` props and
//! report interactions through `EventHandler` callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
