//! Display types for UI components
//!
//! Lightweight, client-side versions of the catalog entities, carrying only
//! the fields the views render. The api module in encore-web maps the wire
//! documents into these.

/// Artist display info
#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

/// Album display info
#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Song display info. `length` is server-provided display text and is
/// rendered verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub length: String,
}
