mod artist_browser;

pub use artist_browser::ArtistBrowser;
