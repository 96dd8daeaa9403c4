//! REST client for the music catalog API
//!
//! Wire types mirror the server's Mongo-style documents (`_id` keys) and
//! are mapped into the display types the views consume. All fetches return
//! `Result<_, String>` with a human-readable reason for the error displays.

use encore_ui::display_types::{Album, Artist, Song};
use serde::Deserialize;

/// Base path of the catalog API, same-origin.
const API_BASE: &str = "/api";

#[derive(Deserialize)]
struct ApiArtist {
    #[serde(rename = "_id")]
    id: String,
    name: String,
}

/// Single-artist detail document, with the artist's albums embedded.
#[derive(Deserialize)]
struct ApiArtistDetail {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    albums: Vec<ApiAlbum>,
}

#[derive(Deserialize)]
struct ApiAlbum {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct ApiSong {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    length: String,
}

fn artist_from_wire(a: ApiArtist) -> Artist {
    Artist {
        id: a.id,
        name: a.name,
    }
}

fn album_from_wire(a: ApiAlbum) -> Album {
    Album {
        id: a.id,
        title: a.title,
        description: a.description,
    }
}

fn song_from_wire(s: ApiSong) -> Song {
    Song {
        id: s.id,
        title: s.title,
        length: s.length,
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }
    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

/// Fetch the full artist collection.
pub async fn fetch_artists() -> Result<Vec<Artist>, String> {
    let wire: Vec<ApiArtist> = get_json(&format!("{API_BASE}/artists")).await?;
    Ok(wire.into_iter().map(artist_from_wire).collect())
}

/// Fetch a single artist's detail record, with their albums.
pub async fn fetch_artist(artist_id: &str) -> Result<(Artist, Vec<Album>), String> {
    let wire: ApiArtistDetail = get_json(&format!("{API_BASE}/artists/{artist_id}")).await?;
    let albums = wire.albums.into_iter().map(album_from_wire).collect();
    Ok((
        Artist {
            id: wire.id,
            name: wire.name,
        },
        albums,
    ))
}

/// Fetch the artist's song collection. The server keys songs by artist, not
/// by album; callers get the same set whichever album is selected.
pub async fn fetch_songs(artist_id: &str) -> Result<Vec<Song>, String> {
    let wire: Vec<ApiSong> = get_json(&format!("{API_BASE}/artists/{artist_id}/songs")).await?;
    Ok(wire.into_iter().map(song_from_wire).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_artist_collection_in_server_order() {
        let body = r#"[
            {"_id": "a1", "name": "The Kinks"},
            {"_id": "a2", "name": "Nina Simone"},
            {"_id": "a3", "name": "Can"}
        ]"#;
        let wire: Vec<ApiArtist> = serde_json::from_str(body).unwrap();
        let artists: Vec<_> = wire.into_iter().map(artist_from_wire).collect();
        assert_eq!(artists.len(), 3);
        assert_eq!(artists[0].id, "a1");
        assert_eq!(artists[0].name, "The Kinks");
        assert_eq!(artists[2].name, "Can");
    }

    #[test]
    fn parses_artist_detail_with_albums() {
        let body = r#"{
            "_id": "a1",
            "name": "The Kinks",
            "albums": [
                {"_id": "al1", "title": "Arthur", "description": "1969 concept album"},
                {"_id": "al2", "title": "Muswell Hillbillies", "description": "1971"}
            ]
        }"#;
        let wire: ApiArtistDetail = serde_json::from_str(body).unwrap();
        assert_eq!(wire.id, "a1");
        assert_eq!(wire.name, "The Kinks");
        let albums: Vec<_> = wire.albums.into_iter().map(album_from_wire).collect();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].title, "Arthur");
        assert_eq!(albums[0].description, "1969 concept album");
    }

    #[test]
    fn artist_detail_tolerates_missing_albums_key() {
        let wire: ApiArtistDetail =
            serde_json::from_str(r#"{"_id": "a1", "name": "Solo"}"#).unwrap();
        assert!(wire.albums.is_empty());
    }

    #[test]
    fn parses_songs_with_length_passed_through() {
        let body = r#"[
            {"_id": "s1", "title": "Waterloo Sunset", "length": "3:15"},
            {"_id": "s2", "title": "Days"}
        ]"#;
        let wire: Vec<ApiSong> = serde_json::from_str(body).unwrap();
        let songs: Vec<_> = wire.into_iter().map(song_from_wire).collect();
        assert_eq!(songs[0].length, "3:15");
        assert_eq!(songs[1].title, "Days");
        assert_eq!(songs[1].length, "");
    }

    #[test]
    fn unknown_server_fields_are_ignored() {
        let body = r#"{"_id": "a1", "name": "Can", "__v": 0, "createdAt": "2024-01-01"}"#;
        let wire: ApiArtist = serde_json::from_str(body).unwrap();
        assert_eq!(artist_from_wire(wire).name, "Can");
    }
}
