//! This module retrieves the album collection from the remote server.
//!
//! The [`AlbumSource`] trait is the seam between the monitor and the network,
//! and [`HttpAlbumSource`] is the implementation backed by a single
//! long-lived HTTP client.
use crate::api_client::FetchError;
use crate::foundation::albums::Album;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Something that can produce the current album collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumSource: Send + Sync {
    async fn fetch_albums(&self) -> Result<Vec<Album>, FetchError>;
}

/// Fetches albums with a plain GET request against a fixed URL.
pub struct HttpAlbumSource {
    client: Client,
    url: String,
}

impl HttpAlbumSource {
    /// Builds the source and its HTTP client.
    ///
    /// The client is kept for the whole lifetime of the source so that
    /// connections are reused between polls.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use albumwatch::{AlbumSource, HttpAlbumSource};
    /// use std::time::Duration;
    ///
    /// async fn example() {
    ///     let source = HttpAlbumSource::new("http://localhost:8000/albums", Duration::from_secs(30))
    ///         .expect("client");
    ///
    ///     match source.fetch_albums().await {
    ///         Ok(albums) => println!("{} albums on the server", albums.len()),
    ///         Err(e) => eprintln!("Error: {}", e),
    ///     }
    /// }
    /// ```
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AlbumSource for HttpAlbumSource {
    async fn fetch_albums(&self) -> Result<Vec<Album>, FetchError> {
        debug!(url = %self.url, "fetching albums");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let records: Vec<Value> = serde_json::from_str(&body)?;

        Ok(decode_albums(records))
    }
}

/// Decodes each record on its own, dropping the ones that cannot be decoded.
///
/// Display fields never reject a record, so in practice only a missing or
/// unusable id (or a record that is not an object) leads to a skip. Those are
/// logged and skipped instead of failing the whole snapshot.
fn decode_albums(records: Vec<Value>) -> Vec<Album> {
    let total = records.len();

    let albums: Vec<Album> = records
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, record)| match serde_json::from_value::<Album>(record) {
                Ok(album) => Some(album),
                Err(e) => {
                    warn!(index, error = %e, "skipping album record that could not be decoded");
                    None
                }
            },
        )
        .collect();

    debug!(total, decoded = albums.len(), "decoded album records");
    albums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::albums::AlbumId;
    use serde_json::json;

    #[test]
    fn test_decode_albums_keeps_server_order() {
        let records = vec![
            json!({ "id": 2, "title": "B", "band": "Y" }),
            json!({ "id": 1, "title": "A", "band": "X" }),
        ];

        let albums = decode_albums(records);

        assert_eq!(
            albums,
            vec![Album::new(2, "B", "Y"), Album::new(1, "A", "X")]
        );
    }

    #[test]
    fn test_decode_albums_skips_records_without_id() {
        let records = vec![
            json!({ "title": "No id", "band": "X" }),
            json!({ "id": null, "title": "Null id", "band": "X" }),
            json!("not an object"),
            json!({ "id": "k-1", "band": "Y" }),
        ];

        let albums = decode_albums(records);

        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].id, AlbumId::from("k-1"));
        assert_eq!(albums[0].title, None);
    }

    #[test]
    fn test_decode_albums_keeps_records_with_odd_display_fields() {
        let records = vec![
            json!({ "id": 5, "title": 1999, "band": "Prince" }),
            json!({ "id": 6, "title": "Ok", "band": ["A", "B"] }),
            json!({ "id": 9223372036854775808u64, "title": "Big", "band": { "name": "Z" } }),
        ];

        let albums = decode_albums(records);

        assert_eq!(albums.len(), 3);
        assert_eq!(albums[0].to_string(), "1999 - Prince");
        assert_eq!(albums[1].to_string(), r#"Ok - ["A","B"]"#);
        assert_eq!(albums[2].id, AlbumId::Unsigned(9223372036854775808));
    }

    #[test]
    fn test_new_keeps_url() {
        let source =
            HttpAlbumSource::new("http://localhost:9/albums", Duration::from_secs(1)).unwrap();
        assert_eq!(source.url(), "http://localhost:9/albums");
    }
}
