//! This module runs the poll-and-diff loop that reports newly added albums.
//!
//! A [`Monitor`] owns everything the loop needs: the album source, the set of
//! albums already seen and the pause between polls.

use crate::api_client::AlbumSource;
use crate::foundation::albums::{Album, KnownSet};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pause between polls when nothing else is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub struct Monitor<S: AlbumSource> {
    source: S,
    known: KnownSet,
    interval: Duration,
}

impl<S: AlbumSource> Monitor<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source,
            known: KnownSet::new(),
            interval,
        }
    }

    pub fn known(&self) -> &KnownSet {
        &self.known
    }

    /// Fetches the current collection, turning any failure into an empty list.
    ///
    /// A failed poll prints a diagnostic and is otherwise ignored; the next
    /// scheduled poll runs as usual.
    pub async fn fetch(&self) -> Vec<Album> {
        match self.source.fetch_albums().await {
            Ok(albums) => albums,
            Err(e) => {
                eprintln!(
                    "\x1b[31mError fetching albums from the server: {}\x1b[0m",
                    e
                );
                warn!(error = %e, "album fetch failed");
                Vec::new()
            }
        }
    }

    /// Takes the initial snapshot. Nothing in it is reported as new.
    pub async fn seed(&mut self) -> usize {
        let albums = self.fetch().await;
        let seeded = self.known.seed(albums);
        info!(seeded, "initial album snapshot loaded");
        seeded
    }

    /// Runs one fetch-and-diff iteration and reports every album not seen before.
    pub async fn poll_cycle(&mut self) -> Vec<Album> {
        let albums = self.fetch().await;
        let added = self.known.admit(albums);

        for album in &added {
            println!("\x1b[32mNew album added: {}\x1b[0m", album);
            info!(id = %album.id, "new album detected");
        }

        debug!(
            new = added.len(),
            known = self.known.len(),
            "poll cycle finished"
        );
        added
    }

    /// Seeds the known albums and then polls forever.
    ///
    /// There is no exit path: the loop only stops when the process does.
    pub async fn run(mut self) {
        self.seed().await;

        loop {
            tokio::time::sleep(self.interval).await;
            self.poll_cycle().await;
        }
    }
}
