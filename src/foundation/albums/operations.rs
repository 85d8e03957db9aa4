use crate::foundation::albums::{Album, AlbumId};
use std::collections::HashMap;

/// Every album observed since the process started, keyed by id.
///
/// The set only grows: there is no way to remove an entry, so an id that has
/// been seen once is never reported again for the lifetime of the process.
#[derive(Debug, Default)]
pub struct KnownSet {
    albums: HashMap<AlbumId, Album>,
}

impl KnownSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a batch of albums without reporting any of them.
    ///
    /// Used for the initial snapshot. When the batch repeats an id, the first
    /// record is the one kept. Returns how many new ids were added.
    pub fn seed(&mut self, albums: Vec<Album>) -> usize {
        let before = self.albums.len();
        for album in albums {
            self.albums.entry(album.id.clone()).or_insert(album);
        }
        self.albums.len() - before
    }

    /// Admits a fresh snapshot and returns the albums whose id was not known.
    ///
    /// The returned albums keep the order the server sent them in. Each new
    /// album is inserted as soon as it is seen, so an id repeated inside the
    /// same batch is returned only once.
    pub fn admit(&mut self, albums: Vec<Album>) -> Vec<Album> {
        let mut added = Vec::new();
        for album in albums {
            if self.albums.contains_key(&album.id) {
                continue;
            }
            self.albums.insert(album.id.clone(), album.clone());
            added.push(album);
        }
        added
    }

    pub fn contains(&self, id: &AlbumId) -> bool {
        self.albums.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
