pub mod api_client;
pub mod configuration;
pub mod foundation;
pub mod process;
pub mod startup;

pub use api_client::{AlbumSource, FetchError, HttpAlbumSource};
pub use configuration::*;
pub use foundation::albums::*;
pub use process::{Monitor, DEFAULT_POLL_INTERVAL};
