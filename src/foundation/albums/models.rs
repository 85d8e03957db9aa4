use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Placeholder shown when the server omits a display field.
pub const UNKNOWN_FIELD: &str = "unknown";

/// Identifier of an album as the server sends it.
///
/// Servers use either integers or strings, so both are accepted. The two
/// forms never compare equal: `1` and `"1"` are different albums.
/// `Unsigned` only holds values above `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum AlbumId {
    Number(i64),
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlbumId::Number(n) => write!(f, "{}", n),
            AlbumId::Unsigned(n) => write!(f, "{}", n),
            AlbumId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for AlbumId {
    fn from(id: i64) -> Self {
        AlbumId::Number(id)
    }
}

impl From<i32> for AlbumId {
    fn from(id: i32) -> Self {
        AlbumId::Number(id.into())
    }
}

impl From<&str> for AlbumId {
    fn from(id: &str) -> Self {
        AlbumId::Text(id.to_string())
    }
}

/// A single album record from the remote collection.
///
/// Only the fields needed for reporting are kept; anything else in the
/// server's object is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    #[serde(default, deserialize_with = "display_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "display_field")]
    pub band: Option<String>,
}

/// Accepts any JSON value for a display field. Strings are kept as-is, null
/// means absent, and anything else is rendered as JSON text.
fn display_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl Album {
    pub fn new(id: impl Into<AlbumId>, title: &str, band: &str) -> Self {
        Self {
            id: id.into(),
            title: Some(title.to_string()),
            band: Some(band.to_string()),
        }
    }

    pub fn title_or_unknown(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_FIELD)
    }

    pub fn band_or_unknown(&self) -> &str {
        self.band.as_deref().unwrap_or(UNKNOWN_FIELD)
    }
}

/// Renders as `title - band`, the form used in notifications.
impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.title_or_unknown(), self.band_or_unknown())
    }
}
