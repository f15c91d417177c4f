//! Catalog document and media entry model.
//!
//! This module defines the shape of the static JSON catalog: a top-level
//! document with an `entries` array of [`MediaEntry`] records. Entries are kept
//! in document order; a malformed entry or field never rejects the document.

use crate::domain::error::{CarteleraError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Program type tag of the entries this browser lists.
pub const MOVIE_PROGRAM_TYPE: &str = "movie";

/// Image slot holding the poster shown on cards and in the detail popup.
pub const POSTER_ART_SLOT: &str = "Poster Art";

/// One image variant of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
}

/// One catalog record as returned by the data source.
///
/// `title` doubles as the display label. It is not guaranteed to be unique.
/// `release_year` is optional because the source does not guarantee it; an
/// entry without a year never matches a year filter.
///
/// Fields are read leniently. A field of an unexpected type falls back to its
/// empty value instead of rejecting the document: a `releaseYear` that is not
/// an integral number becomes `None`, a non-object image slot is dropped.
///
/// # JSON Format
///
/// ```json
/// {
///   "title": "Wolf Creek",
///   "description": "Stranded backpackers...",
///   "programType": "movie",
///   "images": { "Poster Art": { "url": "https://...", "width": 1000, "height": 1500 } },
///   "releaseYear": 2005
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub program_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_year")]
    pub release_year: Option<i64>,

    #[serde(default, deserialize_with = "lenient_images")]
    pub images: BTreeMap<String, Image>,
}

/// Reads an integral JSON number; `1995.0` counts, `"1995"` and `1995.5` do not.
#[allow(clippy::cast_possible_truncation)]
fn integral(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    (n.fract() == 0.0 && n.abs() < 9.0e15).then(|| n as i64)
}

fn lenient_year<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integral(&Value::deserialize(deserializer)?))
}

fn lenient_dimension<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integral(&Value::deserialize(deserializer)?).and_then(|n| u32::try_from(n).ok()))
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_images<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Image>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(slots) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(slots
        .into_iter()
        .filter(|(_, image)| image.is_object())
        .filter_map(|(slot, image)| serde_json::from_value(image).ok().map(|image| (slot, image)))
        .collect())
}

/// Entries that are not JSON objects are kept as empty records so the rest of
/// the document still loads.
fn lenient_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<MediaEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

impl MediaEntry {
    /// Creates a movie entry with no description and no images.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartelera::domain::MediaEntry;
    ///
    /// let entry = MediaEntry::movie("Alien", 1979);
    /// assert!(entry.is_movie());
    /// assert_eq!(entry.release_year, Some(1979));
    /// assert!(entry.poster_url().is_none());
    /// ```
    #[must_use]
    pub fn movie(title: impl Into<String>, release_year: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            program_type: MOVIE_PROGRAM_TYPE.to_string(),
            release_year: Some(release_year),
            images: BTreeMap::new(),
        }
    }

    /// Creates an entry tagged as a series.
    #[must_use]
    pub fn series(title: impl Into<String>, release_year: i64) -> Self {
        Self {
            program_type: "series".to_string(),
            ..Self::movie(title, release_year)
        }
    }

    /// Attaches a poster image, replacing any existing one.
    #[must_use]
    pub fn with_poster(mut self, url: impl Into<String>) -> Self {
        self.images.insert(
            POSTER_ART_SLOT.to_string(),
            Image {
                url: url.into(),
                width: None,
                height: None,
            },
        );
        self
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_movie(&self) -> bool {
        self.program_type == MOVIE_PROGRAM_TYPE
    }

    /// Returns the URL of the `"Poster Art"` image, if the slot exists.
    #[must_use]
    pub fn poster_url(&self) -> Option<&str> {
        self.images.get(POSTER_ART_SLOT).map(|image| image.url.as_str())
    }
}

/// The parsed catalog document.
///
/// Only `entries` is consumed. `total` is carried because the published
/// sample documents include it; any other top-level field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(deserialize_with = "lenient_entries")]
    pub entries: Vec<MediaEntry>,
}

impl Catalog {
    /// Parses a catalog document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CarteleraError::ParseFailed`] if the text is not JSON or has no
    /// `entries` array.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parses a catalog document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CarteleraError::ParseFailed`] if the bytes are not UTF-8 JSON
    /// or have no `entries` array.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| CarteleraError::ParseFailed(format!("invalid catalog document: {e}")))
    }
}
