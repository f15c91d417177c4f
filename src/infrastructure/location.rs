//! Address-bar location model.
//!
//! A [`Location`] is the path, the ordered query parameters, and the fragment
//! of a URL. Query parameters are decoded and re-encoded with the
//! `application/x-www-form-urlencoded` rules that browsers use for
//! `URLSearchParams`, so untouched parameters survive a round trip.

use std::fmt;
use url::form_urlencoded;

/// A parsed URL location.
///
/// # Examples
///
/// ```
/// use cartelera::infrastructure::Location;
///
/// let mut location = Location::parse("/peliculas?lang=es&page=2#top");
/// assert_eq!(location.get("page"), Some("2"));
///
/// location.set("page", "3");
/// assert_eq!(location.to_string(), "/peliculas?lang=es&page=3#top");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parses a location from `path?query#fragment` text.
    ///
    /// Every part is optional; `"?page=2"` is a location with an empty path.
    /// A leading `?` on the query is not part of any key.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (input, None),
        };

        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            path: path.to_string(),
            query: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            fragment,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets a query parameter.
    ///
    /// The first parameter named `key` takes the new value in place and any
    /// later parameters with the same name are removed. If there is none, the
    /// parameter is appended. Other parameters keep their order.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();

        match self.query.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.query[first].1 = value;
                let mut index = 0;
                self.query.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.query.push((key.to_string(), value)),
        }
    }

    /// Returns a copy with `key` set to `value`.
    #[must_use]
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(key, value);
        next
    }

    /// Serializes the query string without the leading `?`.
    #[must_use]
    pub fn search(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;

        let search = self.search();
        if !search.is_empty() {
            write!(f, "?{search}")?;
        }

        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }

        Ok(())
    }
}
