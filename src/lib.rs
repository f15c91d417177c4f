//! Cartelera: a terminal movie catalog browser.
//!
//! Cartelera loads a JSON catalog of media entries and shows the movies in
//! it as numbered cards, with:
//! - A free-text release-year filter
//! - A page-size selector (5, 10, or 20 per page)
//! - Pagination kept in sync with the `page` query parameter of the location
//! - A detail overlay for the selected movie
//! - Browser-style back/forward through visited locations

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal host (main.rs)                            │  ← Event loop, history
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and page/URL sync                 │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Sources     │   │ - Load thread │
//! │ - Theming     │   │ - Filter/sort │   │ - Trace ctx   │
//! │ - Components  │   │ - Paginate    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Location, history, paths (infrastructure/)       │
//! │  - Entries and errors (domain/)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotated JSON file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! An optional TOML file (`~/.config/cartelera/config.toml` by default), then
//! command-line flags on top:
//!
//! ```toml
//! catalog = "~/movies/catalog.json"
//! location = "/movies?page=2"
//! results_per_page = 10
//! title = "Movies"
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use cartelera::{handle_event, initialize, Config, Event};
//! use cartelera::infrastructure::Location;
//! use cartelera::worker::WorkerResponse;
//! use cartelera::domain::MediaEntry;
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, &Event::Mount { location: Location::parse("/movies?page=1") })?;
//! handle_event(
//!     &mut state,
//!     &Event::WorkerResponse(WorkerResponse::CatalogLoaded {
//!         entries: vec![MediaEntry::movie("B", 2000), MediaEntry::movie("A", 2001)],
//!     }),
//! )?;
//!
//! let titles: Vec<&str> = state.view.visible.iter().map(|e| e.title.as_str()).collect();
//! assert_eq!(titles, vec!["A", "B"]);
//! # Ok::<(), cartelera::CarteleraError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ViewState};
pub use catalog::ResultsPerPage;
pub use domain::{CarteleraError, MediaEntry, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_CATALOG: &str = "data/sample.json";
const DEFAULT_LOCATION: &str = "/movies";
const DEFAULT_TITLE: &str = "Movies";
const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

/// Session configuration.
///
/// Built from defaults, an optional TOML file, and string overrides (the
/// command line), in that order. Every source goes through the same parsing
/// rules as [`Config::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON file. A leading `~` is expanded. Default: `data/sample.json`
    pub catalog_path: String,

    /// Location to open, e.g. `/movies?page=2`. Default: `/movies`
    pub location: String,

    /// Initial page size. Default: 5
    pub results_per_page: ResultsPerPage,

    /// Page heading. Default: `Movies`
    pub title: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `info`
    pub trace_level: Option<String>,

    /// Screen height used for layout. Default: 24
    pub rows: usize,

    /// Screen width used for layout. Default: 80
    pub cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            results_per_page: ResultsPerPage::default(),
            title: DEFAULT_TITLE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Config {
    /// Parses configuration from a string map over the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cartelera::{Config, ResultsPerPage};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("results_per_page".to_string(), "20".to_string());
    /// map.insert("rows".to_string(), "tall".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.results_per_page, ResultsPerPage::Twenty);
    /// assert_eq!(config.rows, 24);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(map)
    }

    /// Applies the keys present in `map`; absent keys keep their values.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog`, `location`, `title`: taken as is
    /// - `results_per_page`: `5`, `10` or `20`; anything else keeps the current value
    /// - `rows`, `cols`: positive integers; anything else keeps the current value
    /// - `theme`, `theme_file`, `trace_level`: taken as is
    #[must_use]
    pub fn with_overrides(mut self, map: &BTreeMap<String, String>) -> Self {
        if let Some(catalog) = map.get("catalog") {
            self.catalog_path.clone_from(catalog);
        }
        if let Some(location) = map.get("location") {
            self.location.clone_from(location);
        }
        if let Some(title) = map.get("title") {
            self.title.clone_from(title);
        }
        if let Some(size) = map
            .get("results_per_page")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .and_then(ResultsPerPage::from_count)
        {
            self.results_per_page = size;
        }

        let dimension = |key: &str| {
            map.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
        };
        if let Some(rows) = dimension("rows") {
            self.rows = rows;
        }
        if let Some(cols) = dimension("cols") {
            self.cols = cols;
        }

        if let Some(theme) = map.get("theme") {
            self.theme_name = Some(theme.clone());
        }
        if let Some(theme_file) = map.get("theme_file") {
            self.theme_file = Some(theme_file.clone());
        }
        if let Some(level) = map.get("trace_level") {
            self.trace_level = Some(level.clone());
        }

        self
    }

    /// Loads configuration from a TOML file over the defaults.
    ///
    /// Top-level scalar keys are read with the same rules as
    /// [`with_overrides`](Self::with_overrides); unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CarteleraError::Config`] if the file cannot be read, is not
    /// TOML, or holds a table or array where a value is expected.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CarteleraError::Config(format!("cannot read {}: {e}", path.display())))?;

        let table: toml::Table = contents
            .parse()
            .map_err(|e| CarteleraError::Config(format!("invalid TOML in {}: {e}", path.display())))?;

        let mut map = BTreeMap::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(CarteleraError::Config(format!(
                        "'{key}' in {} must be a single value, found {}",
                        path.display(),
                        other.type_str()
                    )))
                }
            };
            map.insert(key, text);
        }

        tracing::debug!(path = %path.display(), keys = map.len(), "configuration file loaded");
        Ok(Self::from_map(&map))
    }

    /// Catalog path with `~` expanded.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        infrastructure::expand_tilde(&self.catalog_path)
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the unmounted application state for `config`.
///
/// The state has no entries and is not loading yet; the host starts the load
/// with [`Event::Mount`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog = %config.catalog_path, location = %config.location, "initializing cartelera");

    AppState::new(
        ViewState::new(config.results_per_page),
        config.theme(),
        config.title.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn overrides_replace_only_given_keys() {
        let base = Config::from_map(&map(&[("title", "Films"), ("results_per_page", "10")]));

        let config = base.with_overrides(&map(&[("results_per_page", "20"), ("theme", "catppuccin-latte")]));

        assert_eq!(config.title, "Films");
        assert_eq!(config.results_per_page, ResultsPerPage::Twenty);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn invalid_numbers_keep_current_values() {
        let config = Config::from_map(&map(&[("results_per_page", "7"), ("cols", "0"), ("rows", "40")]));

        assert_eq!(config.results_per_page, ResultsPerPage::Five);
        assert_eq!(config.cols, 80);
        assert_eq!(config.rows, 40);
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "catalog = \"/srv/catalog.json\"\nresults_per_page = 10\ntitle = \"Cine\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.catalog_path(), PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.results_per_page, ResultsPerPage::Ten);
        assert_eq!(config.title, "Cine");
    }

    #[test]
    fn nested_tables_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\npath = \"x\"").unwrap();

        assert!(matches!(Config::load_from_path(file.path()), Err(CarteleraError::Config(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config::from_map(&map(&[("theme", "nope")]));

        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn initialize_applies_page_size_and_title() {
        let config = Config::from_map(&map(&[("results_per_page", "10"), ("title", "Cine")]));

        let state = initialize(&config);

        assert_eq!(state.view_state.results_per_page(), ResultsPerPage::Ten);
        assert_eq!(state.title, "Cine");
        assert!(state.entries.is_empty());
    }
}
