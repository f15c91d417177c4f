//! Filter, sort, and paginate derivation.
//!
//! This module turns the flat list of loaded entries into the slice shown on
//! the current page. The derivation is a pure function of its four inputs
//! (entries, year filter, page size, page) and is re-run after every state
//! transition.
//!
//! # Algorithm
//!
//! 1. Keep entries whose program type is `"movie"`
//! 2. If the year filter is non-empty, keep entries whose release year equals
//!    the numeric value of the filter text
//! 3. Sort by title with [`locale_compare`], ascending (stable)
//! 4. `total_pages = ceil(count / page_size)`
//! 5. Window to `[(page - 1) * page_size, page * page_size)`

use super::collate::locale_compare;
use crate::domain::MediaEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page sizes offered by the result-count selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ResultsPerPage {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl ResultsPerPage {
    /// Every selectable page size, in selector order.
    pub const ALL: [Self; 3] = [Self::Five, Self::Ten, Self::Twenty];

    /// Maps a raw count onto one of the selectable sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartelera::catalog::ResultsPerPage;
    ///
    /// assert_eq!(ResultsPerPage::from_count(10), Some(ResultsPerPage::Ten));
    /// assert_eq!(ResultsPerPage::from_count(7), None);
    /// ```
    #[must_use]
    pub const fn from_count(count: u32) -> Option<Self> {
        match count {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for ResultsPerPage {
    type Error = String;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::from_count(count).ok_or_else(|| format!("unsupported page size {count}, expected 5, 10 or 20"))
    }
}

impl From<ResultsPerPage> for u32 {
    fn from(size: ResultsPerPage) -> Self {
        size.count()
    }
}

impl fmt::Display for ResultsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Result of one derivation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    /// Entries on the current page, in display order.
    pub visible: Vec<MediaEntry>,

    /// Number of entries that passed the filters, across all pages.
    pub filtered_count: usize,

    /// `ceil(filtered_count / page_size)`, 0 when nothing matched.
    pub total_pages: u32,

    /// Page the window was taken from.
    pub current_page: u32,
}

impl CatalogView {
    /// Every page number, `1..=total_pages`.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }

    /// Whether the Previous control is enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the Next control is enabled.
    ///
    /// With no results (`total_pages == 0`) there is nowhere to go, so the
    /// control is disabled as well.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Interprets filter text the way JavaScript's `Number()` does.
///
/// Surrounding whitespace is trimmed and whitespace-only text is `0`. Decimal,
/// exponent, `Infinity`, and `0x`/`0o`/`0b` integer forms are accepted.
/// Anything else is `NaN`, which never equals a release year.
///
/// # Examples
///
/// ```
/// use cartelera::catalog::numeric_value;
///
/// assert_eq!(numeric_value(" 2010 "), 2010.0);
/// assert_eq!(numeric_value("0x7DA"), 2010.0);
/// assert_eq!(numeric_value("   "), 0.0);
/// assert!(numeric_value("20I0").is_nan());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn numeric_value(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix).map_or(f64::NAN, |v| v as f64);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return if trimmed.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    // Rust also accepts "inf" and "nan" spellings that `Number()` rejects.
    let is_numeric_literal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_numeric_literal || trimmed.len() - unsigned.len() > 1 {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Returns whether an entry passes the year filter.
///
/// An empty filter passes everything.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn matches_year(entry: &MediaEntry, filter_year: &str) -> bool {
    if filter_year.is_empty() {
        return true;
    }

    let wanted = numeric_value(filter_year);
    entry.release_year.is_some_and(|year| year as f64 == wanted)
}

/// Derives the visible slice for one page of the filtered, sorted catalog.
///
/// `current_page` is used as given: a page beyond `total_pages` yields an
/// empty `visible` slice rather than a panic. Clamping is the caller's
/// concern.
///
/// # Examples
///
/// ```
/// use cartelera::catalog::{derive, ResultsPerPage};
/// use cartelera::domain::MediaEntry;
///
/// let entries = vec![MediaEntry::movie("B", 2000), MediaEntry::movie("A", 2001)];
/// let view = derive(&entries, "", ResultsPerPage::Five, 1);
///
/// let titles: Vec<&str> = view.visible.iter().map(|e| e.title.as_str()).collect();
/// assert_eq!(titles, vec!["A", "B"]);
/// assert_eq!(view.total_pages, 1);
/// ```
#[must_use]
pub fn derive(
    entries: &[MediaEntry],
    filter_year: &str,
    results_per_page: ResultsPerPage,
    current_page: u32,
) -> CatalogView {
    let mut filtered: Vec<&MediaEntry> = entries
        .iter()
        .filter(|entry| entry.is_movie() && matches_year(entry, filter_year))
        .collect();

    filtered.sort_by(|a, b| locale_compare(&a.title, &b.title));

    let page_size = results_per_page.count() as usize;
    let filtered_count = filtered.len();
    let total_pages = u32::try_from(filtered_count.div_ceil(page_size)).unwrap_or(u32::MAX);

    let start = (current_page.saturating_sub(1) as usize).saturating_mul(page_size);
    let visible = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    CatalogView {
        visible,
        filtered_count,
        total_pages,
        current_page,
    }
}
