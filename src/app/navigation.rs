//! Page/URL synchronization.
//!
//! The current page lives in two places: [`ViewState`](super::ViewState) and
//! the `page` query parameter of the location. Writes go state → URL through
//! [`navigate_to_page`]; reads go URL → state through [`page_from_location`]
//! whenever the host reports a location (mount, history back/forward).
//!
//! Only the `page` parameter is ever touched. The path, the fragment, and
//! every other parameter pass through in their original order.

use super::{Action, AppState};
use crate::infrastructure::Location;

/// Query parameter holding the 1-based page number.
pub const PAGE_PARAM: &str = "page";

/// Parses a leading integer the way JavaScript's `parseInt` does without a
/// radix.
///
/// Leading whitespace and one sign are accepted. A `0x`/`0X` prefix switches
/// to hexadecimal; otherwise digits are decimal up to the first non-digit.
/// Returns `None` when no digit follows.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    if digits_end == 0 {
        return None;
    }

    // Overflowing digit runs are still "a large number", never page 1.
    let magnitude = i64::from_str_radix(&body[..digits_end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Reads the current page from a location.
///
/// Absent, unparsable, or non-positive values read as page 1.
///
/// # Examples
///
/// ```
/// use cartelera::app::navigation::page_from_location;
/// use cartelera::infrastructure::Location;
///
/// assert_eq!(page_from_location(&Location::parse("/?page=3")), 3);
/// assert_eq!(page_from_location(&Location::parse("/?page=2abc")), 2);
/// assert_eq!(page_from_location(&Location::parse("/?page=abc")), 1);
/// assert_eq!(page_from_location(&Location::parse("/?page=-4")), 1);
/// assert_eq!(page_from_location(&Location::parse("/")), 1);
/// ```
#[must_use]
pub fn page_from_location(location: &Location) -> u32 {
    location
        .get(PAGE_PARAM)
        .and_then(parse_leading_int)
        .filter(|page| *page >= 1)
        .map_or(1, |page| u32::try_from(page).unwrap_or(u32::MAX))
}

/// Moves to `page` and rewrites the location to match.
///
/// Updates [`ViewState`](super::ViewState) and the state's location, then
/// returns the [`Action::Navigate`] the host applies to its history. The
/// view is not recomputed here; callers finish with
/// [`AppState::recompute_view`].
pub fn navigate_to_page(state: &mut AppState, page: u32) -> Action {
    state.view_state.set_current_page(page);
    let page = state.view_state.current_page();

    state.location.set(PAGE_PARAM, page.to_string());
    tracing::debug!(page, location = %state.location, "navigating to page");

    Action::Navigate {
        location: state.location.clone(),
        replace: false,
    }
}

/// Adopts the page carried by `location` without emitting a navigation.
pub fn sync_page_from_location(state: &mut AppState, location: Location) {
    let page = page_from_location(&location);
    tracing::debug!(page, location = %location, "syncing page from location");

    state.location = location;
    state.view_state.set_current_page(page);
}

/// Pulls an out-of-range page back to the last page.
///
/// Applies only once the catalog is loaded and at least one page exists; an
/// empty result set keeps whatever page the URL asked for. The returned
/// navigation replaces the current history entry so that back does not
/// return to the invalid page. Recomputes the view when it clamps.
pub fn clamp_to_available_pages(state: &mut AppState) -> Option<Action> {
    let total_pages = state.view.total_pages;
    if !state.load_state.is_ready()
        || total_pages == 0
        || state.view_state.current_page() <= total_pages
    {
        return None;
    }

    tracing::debug!(
        requested = state.view_state.current_page(),
        total_pages,
        "page out of range, clamping"
    );

    let action = match navigate_to_page(state, total_pages) {
        Action::Navigate { location, .. } => Action::Navigate {
            location,
            replace: true,
        },
        other => other,
    };
    state.recompute_view();
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_follows_parse_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 pages"), Some(7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("2.9"), Some(2));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn hex_prefix_reads_as_hexadecimal() {
        assert_eq!(parse_leading_int("0x1f"), Some(31));
        assert_eq!(parse_leading_int("-0XA"), Some(-10));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xg"), None);
        assert_eq!(page_from_location(&Location::parse("/?page=0x2")), 2);
    }

    #[test]
    fn page_defaults_to_one() {
        for text in ["/", "/?page=", "/?page=0", "/?page=abc", "/?other=5"] {
            assert_eq!(page_from_location(&Location::parse(text)), 1, "{text}");
        }
    }

    #[test]
    fn first_page_parameter_wins() {
        assert_eq!(page_from_location(&Location::parse("/?page=4&page=9")), 4);
    }

    #[test]
    fn huge_page_saturates() {
        let location = Location::parse("/?page=99999999999999999999999");

        assert_eq!(page_from_location(&location), u32::MAX);
    }
}
