//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes. Each arm
//! mutates [`AppState`] through its transition functions, finishes with an
//! explicit [`AppState::recompute_view`], and returns the side effects for
//! the host to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `LocationChanged`, `Quit`
//! - **Controls**: `FilterYearChanged`, `ResultsPerPageChanged`,
//!   `PreviousPage`, `NextPage`, `GoToPage`
//! - **Detail**: `SelectEntry`, `CloseDetail`
//! - **Host**: `CommandRejected`
//! - **Worker**: `WorkerResponse` with the load outcome
//!
//! # Example
//!
//! ```rust
//! use cartelera::app::{handle_event, Action, AppState, Event};
//! use cartelera::infrastructure::Location;
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(
//!     &mut state,
//!     &Event::Mount { location: Location::parse("/peliculas?page=2") },
//! )?;
//!
//! assert!(render);
//! assert!(matches!(actions[..], [Action::PostToWorker(_)]));
//! assert_eq!(state.view_state.current_page(), 2);
//! # Ok::<(), cartelera::CarteleraError>(())
//! ```

use super::modes::LoadState;
use super::navigation::{clamp_to_available_pages, navigate_to_page, sync_page_from_location};
use crate::app::{Action, AppState};
use crate::catalog::ResultsPerPage;
use crate::domain::error::Result;
use crate::infrastructure::Location;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events from the host, the user, and the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view was opened at `location`. Starts the catalog load.
    Mount {
        location: Location,
    },

    /// The host moved to another location (history back/forward).
    LocationChanged(Location),

    /// The year filter input now holds this text.
    FilterYearChanged(String),

    /// A page size was chosen.
    ResultsPerPageChanged(ResultsPerPage),

    /// The Previous control was activated. Ignored on page 1.
    PreviousPage,

    /// The Next control was activated. Ignored on the last page.
    NextPage,

    /// A page number button was activated. Ignored outside `1..=total_pages`.
    GoToPage(u32),

    /// A card was activated, by 1-based position on the current page.
    SelectEntry(usize),

    /// The detail overlay's close control was activated.
    CloseDetail,

    /// An input line could not be parsed; the message is shown once.
    CommandRejected(String),

    /// The user asked to leave.
    Quit,

    /// The worker answered a request.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the screen changed and needs redrawing, and
/// the side effects to run in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps room for transitions that need
/// I/O-backed validation.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let cleared_notice =
        !matches!(event, Event::CommandRejected(_)) && state.notice.take().is_some();

    let (render, actions) = dispatch(state, event)?;
    Ok((render || cleared_notice, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Mount { location } => {
            sync_page_from_location(state, location.clone());
            state.load_state = LoadState::Loading;
            state.recompute_view();

            Ok((true, vec![Action::PostToWorker(WorkerMessage::load_catalog())]))
        }
        Event::LocationChanged(location) => {
            if *location == state.location {
                return Ok((false, vec![]));
            }

            sync_page_from_location(state, location.clone());
            state.recompute_view();

            let actions = clamp_to_available_pages(state).into_iter().collect();
            Ok((true, actions))
        }
        Event::FilterYearChanged(text) => {
            if !state.view_state.set_filter_year(text.as_str()) {
                return Ok((false, vec![]));
            }
            tracing::debug!(filter_year = %text, "year filter changed");

            let action = navigate_to_page(state, 1);
            state.recompute_view();
            Ok((true, vec![action]))
        }
        Event::ResultsPerPageChanged(size) => {
            if !state.view_state.set_results_per_page(*size) {
                return Ok((false, vec![]));
            }
            tracing::debug!(results_per_page = %size, "page size changed");

            let action = navigate_to_page(state, 1);
            state.recompute_view();
            Ok((true, vec![action]))
        }
        Event::PreviousPage => {
            if !state.view.has_previous() {
                return Ok((false, vec![]));
            }

            let action = navigate_to_page(state, state.view.current_page - 1);
            state.recompute_view();
            Ok((true, vec![action]))
        }
        Event::NextPage => {
            if !state.view.has_next() {
                return Ok((false, vec![]));
            }

            let action = navigate_to_page(state, state.view.current_page + 1);
            state.recompute_view();
            Ok((true, vec![action]))
        }
        Event::GoToPage(page) => {
            if !(1..=state.view.total_pages).contains(page) {
                tracing::debug!(page, total_pages = state.view.total_pages, "no such page");
                return Ok((false, vec![]));
            }

            let action = navigate_to_page(state, *page);
            state.recompute_view();
            Ok((true, vec![action]))
        }
        Event::SelectEntry(position) => {
            let Some(entry) = position
                .checked_sub(1)
                .and_then(|index| state.view.visible.get(index))
            else {
                tracing::debug!(position, visible = state.view.visible.len(), "no card at position");
                return Ok((false, vec![]));
            };

            tracing::debug!(title = %entry.title, "entry selected");
            state.selection = Some(entry.clone());
            Ok((true, vec![]))
        }
        Event::CloseDetail => Ok((state.selection.take().is_some(), vec![])),
        Event::CommandRejected(message) => {
            state.notice = Some(message.clone());
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::CatalogLoaded { entries } => {
            tracing::debug!(entry_count = entries.len(), "catalog loaded");

            state.entries.clone_from(entries);
            state.load_state = LoadState::Ready;
            state.recompute_view();

            let actions = clamp_to_available_pages(state).into_iter().collect();
            Ok((true, actions))
        }
        WorkerResponse::LoadFailed { failure, message } => {
            tracing::error!(failure = %failure, message = %message, "catalog load failed");

            state.entries.clear();
            state.selection = None;
            state.load_state = LoadState::Failed(*failure);
            state.recompute_view();
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::LoadFailure;
    use crate::domain::MediaEntry;

    fn twelve_movies() -> Vec<MediaEntry> {
        (1..=12_i64)
            .map(|i| MediaEntry::movie(format!("Movie {i:02}"), 2000 + i % 3))
            .collect()
    }

    fn mounted(location: &str, entries: Vec<MediaEntry>) -> (AppState, Vec<Action>) {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Mount { location: Location::parse(location) }).unwrap();
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded { entries }),
        )
        .unwrap();
        (state, actions)
    }

    fn navigated_to(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Navigate { location, .. } => Some(location.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn mount_starts_loading_and_reads_page() {
        let mut state = AppState::default();

        let (render, actions) = handle_event(
            &mut state,
            &Event::Mount { location: Location::parse("/peliculas?page=2") },
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.load_state, LoadState::Loading);
        assert_eq!(state.view_state.current_page(), 2);
        assert!(matches!(
            actions[..],
            [Action::PostToWorker(WorkerMessage::LoadCatalog { .. })]
        ));
    }

    #[test]
    fn loaded_catalog_shows_first_page() {
        let (state, actions) = mounted("/peliculas", twelve_movies());

        assert!(actions.is_empty());
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.view.total_pages, 3);
        assert_eq!(state.view.visible.len(), 5);
        assert_eq!(state.view.visible[0].title, "Movie 01");
    }

    #[test]
    fn out_of_range_page_is_clamped_and_url_rewritten() {
        let entries = twelve_movies().into_iter().take(7).collect();

        let (state, actions) = mounted("/peliculas?lang=es&page=3", entries);

        assert_eq!(state.view_state.current_page(), 2);
        assert_eq!(state.view.visible.len(), 2);
        assert_eq!(
            actions,
            vec![Action::Navigate {
                location: Location::parse("/peliculas?lang=es&page=2"),
                replace: true,
            }]
        );
    }

    #[test]
    fn empty_catalog_keeps_requested_page() {
        let (state, actions) = mounted("/?page=4", vec![]);

        assert!(actions.is_empty());
        assert_eq!(state.view_state.current_page(), 4);
        assert!(state.view.visible.is_empty());
    }

    #[test]
    fn next_and_previous_move_and_rewrite_url() {
        let (mut state, _) = mounted("/peliculas?sort=title", twelve_movies());

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(navigated_to(&actions), vec!["/peliculas?sort=title&page=2"]);
        assert_eq!(state.view.visible[0].title, "Movie 06");

        let (_, actions) = handle_event(&mut state, &Event::PreviousPage).unwrap();
        assert_eq!(navigated_to(&actions), vec!["/peliculas?sort=title&page=1"]);
        assert_eq!(state.view_state.current_page(), 1);
    }

    #[test]
    fn boundary_controls_are_no_ops() {
        let (mut state, _) = mounted("/?page=1", twelve_movies());

        assert_eq!(handle_event(&mut state, &Event::PreviousPage).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::GoToPage(3)).unwrap();
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));
        assert_eq!(state.view.visible.len(), 2);
    }

    #[test]
    fn go_to_page_ignores_missing_pages() {
        let (mut state, _) = mounted("/", twelve_movies());

        assert_eq!(handle_event(&mut state, &Event::GoToPage(0)).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::GoToPage(4)).unwrap(), (false, vec![]));
        assert_eq!(state.view_state.current_page(), 1);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let (mut state, _) = mounted("/?page=2", twelve_movies());

        let (render, actions) =
            handle_event(&mut state, &Event::FilterYearChanged("2001".to_string())).unwrap();

        assert!(render);
        assert_eq!(navigated_to(&actions), vec!["/?page=1"]);
        assert_eq!(state.view.filtered_count, 4);
        assert!(state.view.visible.iter().all(|e| e.release_year == Some(2001)));
    }

    #[test]
    fn unchanged_filter_is_a_no_op() {
        let (mut state, _) = mounted("/?page=2", twelve_movies());

        let result = handle_event(&mut state, &Event::FilterYearChanged(String::new())).unwrap();

        assert_eq!(result, (false, vec![]));
        assert_eq!(state.view_state.current_page(), 2);
    }

    #[test]
    fn non_numeric_filter_empties_the_list() {
        let (mut state, _) = mounted("/", twelve_movies());

        handle_event(&mut state, &Event::FilterYearChanged("abc".to_string())).unwrap();

        assert_eq!(state.view.filtered_count, 0);
        assert_eq!(state.view.total_pages, 0);
        assert!(!state.view.has_next());
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let (mut state, _) = mounted("/?page=3", twelve_movies());

        let (_, actions) = handle_event(
            &mut state,
            &Event::ResultsPerPageChanged(ResultsPerPage::Ten),
        )
        .unwrap();

        assert_eq!(navigated_to(&actions), vec!["/?page=1"]);
        assert_eq!(state.view.total_pages, 2);
        assert_eq!(state.view.visible.len(), 10);
    }

    #[test]
    fn location_change_syncs_page_and_clamps() {
        let (mut state, _) = mounted("/?page=1", twelve_movies());

        let (render, actions) =
            handle_event(&mut state, &Event::LocationChanged(Location::parse("/?page=2"))).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.view.visible[0].title, "Movie 06");

        let (_, actions) =
            handle_event(&mut state, &Event::LocationChanged(Location::parse("/?page=9"))).unwrap();
        assert_eq!(navigated_to(&actions), vec!["/?page=3"]);
        assert_eq!(state.view_state.current_page(), 3);
    }

    #[test]
    fn same_location_is_ignored() {
        let (mut state, _) = mounted("/?page=2", twelve_movies());

        let result =
            handle_event(&mut state, &Event::LocationChanged(Location::parse("/?page=2"))).unwrap();

        assert_eq!(result, (false, vec![]));
    }

    #[test]
    fn selecting_and_closing_detail() {
        let (mut state, _) = mounted("/", twelve_movies());

        let (render, _) = handle_event(&mut state, &Event::SelectEntry(2)).unwrap();
        assert!(render);
        assert_eq!(state.selection.as_ref().map(|e| e.title.as_str()), Some("Movie 02"));

        handle_event(&mut state, &Event::SelectEntry(3)).unwrap();
        assert_eq!(state.selection.as_ref().map(|e| e.title.as_str()), Some("Movie 03"));

        assert_eq!(handle_event(&mut state, &Event::CloseDetail).unwrap(), (true, vec![]));
        assert!(state.selection.is_none());
        assert_eq!(handle_event(&mut state, &Event::CloseDetail).unwrap(), (false, vec![]));
    }

    #[test]
    fn selecting_outside_the_page_is_ignored() {
        let (mut state, _) = mounted("/", twelve_movies());

        assert_eq!(handle_event(&mut state, &Event::SelectEntry(0)).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::SelectEntry(6)).unwrap(), (false, vec![]));
        assert!(state.selection.is_none());
    }

    #[test]
    fn load_failure_shows_no_entries() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Mount { location: Location::parse("/") }).unwrap();

        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::LoadFailed {
                failure: LoadFailure::ParseFailed,
                message: "expected value at line 1".to_string(),
            }),
        )
        .unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.load_state, LoadState::Failed(LoadFailure::ParseFailed));
        assert!(state.view.visible.is_empty());
    }

    #[test]
    fn rejected_command_notice_clears_on_next_event() {
        let (mut state, _) = mounted("/", twelve_movies());

        handle_event(&mut state, &Event::CommandRejected("unknown command 'z'".to_string())).unwrap();
        assert_eq!(state.notice.as_deref(), Some("unknown command 'z'"));

        handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(state.notice.is_none());
    }

    #[test]
    fn quit_requests_quit() {
        let mut state = AppState::default();

        assert_eq!(handle_event(&mut state, &Event::Quit).unwrap(), (false, vec![Action::Quit]));
    }
}
