//! End-to-end flows through the worker, the handler, and the renderer.

use cartelera::app::{handle_event, Action, AppState, Event, LoadFailure, LoadState};
use cartelera::catalog::{JsonFileSource, ResultsPerPage};
use cartelera::infrastructure::{History, Location};
use cartelera::worker::{CatalogWorker, WorkerMessage};
use std::io::Write;
use std::path::{Path, PathBuf};

fn sample_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample.json")
}

/// Drives one event like the host does: applies navigations to the history
/// and answers worker requests synchronously.
fn step(state: &mut AppState, history: &mut History, worker: &mut CatalogWorker, event: Event) {
    let (_, actions) = handle_event(state, &event).unwrap();

    for action in actions {
        match action {
            Action::PostToWorker(message) => {
                let response = worker.handle_message(message);
                step(state, history, worker, Event::WorkerResponse(response));
            }
            Action::Navigate { location, replace: true } => history.replace(location),
            Action::Navigate { location, replace: false } => history.push(location),
            Action::Quit => {}
        }
    }
}

fn mount(path: &Path, location: &str) -> (AppState, History, CatalogWorker) {
    let mut state = AppState::default();
    let location = Location::parse(location);
    let mut history = History::new(location.clone());
    let mut worker = CatalogWorker::new(Box::new(JsonFileSource::new(path)));

    step(&mut state, &mut history, &mut worker, Event::Mount { location });
    (state, history, worker)
}

fn titles(state: &AppState) -> Vec<&str> {
    state.view.visible.iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn sample_catalog_first_page_is_sorted_movies() {
    let (state, _, _) = mount(&sample_catalog(), "/movies");

    assert_eq!(state.load_state, LoadState::Ready);
    assert_eq!(state.view.filtered_count, 18);
    assert_eq!(state.view.total_pages, 4);
    assert_eq!(
        titles(&state),
        vec!["(500) Days of Summer", "12 Angry Men", "Alien", "Amélie", "Ángeles y demonios"]
    );
}

#[test]
fn year_filter_keeps_only_that_year() {
    let (mut state, mut history, mut worker) = mount(&sample_catalog(), "/movies?page=3");

    step(&mut state, &mut history, &mut worker, Event::FilterYearChanged("2010".to_string()));

    assert_eq!(
        titles(&state),
        vec!["Black Swan", "inception", "The Social Network", "Toy Story 3"]
    );
    assert_eq!(history.current().to_string(), "/movies?page=1");
}

#[test]
fn out_of_range_page_is_clamped_in_history() {
    let (state, history, _) = mount(&sample_catalog(), "/movies?page=9&lang=es");

    assert_eq!(state.view_state.current_page(), 4);
    assert_eq!(state.view.visible.len(), 3);
    assert_eq!(history.len(), 1);
    assert_eq!(history.current().to_string(), "/movies?page=4&lang=es");
}

#[test]
fn back_and_forward_restore_pages() {
    let (mut state, mut history, mut worker) = mount(&sample_catalog(), "/movies");

    step(&mut state, &mut history, &mut worker, Event::NextPage);
    step(&mut state, &mut history, &mut worker, Event::NextPage);
    assert_eq!(state.view_state.current_page(), 3);

    let previous = history.back().cloned().unwrap();
    step(&mut state, &mut history, &mut worker, Event::LocationChanged(previous));
    assert_eq!(state.view_state.current_page(), 2);
    assert_eq!(state.view.visible[0].title, "Black Swan");

    let next = history.forward().cloned().unwrap();
    step(&mut state, &mut history, &mut worker, Event::LocationChanged(next));
    assert_eq!(state.view_state.current_page(), 3);
}

#[test]
fn page_size_change_returns_to_first_page() {
    let (mut state, mut history, mut worker) = mount(&sample_catalog(), "/movies?page=4");

    step(
        &mut state,
        &mut history,
        &mut worker,
        Event::ResultsPerPageChanged(ResultsPerPage::Twenty),
    );

    assert_eq!(state.view.total_pages, 1);
    assert_eq!(state.view.visible.len(), 18);
    assert_eq!(history.current().to_string(), "/movies?page=1");
}

#[test]
fn entry_without_poster_renders_placeholder() {
    let (mut state, mut history, mut worker) = mount(&sample_catalog(), "/movies");
    step(&mut state, &mut history, &mut worker, Event::FilterYearChanged("2003".to_string()));
    step(&mut state, &mut history, &mut worker, Event::SelectEntry(1));

    let mut screen = Vec::new();
    cartelera::ui::render(&mut screen, &state, 30, 80).unwrap();
    let screen = String::from_utf8(screen).unwrap();

    assert_eq!(state.selection.as_ref().map(|e| e.title.as_str()), Some("Oldboy"));
    assert!(screen.contains("Poster: (no poster)"));
}

#[test]
fn malformed_catalog_fails_without_entries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"entries\": [").unwrap();

    let (state, _, _) = mount(file.path(), "/movies");

    assert_eq!(state.load_state, LoadState::Failed(LoadFailure::ParseFailed));
    assert!(state.view.visible.is_empty());
}

#[test]
fn oddly_typed_entries_do_not_block_the_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"entries": [
            {{"title": "Heat", "programType": "movie", "releaseYear": 1995.0}},
            {{"title": "Inception", "programType": "movie", "releaseYear": "2010"}},
            {{"title": "Alien", "programType": "movie", "releaseYear": 1979, "images": {{"Poster Art": {{"href": "x"}}}}}},
            null
        ]}}"#
    )
    .unwrap();

    let (mut state, mut history, mut worker) = mount(file.path(), "/movies");

    assert_eq!(state.load_state, LoadState::Ready);
    assert_eq!(state.entries.len(), 4);
    assert_eq!(titles(&state), vec!["Alien", "Heat", "Inception"]);

    step(&mut state, &mut history, &mut worker, Event::FilterYearChanged("2010".to_string()));
    assert!(titles(&state).is_empty());

    step(&mut state, &mut history, &mut worker, Event::FilterYearChanged("1995".to_string()));
    assert_eq!(titles(&state), vec!["Heat"]);
}

#[test]
fn missing_catalog_is_a_fetch_failure() {
    let dir = tempfile::tempdir().unwrap();

    let (state, _, _) = mount(&dir.path().join("nowhere.json"), "/movies");

    assert_eq!(state.load_state, LoadState::Failed(LoadFailure::FetchFailed));
}

#[test]
fn load_request_is_posted_once_on_mount() {
    let mut state = AppState::default();

    let (_, actions) = handle_event(
        &mut state,
        &Event::Mount { location: Location::parse("/movies") },
    )
    .unwrap();

    let loads = actions
        .iter()
        .filter(|a| matches!(a, Action::PostToWorker(WorkerMessage::LoadCatalog { .. })))
        .count();
    assert_eq!(loads, 1);
}
