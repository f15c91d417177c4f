#![allow(clippy::multiple_crate_versions)]

//! Terminal host for cartelera.
//!
//! Runs the event loop on the main thread. Two helper threads feed it over a
//! single channel: the catalog worker and a stdin line reader. The host owns
//! the location history and executes the actions returned by the handler.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Sender};
use std::thread;

use cartelera::app::{parse_command, Command};
use cartelera::catalog::JsonFileSource;
use cartelera::infrastructure::{default_config_path, History, Location};
use cartelera::ui::helpers::position_cursor;
use cartelera::worker::{CatalogWorker, WorkerHandle, WorkerResponse};
use cartelera::{handle_event, observability, ui, Action, AppState, CarteleraError, Config, Event, Result};

const HELP: &str = "\
cartelera: browse a movie catalog in the terminal

USAGE:
    cartelera [OPTIONS]

OPTIONS:
    --config FILE             Configuration TOML (default: ~/.config/cartelera/config.toml)
    --catalog FILE            Catalog JSON (default: data/sample.json)
    --location URL            Location to open, e.g. '/movies?page=2'
    --results-per-page N      Initial page size: 5, 10 or 20
    --title TEXT              Page heading
    --theme NAME              catppuccin-mocha or catppuccin-latte
    --theme-file FILE         Custom theme TOML
    --trace-level LEVEL       trace, debug, info, warn or error
    --rows N / --cols N       Screen size used for layout
    -h, --help                Print this help

COMMANDS (one per line):
    y <year> | y    filter by year / clear
    r <5|10|20>     results per page
    n | p           next / previous page
    g <page>        go to page
    <k> | o <k>     open card k
    c               close detail
    b | f           history back / forward
    q               quit
";

/// Flags mapped to configuration keys.
const FLAG_KEYS: [(&str, &str); 9] = [
    ("--catalog", "catalog"),
    ("--location", "location"),
    ("--results-per-page", "results_per_page"),
    ("--title", "title"),
    ("--theme", "theme"),
    ("--theme-file", "theme_file"),
    ("--trace-level", "trace_level"),
    ("--rows", "rows"),
    ("--cols", "cols"),
];

struct Cli {
    help: bool,
    config: Option<PathBuf>,
    overrides: BTreeMap<String, String>,
}

/// Everything the event loop waits on.
enum HostEvent {
    Line(String),
    InputClosed,
    Worker(WorkerResponse),
}

fn parse_cli() -> std::result::Result<Cli, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let help = args.contains(["-h", "--help"]);
    let config = args.opt_value_from_str("--config")?;

    let mut overrides = BTreeMap::new();
    for (flag, key) in FLAG_KEYS {
        if let Some(value) = args.opt_value_from_str::<_, String>(flag)? {
            overrides.insert(key.to_string(), value);
        }
    }

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }

    Ok(Cli { help, config, overrides })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => Config::load_from_path(path)?,
            None => Config::default(),
        },
    };

    Ok(base.with_overrides(&cli.overrides))
}

fn spawn_input_reader(events: Sender<HostEvent>) -> Result<()> {
    thread::Builder::new()
        .name("cartelera-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if events.send(HostEvent::Line(line)).is_err() {
                    return;
                }
            }
            let _ = events.send(HostEvent::InputClosed);
        })?;
    Ok(())
}

/// Host-side session: state, history, worker, and screen.
struct Session<W: Write> {
    state: AppState,
    history: History,
    worker: WorkerHandle,
    out: W,
    rows: usize,
    cols: usize,
}

impl<W: Write> Session<W> {
    /// Turns an input line into an application event.
    ///
    /// History commands move the host's history here and become
    /// `LocationChanged`. Returns `None` for lines that need no handling.
    fn event_for_line(&mut self, line: &str) -> Option<Event> {
        match parse_command(line) {
            Ok(None) => None,
            Ok(Some(Command::Back)) => Some(self.history.back().map_or_else(
                || Event::CommandRejected("already at the first location".to_string()),
                |location| Event::LocationChanged(location.clone()),
            )),
            Ok(Some(Command::Forward)) => Some(self.history.forward().map_or_else(
                || Event::CommandRejected("already at the latest location".to_string()),
                |location| Event::LocationChanged(location.clone()),
            )),
            Ok(Some(command)) => command.into_event(),
            Err(e) => {
                tracing::debug!(line, error = %e, "rejected input line");
                Some(Event::CommandRejected(e.to_string()))
            }
        }
    }

    /// Handles one event. Returns `false` once the session should end.
    fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.state, event)?;

        for action in actions {
            match action {
                Action::PostToWorker(message) => self.worker.post(message)?,
                Action::Navigate { location, replace: true } => self.history.replace(location),
                Action::Navigate { location, replace: false } => self.history.push(location),
                Action::Quit => return Ok(false),
            }
        }

        if render {
            self.render()?;
        }
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        ui::render(&mut self.out, &self.state, self.rows, self.cols)?;
        position_cursor(&mut self.out, self.rows + 1, 1)?;
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }
}

fn run() -> Result<()> {
    let cli = parse_cli().map_err(|e| CarteleraError::Config(e.to_string()))?;
    if cli.help {
        print!("{HELP}");
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _tracer_provider = observability::init_tracing(&config);

    let span = tracing::debug_span!("session", catalog = %config.catalog_path);
    let _guard = span.entered();

    let (events, inbox) = mpsc::channel::<HostEvent>();

    let worker_events = events.clone();
    let worker = CatalogWorker::new(Box::new(JsonFileSource::new(config.catalog_path())))
        .spawn(move |response| worker_events.send(HostEvent::Worker(response)).is_ok())?;

    let location = Location::parse(&config.location);
    let mut session = Session {
        state: cartelera::initialize(&config),
        history: History::new(location.clone()),
        worker,
        out: io::stdout().lock(),
        rows: config.rows,
        cols: config.cols,
    };

    // Mount is handled before any input line can arrive.
    let mut running = session.dispatch(&Event::Mount { location })?;
    spawn_input_reader(events)?;

    while running {
        let Ok(host_event) = inbox.recv() else { break };

        let event = match host_event {
            HostEvent::Worker(response) => Event::WorkerResponse(response),
            HostEvent::InputClosed => Event::Quit,
            HostEvent::Line(line) => match session.event_for_line(&line) {
                Some(event) => event,
                None => continue,
            },
        };

        running = session.dispatch(&event)?;
    }

    writeln!(session.out, "\n{}", session.history.current())?;
    session.out.flush()?;

    tracing::debug!(location = %session.history.current(), "session ended");
    session.worker.shutdown()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cartelera: {e}");
            ExitCode::FAILURE
        }
    }
}
