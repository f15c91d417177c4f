//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) never performs I/O itself. It mutates
//! [`AppState`](super::AppState) and returns a `Vec<Action>` that the host
//! executes in order after the event.

use crate::infrastructure::Location;
use crate::worker::WorkerMessage;

/// Commands executed by the host after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a request to the background worker.
    PostToWorker(WorkerMessage),

    /// Changes the address-bar location.
    ///
    /// The state already reflects `location`; the host only records it in its
    /// history and must not echo it back as a `LocationChanged` event.
    Navigate {
        /// Location to show.
        location: Location,
        /// Overwrite the current history entry instead of pushing a new one.
        replace: bool,
    },

    /// Ends the session.
    Quit,
}
