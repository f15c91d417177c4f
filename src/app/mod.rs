//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! stdin lines → Command → Event ─┐
//!                                ├→ handle_event → AppState → recompute_view
//! worker replies → Event ────────┘        │
//!                                         └→ Actions → host (worker, history, quit)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`input`]: Line command parsing
//! - [`modes`]: Catalog load state machine
//! - [`navigation`]: Page/URL synchronization
//! - [`state`]: Application state and view model computation
//! - [`view_state`]: Filter, page size, and current page

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod navigation;
pub mod state;
pub mod view_state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use input::{parse_command, Command, CommandError};
pub use modes::{LoadFailure, LoadState};
pub use state::AppState;
pub use view_state::ViewState;
