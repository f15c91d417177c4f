//! Infrastructure layer for URL, history, and platform path handling.
//!
//! These are the collaborators a browser would normally provide: the address
//! bar ([`Location`]), session history ([`History`]), and where files live on
//! this machine ([`paths`]).

pub mod history;
pub mod location;
pub mod paths;

pub use history::History;
pub use location::Location;
pub use paths::{default_config_path, expand_tilde, get_data_dir};
