//! Screen components.
//!
//! Every renderer takes the writer, the row to start on, its slice of the
//! view model, and the theme, and returns the next free row.

mod cards;
mod detail;
mod empty;
mod filter;
mod footer;
mod header;
mod pagination;

pub use cards::render_cards;
pub use detail::render_detail;
pub use empty::render_empty_state;
pub use filter::render_filter_bar;
pub use footer::render_footer;
pub use header::{render_header, render_separator};
pub use pagination::render_pagination;
