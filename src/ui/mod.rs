//! Terminal rendering with theme support.
//!
//! - [`viewmodel`]: Display-ready data computed from `AppState`
//! - [`renderer`]: Draws a view model to any `io::Write`
//! - [`theme`]: Built-in and custom color palettes
//! - `components`: Per-region renderers
//! - [`helpers`]: Text layout and cursor helpers

mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::UIViewModel;
