//! Color themes and ANSI escape sequences.
//!
//! Two palettes are built in, `catppuccin-mocha` (default, dark) and
//! `catppuccin-latte` (light). Custom themes are TOML files of the same
//! shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! # header_bg is optional
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! location_fg = "#94e2d5"
//! active_fg = "#1e1e2e"
//! active_bg = "#f5c2e7"
//! disabled_fg = "#45475a"
//! detail_border = "#b4befe"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! notice_fg = "#f9e2af"
//! ```

use crate::domain::error::{CarteleraError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILT_IN_THEMES: [&str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text.
    pub header_fg: String,
    /// Title background; terminal default when absent.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Card titles and body text.
    pub text_normal: String,
    /// Years, URLs, and key hints.
    pub text_dim: String,
    /// Separator lines.
    pub border: String,
    /// Address bar.
    pub location_fg: String,
    /// Selected page-size option and current page.
    pub active_fg: String,
    pub active_bg: String,
    /// Prev/Next when unavailable.
    pub disabled_fg: String,
    /// Detail overlay frame.
    pub detail_border: String,
    pub empty_state_fg: String,
    pub error_fg: String,
    /// One-shot footer message.
    pub notice_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CarteleraError::Theme`] if the file cannot be read or is not a
    /// complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| CarteleraError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| CarteleraError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`; malformed input renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(255)
        };

        if hex.len() != 6 {
            return (255, 255, 255);
        }
        (channel(0..2), channel(2..4), channel(4..6))
    }

    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in BUILT_IN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("f5c2e7"), "\u{1b}[48;2;245;194;231m");
        assert_eq!(Theme::fg("#zzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = include_str!("../../themes/catppuccin-mocha.toml");
        write!(file, "{}", mocha.replace("catppuccin-mocha", "mine")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();

        assert_eq!(theme.name, "mine");
        assert_eq!(theme.colors.header_bg, None);
    }

    #[test]
    fn incomplete_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(CarteleraError::Theme(_))));
    }
}
