//! Theme configuration for arrow.
//!
//! Colors are stored as strings (ANSI index `"57"`, hex `"#ff5500"` or a
//! name like `"blue"`) and converted to [`ratatui::style::Color`] at render
//! time via [`parse_color`].

use serde::{Deserialize, Serialize};

/// Picker colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub foreground: String,
    pub highlight: String,
    pub cursor: String,
    pub disabled: String,
    pub symlink: String,
    pub current_directory: String,
    pub prompt: String,
    pub border: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: "15".to_string(),
            highlight: "80".to_string(),
            cursor: "57".to_string(),
            disabled: "240".to_string(),
            symlink: "36".to_string(),
            current_directory: "57".to_string(),
            prompt: "36".to_string(),
            border: "80".to_string(),
        }
    }
}

impl Theme {
    /// Applies `ARROW_*_COLOR` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// A value is taken only if [`is_valid_override`] accepts it; anything
    /// else keeps the current color.
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, current: String| match lookup(key) {
            Some(value) if is_valid_override(&value) => value,
            Some(value) => {
                tracing::warn!("ignoring {key}={value:?}: expected 0-255 or a hex color");
                current
            }
            None => current,
        };

        Self {
            foreground: pick("ARROW_FOREGROUND_COLOR", self.foreground),
            highlight: pick("ARROW_HIGHLIGHT_COLOR", self.highlight),
            cursor: pick("ARROW_CURSOR_COLOR", self.cursor),
            disabled: pick("ARROW_DISABLED_COLOR", self.disabled),
            symlink: pick("ARROW_SYMLINK_COLOR", self.symlink),
            current_directory: pick("ARROW_CURRENT_DIRECTORY_COLOR", self.current_directory),
            prompt: pick("ARROW_PROMPT_COLOR", self.prompt),
            border: pick("ARROW_BORDER_COLOR", self.border),
        }
    }
}

/// Whether `value` is an ANSI index `0..=255` or six hex digits with an
/// optional leading `#`.
pub fn is_valid_override(value: &str) -> bool {
    if value.parse::<u8>().is_ok() {
        return true;
    }
    let hex = value.strip_prefix('#').unwrap_or(value);
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports ANSI indices (`"57"`), hex with or without `#` (`"#rrggbb"`)
/// and named colors (`"blue"`, `"dark_gray"`). Returns `Color::Reset` for
/// unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    if let Ok(index) = s.parse::<u8>() {
        return Color::Indexed(index);
    }

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        other => {
            let hex = other.strip_prefix('#').unwrap_or(other);
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Color::Reset;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
            Color::Rgb(channel(0), channel(2), channel(4))
        }
    }
}
