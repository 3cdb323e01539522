//! Nerd Font icon mapping for directory rows.
//!
//! Maps well-known directory names to Nerd Font unicode glyphs.

use arrow_core::{DisplayRow, Order};

/// Returns the icon (with trailing space) for a row, or `""` when icons are off.
pub fn icon_for_row(row: &DisplayRow, show_icons: bool) -> &'static str {
    if !show_icons {
        return "";
    }
    if row.is_selected {
        return "\u{f07c} "; // open folder
    }
    if row.is_hidden && icon_for_dirname(&row.icon_key).is_none() {
        return "\u{f114} ";
    }
    icon_for_dirname(&row.icon_key).unwrap_or("\u{e5fe} ")
}

fn icon_for_dirname(key: &str) -> Option<&'static str> {
    let icon = match key {
        "desktop" => "\u{f108} ",
        "downloads" => "\u{f019} ",
        "pictures" => "\u{f03e} ",
        "node_modules" => "\u{e5fa} ",
        "elm-stuff" => "\u{e62c} ",
        ".git" => "\u{e5fb} ",
        ".github" => "\u{e5fd} ",
        _ => return None,
    };
    Some(icon)
}

/// Text of the clickable order indicator in the header.
///
/// With icons the indicator is a glyph; without, the order name.
pub fn order_indicator(order: Order, show_icons: bool) -> String {
    if show_icons {
        match order {
            Order::ByName => " \u{f413} ".to_string(),
            Order::ByModTime => " \u{e384} ".to_string(),
        }
    } else {
        format!(" {} ", order.indicator_key())
    }
}
