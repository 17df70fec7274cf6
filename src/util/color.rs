//! Note color normalization helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::config::DEFAULT_NOTE_COLOR;

/// Swatches offered by the task form, default first.
pub const NOTE_PALETTE: [&str; 6] = [DEFAULT_NOTE_COLOR, "#ffccbc", "#c8e6c9", "#bbdefb", "#e1bee7", "#f5f5f5"];

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalize a note color to canonical lowercase `#rrggbb`.
///
/// Missing or unparseable values resolve to [`DEFAULT_NOTE_COLOR`].
pub fn note_color(value: Option<&str>) -> String {
    let (r, g, b) = value
        .and_then(parse_hex_rgb)
        .or_else(|| parse_hex_rgb(DEFAULT_NOTE_COLOR))
        .unwrap_or((255, 249, 196));
    format!("#{r:02x}{g:02x}{b:02x}")
}
