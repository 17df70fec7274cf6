use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("FFF9C4"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn note_color_canonicalizes_valid_values() {
    assert_eq!(note_color(Some("#C8E6C9")), "#c8e6c9");
    assert_eq!(note_color(Some("#abc")), "#aabbcc");
}

#[test]
fn note_color_defaults_missing_or_invalid_values() {
    assert_eq!(note_color(None), DEFAULT_NOTE_COLOR);
    assert_eq!(note_color(Some("")), DEFAULT_NOTE_COLOR);
    assert_eq!(note_color(Some("yellow")), DEFAULT_NOTE_COLOR);
}

#[test]
fn palette_entries_are_valid_and_start_with_default() {
    assert_eq!(NOTE_PALETTE[0], DEFAULT_NOTE_COLOR);
    assert!(NOTE_PALETTE.iter().all(|c| parse_hex_rgb(c).is_some()));
}
