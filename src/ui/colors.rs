//! Color definitions for amino acid labels, base pairs and UI elements

use ratatui::style::Color;

use crate::sequence::{START_LABEL, STOP_LABEL, UNKNOWN_LABEL};

pub const BACKBONE_COLOR: Color = Color::Gray;

/// Get the display color for an amino acid label
pub fn get_amino_acid_color(amino: &str) -> Color {
    match amino {
        START_LABEL => Color::Green,
        STOP_LABEL => Color::Red,
        UNKNOWN_LABEL => Color::DarkGray,
        "Phe" => Color::LightRed,
        "Leu" => Color::LightGreen,
        "Ile" => Color::Yellow,
        "Val" => Color::Magenta,
        "Ala" => Color::LightBlue,
        _ => Color::White,
    }
}

/// Parse a `#rrggbb` string into a terminal color, falling back to black
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Black;
    }

    let channel = |range: std::ops::Range<usize>| {
        digits.get(range).and_then(|part| u8::from_str_radix(part, 16).ok())
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Black,
    }
}

/// Color for a base letter in either alphabet
pub fn get_base_color(base: char) -> Color {
    match base {
        'A' => Color::Blue,
        'T' => Color::Yellow,
        'U' => Color::LightMagenta,
        'G' => Color::Green,
        'C' => Color::Red,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#3498db"), Color::Rgb(0x34, 0x98, 0xdb));
        assert_eq!(hex_to_color("#000000"), Color::Rgb(0, 0, 0));
        assert_eq!(hex_to_color("black"), Color::Black);
        assert_eq!(hex_to_color("#zz0000"), Color::Black);
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(get_amino_acid_color("STOP"), Color::Red);
        assert_eq!(get_amino_acid_color("Start (Met)"), Color::Green);
    }
}
