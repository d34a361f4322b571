use ratatui::style::Color;

/// Les 16 couleurs console classiques, dans l'ordre console.
///
/// Code 1 is dark blue here, not ANSI red: saved movies were authored
/// against this ordering.
pub const CONSOLE_PALETTE: [Color; 16] = [
    Color::Black,        // 0  Black
    Color::Indexed(4),   // 1  DarkBlue
    Color::Indexed(2),   // 2  DarkGreen
    Color::Indexed(6),   // 3  DarkCyan
    Color::Indexed(1),   // 4  DarkRed
    Color::Indexed(5),   // 5  DarkMagenta
    Color::Indexed(3),   // 6  DarkYellow
    Color::Indexed(7),   // 7  Gray
    Color::Indexed(8),   // 8  DarkGray
    Color::Indexed(12),  // 9  Blue
    Color::Indexed(10),  // 10 Green
    Color::Indexed(14),  // 11 Cyan
    Color::Indexed(9),   // 12 Red
    Color::Indexed(13),  // 13 Magenta
    Color::Indexed(11),  // 14 Yellow
    Color::Indexed(15),  // 15 White
];

/// Map a color code to a terminal background color.
///
/// Codes 0–15 use [`CONSOLE_PALETTE`]; higher codes are 256-color indices.
///
/// # Example
/// ```
/// use ratatui::style::Color;
/// use vr_render::palette::code_to_color;
/// assert_eq!(code_to_color(0), Color::Black);
/// assert_eq!(code_to_color(1), Color::Indexed(4));
/// assert_eq!(code_to_color(200), Color::Indexed(200));
/// ```
#[inline]
#[must_use]
pub fn code_to_color(code: u8) -> Color {
    CONSOLE_PALETTE
        .get(usize::from(code))
        .copied()
        .unwrap_or(Color::Indexed(code))
}

/// Color for a cell, honoring the debug substitution of code 0.
#[inline]
#[must_use]
pub fn cell_color(code: u8, debug: bool, empty_color: u8) -> Color {
    if debug && code == 0 {
        code_to_color(empty_color)
    } else {
        code_to_color(code)
    }
}
