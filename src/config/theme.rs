use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind dialogs.
    pub mantle: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Border color for unfocused panes.
    pub surface1: Color,
    /// Muted overlay color for titles and hints.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for the search prompt.
    pub sapphire: Color,
    /// Accent color for headings and focused borders.
    pub mauve: Color,
    /// Answers and success states.
    pub green: Color,
    /// Difficulty and attention states.
    pub yellow: Color,
    /// Errors and destructive actions.
    pub red: Color,
    /// Selection highlight.
    pub lavender: Color,
}

/// Catppuccin Mocha, the built-in palette.
const MOCHA: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    crust: Color::Rgb(0x11, 0x11, 0x1b),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
};

/// The active theme.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
