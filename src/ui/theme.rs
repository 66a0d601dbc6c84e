use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Sky blue bars and nodes
    pub secondary: Color, // Orange for found/peeked
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub compare: Color,   // Yellow
    pub swap: Color,      // Pink
    pub pivot: Color,     // Teal
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color, // Status and input bar background
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(56, 189, 248),
    secondary: Color::Rgb(249, 115, 22),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    compare: Color::Rgb(249, 226, 175),
    swap: Color::Rgb(245, 194, 231),
    pivot: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(241, 245, 249),
    fg: Color::Rgb(30, 41, 59),
    primary: Color::Rgb(14, 165, 233),
    secondary: Color::Rgb(234, 88, 12),
    comment: Color::Rgb(100, 116, 139),
    success: Color::Rgb(22, 163, 74),
    error: Color::Rgb(220, 38, 38),
    compare: Color::Rgb(202, 138, 4),
    swap: Color::Rgb(219, 39, 119),
    pivot: Color::Rgb(13, 148, 136),
    border_focused: Color::Rgb(202, 138, 4),
    border_normal: Color::Rgb(148, 163, 184),
    bar_bg: Color::Rgb(226, 232, 240),
};

/// Which palette is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> &'static Theme {
        match self {
            ThemeMode::Dark => &DARK_THEME,
            ThemeMode::Light => &LIGHT_THEME,
        }
    }
}
