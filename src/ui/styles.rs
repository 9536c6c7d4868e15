use ratatui::prelude::*;

/// Catppuccin Mocha color theme
/// https://github.com/catppuccin/catppuccin
pub struct Theme;

impl Theme {
    // Base colors (Catppuccin Mocha - darkened)
    pub const CRUST: Color = Color::Rgb(17, 17, 27);          // #11111b - Crust (darkest)

    pub const BG: Color = Self::CRUST;
    pub const BG_DARK: Color = Color::Rgb(12, 12, 20);        // Even darker for modals
    pub const SURFACE0: Color = Color::Rgb(49, 50, 68);       // #313244 - Surface0
    pub const FG: Color = Color::Rgb(205, 214, 244);          // #cdd6f4 - Text
    pub const FG_DARK: Color = Color::Rgb(147, 153, 178);     // #9399b2 - Subtext1 (brighter)
    pub const OVERLAY: Color = Color::Rgb(127, 132, 156);     // #7f849c - Overlay1

    // Accent colors (Catppuccin Mocha)
    pub const FLAMINGO: Color = Color::Rgb(242, 205, 205);    // #f2cdcd
    pub const PINK: Color = Color::Rgb(245, 194, 231);        // #f5c2e7
    pub const MAUVE: Color = Color::Rgb(203, 166, 247);       // #cba6f7
    pub const RED: Color = Color::Rgb(243, 139, 168);         // #f38ba8
    pub const PEACH: Color = Color::Rgb(250, 179, 135);       // #fab387
    pub const YELLOW: Color = Color::Rgb(249, 226, 175);      // #f9e2af
    pub const GREEN: Color = Color::Rgb(166, 227, 161);       // #a6e3a1
    pub const TEAL: Color = Color::Rgb(148, 226, 213);        // #94e2d5
    pub const SAPPHIRE: Color = Color::Rgb(116, 199, 236);    // #74c7ec
    pub const BLUE: Color = Color::Rgb(137, 180, 250);        // #89b4fa
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254);    // #b4befe

    // UI elements
    pub const BORDER: Color = Self::SURFACE0;
    pub const BORDER_FOCUSED: Color = Self::MAUVE;

    // Charts
    pub const BAR: Color = Self::GREEN;
    pub const AXIS: Color = Self::OVERLAY;

    // Modal
    pub const MODAL_BG: Color = Self::BG_DARK;
    pub const MODAL_BORDER: Color = Self::MAUVE;
}

/// Pie slice colors, cycled when there are more slices than colors
const SLICE_COLORS: &[Color] = &[
    Theme::BLUE,
    Theme::PEACH,
    Theme::GREEN,
    Theme::RED,
    Theme::MAUVE,
    Theme::YELLOW,
    Theme::TEAL,
    Theme::PINK,
    Theme::SAPPHIRE,
    Theme::FLAMINGO,
];

/// Color for the n-th pie slice
pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Create a style for borders
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Theme::BORDER_FOCUSED)
    } else {
        Style::default().fg(Theme::BORDER)
    }
}

/// Create a style for panel titles
pub fn title_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Theme::LAVENDER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::OVERLAY)
    }
}

/// Create a keybinding span (highlighted key)
pub fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        format!(" {} ", key),
        Style::default()
            .bg(Theme::MAUVE)
            .fg(Theme::BG_DARK)
            .add_modifier(Modifier::BOLD),
    )
}

/// Create a keybinding description span (with trailing separator)
pub fn key_desc_span(desc: &str) -> Span<'_> {
    Span::styled(
        format!(" {}   ", desc),  // Space before, triple space after
        Style::default().fg(Theme::FG_DARK),
    )
}
