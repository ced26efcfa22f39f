//! Colors used to draw a select.

use crate::types::Color;

/// Palette for a select control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectTheme {
    /// Control and list background.
    pub background: Color,
    /// Label text.
    pub text: Color,
    /// Borders, divider, caret, clear button and placeholder.
    pub muted: Color,
    /// Border of the focused control.
    pub focus: Color,
    /// Hovered option row background and hovered clear button.
    pub accent: Color,
    /// Text drawn on top of `accent`.
    pub accent_text: Color,
    /// Text of options that are part of the selection.
    pub selected_text: Color,
    /// Background of a hovered badge.
    pub badge_hover_bg: Color,
    /// Text and remove mark of a hovered badge.
    pub badge_hover_fg: Color,
}

impl Default for SelectTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(255, 255, 255),
            text: Color::rgb(0, 0, 0),
            muted: Color::hex(0x777777),
            focus: Color::rgb(0, 0, 255),
            accent: Color::hex(0x5050db),
            accent_text: Color::rgb(255, 255, 255),
            selected_text: Color::hex(0x7575e6),
            badge_hover_bg: Color::hsl(0.0, 1.0, 0.9),
            badge_hover_fg: Color::hsl(0.0, 1.0, 0.5),
        }
    }
}
