//! Theme and styling for the landlord console.
//!
//! Color scheme and styling helpers used throughout the interface. The
//! palette is a dark theme with a warm amber accent; all widget styles are
//! derived from component state at render time, never the other way around.

use landlord_types::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Amber accent color for highlights and focus indicators.
pub const ACCENT: Color = Color::Rgb(224, 158, 66);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(222, 222, 227);

/// Muted foreground color for hints, labels, and secondary information.
pub const FG_MUTED: Color = Color::Rgb(158, 158, 166);

/// Default border color for unfocused UI elements.
pub const BORDER: Color = Color::Rgb(70, 70, 78);

/// Focused border color.
pub const BORDER_FOCUS: Color = ACCENT;

/// Background for highlighted rows (cursor position).
pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 34, 20);

/// Success green used for positive toasts.
pub const OK: Color = Color::Rgb(120, 190, 120);

/// Warning orange.
pub const WARN: Color = Color::Rgb(222, 168, 90);

/// Error red used for failure toasts and destructive confirmations.
pub const ERR: Color = Color::Rgb(220, 96, 110);

/// Border style derived from focus state.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Style for titles and headers.
pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

/// Style for normal text content.
pub fn text_style() -> Style {
    Style::default().fg(FG)
}

/// Style for muted or secondary text.
pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Style for the row under the keyboard cursor.
pub fn highlight_style() -> Style {
    Style::default().fg(FG).bg(BG_HIGHLIGHT)
}

/// Style for selected/active items, accent without a background fill.
pub fn list_highlight_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Foreground color associated with a toast severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => ACCENT,
        Severity::Success => OK,
        Severity::Warning => WARN,
        Severity::Error => ERR,
    }
}
