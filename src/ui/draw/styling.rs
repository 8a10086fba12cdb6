//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::types::HttpMethod;
use crate::viewer::StatusBadge;
use ratatui::style::{Color, Modifier, Style};

/// Get the color for an HTTP method
pub fn get_method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Patch => Color::Magenta,
        HttpMethod::Delete => Color::Red,
    }
}

/// Status badge colors: green for a status, red for "Error", gray when empty
pub fn status_badge_style(badge: StatusBadge) -> Style {
    match badge {
        StatusBadge::Success => Style::default().fg(Color::Black).bg(Color::LightGreen),
        StatusBadge::Error => Style::default().fg(Color::White).bg(Color::Red),
        StatusBadge::Absent => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

pub fn time_badge_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::LightBlue)
}

pub fn size_badge_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::LightMagenta)
}

/// Active tab / selected control
pub fn active_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Indexed(61))
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn border_for(focused: bool) -> Style {
    Style::default().fg(if focused {
        focused_border()
    } else {
        unfocused_border()
    })
}
