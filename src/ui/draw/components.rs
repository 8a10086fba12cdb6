//! Reusable UI components
//!
//! Header (title + in-flight indicator) and footer (key help).

use crate::state::AppState;
use crate::types::{BodyMode, Focus, SendState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with the send status
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let status = match state.send_state {
        SendState::Sending => Span::styled(
            format!(
                "{} Sending... ({} in flight)",
                SPINNER[spinner_index % SPINNER.len()],
                state.in_flight
            ),
            Style::default().fg(Color::Yellow),
        ),
        SendState::Succeeded => Span::styled("Ready", Style::default().fg(Color::Green)),
        SendState::Failed => Span::styled("Last request failed", Style::default().fg(Color::Red)),
        SendState::Idle => Span::styled("Ready", Style::default().fg(Color::Gray)),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("lazy postman tui", Style::default().fg(Color::Cyan)),
        Span::raw(" - "),
        status,
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help for the focused widget
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let focus_help = match state.ui.focus {
        Focus::Method => "←/→ or 1-5:Method Enter:Send",
        Focus::Url => "Type URL Ctrl+W:Word Ctrl+L:Clear Enter:Send Esc:Leave",
        Focus::BodyMode => "←/→ or j/f:JSON/Form Data",
        Focus::Body => match state.composer.body_mode {
            BodyMode::Json => "Type JSON Enter:Newline Ctrl+L:Clear",
            BodyMode::FormData => "↑/↓:Row ←/→:Key/Value Ctrl+N:Add Ctrl+D:Remove",
        },
        Focus::ResponseBody | Focus::ResponseHeaders => "j/k/↑/↓:Scroll PgUp/PgDn q:Quit",
    };

    let footer_text = format!("Tab:Focus {focus_help} | Ctrl+S/F5:Send F2:Mode Ctrl+C:Quit");

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
