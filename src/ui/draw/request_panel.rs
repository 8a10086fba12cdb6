//! Request side of the screen
//!
//! - Request bar: method selector, URL input, send button
//! - Body mode tabs: [ JSON ] [ Form Data ]
//! - Body editor: JSON text area or key/value rows

use super::styling::{self, get_method_color};
use crate::state::AppState;
use crate::types::{BodyMode, Focus, HttpMethod, PairField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render method selector, URL input and the send button on one row
pub fn render_request_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Method
            Constraint::Min(10),    // URL
            Constraint::Length(10), // Send
        ])
        .split(area);

    render_method_selector(frame, chunks[0], state.composer.method, state.ui.focus == Focus::Method);
    render_url_input(frame, chunks[1], state);

    let send_label = if state.is_sending() { " ..." } else { " Send" };
    let send = Paragraph::new(send_label)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(61))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(send, chunks[2]);
}

fn render_method_selector(frame: &mut Frame, area: Rect, method: HttpMethod, focused: bool) {
    let text = Line::from(vec![
        Span::styled(if focused { "◀ " } else { "  " }, styling::placeholder_style()),
        Span::styled(
            format!("{:6}", method.as_str()),
            Style::default()
                .fg(get_method_color(method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(if focused { "▶" } else { " " }, styling::placeholder_style()),
    ]);

    let selector = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::border_for(focused)),
    );
    frame.render_widget(selector, area);
}

fn render_url_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.focus == Focus::Url;
    let url = &state.composer.url;

    let content = if url.is_empty() {
        Span::styled("https://example.com/api", styling::placeholder_style())
    } else {
        Span::raw(url.as_str())
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::border_for(focused))
        .title("URL");

    if let Some(error) = &state.ui.url_error {
        block = block
            .title_bottom(Span::styled(format!(" {error} "), Style::default().fg(Color::Red)))
            .border_style(Style::default().fg(Color::Red));
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let url_len = url.chars().count();
    let scroll = url_len.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(Line::from(content))
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(input, area);

    if focused {
        let x = area.x + 1 + (url_len - scroll) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Render the two body mode toggles
pub fn render_mode_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.focus == Focus::BodyMode;
    let mode = state.composer.body_mode;

    let tab = |label: &'static str, active: bool| {
        Span::styled(
            format!(" {label} "),
            if active {
                styling::active_style()
            } else {
                styling::inactive_style()
            },
        )
    };

    let tabs = Line::from(vec![
        tab(BodyMode::Json.label(), mode == BodyMode::Json),
        Span::raw("  "),
        tab(BodyMode::FormData.label(), mode == BodyMode::FormData),
    ]);

    let widget = Paragraph::new(tabs).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::border_for(focused))
            .title("Body"),
    );
    frame.render_widget(widget, area);
}

/// Render the editor for the active body mode
pub fn render_body_editor(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.focus == Focus::Body;
    match state.composer.body_mode {
        BodyMode::Json => render_json_editor(frame, area, state, focused),
        BodyMode::FormData => render_form_rows(frame, area, state, focused),
    }
}

fn render_json_editor(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let editor = &state.composer.json_editor;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::border_for(focused))
        .title("JSON");

    let inner = block.inner(area);
    let (line, col) = editor.cursor_line_col();
    let height = inner.height as usize;
    let scroll = if height == 0 { 0 } else { line.saturating_sub(height - 1) };

    let lines: Vec<Line> = if editor.content().is_empty() {
        vec![Line::from(Span::styled(
            "{ \"key\": \"value\" }",
            styling::placeholder_style(),
        ))]
    } else {
        editor
            .lines()
            .into_iter()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Yellow))))
            .collect()
    };

    let widget = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);

    if focused && inner.width > 0 {
        let x = inner.x + (col as u16).min(inner.width - 1);
        let y = inner.y + (line - scroll) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn render_form_rows(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let composer = &state.composer;
    let mut lines: Vec<Line> = Vec::new();

    for (idx, pair) in composer.form_data.iter().enumerate() {
        let is_selected = focused && idx == composer.selected_pair;
        let indicator = if is_selected { "→ " } else { "  " };

        let cell = |text: &str, placeholder: &'static str, field: PairField| {
            let editing = is_selected && composer.selected_field == field;
            if text.is_empty() && !editing {
                Span::styled(format!("[{placeholder:<12}]"), styling::placeholder_style())
            } else if editing {
                Span::styled(
                    format!("[{text}▊]"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("[{text}]"), Style::default().fg(Color::White))
            }
        };

        lines.push(Line::from(vec![
            Span::styled(indicator, Style::default().fg(Color::Yellow)),
            cell(&pair.key, "Key", PairField::Key),
            Span::raw(" "),
            cell(&pair.value, "Value", PairField::Value),
            Span::raw("  "),
            Span::styled("Remove", Style::default().fg(Color::Red)),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "  + Add Field",
        Style::default().fg(Color::Green),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::border_for(focused))
        .title(format!("Form Data ({})", composer.form_data.len()));

    let height = block.inner(area).height as usize;
    let scroll = if height == 0 {
        0
    } else {
        composer.selected_pair.saturating_sub(height.saturating_sub(2))
    };

    let widget = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}
