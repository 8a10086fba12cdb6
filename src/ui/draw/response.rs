//! Response side of the screen: summary badges, body and headers panels

use super::styling;
use crate::state::AppState;
use crate::types::Focus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the Status / Time / Size badges
pub fn render_response_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let viewer = &state.viewer;

    let badge = |label: &str, value: &str, style: Style| {
        vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {value} "), style.add_modifier(Modifier::BOLD)),
            Span::raw("   "),
        ]
    };

    let mut spans = badge(
        "Status",
        viewer.status_display(),
        styling::status_badge_style(viewer.status_badge()),
    );
    spans.extend(badge("Time", viewer.time_display(), styling::time_badge_style()));
    spans.extend(badge("Size", viewer.size_display(), styling::size_badge_style()));

    let summary = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Response"));
    frame.render_widget(summary, area);
}

/// Render the line-numbered response body
pub fn render_response_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.focus == Focus::ResponseBody;
    let rendered = state.viewer.rendered_body();

    let lines: Vec<Line> = rendered
        .split('\n')
        .map(|line| match line.split_once(". ") {
            Some((number, rest)) => Line::from(vec![
                Span::styled(format!("{number}. "), styling::placeholder_style()),
                Span::raw(rest.to_string()),
            ]),
            None => Line::from(line.to_string()),
        })
        .collect();

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::border_for(focused))
                .title("Response Body"),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(state.ui.response_body_scroll), 0));

    frame.render_widget(content, area);
}

pub fn render_response_headers(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.focus == Focus::ResponseHeaders;

    let content = Paragraph::new(state.viewer.rendered_headers())
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::border_for(focused))
                .title("Response Headers"),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(state.ui.headers_scroll), 0));

    frame.render_widget(content, area);
}

/// Paragraph offsets are u16; saturate instead of wrapping back to the top
fn scroll_offset(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_saturates() {
        assert_eq!(scroll_offset(12), 12);
        assert_eq!(scroll_offset(70_000), u16::MAX);
    }
}
