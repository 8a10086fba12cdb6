use crate::state::AppState;
use crate::types::{BodyMode, Focus, HttpMethod, InputMode};
use ratatui::widgets::{Paragraph, Wrap};

/// Lines moved per PageUp / PageDown
pub const PAGE_SCROLL_LINES: usize = 5;

/// Represents all state-changing actions driven by user input.
/// Event handlers translate keys into these; `apply_action` is the only
/// place that mutates composer and UI state in response to input.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Focus
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // Method selector
    SelectNextMethod,
    SelectPreviousMethod,
    SetMethod(HttpMethod),

    // URL input
    AppendToUrl(String),
    BackspaceUrl,
    DeleteWordUrl,
    ClearUrl,
    SetUrlError(Option<String>),

    // Body mode
    SetBodyMode(BodyMode),
    ToggleBodyMode,

    // JSON editor
    InsertJsonText(String),

    // Form data rows
    AddPair,
    RemoveSelectedPair,
    SelectPairUp,
    SelectPairDown,
    TogglePairField,
    AppendToPairCell(String),
    BackspacePairCell,

    // Response panels
    ScrollUp(usize),
    ScrollDown(usize),

    // Alert
    DismissAlert,
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::FocusNext => {
            state.ui.focus = state.ui.focus.next();
        }
        AppAction::FocusPrevious => {
            state.ui.focus = state.ui.focus.previous();
        }
        AppAction::SetFocus(focus) => {
            state.ui.focus = focus;
        }

        AppAction::SelectNextMethod => {
            state.composer.method = state.composer.method.next();
        }
        AppAction::SelectPreviousMethod => {
            state.composer.method = state.composer.method.previous();
        }
        AppAction::SetMethod(method) => {
            state.composer.method = method;
        }

        AppAction::AppendToUrl(text) => {
            state.composer.url.push_str(&text);
            state.ui.url_error = None;
        }
        AppAction::BackspaceUrl => {
            state.composer.url.pop();
            state.ui.url_error = None;
        }
        AppAction::DeleteWordUrl => {
            delete_word(&mut state.composer.url);
            state.ui.url_error = None;
        }
        AppAction::ClearUrl => {
            state.composer.url.clear();
            state.ui.url_error = None;
        }
        AppAction::SetUrlError(error) => {
            state.ui.url_error = error;
        }

        AppAction::SetBodyMode(mode) => {
            state.composer.set_body_mode(mode);
        }
        AppAction::ToggleBodyMode => {
            let mode = state.composer.body_mode.toggled();
            state.composer.set_body_mode(mode);
        }

        AppAction::InsertJsonText(text) => {
            state.composer.json_editor.insert_str_normalized(&text);
        }

        AppAction::AddPair => {
            state.composer.add_pair();
        }
        AppAction::RemoveSelectedPair => {
            let index = state.composer.selected_pair;
            state.composer.remove_pair(index);
        }
        AppAction::SelectPairUp => {
            state.composer.selected_pair = state.composer.selected_pair.saturating_sub(1);
        }
        AppAction::SelectPairDown => {
            let last = state.composer.form_data.len().saturating_sub(1);
            state.composer.selected_pair = (state.composer.selected_pair + 1).min(last);
        }
        AppAction::TogglePairField => {
            state.composer.selected_field = state.composer.selected_field.toggled();
        }
        AppAction::AppendToPairCell(text) => {
            if let Some(cell) = state.composer.selected_cell_mut() {
                cell.push_str(&text);
            }
        }
        AppAction::BackspacePairCell => {
            if let Some(cell) = state.composer.selected_cell_mut() {
                cell.pop();
            }
        }

        AppAction::ScrollUp(lines) => match state.ui.focus {
            Focus::ResponseBody => {
                state.ui.response_body_scroll = state.ui.response_body_scroll.saturating_sub(lines);
            }
            Focus::ResponseHeaders => {
                state.ui.headers_scroll = state.ui.headers_scroll.saturating_sub(lines);
            }
            _ => {}
        },
        AppAction::ScrollDown(lines) => match state.ui.focus {
            Focus::ResponseBody => {
                let max = max_scroll(&state.viewer.rendered_body(), state.ui.response_body_width);
                state.ui.response_body_scroll =
                    state.ui.response_body_scroll.saturating_add(lines).min(max);
            }
            Focus::ResponseHeaders => {
                let max = max_scroll(&state.viewer.rendered_headers(), state.ui.headers_width);
                state.ui.headers_scroll = state.ui.headers_scroll.saturating_add(lines).min(max);
            }
            _ => {}
        },

        AppAction::DismissAlert => {
            state.input_mode = InputMode::Normal;
        }
    }
}

/// Last reachable top row once `text` is wrapped to `width` columns.
/// Before the panel has been drawn the width is unknown and raw lines count.
fn max_scroll(text: &str, width: u16) -> usize {
    let rows = if width == 0 {
        text.lines().count()
    } else {
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .line_count(width)
    };
    rows.saturating_sub(1)
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    *s = s.trim_end().to_string();

    if let Some(pos) = s.rfind(|c: char| c.is_whitespace() || c == '/') {
        s.truncate(pos);
    } else {
        s.clear();
    }
}
