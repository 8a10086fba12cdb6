//! Per-focus key handlers
//!
//! Keys reach these only after the global bindings (quit, send, focus
//! cycling, mode toggle) have been checked in `handle_key`.

use super::helpers::is_ctrl;
use super::submit::handle_submit;
use crate::actions::{apply_action, AppAction, PAGE_SCROLL_LINES};
use crate::composer::OutgoingRequest;
use crate::state::AppState;
use crate::types::{BodyMode, Focus, HttpMethod};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_focused_key(key: KeyEvent, state: &mut AppState) -> Option<OutgoingRequest> {
    match state.ui.focus {
        Focus::Method => handle_method_key(key, state),
        Focus::Url => handle_url_key(key, state),
        Focus::BodyMode => {
            handle_body_mode_key(key, state);
            None
        }
        Focus::Body => {
            match state.composer.body_mode {
                BodyMode::Json => handle_json_key(key, state),
                BodyMode::FormData => handle_form_key(key, state),
            }
            None
        }
        Focus::ResponseBody | Focus::ResponseHeaders => {
            handle_scroll_key(key, state);
            None
        }
    }
}

fn handle_method_key(key: KeyEvent, state: &mut AppState) -> Option<OutgoingRequest> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            apply_action(AppAction::SelectPreviousMethod, state);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            apply_action(AppAction::SelectNextMethod, state);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            apply_action(AppAction::SetMethod(HttpMethod::ALL[idx]), state);
        }
        KeyCode::Enter => return handle_submit(state),
        _ => {}
    }
    None
}

fn handle_url_key(key: KeyEvent, state: &mut AppState) -> Option<OutgoingRequest> {
    match key.code {
        KeyCode::Enter => return handle_submit(state),
        KeyCode::Backspace => apply_action(AppAction::BackspaceUrl, state),
        KeyCode::Char('w') if is_ctrl(&key) => apply_action(AppAction::DeleteWordUrl, state),
        KeyCode::Char('l') if is_ctrl(&key) => apply_action(AppAction::ClearUrl, state),
        KeyCode::Char(c) if !is_ctrl(&key) => {
            apply_action(AppAction::AppendToUrl(c.to_string()), state);
        }
        _ => {}
    }
    None
}

fn handle_body_mode_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
            apply_action(AppAction::ToggleBodyMode, state);
        }
        KeyCode::Char('j') => apply_action(AppAction::SetBodyMode(BodyMode::Json), state),
        KeyCode::Char('f') => apply_action(AppAction::SetBodyMode(BodyMode::FormData), state),
        _ => {}
    }
}

fn handle_json_key(key: KeyEvent, state: &mut AppState) {
    state.composer.json_editor.handle_key_event(key);
}

fn handle_form_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('n') if is_ctrl(&key) => apply_action(AppAction::AddPair, state),
        KeyCode::Char('d') if is_ctrl(&key) => apply_action(AppAction::RemoveSelectedPair, state),
        KeyCode::Up => apply_action(AppAction::SelectPairUp, state),
        KeyCode::Down => apply_action(AppAction::SelectPairDown, state),
        KeyCode::Left | KeyCode::Right | KeyCode::Enter => {
            apply_action(AppAction::TogglePairField, state);
        }
        KeyCode::Backspace => apply_action(AppAction::BackspacePairCell, state),
        KeyCode::Char(c) if !is_ctrl(&key) => {
            apply_action(AppAction::AppendToPairCell(c.to_string()), state);
        }
        _ => {}
    }
}

fn handle_scroll_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => apply_action(AppAction::ScrollUp(1), state),
        KeyCode::Down | KeyCode::Char('j') => apply_action(AppAction::ScrollDown(1), state),
        KeyCode::PageUp => apply_action(AppAction::ScrollUp(PAGE_SCROLL_LINES), state),
        KeyCode::PageDown => apply_action(AppAction::ScrollDown(PAGE_SCROLL_LINES), state),
        KeyCode::Home => apply_action(AppAction::ScrollUp(usize::MAX), state),
        _ => {}
    }
}
