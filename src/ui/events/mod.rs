//! Event handling system for lazy-postman-tui
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles two input modes:
//! - Normal: Editing the request and browsing the response
//! - Alert: A blocking message that only accepts dismissal
//!
//! # Architecture
//!
//! Input events generate AppActions that are applied to AppState via the
//! apply_action function in actions.rs. A submit yields an `OutgoingRequest`
//! which the caller hands to the HTTP layer.
//!
//! # Lock Management
//!
//! `handle_events` takes the write lock once per event and releases it before
//! returning, so background requests can settle between frames.

mod composer;
mod helpers;
mod submit;

use crate::actions::{apply_action, AppAction};
use crate::composer::OutgoingRequest;
use crate::state::AppState;
use crate::types::{BodyMode, Focus, InputMode};
use color_eyre::{eyre::eyre, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use helpers::{collect_paste_batch, is_ctrl, ready_events, single_line};
use submit::handle_submit;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll for one terminal event and apply it.
    /// Returns the request to send when the event was a submit.
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
    ) -> Result<Option<OutgoingRequest>> {
        if !event::poll(std::time::Duration::from_millis(50))? {
            return Ok(None);
        }

        let event = event::read()?;
        let mut s = state
            .write()
            .map_err(|_| eyre!("Application state lock poisoned"))?;

        Ok(self.handle_event(event, &mut s, &mut ready_events()))
    }

    /// Apply one event. A typed character in a text field also drains the
    /// characters already queued in `ready`; the event that ends that burst
    /// is dispatched right after it.
    pub fn handle_event<I>(
        &mut self,
        event: Event,
        state: &mut AppState,
        ready: &mut I,
    ) -> Option<OutgoingRequest>
    where
        I: Iterator<Item = Event>,
    {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(c) = typed_char(&key, state) {
                    let pending = handle_typed_batch(c, state, &mut *ready);
                    return pending.and_then(|next| self.handle_event(next, state, ready));
                }
                self.handle_key(key, state)
            }
            Event::Paste(text) => {
                handle_paste(&text, state);
                None
            }
            _ => None,
        }
    }

    /// Dispatch a single key press
    pub fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> Option<OutgoingRequest> {
        if key.code == KeyCode::Char('c') && is_ctrl(&key) {
            self.should_quit = true;
            return None;
        }

        if let InputMode::Alert(_) = state.input_mode {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                apply_action(AppAction::DismissAlert, state);
            }
            return None;
        }

        match key.code {
            KeyCode::Char('s') if is_ctrl(&key) => handle_submit(state),
            KeyCode::F(5) => handle_submit(state),
            KeyCode::F(2) => {
                apply_action(AppAction::ToggleBodyMode, state);
                None
            }
            KeyCode::Tab => {
                apply_action(AppAction::FocusNext, state);
                None
            }
            KeyCode::BackTab => {
                apply_action(AppAction::FocusPrevious, state);
                None
            }
            KeyCode::Esc if state.ui.focus.accepts_text() => {
                // Leave the text field so single-letter commands work again
                apply_action(AppAction::SetFocus(Focus::ResponseBody), state);
                None
            }
            KeyCode::Char('q') if !state.ui.focus.accepts_text() && !is_ctrl(&key) => {
                self.should_quit = true;
                None
            }
            _ => composer::handle_focused_key(key, state),
        }
    }
}

/// A plain character destined for a text field, eligible for paste batching
fn typed_char(key: &KeyEvent, state: &AppState) -> Option<char> {
    if state.input_mode != InputMode::Normal || !state.ui.focus.accepts_text() {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if !is_ctrl(key) => Some(c),
        _ => None,
    }
}

/// Insert a burst of typed characters into the focused field and return
/// the event that ended it
fn handle_typed_batch<I>(initial: char, state: &mut AppState, ready: I) -> Option<Event>
where
    I: Iterator<Item = Event>,
{
    match (state.ui.focus, state.composer.body_mode) {
        (Focus::Body, BodyMode::Json) => {
            let batch = collect_paste_batch(initial, ready, true);
            apply_action(AppAction::InsertJsonText(batch.text), state);
            batch.pending
        }
        (Focus::Body, BodyMode::FormData) => {
            let batch = collect_paste_batch(initial, ready, false);
            apply_action(AppAction::AppendToPairCell(batch.text), state);
            batch.pending
        }
        _ => {
            let batch = collect_paste_batch(initial, ready, false);
            apply_action(AppAction::AppendToUrl(batch.text), state);
            batch.pending
        }
    }
}

/// Bracketed paste goes to the focused text field; elsewhere it is ignored
pub fn handle_paste(text: &str, state: &mut AppState) {
    if state.input_mode != InputMode::Normal {
        return;
    }
    match state.ui.focus {
        Focus::Url => apply_action(AppAction::AppendToUrl(single_line(text)), state),
        Focus::Body => match state.composer.body_mode {
            BodyMode::Json => apply_action(AppAction::InsertJsonText(text.to_string()), state),
            BodyMode::FormData => {
                apply_action(AppAction::AppendToPairCell(single_line(text)), state);
            }
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HttpMethod, PairField};
    use crossterm::event::{KeyEventState, KeyModifiers};
    use serde_json::json;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(handler: &mut EventHandler, state: &mut AppState, text: &str) {
        for c in text.chars() {
            handler.handle_key(press(KeyCode::Char(c)), state);
        }
    }

    #[test]
    fn test_typing_into_url() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();

        type_str(&mut handler, &mut state, "http://localhost/q");
        assert_eq!(state.composer.url, "http://localhost/q");
        assert!(!handler.should_quit);

        handler.handle_key(press(KeyCode::Backspace), &mut state);
        assert_eq!(state.composer.url, "http://localhost/");

        handler.handle_key(ctrl('l'), &mut state);
        assert!(state.composer.url.is_empty());
    }

    #[test]
    fn test_q_quits_outside_text_fields() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.ui.focus = Focus::ResponseBody;

        handler.handle_key(press(KeyCode::Char('q')), &mut state);
        assert!(handler.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_alert() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.input_mode = InputMode::Alert("Invalid JSON format".to_string());

        handler.handle_key(ctrl('c'), &mut state);
        assert!(handler.should_quit);
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.input_mode = InputMode::Alert("Invalid JSON format".to_string());

        handler.handle_key(press(KeyCode::Char('x')), &mut state);
        handler.handle_key(press(KeyCode::Tab), &mut state);
        assert!(state.composer.url.is_empty());
        assert_eq!(state.ui.focus, Focus::Url);

        handler.handle_key(press(KeyCode::Esc), &mut state);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_enter_on_url_submits() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        type_str(&mut handler, &mut state, "http://localhost:5000/items");

        let request = handler.handle_key(press(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://localhost:5000/items");
        assert_eq!(request.data, None);
    }

    #[test]
    fn test_ctrl_s_submits_from_body() {
        let mut handler = EventHandler::new();
        let mut state = AppState::with_request_defaults(
            Some("http://localhost:5000/items".to_string()),
            HttpMethod::Post,
        );
        state.ui.focus = Focus::Body;
        state.composer.json_editor.set_content(String::new());
        type_str(&mut handler, &mut state, "{\"a\":1}");

        let request = handler.handle_key(ctrl('s'), &mut state).unwrap();
        assert_eq!(request.data, Some(json!({"a": 1})));
    }

    #[test]
    fn test_invalid_json_submit_raises_alert() {
        let mut handler = EventHandler::new();
        let mut state = AppState::with_request_defaults(
            Some("http://localhost:5000/items".to_string()),
            HttpMethod::Post,
        );
        state.composer.json_editor.set_content("{invalid".to_string());

        assert!(handler.handle_key(press(KeyCode::F(5)), &mut state).is_none());
        assert_eq!(
            state.input_mode,
            InputMode::Alert("Invalid JSON format".to_string())
        );
    }

    #[test]
    fn test_method_selection_wraps() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.ui.focus = Focus::Method;

        handler.handle_key(press(KeyCode::Left), &mut state);
        assert_eq!(state.composer.method, HttpMethod::Delete);
        handler.handle_key(press(KeyCode::Right), &mut state);
        assert_eq!(state.composer.method, HttpMethod::Get);

        handler.handle_key(press(KeyCode::Char('4')), &mut state);
        assert_eq!(state.composer.method, HttpMethod::Patch);
    }

    #[test]
    fn test_f2_toggles_mode_from_anywhere() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();

        handler.handle_key(press(KeyCode::F(2)), &mut state);
        assert_eq!(state.composer.body_mode, BodyMode::FormData);
        handler.handle_key(press(KeyCode::F(2)), &mut state);
        assert_eq!(state.composer.body_mode, BodyMode::Json);
    }

    #[test]
    fn test_body_mode_shortcuts() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.ui.focus = Focus::BodyMode;

        handler.handle_key(press(KeyCode::Char('f')), &mut state);
        assert_eq!(state.composer.body_mode, BodyMode::FormData);
        handler.handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.composer.body_mode, BodyMode::Json);
    }

    #[test]
    fn test_form_row_editing() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.composer.set_body_mode(BodyMode::FormData);
        state.ui.focus = Focus::Body;

        type_str(&mut handler, &mut state, "name");
        handler.handle_key(press(KeyCode::Right), &mut state);
        assert_eq!(state.composer.selected_field, PairField::Value);
        type_str(&mut handler, &mut state, "quiz");

        handler.handle_key(ctrl('n'), &mut state);
        assert_eq!(state.composer.form_data.len(), 2);
        assert_eq!(state.composer.selected_pair, 1);

        handler.handle_key(ctrl('d'), &mut state);
        assert_eq!(state.composer.form_data.len(), 1);
        assert_eq!(state.composer.form_data[0].key, "name");
        assert_eq!(state.composer.form_data[0].value, "quiz");
        assert!(!handler.should_quit);
    }

    #[test]
    fn test_json_enter_inserts_newline() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.ui.focus = Focus::Body;
        state.composer.json_editor.set_content(String::new());

        type_str(&mut handler, &mut state, "{");
        assert!(handler.handle_key(press(KeyCode::Enter), &mut state).is_none());
        type_str(&mut handler, &mut state, "}");
        assert_eq!(state.composer.json_editor.content(), "{\n}");
    }

    #[test]
    fn test_esc_leaves_text_field() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();

        handler.handle_key(press(KeyCode::Esc), &mut state);
        assert_eq!(state.ui.focus, Focus::ResponseBody);
        handler.handle_key(press(KeyCode::Char('q')), &mut state);
        assert!(handler.should_quit);
    }

    #[test]
    fn test_paste_into_focused_field() {
        let mut state = AppState::default();
        handle_paste("http://a.example/\n", &mut state);
        assert_eq!(state.composer.url, "http://a.example/");

        state.ui.focus = Focus::Body;
        state.composer.json_editor.set_content(String::new());
        handle_paste("{\r\n\"a\": 1\r\n}", &mut state);
        assert_eq!(state.composer.json_editor.content(), "{\n\"a\": 1\n}");

        state.ui.focus = Focus::ResponseHeaders;
        handle_paste("ignored", &mut state);
        assert_eq!(state.composer.url, "http://a.example/");
    }

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn pressed(c: char) -> Event {
        key_event(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn released(c: char) -> Event {
        key_event(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_key_releases_do_not_double_type() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        let mut queued = vec![released('a'), pressed('b'), released('b')].into_iter();

        handler.handle_event(pressed('a'), &mut state, &mut queued);
        handler.handle_event(released('b'), &mut state, &mut std::iter::empty());
        assert_eq!(state.composer.url, "ab");
    }

    #[test]
    fn test_key_ending_a_burst_is_still_handled() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        let ctrl_s = key_event(KeyCode::Char('s'), KeyModifiers::CONTROL, KeyEventKind::Press);
        let mut queued = "ttp://localhost/items"
            .chars()
            .map(pressed)
            .chain([ctrl_s])
            .collect::<Vec<_>>()
            .into_iter();

        let request = handler.handle_event(pressed('h'), &mut state, &mut queued);
        assert_eq!(request.map(|r| r.url).as_deref(), Some("http://localhost/items"));
    }

    #[test]
    fn test_backspace_after_burst_in_json_body() {
        let mut handler = EventHandler::new();
        let mut state = AppState::default();
        state.ui.focus = Focus::Body;
        state.composer.json_editor.set_content(String::new());
        let enter = key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
        let backspace = key_event(KeyCode::Backspace, KeyModifiers::NONE, KeyEventKind::Press);
        let mut queued = vec![enter, pressed('}'), pressed('x'), backspace].into_iter();

        handler.handle_event(pressed('{'), &mut state, &mut queued);
        assert_eq!(state.composer.json_editor.content(), "{\n}");
    }
}
