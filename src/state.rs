use crate::composer::{ComposerState, OutgoingRequest};
use crate::editor::BodyEditor;
use crate::request::{HttpReply, RequestError};
use crate::types::{Focus, HttpMethod, InputMode, SendState, SubmitFields};
use crate::viewer::ViewerState;

/// UI-only state: focus, scroll offsets, inline validation
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,

    /// Scroll offset for response body panel (lines)
    pub response_body_scroll: usize,

    /// Scroll offset for headers panel (lines)
    pub headers_scroll: usize,

    /// Inner widths of the response panels as last drawn; 0 before the first frame
    pub response_body_width: u16,
    pub headers_width: u16,

    /// Inline message under the URL input when submit was blocked
    pub url_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub composer: ComposerState,
    pub viewer: ViewerState,
    pub ui: UiState,
    pub input_mode: InputMode,
    pub send_state: SendState,
    /// Calls spawned but not yet settled
    pub in_flight: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            composer: ComposerState::default(),
            viewer: ViewerState::default(),
            ui: UiState::default(),
            input_mode: InputMode::Normal,
            send_state: SendState::Idle,
            in_flight: 0,
        }
    }
}

impl AppState {
    /// Start with a prefilled URL and method
    pub fn with_request_defaults(url: Option<String>, method: HttpMethod) -> Self {
        let mut state = Self::default();
        state.composer.url = url.unwrap_or_default();
        state.composer.method = method;
        state
    }

    /// Replace the JSON editor's skeleton with configured text
    pub fn with_initial_body(mut self, body: Option<String>) -> Self {
        if let Some(body) = body {
            self.composer.json_editor = BodyEditor::with_content(body);
        }
        self
    }

    /// Current values of the method selector and URL input
    pub fn submit_fields(&self) -> SubmitFields {
        SubmitFields {
            method: self.composer.method,
            url: self.composer.url.clone(),
        }
    }

    /// Build the request for a submit. On a malformed body the alert is
    /// raised and `None` is returned; the viewer is left as it was.
    pub fn prepare_submit(&mut self, fields: &SubmitFields) -> Option<OutgoingRequest> {
        match self.composer.build_request(fields) {
            Ok(request) => Some(request),
            Err(e) => {
                tracing::warn!("Submit aborted: {e}");
                self.input_mode = InputMode::Alert(e.alert_message().to_string());
                None
            }
        }
    }

    pub fn begin_send(&mut self) {
        self.in_flight += 1;
        self.send_state = SendState::Sending;
    }

    /// Replace the viewer wholesale with the settled outcome
    pub fn finish_send(&mut self, outcome: Result<HttpReply, RequestError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        let settled = match &outcome {
            Ok(reply) => {
                self.viewer = ViewerState::from_reply(reply);
                SendState::Succeeded
            }
            Err(error) => {
                self.viewer = ViewerState::from_error(error);
                SendState::Failed
            }
        };

        self.send_state = if self.in_flight > 0 {
            SendState::Sending
        } else {
            settled
        };
        self.ui.response_body_scroll = 0;
        self.ui.headers_scroll = 0;
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn ok_reply() -> HttpReply {
        HttpReply {
            status: 200,
            headers: vec![("x-test".to_string(), "1".to_string())],
            data: json!({"ok": true}),
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_invalid_json_raises_alert_and_keeps_viewer() {
        let mut state = AppState::default();
        state.begin_send();
        state.finish_send(Ok(ok_reply()));
        let before = state.viewer.clone();

        state.composer.json_editor.set_content("{invalid".to_string());
        let fields = SubmitFields {
            method: HttpMethod::Post,
            url: "http://localhost/x".to_string(),
        };

        assert!(state.prepare_submit(&fields).is_none());
        assert_eq!(
            state.input_mode,
            InputMode::Alert("Invalid JSON format".to_string())
        );
        assert_eq!(state.viewer, before);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_submit_uses_passed_fields() {
        let mut state = AppState::default();
        state.composer.url = "http://stale.example".to_string();
        let fields = SubmitFields {
            method: HttpMethod::Put,
            url: "http://fresh.example/api".to_string(),
        };

        let request = state.prepare_submit(&fields).unwrap();
        assert_eq!(request.url, "http://fresh.example/api");
        assert_eq!(request.method, HttpMethod::Put);
    }

    #[test]
    fn test_submit_fields_reads_inputs() {
        let state =
            AppState::with_request_defaults(Some("http://a.example".to_string()), HttpMethod::Patch);
        assert_eq!(
            state.submit_fields(),
            SubmitFields {
                method: HttpMethod::Patch,
                url: "http://a.example".to_string(),
            }
        );
    }

    #[test]
    fn test_initial_body_replaces_skeleton() {
        let state = AppState::default().with_initial_body(Some("{\"a\": 1}".to_string()));
        assert_eq!(state.composer.json_editor.content(), "{\"a\": 1}");

        let state = AppState::default().with_initial_body(None);
        assert_eq!(state.composer.json_editor.content(), "{\n  \n}");
    }

    #[test]
    fn test_previous_response_kept_while_sending() {
        let mut state = AppState::default();
        state.begin_send();
        state.finish_send(Ok(ok_reply()));

        state.begin_send();
        assert_eq!(state.send_state, SendState::Sending);
        assert_eq!(state.viewer.status_label, "200");
    }

    #[test]
    fn test_failure_overwrites_success() {
        let mut state = AppState::default();
        state.begin_send();
        state.finish_send(Ok(ok_reply()));
        state.begin_send();
        state.finish_send(Err(RequestError::Status {
            status: 400,
            data: json!("bad request"),
        }));

        assert_eq!(state.send_state, SendState::Failed);
        assert_eq!(state.viewer.status_label, "Error");
        assert_eq!(state.viewer.time_display(), "N/A");
        assert_eq!(state.viewer.size_display(), "N/A");
        assert_eq!(state.viewer.body, json!([{"message": "bad request"}]));
        assert!(state.viewer.headers.is_empty());
    }

    #[test]
    fn test_last_settled_call_wins() {
        let mut state = AppState::default();
        state.begin_send();
        state.begin_send();
        assert_eq!(state.in_flight, 2);

        state.finish_send(Err(RequestError::Transport {
            message: "slow one failed".to_string(),
        }));
        assert_eq!(state.send_state, SendState::Sending);

        state.finish_send(Ok(ok_reply()));
        assert_eq!(state.send_state, SendState::Succeeded);
        assert_eq!(state.viewer.status_label, "200");
        assert!(!state.is_sending());
    }

    #[test]
    fn test_finish_resets_scroll() {
        let mut state = AppState::default();
        state.ui.response_body_scroll = 10;
        state.ui.headers_scroll = 3;
        state.begin_send();
        state.finish_send(Ok(ok_reply()));
        assert_eq!(state.ui.response_body_scroll, 0);
        assert_eq!(state.ui.headers_scroll, 0);
    }
}
