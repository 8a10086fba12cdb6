//! Response viewer state
//!
//! Everything shown in the response panel lives here. A completed call
//! replaces the whole [`ViewerState`]; nothing is merged with the previous
//! result.

use crate::request::{HttpReply, RequestError};
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Placeholder for labels with no value
pub const NOT_AVAILABLE: &str = "N/A";

/// Status label used for failed calls
pub const ERROR_STATUS: &str = "Error";

/// Colour family of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Success,
    Error,
    Absent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub status_label: String,
    pub elapsed: String,
    pub size_label: String,
    pub body: Value,
    pub headers: Map<String, Value>,
}

impl Default for ViewerState {
    /// Nothing sent yet: blank labels, an empty list body and no headers
    fn default() -> Self {
        Self {
            status_label: String::new(),
            elapsed: String::new(),
            size_label: String::new(),
            body: Value::Array(Vec::new()),
            headers: Map::new(),
        }
    }
}

impl ViewerState {
    pub fn from_reply(reply: &HttpReply) -> Self {
        let headers = reply
            .headers
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        Self {
            status_label: reply.status.to_string(),
            elapsed: format_elapsed(reply.elapsed),
            size_label: serialized_len(&reply.data).to_string(),
            body: reply.data.clone(),
            headers,
        }
    }

    pub fn from_error(error: &RequestError) -> Self {
        Self {
            status_label: ERROR_STATUS.to_string(),
            elapsed: NOT_AVAILABLE.to_string(),
            size_label: NOT_AVAILABLE.to_string(),
            body: json!([{ "message": error.payload_message() }]),
            headers: Map::new(),
        }
    }

    pub fn status_badge(&self) -> StatusBadge {
        if self.status_label == ERROR_STATUS {
            StatusBadge::Error
        } else if self.status_label.is_empty() {
            StatusBadge::Absent
        } else {
            StatusBadge::Success
        }
    }

    pub fn status_display(&self) -> &str {
        or_not_available(&self.status_label)
    }

    pub fn time_display(&self) -> &str {
        or_not_available(&self.elapsed)
    }

    pub fn size_display(&self) -> &str {
        or_not_available(&self.size_label)
    }

    /// Pretty-printed body with `"<n>. "` line prefixes
    pub fn rendered_body(&self) -> String {
        add_line_numbers(&pretty_json(&self.body))
    }

    /// Pretty-printed headers object, no numbering
    pub fn rendered_headers(&self) -> String {
        pretty_json(&Value::Object(self.headers.clone()))
    }
}

fn or_not_available(label: &str) -> &str {
    if label.is_empty() {
        NOT_AVAILABLE
    } else {
        label
    }
}

/// `"<ms> ms"`, whole milliseconds
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{} ms", elapsed.as_millis())
}

/// Character length of the compact JSON serialisation
pub fn serialized_len(value: &Value) -> usize {
    value.to_string().chars().count()
}

/// Two-space indented JSON
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Prefix every line with its 1-based number followed by `". "`
pub fn add_line_numbers(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| format!("{}. {}", idx + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, data: Value, headers: Vec<(&str, &str)>) -> HttpReply {
        HttpReply {
            status,
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            data,
            elapsed: Duration::from_millis(42),
        }
    }

    #[test]
    fn test_initial_state() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.status_badge(), StatusBadge::Absent);
        assert_eq!(viewer.status_display(), "N/A");
        assert_eq!(viewer.time_display(), "N/A");
        assert_eq!(viewer.size_display(), "N/A");
        assert_eq!(viewer.rendered_body(), "1. []");
        assert_eq!(viewer.rendered_headers(), "{}");
    }

    #[test]
    fn test_successful_reply() {
        let viewer = ViewerState::from_reply(&reply(
            200,
            json!({"ok": true}),
            vec![("x-test", "1")],
        ));

        assert_eq!(viewer.status_label, "200");
        assert_eq!(viewer.elapsed, "42 ms");
        assert_eq!(viewer.size_label, "11");
        assert_eq!(viewer.body, json!({"ok": true}));
        assert_eq!(viewer.status_badge(), StatusBadge::Success);
        assert_eq!(viewer.rendered_body(), "1. {\n2.   \"ok\": true\n3. }");
        assert_eq!(viewer.rendered_headers(), "{\n  \"x-test\": \"1\"\n}");
    }

    #[test]
    fn test_size_counts_characters_not_bytes() {
        let viewer = ViewerState::from_reply(&reply(200, json!("é"), vec![]));
        // "\"é\"" is three characters
        assert_eq!(viewer.size_label, "3");
    }

    #[test]
    fn test_failure_with_server_payload() {
        let error = RequestError::Status {
            status: 400,
            data: json!("bad request"),
        };
        let viewer = ViewerState::from_error(&error);

        assert_eq!(viewer.status_label, "Error");
        assert_eq!(viewer.elapsed, "N/A");
        assert_eq!(viewer.size_label, "N/A");
        assert_eq!(viewer.body, json!([{"message": "bad request"}]));
        assert!(viewer.headers.is_empty());
        assert_eq!(viewer.status_badge(), StatusBadge::Error);
    }

    #[test]
    fn test_failure_without_payload_uses_message() {
        let error = RequestError::Transport {
            message: "connection refused".to_string(),
        };
        let viewer = ViewerState::from_error(&error);
        assert_eq!(viewer.body, json!([{"message": "connection refused"}]));
    }

    #[test]
    fn test_failure_replaces_previous_headers() {
        let mut viewer =
            ViewerState::from_reply(&reply(200, json!({}), vec![("x-test", "1")]));
        assert!(!viewer.headers.is_empty());
        viewer = ViewerState::from_error(&RequestError::Transport {
            message: "boom".to_string(),
        });
        assert_eq!(viewer.rendered_headers(), "{}");
    }

    #[test]
    fn test_add_line_numbers() {
        assert_eq!(add_line_numbers("a\nb\n"), "1. a\n2. b\n3. ");
        assert_eq!(add_line_numbers(""), "1. ");
    }

    #[test]
    fn test_format_elapsed_truncates() {
        assert_eq!(format_elapsed(Duration::from_micros(1_999)), "1 ms");
    }
}
