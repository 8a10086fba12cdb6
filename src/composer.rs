//! Request composer
//!
//! Holds the user's method, URL and body (in both body modes) and turns them
//! into an [`OutgoingRequest`] on submit. Method and URL are not taken from
//! the composer itself at submit time; the submit handler passes the values
//! it read from the input fields via [`SubmitFields`].

use crate::editor::BodyEditor;
use crate::types::{BodyMode, HttpMethod, KeyValuePair, PairField, SubmitFields};
use serde_json::{Map, Value};
use std::fmt;

/// The header every outbound request carries
pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// Error raised while turning composer state into a request
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeError {
    /// Non-empty JSON body text that does not parse
    InvalidJson(String),
}

impl ComposeError {
    /// Text shown in the blocking alert
    pub fn alert_message(&self) -> &'static str {
        match self {
            ComposeError::InvalidJson(_) => "Invalid JSON format",
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidJson(detail) => write!(f, "Invalid JSON format: {detail}"),
        }
    }
}

impl std::error::Error for ComposeError {}

/// A request ready to hand to the HTTP layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub method: HttpMethod,
    pub url: String,
    /// `None` means no body at all
    pub data: Option<Value>,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct ComposerState {
    pub method: HttpMethod,
    pub url: String,
    pub body_mode: BodyMode,
    pub json_editor: BodyEditor,
    pub form_data: Vec<KeyValuePair>,
    /// Selected row in Form Data mode
    pub selected_pair: usize,
    /// Selected cell within the row
    pub selected_field: PairField,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            url: String::new(),
            body_mode: BodyMode::Json,
            json_editor: BodyEditor::default(),
            form_data: vec![KeyValuePair::default()],
            selected_pair: 0,
            selected_field: PairField::Key,
        }
    }
}

impl ComposerState {
    /// Switch body mode; the other mode's data is kept untouched
    pub fn set_body_mode(&mut self, mode: BodyMode) {
        self.body_mode = mode;
    }

    /// Append a blank row
    pub fn add_pair(&mut self) {
        self.form_data.push(KeyValuePair::default());
        self.selected_pair = self.form_data.len() - 1;
        self.selected_field = PairField::Key;
    }

    /// Remove exactly the row at `index`; out of range is a no-op.
    /// Removing the only row leaves the list empty.
    pub fn remove_pair(&mut self, index: usize) -> Option<KeyValuePair> {
        if index >= self.form_data.len() {
            return None;
        }
        let removed = self.form_data.remove(index);
        if self.selected_pair >= self.form_data.len() {
            self.selected_pair = self.form_data.len().saturating_sub(1);
        }
        Some(removed)
    }

    /// Mutable access to the selected cell's text
    pub fn selected_cell_mut(&mut self) -> Option<&mut String> {
        let field = self.selected_field;
        self.form_data
            .get_mut(self.selected_pair)
            .map(|pair| match field {
                PairField::Key => &mut pair.key,
                PairField::Value => &mut pair.value,
            })
    }

    /// Body for the active mode, before method-based suppression
    pub fn effective_body(&self) -> Result<Option<Value>, ComposeError> {
        match self.body_mode {
            BodyMode::Json => parse_json_body(self.json_editor.content()),
            BodyMode::FormData => Ok(Some(Value::Object(fold_form_data(&self.form_data)))),
        }
    }

    /// Build the outbound request from the submitted fields and the body
    /// state. The body is parsed even for GET/DELETE so malformed text always
    /// aborts the submission.
    pub fn build_request(&self, fields: &SubmitFields) -> Result<OutgoingRequest, ComposeError> {
        let body = self.effective_body()?;
        let data = if fields.method.supports_body() {
            body
        } else {
            None
        };

        Ok(OutgoingRequest {
            method: fields.method,
            url: fields.url.clone(),
            data,
            headers: vec![(
                CONTENT_TYPE_JSON.0.to_string(),
                CONTENT_TYPE_JSON.1.to_string(),
            )],
        })
    }
}

/// Parse the JSON editor text. Empty text means no body.
pub fn parse_json_body(text: &str) -> Result<Option<Value>, ComposeError> {
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Value>(text)
        .map(Some)
        .map_err(|e| ComposeError::InvalidJson(e.to_string()))
}

/// Fold rows left to right into one object. Empty keys are skipped and a
/// later duplicate overwrites the earlier value in place.
pub fn fold_form_data(pairs: &[KeyValuePair]) -> Map<String, Value> {
    pairs.iter().fold(Map::new(), |mut acc, pair| {
        if !pair.key.is_empty() {
            acc.insert(pair.key.clone(), Value::String(pair.value.clone()));
        }
        acc
    })
}

/// Required + absolute-URL check done before the submit handler runs
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Please fill out this field.".to_string());
    }

    if url::Url::parse(url).is_err() {
        return Err("Please enter a URL.".to_string());
    }

    Ok(())
}
