use std::fmt;

/// HTTP methods offered by the method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Selector order, matching the dropdown
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Parse a method name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// GET and DELETE never carry a body
    pub fn supports_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which body editor is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Raw text parsed as JSON on submit
    #[default]
    Json,
    /// Ordered key/value rows folded into one object on submit
    FormData,
}

impl BodyMode {
    pub fn label(&self) -> &'static str {
        match self {
            BodyMode::Json => "JSON",
            BodyMode::FormData => "Form Data",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            BodyMode::Json => BodyMode::FormData,
            BodyMode::FormData => BodyMode::Json,
        }
    }
}

/// One editable row in Form Data mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Which cell of a key/value row is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairField {
    #[default]
    Key,
    Value,
}

impl PairField {
    pub fn toggled(&self) -> Self {
        match self {
            PairField::Key => PairField::Value,
            PairField::Value => PairField::Key,
        }
    }
}

/// Tracks which widget has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Method,
    #[default]
    Url,
    BodyMode,
    Body,
    ResponseBody,
    ResponseHeaders,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Method,
        Focus::Url,
        Focus::BodyMode,
        Focus::Body,
        Focus::ResponseBody,
        Focus::ResponseHeaders,
    ];

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Fields that take free text input (where 'q' is just a character)
    pub fn accepts_text(&self) -> bool {
        matches!(self, Focus::Url | Focus::Body)
    }

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Blocking alert; all input except dismiss is ignored
    Alert(String),
}

/// Lifecycle of the most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Method and URL as read from the input fields at the moment of submit
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFields {
    pub method: HttpMethod,
    pub url: String,
}
