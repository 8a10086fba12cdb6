use crate::composer::OutgoingRequest;
use crate::state::AppState;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A settled 2xx response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    /// Lower-case header names in arrival order, values as strings
    pub headers: Vec<(String, String)>,
    /// Decoded payload (JSON value, or the raw text as a string)
    pub data: Value,
    /// Wall-clock time from just before sending to the full body arriving
    pub elapsed: Duration,
}

/// A rejected call
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The server answered with a non-2xx status
    Status { status: u16, data: Value },
    /// No HTTP response at all (DNS, connection refused, TLS, ...)
    Transport { message: String },
}

impl RequestError {
    pub fn message(&self) -> String {
        match self {
            RequestError::Status { status, .. } => {
                format!("Request failed with status code {status}")
            }
            RequestError::Transport { message } => message.clone(),
        }
    }

    /// What the viewer shows as `message`: the server's payload when it has
    /// a truthy one, the error text otherwise
    pub fn payload_message(&self) -> Value {
        match self {
            RequestError::Status { data, .. } if is_truthy(data) => data.clone(),
            _ => Value::String(self.message()),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for RequestError {}

/// Sends the request in the background and stores the outcome when it settles.
/// Calls are independent: whichever settles last is what the viewer shows.
pub fn send_request_background(state: Arc<RwLock<AppState>>, request: OutgoingRequest) {
    if let Ok(mut s) = state.write() {
        s.begin_send();
    }

    tokio::spawn(async move {
        tracing::info!("Sending {} {}", request.method, request.url);
        let outcome = execute_request(&request).await;

        match &outcome {
            Ok(reply) => tracing::debug!(
                "{} {} -> {} in {:?}",
                request.method,
                request.url,
                reply.status,
                reply.elapsed
            ),
            Err(error) => tracing::error!("Request Error: {error:?}"),
        }

        if let Ok(mut s) = state.write() {
            s.finish_send(outcome);
        }
    });
}

/// Issue one HTTP call
pub async fn execute_request(request: &OutgoingRequest) -> Result<HttpReply, RequestError> {
    let client = reqwest::Client::new();
    let mut request_builder = client.request(request.method.to_reqwest(), &request.url);

    for (name, value) in &request.headers {
        request_builder = request_builder.header(name.as_str(), value.as_str());
    }

    if let Some(data) = &request.data {
        request_builder = request_builder.body(data.to_string());
    }

    let start = Instant::now();

    let response = request_builder
        .send()
        .await
        .map_err(|e| RequestError::Transport {
            message: e.to_string(),
        })?;

    let status = response.status();
    let headers = collect_headers(response.headers());

    let text = response.text().await.map_err(|e| RequestError::Transport {
        message: format!("Failed to read response body: {e}"),
    })?;
    let elapsed = start.elapsed();
    let data = decode_payload(&text);

    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
            data,
        });
    }

    Ok(HttpReply {
        status: status.as_u16(),
        headers,
        data,
        elapsed,
    })
}

/// JSON when the text parses, otherwise the text itself
pub fn decode_payload(text: &str) -> Value {
    if text.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Flatten a header map; repeated headers are joined into one string
pub(crate) fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .keys()
        .map(|name| {
            let separator = if *name == reqwest::header::SET_COOKIE {
                ","
            } else {
                ", "
            };
            let value = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(separator);
            (name.as_str().to_lowercase(), value)
        })
        .collect()
}

/// JavaScript-style truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
