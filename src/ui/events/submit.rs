//! Submit handling
//!
//! The form is read at submit time: method and URL come from the inputs as
//! they are right now, the body from whichever editor the mode selects.

use crate::actions::{apply_action, AppAction};
use crate::composer::{validate_url, OutgoingRequest};
use crate::state::AppState;
use crate::types::Focus;

/// Validate the URL and build the outgoing request.
///
/// Returns `None` when the URL input blocks the submit (inline hint shown)
/// or the JSON body is malformed (alert raised).
pub fn handle_submit(state: &mut AppState) -> Option<OutgoingRequest> {
    let fields = state.submit_fields();

    if let Err(message) = validate_url(&fields.url) {
        tracing::debug!("Submit blocked by URL input: {message}");
        apply_action(AppAction::SetUrlError(Some(message)), state);
        apply_action(AppAction::SetFocus(Focus::Url), state);
        return None;
    }

    let request = state.prepare_submit(&fields)?;
    tracing::info!("{} {}", request.method, request.url);
    Some(request)
}
