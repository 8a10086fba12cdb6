//! Helper functions for event handling
//!
//! - Modifier checks
//! - Paste batching
//! - Single-line sanitising for the URL input

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn is_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Characters typed in one burst, plus the event that ended the burst
#[derive(Debug, Default)]
pub struct TypedBatch {
    pub text: String,
    /// Still has to be dispatched by the caller
    pub pending: Option<Event>,
}

/// Events already queued by the terminal, read without blocking
pub fn ready_events() -> impl Iterator<Item = Event> {
    std::iter::from_fn(|| match event::poll(std::time::Duration::from_millis(0)) {
        Ok(true) => event::read().ok(),
        _ => None,
    })
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this drains the immediately available key
/// presses and batches them together. This enables fast paste operations in
/// terminals that do not support bracketed paste. Release and repeat events
/// are skipped. `Enter` joins the batch as `'\n'` only when `newlines` is set.
/// The first other event stops the batch and is handed back in `pending`.
pub fn collect_paste_batch<I>(initial_char: char, events: I, newlines: bool) -> TypedBatch
where
    I: IntoIterator<Item = Event>,
{
    let mut batch = TypedBatch {
        text: initial_char.to_string(),
        pending: None,
    };

    for next in events {
        let key = match next {
            Event::Key(key) => key,
            other => {
                batch.pending = Some(other);
                break;
            }
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char(c) if !is_ctrl(&key) => batch.text.push(c),
            KeyCode::Enter if newlines => batch.text.push('\n'),
            _ => {
                batch.pending = Some(Event::Key(key));
                break;
            }
        }
    }

    batch
}

/// Drop line breaks so pasted text fits a single-line input
pub fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
