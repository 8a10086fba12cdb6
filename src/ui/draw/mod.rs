//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Header and footer
//! - `modals`: Alert dialog
//! - `request_panel`: Method selector, URL input, body mode tabs, body editor
//! - `response`: Summary badges, response body and headers
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod request_panel;
mod response;
mod styling;

pub use components::{render_footer, render_header};
pub use modals::render_alert_modal;
pub use request_panel::{render_body_editor, render_mode_tabs, render_request_bar};
pub use response::{render_response_body, render_response_headers, render_response_summary};
