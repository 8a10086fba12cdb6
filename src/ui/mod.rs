pub mod draw;
pub mod events;

pub use draw::{render_footer, render_header};
pub use events::EventHandler;
