use crate::config::Config;
use crate::request;
use crate::state::AppState;
use crate::types::InputMode;
use crate::ui::{self, draw};
use color_eyre::{eyre::eyre, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let state =
            AppState::with_request_defaults(config.request.url.clone(), config.initial_method())
                .with_initial_body(config.request.body.clone());

        Self {
            state: Arc::new(RwLock::new(state)),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        execute!(std::io::stdout(), EnableBracketedPaste)?;
        let result = self.event_loop(&mut terminal);
        execute!(std::io::stdout(), DisableBracketedPaste)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            let mut draw_result = Ok(());
            terminal.draw(|frame| draw_result = self.draw(frame))?;
            draw_result?;

            let state = Arc::clone(&self.state);
            if let Some(outgoing) = self.event_handler.handle_events(state)? {
                request::send_request_background(Arc::clone(&self.state), outgoing);
            }
        }

        tracing::info!("Quit requested");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| eyre!("Application state lock poisoned"))?;

        // Header, request bar, mode tabs, body editor, summary, response, footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(3),  // Method + URL + Send
                Constraint::Length(3),  // JSON / Form Data
                Constraint::Length(10), // Body editor
                Constraint::Length(3),  // Status / Time / Size
                Constraint::Min(0),     // Response
                Constraint::Length(3),  // Footer
            ])
            .split(frame.area());

        let response_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[5]);

        // Scroll limits depend on how the panels wrap
        state.ui.response_body_width = response_chunks[0].width.saturating_sub(2);
        state.ui.headers_width = response_chunks[1].width.saturating_sub(2);

        ui::render_header(frame, main_chunks[0], &state, self.spinner_index);
        draw::render_request_bar(frame, main_chunks[1], &state);
        draw::render_mode_tabs(frame, main_chunks[2], &state);
        draw::render_body_editor(frame, main_chunks[3], &state);
        draw::render_response_summary(frame, main_chunks[4], &state);
        draw::render_response_body(frame, response_chunks[0], &state);
        draw::render_response_headers(frame, response_chunks[1], &state);
        ui::render_footer(frame, main_chunks[6], &state);

        // Render modals LAST - after everything else
        if let InputMode::Alert(message) = &state.input_mode {
            draw::render_alert_modal(frame, message);
        }

        Ok(())
    }
}
