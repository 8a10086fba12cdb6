mod actions;
mod app;
mod composer;
mod config;
mod editor;
mod logging;
mod request;
mod state;
mod types;
mod ui;
mod viewer;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init_logging(&config.logging)?;
    tracing::info!("Starting lazy-postman-tui");

    let terminal = ratatui::init();
    let app_result = App::new(&config).run(terminal).await;
    ratatui::restore();
    app_result
}
