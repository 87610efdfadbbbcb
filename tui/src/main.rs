use countdown::{App, config::Config, logging, scheduler::LocalScheduler};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use tokio::task::LocalSet;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();

    if let Err(e) = logging::init_tracing(&config) {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let terminal = ratatui::init();
    let mouse = config.mouse_enabled() && execute!(std::io::stdout(), EnableMouseCapture).is_ok();

    let app = App::new(LocalScheduler::new(), config.theme());
    let result = LocalSet::new().run_until(app.run(terminal)).await;

    if mouse {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}
