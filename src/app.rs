use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{new_log_buffer, CustomLogger};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = new_log_buffer();
        CustomLogger::to_buffer(config.log_level_filter()?, Arc::clone(&log_buffer))
            .install()
            .map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Loaded configuration from {}", path.display());
        }
        let state = State::new(config.start_form, config.theme(), log_buffer);
        let mut app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Prepare the terminal, run the render loop on the main thread and
    /// restore the terminal whether or not the loop failed.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Render and handle terminal events until an exit request or an
    /// unrecoverable error.
    ///
    async fn run(&mut self, terminal: &mut CrosstermTerminal) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new(self.config.tick_rate_ms);
        loop {
            let mut state = self.state.lock().await;
            terminal
                .draw(|frame| crate::ui::render(frame, &mut state))
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break;
                }
                Err(e) => {
                    error!("Failed to handle terminal event: {}", e);
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
