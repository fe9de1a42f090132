//! Service layer driving the heat strip.
//!
//! The strip can be rendered once (markup or JSON on stdout) or shown in an
//! interactive terminal UI.

use crate::config::{AppConfig, OutputFormat};
use crate::error::{Result, UiError};
use crate::strip::{HeatStrip, ShadowRoot};
use crate::ui::{self, App, InputAction};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Mount a strip with the configured attributes and return its output
pub fn render_once(config: &AppConfig) -> Result<String> {
    let mut strip = HeatStrip::new(ShadowRoot::new());
    let attributes = strip.attributes().clone();
    strip.on_props_changed(&attributes, config.strip.attributes());
    strip.on_mount();

    let root = strip.target();
    match config.ui.format {
        OutputFormat::Html => Ok(root.markup().to_string()),
        OutputFormat::Json => match root.render() {
            Some(render) => Ok(serde_json::to_string_pretty(render)?),
            None => Ok(String::new()),
        },
    }
}

/// Terminal in raw mode on the alternate screen; restored on drop
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        let init = |e: io::Error| UiError::InitializationError(e.to_string());

        terminal::enable_raw_mode().map_err(init)?;
        let terminal = setup_or_restore(
            || {
                let mut stdout = io::stdout();
                stdout.execute(EnterAlternateScreen)?;
                stdout.execute(EnableMouseCapture)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                let mut stdout = io::stdout();
                let _ = stdout.execute(DisableMouseCapture);
                let _ = stdout.execute(LeaveAlternateScreen);
                let _ = terminal::disable_raw_mode();
            },
        )
        .map_err(init)?;
        Ok(Self { terminal })
    }
}

/// Run `setup`; if it fails, run `restore` before handing the error back.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|e| {
        warn!("Terminal setup failed, restoring: {}", e);
        restore();
    })
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = terminal::disable_raw_mode();
        let stdout = self.terminal.backend_mut();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Interactive session over one strip
pub struct Session {
    app: App,
    config_path: PathBuf,
    tick_rate: Duration,
}

impl Session {
    /// Create a session from the effective configuration
    pub fn new(config: &AppConfig, config_path: &Path) -> Self {
        Self {
            app: App::new(&config.strip),
            config_path: config_path.to_path_buf(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        }
    }

    /// Run the interactive loop until the user quits
    pub fn run(mut self) -> Result<()> {
        info!("Starting heat strip in interactive mode");
        let mut guard = TerminalGuard::new()?;

        while !self.app.should_quit {
            guard
                .terminal
                .draw(|frame| ui::draw(frame, &mut self.app))
                .map_err(|e| UiError::RenderError(e.to_string()))?;

            let action = ui::handle_input(self.tick_rate, self.app.is_editing())
                .map_err(|e| UiError::InputError(e.to_string()))?;
            self.handle_action(action);
        }

        info!("Heat strip stopped");
        Ok(())
    }

    /// Apply one input action to the application state
    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.app.should_quit = true,
            InputAction::HoverNext => self.app.hover_next(),
            InputAction::HoverPrev => self.app.hover_prev(),
            InputAction::HoverAt { column, row } => self.app.hover_at(column, row),
            InputAction::CycleSize => self.app.cycle_size(),
            InputAction::EditData => self.app.start_edit(),
            InputAction::EditInput(c) => self.app.edit_push(c),
            InputAction::EditBackspace => self.app.edit_backspace(),
            InputAction::CommitEdit => self.app.commit_edit(),
            InputAction::CancelEdit => self.app.cancel_edit(),
            InputAction::Reload => self.reload_config(),
            InputAction::ToggleHelp => self.app.toggle_help(),
            InputAction::None => {}
        }
    }

    /// Reload the strip attributes from the configuration file
    pub fn reload_config(&mut self) {
        info!(path = %self.config_path.display(), "Reloading configuration");
        match AppConfig::load_or_default(&self.config_path) {
            Ok(config) => {
                self.app.apply_strip_config(&config.strip);
                self.app.clear_error();
                self.app.set_status("Configuration reloaded".to_string());
            }
            Err(e) => {
                warn!("Configuration reload failed: {}", e);
                self.app.set_error(e.to_string());
            }
        }
    }

    /// Application state
    pub fn app(&self) -> &App {
        &self.app
    }
}
