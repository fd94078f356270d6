//! The terminal UI: a simulated job-posting host page and the CVWallet
//! wizard popup it launches. Single-threaded event loop in the usual
//! raw-mode/alternate-screen arrangement; the one outstanding oracle call
//! runs on the tokio runtime and reports back over an mpsc channel drained
//! by the tick loop.

mod handlers;
mod render;
pub mod state;
pub mod steps;
pub mod theme;
pub mod widgets;

use std::io;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::WalletConfig;
use crate::error::OracleError;
use crate::oracle::AttestationOracle;

use state::AppState;
use widgets::Spinner;

/// Run the demo until the user quits.
pub fn run(config: &WalletConfig) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new();
    let mut spinner = Spinner::new();

    let result = main_loop(&mut terminal, &mut state, &mut spinner, config);

    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    spinner: &mut Spinner,
    config: &WalletConfig,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render::draw_ui(area, frame.buffer_mut(), state, spinner);
        })?;

        if state.should_quit {
            return Ok(());
        }

        pump_analysis(state, config);

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    state.should_quit = true;
                    continue;
                }
                if key.code == KeyCode::Char('q') && !handlers::is_text_input_active(state) {
                    state.should_quit = true;
                    continue;
                }

                handlers::handle_key(state, key.code);
            }
        } else {
            spinner.advance();
        }
    }
}

/// Spawn a requested analysis and drain a finished one. At most one call is
/// ever in flight: the Processing step accepts no input, so nothing can
/// re-request until the current call settles.
fn pump_analysis(state: &mut AppState, config: &WalletConfig) {
    let Some(wizard) = state.wizard.as_mut() else {
        return;
    };

    if wizard.analysis_requested {
        wizard.analysis_requested = false;

        // Credential resolution happens here, at call time.
        let oracle = AttestationOracle::from_config(config);
        let evidence = wizard.evidence();
        let (tx, rx) = mpsc::channel();
        tokio::spawn(async move {
            let _ = tx.send(oracle.attest(&evidence).await);
        });
        wizard.pending = Some(rx);
    }

    if let Some(rx) = wizard.pending.as_ref() {
        match rx.try_recv() {
            Ok(result) => {
                wizard.pending = None;
                wizard.resolve_analysis(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                wizard.pending = None;
                wizard.resolve_analysis(Err(OracleError::Request {
                    model: config.model.clone(),
                    message: "analysis task ended unexpectedly".to_string(),
                }));
            }
        }
    }
}
