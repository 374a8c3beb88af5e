//! Interactive terminal dashboard built on ratatui
//!
//! Key events map to [`msg::UiMsg`], the local reducer turns those into
//! dashboard messages, and report requests run on the tokio runtime while the
//! draw loop keeps polling for settlements.

pub mod app;
pub mod events;
pub mod msg;
pub mod theme;
pub mod update;
pub mod view;

pub use app::{Field, TuiApp};

use crate::client::ReportClient;
use crate::dashboard::DashboardSession;
use crate::error::{ReportError, Result};
use crate::renderers::PageRenderer;
use crate::traits::ReportTransport;
use app::FeedbackType;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tokio::runtime::Handle;
use update::Effect;

/// Run the terminal dashboard until the user quits.
///
/// Must be called outside of async code: the draw loop blocks the calling
/// thread while requests run on `handle`.
pub fn run_dashboard<T: ReportTransport>(
    client: ReportClient<T>,
    handle: Handle,
    snapshot_path: PathBuf,
) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let session = DashboardSession::new(client, handle);
    let app = TuiApp::new(snapshot_path);

    let result = run_app(&mut terminal, app, session);

    // Always try to restore terminal, even if the app failed
    if let Err(restore_err) = restore_terminal(&mut terminal) {
        eprintln!("Failed to restore terminal: {}", restore_err);
    }

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()
        .map_err(|e| ReportError::general(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| ReportError::general(format!("Failed to enter alternate screen: {}", e)))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
        .map_err(|e| ReportError::general(format!("Failed to create terminal: {}", e)))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()
        .map_err(|e| ReportError::general(format!("Failed to disable raw mode: {}", e)))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| ReportError::general(format!("Failed to leave alternate screen: {}", e)))?;
    terminal
        .show_cursor()
        .map_err(|e| ReportError::general(format!("Failed to show cursor: {}", e)))?;
    Ok(())
}

fn run_app<T: ReportTransport>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: TuiApp,
    mut session: DashboardSession<T>,
) -> Result<()> {
    loop {
        app.clear_old_feedback();
        session.try_settle();

        terminal
            .draw(|f| view::draw(f, &app, session.state()))
            .map_err(|e| ReportError::general(format!("Failed to draw: {}", e)))?;

        let Some(msg) = events::next_msg(&app)? else {
            continue;
        };

        match update::update(&mut app, session.state(), msg) {
            Effect::Quit => break,
            Effect::Dispatch(msg) => {
                session.dispatch(msg);
            }
            Effect::SaveSnapshot => {
                let renderer = PageRenderer::new().with_timestamp(chrono::Local::now());
                match renderer.save(session.state(), &app.snapshot_path) {
                    Ok(()) => {
                        let message = format!("Saved page to {}", app.snapshot_path.display());
                        app.show_feedback(message, FeedbackType::Success);
                    }
                    Err(e) => app.show_feedback(format!("Failed to save page: {}", e), FeedbackType::Error),
                }
            }
            Effect::None => {}
        }
    }
    Ok(())
}
