mod api;
mod app;
mod config;
mod events;
mod forms;
mod logging;
mod session;
mod ui;

use crate::api::{ApiClient, ApiManager};
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::route::Route;
use crate::app::state::AppState;
use crate::session::SessionStore;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging)?;

    let session_path = cfg.session.resolved_path();
    let session = SessionStore::open(session_path.clone())
        .with_context(|| format!("Failed to open session {}", session_path.display()))?;
    let client = ApiClient::new(&cfg.api).context("Failed to build API client")?;

    let initial = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    info!(
        base_url = %cfg.api.base_url,
        route = %initial,
        session = %session.path().display(),
        log = ?log_path,
        "starting eventhive"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, session, client, Route::from_path(&initial)).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    session: SessionStore,
    client: ApiClient,
    initial: Route,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let api = ApiManager::new(client, event_tx.clone());
    let mut session_rx = session.subscribe();
    let mut state = AppState::new(cfg, session);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Forward session token changes into the event loop
    let session_tx = event_tx.clone();
    tokio::spawn(async move {
        while session_rx.changed().await.is_ok() {
            let signed_in = *session_rx.borrow_and_update();
            if session_tx.send(AppEvent::SessionChanged { signed_in }).is_err() {
                break;
            }
        }
    });

    let mut pending = state.navigate(initial);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        for action in pending.drain(..) {
            match action {
                Action::Register { epoch, role, request } => api.register(epoch, role, request),
                Action::Login { epoch, role, request } => api.login(epoch, role, request),
                Action::FetchDashboard { epoch, seq, token } => {
                    api.fetch_dashboard(epoch, seq, token)
                }
                Action::BrowseEvents { epoch, seq, filters } => {
                    api.browse_events(epoch, seq, filters)
                }
                Action::GenerateDescription { epoch, request } => {
                    api.generate_description(epoch, request)
                }
                Action::InspectImage { epoch, path } => api.inspect_image(epoch, path),
                Action::CreateEvent { epoch, token, event } => {
                    api.create_event(epoch, token, event)
                }
                Action::NavigateAfter { epoch, route, delay } => {
                    let nav_tx = event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = nav_tx.send(AppEvent::Navigate { epoch, route });
                    });
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            info!("quit requested");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };
        pending = handler::handle_event(&mut state, event);
    }

    Ok(())
}
