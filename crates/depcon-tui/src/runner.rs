//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use depcon_api::ApiClient;
use depcon_app::{enter_screen, AppState, Message};
use depcon_core::prelude::*;

use super::{event, process, render, terminal};

/// Run the console against the given backend client.
pub async fn run(api: Arc<ApiClient>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    let mut state = AppState::new(api.session().clone(), api.base_url().to_string());
    info!("Starting on {:?}", state.screen);

    // Unified message channel: task completions and follow-ups
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // The starting screen mounts like any other: kick off its fetches
    for action in enter_screen(&mut state) {
        process::perform_action(action, &api, &msg_tx);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &Arc<ApiClient>,
) -> Result<()> {
    while !state.should_quit {
        // Drain task completions (non-blocking)
        while let Ok(message) = msg_rx.try_recv() {
            process::process_message(state, message, &msg_tx, api);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events; the 50ms poll timeout yields Tick
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, api);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
