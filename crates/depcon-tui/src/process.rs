//! Message processing and action dispatch.

use std::sync::Arc;

use tokio::sync::mpsc;

use depcon_api::ApiClient;
use depcon_app::{tasks, update, AppState, Message, UpdateAction};

/// Process a message through the TEA update function, executing every
/// produced action and following the follow-up message chain until it
/// settles.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<ApiClient>,
) {
    let mut next = Some(message);
    while let Some(message) = next {
        let result = update(state, message);
        for action in result.actions {
            perform_action(action, api, msg_tx);
        }
        next = result.message;
    }
}

/// Execute a single update action.
pub fn perform_action(action: UpdateAction, api: &Arc<ApiClient>, msg_tx: &mpsc::Sender<Message>) {
    match action {
        UpdateAction::SpawnTask(task) => tasks::spawn(task, api.clone(), msg_tx.clone()),
    }
}
