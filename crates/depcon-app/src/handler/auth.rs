//! Login submit/completion and logout.

use crate::message::{FetchError, Message};
use crate::state::{AppState, Screen};

use super::{Task, UpdateAction, UpdateResult};

/// Submit the login form. Required-field validation happens here: an empty
/// username or password produces an inline message and no network call.
pub(crate) fn submit_login(state: &mut AppState) -> UpdateResult {
    if state.login.submitting {
        return UpdateResult::none();
    }
    if state.login.username.is_empty() || state.login.password.is_empty() {
        state.login.error = Some("Please enter both username and password".to_string());
        return UpdateResult::none();
    }

    state.login.error = None;
    state.login.submitting = true;
    UpdateResult::action(UpdateAction::SpawnTask(Task::Login {
        username: state.login.username.clone(),
        password: state.login.password.clone(),
    }))
}

pub(crate) fn handle_login_completed(
    state: &mut AppState,
    result: Result<(), FetchError>,
) -> UpdateResult {
    state.login.submitting = false;
    match result {
        Ok(()) => {
            state.login.reset();
            UpdateResult::message(Message::Navigate(Screen::Dashboard))
        }
        Err(e) => {
            state.login.error = Some(e.message);
            UpdateResult::none()
        }
    }
}

/// Explicit logout: clear the credential, land on the login form. No network
/// call is made.
pub(crate) fn handle_logout(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.session.clear() {
        tracing::error!("Failed to clear session on logout: {}", e);
    }
    UpdateResult::message(Message::Navigate(Screen::Login))
}
