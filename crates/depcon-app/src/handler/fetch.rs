//! Fetch completion application.
//!
//! Every list completion flows through [`handle_loaded`], which funnels the
//! backend's credential rejection into session expiry instead of a banner.

use crate::loadable::Loadable;
use crate::message::{FetchError, Message};
use crate::state::{AppState, Screen};

use super::UpdateResult;

/// The backend rejected the held credential: drop it and send the operator
/// back to the login screen.
pub(crate) fn expire_and_redirect(state: &mut AppState) -> UpdateResult {
    state.session.expire();
    UpdateResult::message(Message::Navigate(Screen::Login))
}

/// Apply a fetch completion to the cell `pick` selects. Stale epochs are
/// dropped inside [`Loadable::finish`]; an unauthorized failure expires the
/// session instead of touching the cell.
pub(crate) fn handle_loaded<T>(
    state: &mut AppState,
    pick: impl FnOnce(&mut AppState) -> &mut Loadable<T>,
    epoch: u64,
    result: Result<T, FetchError>,
) -> UpdateResult {
    match result {
        Ok(data) => {
            pick(state).finish(epoch, Ok(data));
            UpdateResult::none()
        }
        Err(e) if e.unauthorized => expire_and_redirect(state),
        Err(e) => {
            pick(state).finish(epoch, Err(e.message));
            UpdateResult::none()
        }
    }
}
