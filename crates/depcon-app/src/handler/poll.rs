//! Fixed-interval poll for the deployments screen.
//!
//! Single-flight: a tick while the previous request is still outstanding
//! starts nothing. Leaving the screen stops the poll entirely; a response
//! still in flight at that point is discarded by the epoch check.

use std::time::{Duration, Instant};

use crate::state::{AppState, Screen};

use super::{Task, UpdateAction, UpdateResult};

/// Refetch cadence while the deployments screen is active. No jitter, no
/// backoff.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

pub(crate) fn handle_tick(state: &mut AppState) -> UpdateResult {
    handle_tick_at(state, Instant::now())
}

/// Tick with an explicit clock so tests can advance time.
pub(crate) fn handle_tick_at(state: &mut AppState, now: Instant) -> UpdateResult {
    if state.screen != Screen::Deployments {
        return UpdateResult::none();
    }
    if state.deployments.list.is_in_flight() {
        return UpdateResult::none();
    }

    let due = match state.deployments.last_poll {
        Some(last) => now.duration_since(last) >= POLL_INTERVAL,
        None => true,
    };
    if !due {
        return UpdateResult::none();
    }

    state.deployments.last_poll = Some(now);
    let epoch = state.deployments.list.begin();
    UpdateResult::action(UpdateAction::SpawnTask(Task::FetchDeployments { epoch }))
}
