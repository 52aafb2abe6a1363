//! Navigation: guard resolution plus screen enter/leave bookkeeping.

use std::time::Instant;

use depcon_core::ClientFilter;

use crate::state::{AppState, Screen};

use super::{Task, UpdateAction, UpdateResult};

/// Change screens through the guard. A request that resolves to the current
/// screen is a no-op.
pub(crate) fn navigate(state: &mut AppState, requested: Screen) -> UpdateResult {
    let target = state.resolve_screen(requested);
    if target == state.screen {
        return UpdateResult::none();
    }

    leave_screen(state);
    state.screen = target;
    tracing::debug!("Navigated to {:?}", target);
    UpdateResult::actions(enter_screen(state))
}

/// Tear down the active screen: invalidate its fetch cells so in-flight
/// completions land stale, and drop ephemeral inputs.
fn leave_screen(state: &mut AppState) {
    match state.screen {
        Screen::Login => state.login.reset(),
        Screen::Dashboard => {
            state.dashboard.clients.invalidate();
            state.dashboard.packages.invalidate();
            state.dashboard.deployments.invalidate();
        }
        Screen::Clients => {
            state.clients.list.invalidate();
            state.clients.filter = ClientFilter::default();
        }
        Screen::Packages => {
            state.packages.list.invalidate();
            state.packages.form = None;
        }
        Screen::Deployments => {
            state.deployments.list.invalidate();
            state.deployments.last_poll = None;
        }
        Screen::NewDeployment => {
            state.new_deployment.clients.invalidate();
            state.new_deployment.packages.invalidate();
            state.new_deployment.reset_form();
        }
    }
}

/// Start the fetches the current screen needs on entry. Also used by the
/// event loop for the very first screen and by the manual refresh key.
pub fn enter_screen(state: &mut AppState) -> Vec<UpdateAction> {
    match state.screen {
        Screen::Login => {
            state.login.reset();
            Vec::new()
        }
        Screen::Dashboard => {
            let clients_epoch = state.dashboard.clients.begin();
            let packages_epoch = state.dashboard.packages.begin();
            let deployments_epoch = state.dashboard.deployments.begin();
            vec![
                UpdateAction::SpawnTask(Task::FetchDashboardClients {
                    epoch: clients_epoch,
                }),
                UpdateAction::SpawnTask(Task::FetchDashboardPackages {
                    epoch: packages_epoch,
                }),
                UpdateAction::SpawnTask(Task::FetchDashboardDeployments {
                    epoch: deployments_epoch,
                }),
            ]
        }
        Screen::Clients => {
            let epoch = state.clients.list.begin();
            vec![UpdateAction::SpawnTask(Task::FetchClients {
                filter: state.clients.filter,
                epoch,
            })]
        }
        Screen::Packages => {
            let epoch = state.packages.list.begin();
            vec![UpdateAction::SpawnTask(Task::FetchPackages { epoch })]
        }
        Screen::Deployments => {
            state.deployments.last_poll = Some(Instant::now());
            let epoch = state.deployments.list.begin();
            vec![UpdateAction::SpawnTask(Task::FetchDeployments { epoch })]
        }
        Screen::NewDeployment => {
            state.new_deployment.reset_form();
            let clients_epoch = state.new_deployment.clients.begin();
            let packages_epoch = state.new_deployment.packages.begin();
            vec![
                UpdateAction::SpawnTask(Task::FetchDeployClients {
                    epoch: clients_epoch,
                }),
                UpdateAction::SpawnTask(Task::FetchDeployPackages {
                    epoch: packages_epoch,
                }),
            ]
        }
    }
}
