//! Main update function - handles state transitions (TEA pattern)

use depcon_core::{ClientStats, DeploymentStats, PackageStats};

use crate::message::Message;
use crate::state::AppState;

use super::{auth, fetch, forms, keys, nav, poll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => poll::handle_tick(state),

        Message::Navigate(screen) => nav::navigate(state, screen),

        Message::Logout => auth::handle_logout(state),

        // ─────────────────────────────────────────────────────────
        // Auth Completions
        // ─────────────────────────────────────────────────────────
        Message::LoginCompleted { result } => auth::handle_login_completed(state, result),

        // ─────────────────────────────────────────────────────────
        // List Completions
        // ─────────────────────────────────────────────────────────
        Message::ClientsLoaded { epoch, result } => {
            fetch::handle_loaded(state, |s| &mut s.clients.list, epoch, result)
        }
        Message::PackagesLoaded { epoch, result } => {
            fetch::handle_loaded(state, |s| &mut s.packages.list, epoch, result)
        }
        Message::DeploymentsLoaded { epoch, result } => {
            fetch::handle_loaded(state, |s| &mut s.deployments.list, epoch, result)
        }

        // Dashboard lists reduce to aggregates on arrival; the raw lists are
        // discarded
        Message::DashboardClientsLoaded { epoch, result } => fetch::handle_loaded(
            state,
            |s| &mut s.dashboard.clients,
            epoch,
            result.map(|list| ClientStats::from_clients(&list)),
        ),
        Message::DashboardPackagesLoaded { epoch, result } => fetch::handle_loaded(
            state,
            |s| &mut s.dashboard.packages,
            epoch,
            result.map(|list| PackageStats::from_packages(&list)),
        ),
        Message::DashboardDeploymentsLoaded { epoch, result } => fetch::handle_loaded(
            state,
            |s| &mut s.dashboard.deployments,
            epoch,
            result.map(|list| DeploymentStats::from_deployments(&list)),
        ),

        Message::DeployClientsLoaded { epoch, result } => {
            fetch::handle_loaded(state, |s| &mut s.new_deployment.clients, epoch, result)
        }
        Message::DeployPackagesLoaded { epoch, result } => {
            fetch::handle_loaded(state, |s| &mut s.new_deployment.packages, epoch, result)
        }

        // ─────────────────────────────────────────────────────────
        // Creation Completions
        // ─────────────────────────────────────────────────────────
        Message::PackageCreated { result } => forms::handle_package_created(state, result),
        Message::DeploymentCreated { result } => forms::handle_deployment_created(state, result),
    }
}
