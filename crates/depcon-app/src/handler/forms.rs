//! Add-package and new-deployment form handling.

use depcon_core::{Deployment, Package};

use crate::message::{FetchError, Message};
use crate::state::{AppState, PackageForm, Screen};

use super::{fetch, Task, UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────
// Add Package
// ─────────────────────────────────────────────────────────────────

pub(crate) fn open_package_form(state: &mut AppState) -> UpdateResult {
    state.packages.form = Some(PackageForm::default());
    UpdateResult::none()
}

pub(crate) fn close_package_form(state: &mut AppState) -> UpdateResult {
    state.packages.form = None;
    UpdateResult::none()
}

/// Submit the add-package form. Empty name or version fails locally: a
/// message is shown and no network call is issued.
pub(crate) fn submit_package(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.packages.form.as_mut() else {
        return UpdateResult::none();
    };
    if form.submitting {
        return UpdateResult::none();
    }

    let name = form.name.trim().to_string();
    let version = form.version.trim().to_string();
    if name.is_empty() || version.is_empty() {
        form.error = Some("Please fill all fields".to_string());
        return UpdateResult::none();
    }

    form.error = None;
    form.submitting = true;
    UpdateResult::action(UpdateAction::SpawnTask(Task::CreatePackage {
        name,
        version,
    }))
}

pub(crate) fn handle_package_created(
    state: &mut AppState,
    result: Result<Package, FetchError>,
) -> UpdateResult {
    match result {
        Ok(package) => {
            tracing::info!("Created package {} v{}", package.name, package.version);
            state.packages.form = None;
            // Show the new package: refetch the list
            let epoch = state.packages.list.begin();
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchPackages { epoch }))
        }
        Err(e) if e.unauthorized => fetch::expire_and_redirect(state),
        Err(e) => {
            if let Some(form) = state.packages.form.as_mut() {
                form.submitting = false;
                form.error = Some(e.message);
            }
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// New Deployment
// ─────────────────────────────────────────────────────────────────

/// Submit the new-deployment form. Both pick lists must have a selection.
/// Whether the chosen client is still online at submit time is the backend's
/// call, not ours.
pub(crate) fn submit_deployment(state: &mut AppState) -> UpdateResult {
    if state.new_deployment.submitting {
        return UpdateResult::none();
    }

    let client = state.new_deployment.selected_client().map(|c| c.id);
    let package = state.new_deployment.selected_package().map(|p| p.id);
    let (Some(client), Some(package)) = (client, package) else {
        state.new_deployment.error =
            Some("Please select both a client and a package".to_string());
        return UpdateResult::none();
    };

    state.new_deployment.error = None;
    state.new_deployment.submitting = true;
    UpdateResult::action(UpdateAction::SpawnTask(Task::CreateDeployment {
        client,
        package,
    }))
}

pub(crate) fn handle_deployment_created(
    state: &mut AppState,
    result: Result<Deployment, FetchError>,
) -> UpdateResult {
    state.new_deployment.submitting = false;
    match result {
        Ok(deployment) => {
            tracing::info!(
                "Created deployment {} ({} -> {})",
                deployment.id,
                deployment.package_name,
                deployment.client_hostname
            );
            UpdateResult::message(Message::Navigate(Screen::Deployments))
        }
        Err(e) if e.unauthorized => fetch::expire_and_redirect(state),
        Err(e) => {
            state.new_deployment.error = Some(e.message);
            UpdateResult::none()
        }
    }
}
