//! Background task execution.
//!
//! `update` never performs network calls; it returns [`Task`]s, and the event
//! loop hands them here. Each task runs one backend call on the runtime and
//! reports back as a [`Message`] over the channel. Completions carry the
//! fetch epoch they were started with; the owning cell decides whether they
//! still apply.

use std::sync::Arc;

use tokio::sync::mpsc;

use depcon_api::ApiClient;
use depcon_core::{ClientFilter, Error};

use crate::handler::Task;
use crate::message::{FetchError, Message};

/// Spawn a task on the runtime. The completion message is dropped if the
/// event loop is already gone.
pub fn spawn(task: Task, api: Arc<ApiClient>, tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let message = execute(task, api.as_ref()).await;
        if tx.send(message).await.is_err() {
            tracing::debug!("Message channel closed, dropping task result");
        }
    });
}

/// Run one task to completion. Public so tests can drive tasks
/// deterministically without the event loop.
pub async fn execute(task: Task, api: &ApiClient) -> Message {
    match task {
        Task::Login { username, password } => Message::LoginCompleted {
            result: api.login(&username, &password).await.map_err(login_error),
        },

        Task::FetchClients { filter, epoch } => Message::ClientsLoaded {
            epoch,
            result: api
                .list_clients(&filter)
                .await
                .map_err(|e| FetchError::from_error("Failed to load clients data", &e)),
        },
        Task::FetchPackages { epoch } => Message::PackagesLoaded {
            epoch,
            result: api
                .list_packages()
                .await
                .map_err(|e| FetchError::from_error("Failed to load packages data", &e)),
        },
        Task::FetchDeployments { epoch } => Message::DeploymentsLoaded {
            epoch,
            result: api
                .list_deployments()
                .await
                .map_err(|e| FetchError::from_error("Failed to load deployments data", &e)),
        },

        Task::FetchDashboardClients { epoch } => Message::DashboardClientsLoaded {
            epoch,
            result: api
                .list_clients(&ClientFilter::default())
                .await
                .map_err(|e| FetchError::from_error("Failed to load dashboard data", &e)),
        },
        Task::FetchDashboardPackages { epoch } => Message::DashboardPackagesLoaded {
            epoch,
            result: api
                .list_packages()
                .await
                .map_err(|e| FetchError::from_error("Failed to load dashboard data", &e)),
        },
        Task::FetchDashboardDeployments { epoch } => Message::DashboardDeploymentsLoaded {
            epoch,
            result: api
                .list_deployments()
                .await
                .map_err(|e| FetchError::from_error("Failed to load dashboard data", &e)),
        },

        Task::FetchDeployClients { epoch } => Message::DeployClientsLoaded {
            epoch,
            result: api
                .list_clients(&ClientFilter::online())
                .await
                .map_err(|e| FetchError::from_error("Failed to load required data", &e)),
        },
        Task::FetchDeployPackages { epoch } => Message::DeployPackagesLoaded {
            epoch,
            result: api
                .list_packages()
                .await
                .map_err(|e| FetchError::from_error("Failed to load required data", &e)),
        },

        Task::CreatePackage { name, version } => Message::PackageCreated {
            result: api
                .create_package(&name, &version)
                .await
                .map_err(|e| FetchError::from_error("Failed to create package", &e)),
        },
        Task::CreateDeployment { client, package } => Message::DeploymentCreated {
            result: api
                .create_deployment(client, package)
                .await
                .map_err(|e| FetchError::from_error("Failed to create deployment", &e)),
        },
    }
}

/// Login failures stay on the login screen: bad credentials get the specific
/// message, anything else the generic one. Neither expires a session (there
/// is nothing to expire yet).
fn login_error(err: Error) -> FetchError {
    match err {
        Error::InvalidCredentials => FetchError {
            message: "Invalid username or password".to_string(),
            unauthorized: false,
        },
        other => {
            tracing::error!("Login failed: {}", other);
            FetchError {
                message: "Login failed. Please try again.".to_string(),
                unauthorized: false,
            }
        }
    }
}
