//! Message types for the application (TEA pattern)

use depcon_core::{Client, Deployment, Error, Package};

use crate::input_key::InputKey;
use crate::state::Screen;

/// A fetch failure flattened for display. Screens show the generic message;
/// the original error has already been logged. `unauthorized` marks the
/// backend's 401/403 rejection, which expires the session instead of
/// becoming a banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
    pub unauthorized: bool,
}

impl FetchError {
    /// Log the underlying error and keep only the user-facing message.
    pub fn from_error(context: &str, err: &Error) -> Self {
        tracing::error!("{}: {}", context, err);
        Self {
            message: context.to_string(),
            unauthorized: err.is_unauthorized(),
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (drives the deployments poll)
    Tick,

    /// Quit the application
    Quit,

    /// Request a screen change (subject to the navigation guard)
    Navigate(Screen),

    /// Drop the credential and return to the login screen
    Logout,

    // ─────────────────────────────────────────────────────────
    // Fetch Completions (epoch-stamped, see Loadable)
    // ─────────────────────────────────────────────────────────
    LoginCompleted {
        result: Result<(), FetchError>,
    },
    ClientsLoaded {
        epoch: u64,
        result: Result<Vec<Client>, FetchError>,
    },
    PackagesLoaded {
        epoch: u64,
        result: Result<Vec<Package>, FetchError>,
    },
    DeploymentsLoaded {
        epoch: u64,
        result: Result<Vec<Deployment>, FetchError>,
    },

    // Dashboard: three independent completions, one per list
    DashboardClientsLoaded {
        epoch: u64,
        result: Result<Vec<Client>, FetchError>,
    },
    DashboardPackagesLoaded {
        epoch: u64,
        result: Result<Vec<Package>, FetchError>,
    },
    DashboardDeploymentsLoaded {
        epoch: u64,
        result: Result<Vec<Deployment>, FetchError>,
    },

    // New-deployment pick lists
    DeployClientsLoaded {
        epoch: u64,
        result: Result<Vec<Client>, FetchError>,
    },
    DeployPackagesLoaded {
        epoch: u64,
        result: Result<Vec<Package>, FetchError>,
    },

    // ─────────────────────────────────────────────────────────
    // Creation Completions
    // ─────────────────────────────────────────────────────────
    PackageCreated {
        result: Result<Package, FetchError>,
    },
    DeploymentCreated {
        result: Result<Deployment, FetchError>,
    },
}
