//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `nav`: Navigation guard, screen enter/leave
//! - `auth`: Login submit/completion and logout
//! - `fetch`: Fetch completion application and session expiry
//! - `forms`: Add-package and new-deployment form handling
//! - `poll`: Fixed-interval deployments poll

pub(crate) mod auth;
pub(crate) mod fetch;
pub(crate) mod forms;
pub(crate) mod keys;
pub(crate) mod nav;
pub(crate) mod poll;
pub(crate) mod update;


use depcon_core::ClientFilter;

// Re-export main entry points
pub use nav::enter_screen;
pub use poll::POLL_INTERVAL;
pub use update::update;

/// Background work described by `update` and executed by the event loop.
/// Every variant maps to one backend call; fetches carry the epoch their
/// completion must present to the owning `Loadable`.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Login { username: String, password: String },

    FetchClients { filter: ClientFilter, epoch: u64 },
    FetchPackages { epoch: u64 },
    FetchDeployments { epoch: u64 },

    FetchDashboardClients { epoch: u64 },
    FetchDashboardPackages { epoch: u64 },
    FetchDashboardDeployments { epoch: u64 },

    /// Online clients only, for the new-deployment pick list
    FetchDeployClients { epoch: u64 },
    FetchDeployPackages { epoch: u64 },

    CreatePackage { name: String, version: String },
    CreateDeployment { client: u64, package: u64 },
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Actions for the event loop to perform (a screen entry can start
    /// several fetches at once)
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: crate::message::Message) -> Self {
        Self {
            message: Some(message),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
