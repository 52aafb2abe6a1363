//! Application state (Model in TEA pattern)

use std::time::Instant;

use depcon_api::Session;
use depcon_core::{
    Client, ClientFilter, ClientStats, Deployment, DeploymentStats, Package, PackageStats,
};

use crate::loadable::Loadable;

/// Current screen. The console shows exactly one at a time; the navigation
/// guard in [`AppState::resolve_screen`] decides what a requested screen
/// actually resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    Login,
    #[default]
    Dashboard,
    Clients,
    Packages,
    Deployments,
    NewDeployment,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Clients => "Clients",
            Screen::Packages => "Packages",
            Screen::Deployments => "Deployments",
            Screen::NewDeployment => "New Deployment",
        }
    }

    /// Every screen except the login form requires a credential.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

/// Focused field on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginState {
    pub fn reset(&mut self) {
        *self = LoginState::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Three independently tracked results: one failing list never blanks
    /// the other two.
    pub clients: Loadable<ClientStats>,
    pub packages: Loadable<PackageStats>,
    pub deployments: Loadable<DeploymentStats>,
}

#[derive(Debug, Clone, Default)]
pub struct ClientsState {
    pub list: Loadable<Vec<Client>>,
    /// Local, ephemeral; reset when the screen is left.
    pub filter: ClientFilter,
}

/// Focused field on the add-package form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageField {
    #[default]
    Name,
    Version,
}

#[derive(Debug, Clone, Default)]
pub struct PackageForm {
    pub name: String,
    pub version: String,
    pub focus: PackageField,
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PackagesState {
    pub list: Loadable<Vec<Package>>,
    /// `Some` while the add-package form is open.
    pub form: Option<PackageForm>,
}

#[derive(Debug, Clone, Default)]
pub struct DeploymentsState {
    pub list: Loadable<Vec<Deployment>>,
    /// Set while the screen is active; drives the 5-second poll.
    pub last_poll: Option<Instant>,
}

/// Focused pick list on the new-deployment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployField {
    #[default]
    Clients,
    Packages,
}

#[derive(Debug, Clone, Default)]
pub struct NewDeploymentState {
    /// Only clients currently reported online are offered.
    pub clients: Loadable<Vec<Client>>,
    pub packages: Loadable<Vec<Package>>,
    pub client_idx: usize,
    pub package_idx: usize,
    pub focus: DeployField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl NewDeploymentState {
    pub fn selected_client(&self) -> Option<&Client> {
        self.clients.data().and_then(|list| list.get(self.client_idx))
    }

    pub fn selected_package(&self) -> Option<&Package> {
        self.packages
            .data()
            .and_then(|list| list.get(self.package_idx))
    }

    /// Clear the form without discarding the fetch cells (their epochs must
    /// stay monotonic so stale completions keep being discarded).
    pub fn reset_form(&mut self) {
        self.client_idx = 0;
        self.package_idx = 0;
        self.focus = DeployField::default();
        self.error = None;
        self.submitting = false;
    }
}

/// Top-level application state.
pub struct AppState {
    pub screen: Screen,
    pub should_quit: bool,
    pub session: Session,
    /// Backend base URL, shown in the status bar.
    pub server: String,

    pub login: LoginState,
    pub dashboard: DashboardState,
    pub clients: ClientsState,
    pub packages: PackagesState,
    pub deployments: DeploymentsState,
    pub new_deployment: NewDeploymentState,
}

impl AppState {
    /// Initial state. The starting screen is the root-path redirect: the
    /// dashboard when a persisted credential is held, the login form
    /// otherwise.
    pub fn new(session: Session, server: impl Into<String>) -> Self {
        let screen = if session.is_authenticated() {
            Screen::Dashboard
        } else {
            Screen::Login
        };
        Self {
            screen,
            should_quit: false,
            session,
            server: server.into(),
            login: LoginState::default(),
            dashboard: DashboardState::default(),
            clients: ClientsState::default(),
            packages: PackagesState::default(),
            deployments: DeploymentsState::default(),
            new_deployment: NewDeploymentState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Navigation guard: guarded screens require an authenticated session,
    /// and the login screen bounces an authenticated operator to the
    /// dashboard. No deep-link preservation: the originally requested screen
    /// is not remembered across a login.
    pub fn resolve_screen(&self, requested: Screen) -> Screen {
        if requested.requires_auth() && !self.session.is_authenticated() {
            return Screen::Login;
        }
        if requested == Screen::Login && self.session.is_authenticated() {
            return Screen::Dashboard;
        }
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depcon_api::TokenStore;
    use tempfile::TempDir;

    fn anonymous_state(dir: &TempDir) -> AppState {
        let session = Session::new(TokenStore::new(dir.path().join("token")));
        AppState::new(session, "http://localhost:8000")
    }

    fn authenticated_state(dir: &TempDir) -> AppState {
        let state = anonymous_state(dir);
        state.session.authenticate("tok".to_string()).unwrap();
        state
    }

    #[test]
    fn test_starts_on_login_without_token() {
        let dir = TempDir::new().unwrap();
        assert_eq!(anonymous_state(&dir).screen, Screen::Login);
    }

    #[test]
    fn test_starts_on_dashboard_with_persisted_token() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("token"));
        store.save("tok-persisted").unwrap();
        let state = AppState::new(Session::new(store), "http://localhost:8000");
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_guard_redirects_anonymous_to_login() {
        let dir = TempDir::new().unwrap();
        let state = anonymous_state(&dir);
        for requested in [
            Screen::Dashboard,
            Screen::Clients,
            Screen::Packages,
            Screen::Deployments,
            Screen::NewDeployment,
        ] {
            assert_eq!(state.resolve_screen(requested), Screen::Login);
        }
        assert_eq!(state.resolve_screen(Screen::Login), Screen::Login);
    }

    #[test]
    fn test_guard_bounces_authenticated_off_login() {
        let dir = TempDir::new().unwrap();
        let state = authenticated_state(&dir);
        assert_eq!(state.resolve_screen(Screen::Login), Screen::Dashboard);
        assert_eq!(state.resolve_screen(Screen::Clients), Screen::Clients);
    }

    #[test]
    fn test_new_deployment_selection_accessors() {
        let mut nd = NewDeploymentState::default();
        assert!(nd.selected_client().is_none());

        let epoch = nd.packages.begin();
        nd.packages.finish(
            epoch,
            Ok(vec![depcon_core::Package {
                id: 5,
                name: "chrome".to_string(),
                version: "126.0".to_string(),
                created_at: chrono::Utc::now(),
            }]),
        );
        assert_eq!(nd.selected_package().map(|p| p.id), Some(5));

        nd.package_idx = 3;
        assert!(nd.selected_package().is_none());
    }
}
