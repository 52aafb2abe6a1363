//! Key event handlers for each screen.

use depcon_core::{ClientStatus, OsType};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DeployField, LoginField, PackageField, Screen};

use super::{auth, forms, nav, Task, UpdateAction, UpdateResult};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Ctrl+C quits from anywhere, including text entry
    if key == InputKey::CharCtrl('c') {
        return UpdateResult::message(Message::Quit);
    }

    match state.screen {
        Screen::Login => login_key(state, key),
        Screen::Dashboard | Screen::Deployments => table_key(state, key),
        Screen::Clients => clients_key(state, key),
        Screen::Packages => packages_key(state, key),
        Screen::NewDeployment => new_deployment_key(state, key),
    }
}

/// Shared shortcuts on authenticated screens: the console rendition of the
/// navbar.
fn table_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') => UpdateResult::message(Message::Quit),
        InputKey::Char('1') => UpdateResult::message(Message::Navigate(Screen::Dashboard)),
        InputKey::Char('2') => UpdateResult::message(Message::Navigate(Screen::Clients)),
        InputKey::Char('3') => UpdateResult::message(Message::Navigate(Screen::Packages)),
        InputKey::Char('4') => UpdateResult::message(Message::Navigate(Screen::Deployments)),
        InputKey::Char('n') => UpdateResult::message(Message::Navigate(Screen::NewDeployment)),
        InputKey::Char('r') => UpdateResult::actions(nav::enter_screen(state)),
        InputKey::Char('L') => UpdateResult::message(Message::Logout),
        _ => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────────────

fn login_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Enter => auth::submit_login(state),
        InputKey::Esc => UpdateResult::message(Message::Quit),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            state.login.focus = match state.login.focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
            UpdateResult::none()
        }
        InputKey::Backspace => {
            login_field(state).pop();
            UpdateResult::none()
        }
        InputKey::Char(c) => {
            login_field(state).push(c);
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

fn login_field(state: &mut AppState) -> &mut String {
    match state.login.focus {
        LoginField::Username => &mut state.login.username,
        LoginField::Password => &mut state.login.password,
    }
}

// ─────────────────────────────────────────────────────────────────
// Clients
// ─────────────────────────────────────────────────────────────────

fn clients_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('s') => {
            state.clients.filter.status = cycle_status(state.clients.filter.status);
            refetch_clients(state)
        }
        InputKey::Char('o') => {
            state.clients.filter.os_type = cycle_os(state.clients.filter.os_type);
            refetch_clients(state)
        }
        other => table_key(state, other),
    }
}

/// Filter edits are an explicit refetch trigger; the epoch bump makes any
/// still-running fetch for the previous filter stale.
fn refetch_clients(state: &mut AppState) -> UpdateResult {
    let epoch = state.clients.list.begin();
    UpdateResult::action(UpdateAction::SpawnTask(Task::FetchClients {
        filter: state.clients.filter,
        epoch,
    }))
}

fn cycle_status(current: Option<ClientStatus>) -> Option<ClientStatus> {
    match current {
        None => Some(ClientStatus::Online),
        Some(ClientStatus::Online) => Some(ClientStatus::Offline),
        Some(ClientStatus::Offline) => None,
    }
}

fn cycle_os(current: Option<OsType>) -> Option<OsType> {
    match current {
        None => Some(OsType::Windows),
        Some(OsType::Windows) => Some(OsType::Macos),
        Some(OsType::Macos) => Some(OsType::Linux),
        Some(OsType::Linux) => None,
    }
}

// ─────────────────────────────────────────────────────────────────
// Packages
// ─────────────────────────────────────────────────────────────────

fn packages_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    if state.packages.form.is_some() {
        return package_form_key(state, key);
    }
    match key {
        InputKey::Char('a') => forms::open_package_form(state),
        other => table_key(state, other),
    }
}

fn package_form_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Enter => forms::submit_package(state),
        InputKey::Esc => forms::close_package_form(state),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            if let Some(form) = state.packages.form.as_mut() {
                form.focus = match form.focus {
                    PackageField::Name => PackageField::Version,
                    PackageField::Version => PackageField::Name,
                };
            }
            UpdateResult::none()
        }
        InputKey::Backspace => {
            if let Some(field) = package_field(state) {
                field.pop();
            }
            UpdateResult::none()
        }
        InputKey::Char(c) => {
            if let Some(field) = package_field(state) {
                field.push(c);
            }
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

fn package_field(state: &mut AppState) -> Option<&mut String> {
    state.packages.form.as_mut().map(|form| match form.focus {
        PackageField::Name => &mut form.name,
        PackageField::Version => &mut form.version,
    })
}

// ─────────────────────────────────────────────────────────────────
// New Deployment
// ─────────────────────────────────────────────────────────────────

fn new_deployment_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Enter => forms::submit_deployment(state),
        InputKey::Esc => UpdateResult::message(Message::Navigate(Screen::Deployments)),
        InputKey::Tab | InputKey::BackTab | InputKey::Left | InputKey::Right => {
            state.new_deployment.focus = match state.new_deployment.focus {
                DeployField::Clients => DeployField::Packages,
                DeployField::Packages => DeployField::Clients,
            };
            UpdateResult::none()
        }
        InputKey::Up => {
            move_selection(state, -1);
            UpdateResult::none()
        }
        InputKey::Down => {
            move_selection(state, 1);
            UpdateResult::none()
        }
        other => table_key(state, other),
    }
}

fn move_selection(state: &mut AppState, delta: i64) {
    let nd = &mut state.new_deployment;
    let len = match nd.focus {
        DeployField::Clients => nd.clients.data().map(Vec::len).unwrap_or(0),
        DeployField::Packages => nd.packages.data().map(Vec::len).unwrap_or(0),
    };
    let idx = match nd.focus {
        DeployField::Clients => &mut nd.client_idx,
        DeployField::Packages => &mut nd.package_idx,
    };
    if len == 0 {
        *idx = 0;
        return;
    }
    let next = (*idx as i64 + delta).clamp(0, len as i64 - 1);
    *idx = next as usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_status_covers_all_states() {
        assert_eq!(cycle_status(None), Some(ClientStatus::Online));
        assert_eq!(
            cycle_status(Some(ClientStatus::Online)),
            Some(ClientStatus::Offline)
        );
        assert_eq!(cycle_status(Some(ClientStatus::Offline)), None);
    }

    #[test]
    fn test_cycle_os_covers_all_states() {
        assert_eq!(cycle_os(None), Some(OsType::Windows));
        assert_eq!(cycle_os(Some(OsType::Windows)), Some(OsType::Macos));
        assert_eq!(cycle_os(Some(OsType::Macos)), Some(OsType::Linux));
        assert_eq!(cycle_os(Some(OsType::Linux)), None);
    }
}
