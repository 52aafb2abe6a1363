//! Session state shared between the API adapter and the UI.
//!
//! Token presence is treated as validity: no round-trip at startup. An
//! expired or forged token is only discovered on the first authenticated
//! call, at which point [`Session::expire`] drops it.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;

use depcon_core::prelude::*;

use crate::token::TokenStore;

/// Whether a credential is currently held. There is no automatic expiry
/// transition; only login, logout, and a backend rejection move this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

struct Inner {
    store: TokenStore,
    token: RwLock<Option<String>>,
    state_tx: watch::Sender<SessionState>,
}

/// Explicit session context object, cloned and passed down to whoever needs
/// it. Exposes read ([`state`](Session::state), [`token`](Session::token)),
/// subscribe ([`subscribe`](Session::subscribe)) and update
/// ([`authenticate`](Session::authenticate), [`clear`](Session::clear),
/// [`expire`](Session::expire)) operations.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    /// Create a session from the persisted credential, if any. No server
    /// round-trip is made to validate it.
    pub fn new(store: TokenStore) -> Self {
        let token = store.load();
        let state = if token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };
        let (state_tx, _) = watch::channel(state);
        Self {
            inner: Arc::new(Inner {
                store,
                token: RwLock::new(token),
                state_tx,
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        *self.inner.state_tx.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Watch for state transitions (login, logout, expiry).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state_tx.subscribe()
    }

    /// Current credential, if held.
    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Store a freshly issued token and transition to authenticated.
    /// Called only after a successful login.
    pub fn authenticate(&self, token: String) -> Result<()> {
        self.inner.store.save(&token)?;
        if let Ok(mut guard) = self.inner.token.write() {
            *guard = Some(token);
        }
        self.inner.state_tx.send_replace(SessionState::Authenticated);
        info!("Session authenticated");
        Ok(())
    }

    /// Explicit logout: drop the credential from memory and disk.
    pub fn clear(&self) -> Result<()> {
        self.inner.store.clear()?;
        if let Ok(mut guard) = self.inner.token.write() {
            *guard = None;
        }
        self.inner.state_tx.send_replace(SessionState::Anonymous);
        info!("Session cleared");
        Ok(())
    }

    /// The backend rejected the held credential (401/403). Same effect as
    /// logout, kept separate for logging and intent.
    pub fn expire(&self) {
        warn!("Credential rejected by backend, expiring session");
        if let Err(e) = self.clear() {
            error!("Failed to clear expired credential: {}", e);
        }
    }
}
