//! # depcon-api - Backend REST Client
//!
//! Typed adapter over the deployment platform's REST API, plus the two pieces
//! of state it shares with the rest of the console:
//!
//! - [`ApiClient`] - one operation per backend resource action. Attaches the
//!   persisted credential as `Authorization: Token <value>` when one is held,
//!   omits the header otherwise. No local authorization checks: the backend
//!   decides, and a 401/403 surfaces as [`depcon_core::Error::Unauthorized`].
//! - [`Session`] - explicit anonymous/authenticated context object with
//!   read/subscribe/update operations. Never a hidden module-level flag, so
//!   tests can instantiate independent sessions.
//! - [`TokenStore`] - the single opaque credential string persisted under a
//!   fixed path. Absence means anonymous.

pub mod client;
pub mod session;
pub mod token;
pub mod wire;

pub use client::{client_query, ApiClient};
pub use session::{Session, SessionState};
pub use token::TokenStore;
