//! # depcon-app - Application State and Orchestration
//!
//! The TEA-shaped engine of the console: a [`state::AppState`] model, a
//! [`message::Message`] enum, and a pure-ish [`handler::update`] function
//! that returns follow-up messages plus [`handler::UpdateAction`]s for the
//! event loop to perform. Network calls never happen inside `update`; they
//! are described as [`handler::Task`]s and executed by [`tasks`] on the
//! runtime, reporting back over the message channel.
//!
//! Screen controllers live in [`state`] as per-screen structs around the
//! shared [`loadable::Loadable`] fetch cell, which implements the
//! loading/ready/failed lifecycle, keep-last-data rendering, and stale
//! response discard via fetch epochs.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod loadable;
pub mod message;
pub mod state;
pub mod tasks;

pub use config::{load_settings, Settings};
pub use handler::{enter_screen, update, Task, UpdateAction, UpdateResult, POLL_INTERVAL};
pub use input_key::InputKey;
pub use loadable::{LoadPhase, Loadable};
pub use message::{FetchError, Message};
pub use state::{AppState, Screen};
