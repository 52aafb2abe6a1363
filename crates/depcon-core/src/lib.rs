//! # depcon-core - Core Domain Types
//!
//! Foundation crate for depcon. Provides the domain types mirrored from the
//! deployment backend's wire format, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Client`] - A managed machine capable of receiving deployments
//! - [`Package`] - A named, versioned software artifact
//! - [`Deployment`] - A record of pushing one package to one client
//! - [`ClientFilter`] - Local, ephemeral list filter for the clients screen
//! - [`ClientStats`], [`PackageStats`], [`DeploymentStats`] - Dashboard
//!   aggregates derived by linear scan over the full list responses
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use depcon_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all depcon crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    Client, ClientFilter, ClientStats, ClientStatus, Deployment, DeploymentStats,
    DeploymentStatus, OsType, Package, PackageStats,
};
