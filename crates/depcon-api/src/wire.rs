//! Wire-level request and response payloads for the backend REST API.

use serde::{Deserialize, Serialize};

/// `POST /api-token-auth/` request body.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /api-token-auth/` success response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

/// Envelope around every list endpoint: `{"results": [...]}`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// `POST /api/packages/` request body.
#[derive(Debug, Serialize)]
pub(crate) struct NewPackage<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

/// `POST /api/deployments/` request body: ids only, the backend denormalizes.
#[derive(Debug, Serialize)]
pub(crate) struct NewDeployment {
    pub client: u64,
    pub package: u64,
}
