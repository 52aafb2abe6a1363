//! Typed client for the deployment platform's REST API.
//!
//! One operation per backend resource action. Every authenticated call
//! attaches `Authorization: Token <value>` from the session; when no
//! credential is held the header is simply omitted and the backend rejects
//! the call. This adapter performs no local authorization check.

use std::time::Duration;

use reqwest::{header, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use depcon_core::prelude::*;
use depcon_core::{Client, ClientFilter, Deployment, Package};

use crate::session::Session;
use crate::wire::{ListResponse, LoginRequest, NewDeployment, NewPackage, TokenResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum length of a backend error body echoed into an [`Error::Api`].
const MAX_ERROR_BODY: usize = 200;

/// Build the query parameter list for `GET /api/clients/`.
///
/// Exactly the filter fields that are set appear, in stable order: an unset
/// field produces no parameter at all (no empty `status=`).
pub fn client_query(filter: &ClientFilter) -> Vec<(&'static str, &'static str)> {
    let mut query = Vec::new();
    if let Some(status) = filter.status {
        query.push(("status", status.as_str()));
    }
    if let Some(os_type) = filter.os_type {
        query.push(("os_type", os_type.as_str()));
    }
    query
}

/// HTTP client for the deployment backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: Url, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ─────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────

    /// `POST /api-token-auth/`. On success the issued token is persisted and
    /// the session transitions to authenticated. Any non-2xx is surfaced as
    /// an authentication failure; nothing is persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = self.url("/api-token-auth/")?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        if !response.status().is_success() {
            warn!("Login rejected with status {}", response.status());
            return Err(Error::InvalidCredentials);
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::protocol(e.to_string()))?;
        self.session.authenticate(body.token)
    }

    /// Drop the credential. No network call: the backend token stays valid
    /// server-side, the console just forgets it.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()
    }

    // ─────────────────────────────────────────────────────────
    // Clients
    // ─────────────────────────────────────────────────────────

    pub async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>> {
        self.get_list("/api/clients/", &client_query(filter)).await
    }

    pub async fn get_client(&self, id: u64) -> Result<Client> {
        self.get_json(&format!("/api/clients/{id}/"), &[]).await
    }

    // ─────────────────────────────────────────────────────────
    // Packages
    // ─────────────────────────────────────────────────────────

    pub async fn list_packages(&self) -> Result<Vec<Package>> {
        self.get_list("/api/packages/", &[]).await
    }

    pub async fn create_package(&self, name: &str, version: &str) -> Result<Package> {
        self.post_json("/api/packages/", &NewPackage { name, version })
            .await
    }

    // ─────────────────────────────────────────────────────────
    // Deployments
    // ─────────────────────────────────────────────────────────

    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.get_list("/api/deployments/", &[]).await
    }

    pub async fn get_deployment(&self, id: u64) -> Result<Deployment> {
        self.get_json(&format!("/api/deployments/{id}/"), &[]).await
    }

    pub async fn create_deployment(&self, client: u64, package: u64) -> Result<Deployment> {
        self.post_json("/api/deployments/", &NewDeployment { client, package })
            .await
    }

    // ─────────────────────────────────────────────────────────
    // Request plumbing
    // ─────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::protocol(format!("invalid request URL {path}: {e}")))
    }

    /// Attach the credential header if one is held; omit it otherwise.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Token {token}")),
            None => request,
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, &'static str)],
    ) -> Result<Vec<T>> {
        let envelope: ListResponse<T> = self.get_json(path, query).await?;
        Ok(envelope.results)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, &'static str)],
    ) -> Result<T> {
        let url = self.url(path)?;
        debug!("GET {}", url);

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| Error::protocol(e.to_string()))
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path)?;
        debug!("POST {}", url);

        let response = self
            .authorized(self.http.post(url).json(body))
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| Error::protocol(e.to_string()))
    }
}

/// Map non-2xx statuses: 401/403 to [`Error::Unauthorized`] so the caller
/// can expire the session, everything else to [`Error::Api`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Unauthorized);
    }
    let mut body = response.text().await.unwrap_or_default();
    body.truncate(MAX_ERROR_BODY);
    error!("API request failed: {} - {}", status, body);
    Err(Error::api(status.as_u16(), body))
}
