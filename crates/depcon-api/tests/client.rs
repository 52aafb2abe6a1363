//! Integration tests for the API client against an in-process fixture backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;
use url::Url;

use depcon_api::{ApiClient, Session, TokenStore};
use depcon_core::{ClientFilter, ClientStatus, Error, OsType};

const VALID_TOKEN: &str = "tok-fixture-1";

#[derive(Default)]
struct Recorded {
    client_queries: Vec<Option<String>>,
    package_bodies: Vec<Value>,
    deployment_bodies: Vec<Value>,
}

#[derive(Clone)]
struct FixtureState {
    recorded: Arc<Mutex<Recorded>>,
    /// When set, every `/api/` call is rejected with 401 regardless of the
    /// header, simulating a revoked token.
    reject_all: bool,
}

/// In-process backend bound to an ephemeral port.
struct TestBackend {
    base_url: Url,
    recorded: Arc<Mutex<Recorded>>,
}

impl TestBackend {
    async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    async fn spawn_rejecting() -> Self {
        Self::spawn_with(true).await
    }

    async fn spawn_with(reject_all: bool) -> Self {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = FixtureState {
            recorded: recorded.clone(),
            reject_all,
        };

        let app = Router::new()
            .route("/api-token-auth/", post(token_auth))
            .route("/api/clients/", get(list_clients))
            .route("/api/clients/{id}/", get(get_client))
            .route("/api/packages/", get(list_packages).post(create_package))
            .route(
                "/api/deployments/",
                get(list_deployments).post(create_deployment),
            )
            .route("/api/deployments/{id}/", get(get_deployment))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestBackend {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
            recorded,
        }
    }
}

fn authorized(state: &FixtureState, headers: &HeaderMap) -> bool {
    if state.reject_all {
        return false;
    }
    let expected = format!("Token {VALID_TOKEN}");
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false)
}

async fn token_auth(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "secret" {
        Json(json!({"token": VALID_TOKEN})).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"non_field_errors": ["Unable to log in with provided credentials."]})),
        )
            .into_response()
    }
}

fn fixture_clients() -> Vec<Value> {
    vec![
        json!({
            "id": 1, "hostname": "web-01", "ip_address": "10.0.0.11",
            "status": "online", "os_type": "linux",
            "last_checkin": "2025-06-01T12:00:00Z"
        }),
        json!({
            "id": 2, "hostname": "desk-02", "ip_address": "10.0.0.12",
            "status": "offline", "os_type": "windows",
            "last_checkin": "2025-05-30T09:30:00Z"
        }),
        json!({
            "id": 3, "hostname": "mac-03", "ip_address": "10.0.0.13",
            "status": "online", "os_type": "macos",
            "last_checkin": "2025-06-01T11:59:00Z"
        }),
    ]
}

async fn list_clients(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.recorded.lock().unwrap().client_queries.push(raw);
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let results: Vec<Value> = fixture_clients()
        .into_iter()
        .filter(|c| {
            params
                .get("status")
                .map(|want| c["status"] == want.as_str())
                .unwrap_or(true)
                && params
                    .get("os_type")
                    .map(|want| c["os_type"] == want.as_str())
                    .unwrap_or(true)
        })
        .collect();
    Json(json!({ "results": results })).into_response()
}

async fn get_client(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    axum::extract::Path(id): axum::extract::Path<u64>,
) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match fixture_clients().into_iter().find(|c| c["id"] == id) {
        Some(client) => Json(client).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_packages(State(state): State<FixtureState>, headers: HeaderMap) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"results": [
        {"id": 1, "name": "chrome", "version": "126.0", "created_at": "2025-05-01T08:00:00Z"},
        {"id": 2, "name": "office", "version": "2024.1", "created_at": "2025-05-02T08:00:00Z"},
    ]}))
    .into_response()
}

async fn create_package(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state
        .recorded
        .lock()
        .unwrap()
        .package_bodies
        .push(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 9,
            "name": body["name"],
            "version": body["version"],
            "created_at": "2025-06-01T12:00:00Z"
        })),
    )
        .into_response()
}

fn fixture_deployment(id: u64, status: &str) -> Value {
    json!({
        "id": id, "client": 1, "client_hostname": "web-01",
        "package": 1, "package_name": "chrome", "package_version": "126.0",
        "status": status,
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:05:00Z"
    })
}

async fn list_deployments(State(state): State<FixtureState>, headers: HeaderMap) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"results": [
        fixture_deployment(1, "pending"),
        fixture_deployment(2, "in_progress"),
        fixture_deployment(3, "completed"),
    ]}))
    .into_response()
}

async fn get_deployment(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    axum::extract::Path(id): axum::extract::Path<u64>,
) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(fixture_deployment(id, "completed")).into_response()
}

async fn create_deployment(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state
        .recorded
        .lock()
        .unwrap()
        .deployment_bodies
        .push(body.clone());
    (
        StatusCode::CREATED,
        Json(fixture_deployment(42, "pending")),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

fn anonymous_client(backend: &TestBackend) -> (ApiClient, TempDir) {
    let dir = TempDir::new().unwrap();
    let session = Session::new(TokenStore::new(dir.path().join("token")));
    let api = ApiClient::new(backend.base_url.clone(), session).unwrap();
    (api, dir)
}

fn authenticated_client(backend: &TestBackend) -> (ApiClient, TempDir) {
    let (api, dir) = anonymous_client(backend);
    api.session().authenticate(VALID_TOKEN.to_string()).unwrap();
    (api, dir)
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_persists_token_and_authenticates() {
    let backend = TestBackend::spawn().await;
    let (api, dir) = anonymous_client(&backend);

    api.login("admin", "secret").await.unwrap();

    assert!(api.session().is_authenticated());
    // Token landed on disk, not just in memory
    let reloaded = TokenStore::new(dir.path().join("token"));
    assert_eq!(reloaded.load(), Some(VALID_TOKEN.to_string()));
}

#[tokio::test]
async fn test_login_failure_leaves_anonymous_and_persists_nothing() {
    let backend = TestBackend::spawn().await;
    let (api, dir) = anonymous_client(&backend);

    let err = api.login("admin", "wrong").await.unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
    assert!(!api.session().is_authenticated());
    assert_eq!(TokenStore::new(dir.path().join("token")).load(), None);
}

#[tokio::test]
async fn test_logout_clears_persisted_token() {
    let backend = TestBackend::spawn().await;
    let (api, dir) = authenticated_client(&backend);

    api.logout().unwrap();

    assert!(!api.session().is_authenticated());
    assert_eq!(TokenStore::new(dir.path().join("token")).load(), None);
}

#[tokio::test]
async fn test_list_clients_empty_filter_sends_no_params() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let clients = api.list_clients(&ClientFilter::default()).await.unwrap();
    assert_eq!(clients.len(), 3);

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(recorded.client_queries, vec![None]);
}

#[tokio::test]
async fn test_list_clients_sends_exactly_the_set_filters() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let filter = ClientFilter {
        status: Some(ClientStatus::Online),
        os_type: Some(OsType::Linux),
    };
    let clients = api.list_clients(&filter).await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].hostname, "web-01");

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(
        recorded.client_queries,
        vec![Some("status=online&os_type=linux".to_string())]
    );
}

#[tokio::test]
async fn test_list_clients_status_only_filter() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let filter = ClientFilter {
        status: Some(ClientStatus::Offline),
        os_type: None,
    };
    let clients = api.list_clients(&filter).await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].hostname, "desk-02");

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(
        recorded.client_queries,
        vec![Some("status=offline".to_string())]
    );
}

#[tokio::test]
async fn test_anonymous_call_omits_header_and_is_rejected() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = anonymous_client(&backend);

    let err = api.list_clients(&ClientFilter::default()).await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_revoked_token_maps_to_unauthorized_without_touching_session() {
    let backend = TestBackend::spawn_rejecting().await;
    let (api, _dir) = authenticated_client(&backend);

    let err = api.list_packages().await.unwrap_err();
    assert!(err.is_unauthorized());
    // Expiring the session on 401 is the app layer's decision, not the
    // adapter's
    assert!(api.session().is_authenticated());
}

#[tokio::test]
async fn test_create_package_posts_body_and_parses_created() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let created = api.create_package("firefox", "127.0").await.unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(created.name, "firefox");

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(
        recorded.package_bodies,
        vec![json!({"name": "firefox", "version": "127.0"})]
    );
}

#[tokio::test]
async fn test_create_deployment_posts_ids_only() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let created = api.create_deployment(1, 1).await.unwrap();
    assert_eq!(created.id, 42);

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(
        recorded.deployment_bodies,
        vec![json!({"client": 1, "package": 1})]
    );
}

#[tokio::test]
async fn test_list_deployments_parses_statuses() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let deployments = api.list_deployments().await.unwrap();
    assert_eq!(deployments.len(), 3);
    assert_eq!(
        deployments[1].status,
        depcon_core::DeploymentStatus::InProgress
    );
}

#[tokio::test]
async fn test_get_deployment_by_id() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let deployment = api.get_deployment(7).await.unwrap();
    assert_eq!(deployment.id, 7);
}

#[tokio::test]
async fn test_get_client_by_id() {
    let backend = TestBackend::spawn().await;
    let (api, _dir) = authenticated_client(&backend);

    let client = api.get_client(2).await.unwrap();
    assert_eq!(client.hostname, "desk-02");

    let err = api.get_client(99).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}
