//! Domain types mirrored from the backend's wire format.
//!
//! All entities are owned by the backend; the console only holds transient
//! deserialized copies. `status` fields are never computed or transitioned
//! locally -- they display exactly what the backend returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Online/offline state of a client machine, as reported by its last check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Online,
    Offline,
}

impl ClientStatus {
    /// Wire form used in query parameters (`online`, `offline`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Online => "online",
            ClientStatus::Offline => "offline",
        }
    }

    /// Human-readable label for tables and badges.
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Online => "Online",
            ClientStatus::Offline => "Offline",
        }
    }
}

/// Operating system family of a client machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    Windows,
    Macos,
    Linux,
}

impl OsType {
    /// Wire form used in query parameters (`windows`, `macos`, `linux`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OsType::Windows => "windows",
            OsType::Macos => "macos",
            OsType::Linux => "linux",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsType::Windows => "Windows",
            OsType::Macos => "macOS",
            OsType::Linux => "Linux",
        }
    }
}

/// Lifecycle state of a deployment job. Transitions happen server-side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl DeploymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeploymentStatus::Pending => "Pending",
            DeploymentStatus::InProgress => "In Progress",
            DeploymentStatus::Completed => "Completed",
            DeploymentStatus::Failed => "Failed",
        }
    }
}

/// A managed machine capable of receiving software deployments.
///
/// Read-only to the console; check-ins from the machine itself drive
/// `status` and `last_checkin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub hostname: String,
    pub ip_address: String,
    pub status: ClientStatus,
    pub os_type: OsType,
    pub last_checkin: DateTime<Utc>,
}

/// A named, versioned software artifact that can be deployed to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: u64,
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
}

/// A record of pushing one package to one client.
///
/// Carries the backend's denormalized client hostname and package
/// name/version so lists render without extra lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub client: u64,
    pub client_hostname: String,
    pub package: u64,
    pub package_name: String,
    pub package_version: String,
    pub status: DeploymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter inputs for the clients list. Local and ephemeral: never persisted,
/// reset when the screen is rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub status: Option<ClientStatus>,
    pub os_type: Option<OsType>,
}

impl ClientFilter {
    /// Filter matching only clients currently reported online.
    pub fn online() -> Self {
        Self {
            status: Some(ClientStatus::Online),
            os_type: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.os_type.is_none()
    }
}

/// Dashboard aggregate over the clients list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
}

impl ClientStats {
    pub fn from_clients(clients: &[Client]) -> Self {
        Self {
            total: clients.len(),
            online: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Online)
                .count(),
            offline: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Offline)
                .count(),
        }
    }
}

/// Dashboard aggregate over the packages list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageStats {
    pub total: usize,
}

impl PackageStats {
    pub fn from_packages(packages: &[Package]) -> Self {
        Self {
            total: packages.len(),
        }
    }
}

/// Dashboard aggregate over the deployments list, broken down by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeploymentStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub failed: usize,
}

impl DeploymentStats {
    pub fn from_deployments(deployments: &[Deployment]) -> Self {
        let count = |status: DeploymentStatus| {
            deployments.iter().filter(|d| d.status == status).count()
        };
        Self {
            total: deployments.len(),
            pending: count(DeploymentStatus::Pending),
            in_progress: count(DeploymentStatus::InProgress),
            completed: count(DeploymentStatus::Completed),
            failed: count(DeploymentStatus::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn client(id: u64, status: ClientStatus) -> Client {
        Client {
            id,
            hostname: format!("host-{id}"),
            ip_address: "10.0.0.1".to_string(),
            status,
            os_type: OsType::Linux,
            last_checkin: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    fn deployment(id: u64, status: DeploymentStatus) -> Deployment {
        Deployment {
            id,
            client: 1,
            client_hostname: "host-1".to_string(),
            package: 1,
            package_name: "chrome".to_string(),
            package_version: "120.0".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_client_deserializes_backend_payload() {
        let json = r#"{
            "id": 3,
            "hostname": "build-07",
            "ip_address": "192.168.1.42",
            "status": "online",
            "os_type": "macos",
            "last_checkin": "2025-06-01T12:00:00Z"
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, 3);
        assert_eq!(client.status, ClientStatus::Online);
        assert_eq!(client.os_type, OsType::Macos);
    }

    #[test]
    fn test_deployment_deserializes_denormalized_fields() {
        let json = r#"{
            "id": 9,
            "client": 3,
            "client_hostname": "build-07",
            "package": 5,
            "package_name": "firefox",
            "package_version": "126.0.1",
            "status": "in_progress",
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:05:00Z"
        }"#;
        let d: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(d.client_hostname, "build-07");
        assert_eq!(d.status, DeploymentStatus::InProgress);
    }

    #[test]
    fn test_status_wire_forms() {
        assert_eq!(ClientStatus::Online.as_str(), "online");
        assert_eq!(OsType::Macos.as_str(), "macos");
        let json = serde_json::to_string(&DeploymentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_client_stats_counts_by_status() {
        let clients = vec![
            client(1, ClientStatus::Online),
            client(2, ClientStatus::Offline),
            client(3, ClientStatus::Online),
        ];
        let stats = ClientStats::from_clients(&clients);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.online, 2);
        assert_eq!(stats.offline, 1);
    }

    #[test]
    fn test_deployment_stats_exact_per_status_counts() {
        let deployments = vec![
            deployment(1, DeploymentStatus::Pending),
            deployment(2, DeploymentStatus::Pending),
            deployment(3, DeploymentStatus::Pending),
            deployment(4, DeploymentStatus::Completed),
        ];
        let stats = DeploymentStats::from_deployments(&deployments);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn test_stats_from_empty_lists() {
        assert_eq!(ClientStats::from_clients(&[]), ClientStats::default());
        assert_eq!(
            DeploymentStats::from_deployments(&[]),
            DeploymentStats::default()
        );
    }

    #[test]
    fn test_client_filter_empty_and_online() {
        assert!(ClientFilter::default().is_empty());
        let online = ClientFilter::online();
        assert!(!online.is_empty());
        assert_eq!(online.status, Some(ClientStatus::Online));
        assert_eq!(online.os_type, None);
    }
}
