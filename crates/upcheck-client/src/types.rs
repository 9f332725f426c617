//! Wire types for the upstream check status payload.
//!
//! These types mirror the JSON the upstream check module serves on its
//! status page when queried with `format=json`.

use serde::{Deserialize, Serialize};

/// Top-level status payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    /// Summary block wrapping the per-server records.
    #[serde(default)]
    pub servers: CheckSummary,
}

impl CheckReport {
    /// The reported servers, in the order the status page listed them.
    ///
    /// That order drives the grouping in the rendered output, so it is
    /// preserved exactly as received.
    pub fn servers(&self) -> &[ServerStatus] {
        &self.servers.server
    }
}

/// Check summary: snapshot counters plus the server list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Number of servers the status page claims to report.
    ///
    /// Informational only; never checked against the list length.
    #[serde(default)]
    pub total: u64,
    /// Version counter of the check configuration snapshot.
    #[serde(default)]
    pub generation: u64,
    /// Per-server health records.
    #[serde(default)]
    pub server: Vec<ServerStatus>,
}

/// One upstream server's health record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Ordinal assigned by the status page.
    #[serde(default)]
    pub index: u64,
    /// Upstream group this server belongs to.
    #[serde(default)]
    pub upstream: String,
    /// Network identity of the server, host:port form.
    #[serde(default)]
    pub name: String,
    /// Health state: `"up"`, `"down"`, or a transitional value.
    #[serde(default)]
    pub status: String,
    /// Consecutive successful checks.
    #[serde(default)]
    pub rise: u64,
    /// Consecutive failed checks.
    #[serde(default)]
    pub fall: u64,
    /// Protocol used to probe the server ("http", "tcp", ...).
    #[serde(default, rename = "type")]
    pub check_type: String,
    /// Explicit check port; zero when no separate check port is configured.
    #[serde(default)]
    pub port: u64,
}

impl ServerStatus {
    /// The server's identity in `<type>://<name>` form.
    pub fn full_name(&self) -> String {
        format!("{}://{}", self.check_type, self.name)
    }

    /// Rise/fall counters, plus the check port when one is configured.
    pub fn counters(&self) -> String {
        if self.port == 0 {
            format!("(r:{},f:{})", self.rise, self.fall)
        } else {
            format!("(r:{},f:{},c:{})", self.rise, self.fall, self.port)
        }
    }
}
