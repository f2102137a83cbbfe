//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since start-up.
    pub uptime_seconds: u64,
    /// Backend reachability: `connected`, `memory` or `unreachable`.
    pub database: String,
}
