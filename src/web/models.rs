use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::SearchStats;
use crate::graph::{DuplicateEdgePolicy, Representation};

/// A graph to build: vertices plus `[u, v, weight]` edges
#[derive(Debug, Clone, Deserialize)]
pub struct GraphRequest {
    pub vertices: Vec<i64>,
    #[serde(default)]
    pub edges: Vec<(i64, i64, i64)>,
    #[serde(default)]
    pub duplicate_policy: DuplicateEdgePolicy,
    #[serde(default)]
    pub representation: Representation,
}

/// Builds a graph and queries it in one request
#[derive(Debug, Clone, Deserialize)]
pub struct OneShotRequest {
    #[serde(flatten)]
    pub graph: GraphRequest,
    pub source: i64,
    #[serde(default)]
    pub include_unreachable: bool,
}

/// Queries a stored graph
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub source: i64,
    /// Report unreachable vertices with distance -1
    #[serde(default)]
    pub include_unreachable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub source: i64,
    pub distances: BTreeMap<i64, i64>,
    pub unreachable: Vec<i64>,
    pub stats: SearchStats,
    pub execution_time_ms: f64,
}

/// Metadata of a stored graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub representation: Representation,
    pub created_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub stored_graphs: usize,
}
