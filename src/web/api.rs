use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::shortest_paths;
use crate::graph::{build_graph, BuildOptions, Edge, Graph, Representation};
use crate::io::report::signed_distances;
use crate::web::models::*;
use crate::Error;

/// A built graph shared read-only by every query against it
pub type SharedGraph = Arc<dyn Graph<i64, i64> + Send + Sync>;

type ApiError = (StatusCode, Json<ErrorResponse>);

struct StoredGraph {
    info: GraphInfo,
    graph: SharedGraph,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    graphs: Arc<RwLock<HashMap<Uuid, StoredGraph>>>,
    max_graphs: usize,
    max_dense_vertices: usize,
}

impl AppState {
    pub fn new(max_graphs: usize, max_dense_vertices: usize) -> Self {
        Self {
            graphs: Arc::new(RwLock::new(HashMap::new())),
            max_graphs,
            max_dense_vertices,
        }
    }

    pub fn graph_count(&self) -> usize {
        self.graphs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Dense matrices grow with the square of the vertex count, so their size is
    /// checked before any build work starts.
    fn check_dense_limit(&self, request: &GraphRequest) -> Result<(), ApiError> {
        if request.representation == Representation::Dense
            && request.vertices.len() > self.max_dense_vertices
        {
            return Err(error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "graph_too_large",
                format!(
                    "Dense graphs are limited to {} vertices, got {}",
                    self.max_dense_vertices,
                    request.vertices.len()
                ),
            ));
        }
        Ok(())
    }

    fn graph_limit_reached(&self) -> ApiError {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "graph_limit_reached",
            format!("At most {} graphs can be stored", self.max_graphs),
        )
    }

    fn lookup(&self, id: &Uuid) -> Option<(GraphInfo, SharedGraph)> {
        let graphs = self.graphs.read().unwrap_or_else(PoisonError::into_inner);
        graphs
            .get(id)
            .map(|stored| (stored.info.clone(), Arc::clone(&stored.graph)))
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/shortest-paths", post(shortest_paths_once))
        .route("/api/graphs", get(list_graphs).post(create_graph))
        .route("/api/graphs/:graph_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:graph_id/shortest-paths", post(query_graph))
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        stored_graphs: state.graph_count(),
    })
}

/// Build a graph and run one query without storing anything
pub async fn shortest_paths_once(
    State(state): State<AppState>,
    Json(request): Json<OneShotRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    state.check_dense_limit(&request.graph)?;

    let response = tokio::task::spawn_blocking(move || {
        let graph = build_request_graph(&request.graph)?;
        run_query(&*graph, request.source, request.include_unreachable)
    })
    .await
    .map_err(join_error)?
    .map_err(graph_error)?;

    Ok(Json(response))
}

/// Build a graph and keep it for later queries
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<(StatusCode, Json<GraphInfo>), ApiError> {
    state.check_dense_limit(&request)?;
    if state.graph_count() >= state.max_graphs {
        return Err(state.graph_limit_reached());
    }

    let representation = request.representation;
    let graph = tokio::task::spawn_blocking(move || build_request_graph(&request))
        .await
        .map_err(join_error)?
        .map_err(graph_error)?;

    let info = GraphInfo {
        id: Uuid::new_v4(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        representation,
        created_at: Utc::now(),
    };

    // Other creates may have finished while this graph was being built
    let mut graphs = state.graphs.write().unwrap_or_else(PoisonError::into_inner);
    if graphs.len() >= state.max_graphs {
        return Err(state.graph_limit_reached());
    }
    graphs.insert(info.id, StoredGraph { info: info.clone(), graph });
    info!(
        "stored graph {} ({} vertices, {} edges)",
        info.id, info.vertex_count, info.edge_count
    );

    Ok((StatusCode::CREATED, Json(info)))
}

pub async fn list_graphs(State(state): State<AppState>) -> Json<Vec<GraphInfo>> {
    let graphs = state.graphs.read().unwrap_or_else(PoisonError::into_inner);
    let mut infos: Vec<GraphInfo> = graphs.values().map(|stored| stored.info.clone()).collect();
    infos.sort_by_key(|info| info.created_at);
    Json(infos)
}

pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<Json<GraphInfo>, ApiError> {
    state
        .lookup(&graph_id)
        .map(|(info, _)| Json(info))
        .ok_or_else(|| graph_not_found(&graph_id))
}

pub async fn delete_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut graphs = state.graphs.write().unwrap_or_else(PoisonError::into_inner);
    match graphs.remove(&graph_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(graph_not_found(&graph_id)),
    }
}

/// Query a stored graph. Each query gets its own queue and distance map;
/// the graph itself is only borrowed.
pub async fn query_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let (_, graph) = state
        .lookup(&graph_id)
        .ok_or_else(|| graph_not_found(&graph_id))?;

    let response = tokio::task::spawn_blocking(move || {
        run_query(&*graph, request.source, request.include_unreachable)
    })
    .await
    .map_err(join_error)?
    .map_err(graph_error)?;

    Ok(Json(response))
}

fn build_request_graph(request: &GraphRequest) -> Result<SharedGraph, Error> {
    let options = BuildOptions::new().with_duplicate_policy(request.duplicate_policy);
    let graph = build_graph(
        request.vertices.iter().copied(),
        request.edges.iter().copied().map(Edge::from),
        &options,
        request.representation,
    )?;
    Ok(Arc::from(graph))
}

fn run_query(
    graph: &(dyn Graph<i64, i64> + Send + Sync),
    source: i64,
    include_unreachable: bool,
) -> Result<QueryResponse, Error> {
    let start = Instant::now();
    let result = shortest_paths(&source, graph)?;
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let all = signed_distances(&result, graph.vertices());
    let unreachable: Vec<i64> = all
        .iter()
        .filter(|(vertex, _)| !result.contains(vertex))
        .map(|(vertex, _)| *vertex)
        .collect();
    let distances = if include_unreachable {
        all
    } else {
        result.iter().map(|(vertex, dist)| (*vertex, dist)).collect()
    };

    Ok(QueryResponse {
        source,
        distances,
        unreachable,
        stats: *result.stats(),
        execution_time_ms,
    })
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

fn graph_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidEdge { .. } => (StatusCode::BAD_REQUEST, "invalid_edge"),
        Error::InvalidWeight { .. } => (StatusCode::BAD_REQUEST, "invalid_weight"),
        Error::UnknownVertex(_) => (StatusCode::NOT_FOUND, "unknown_vertex"),
        Error::Overflow(_) => (StatusCode::UNPROCESSABLE_ENTITY, "overflow"),
        Error::GraphTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "graph_too_large"),
    };
    error_response(status, code, err.to_string())
}

fn graph_not_found(id: &Uuid) -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "graph_not_found",
        format!("Graph {} not found", id),
    )
}

fn join_error(err: tokio::task::JoinError) -> ApiError {
    warn!("query task failed: {}", err);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Query task failed".to_string(),
    )
}
