use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::graph::{build_graph, BuildOptions, DuplicateEdgePolicy, DynGraph, Edge, Representation};

/// Errors raised while loading a graph description
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] crate::Error),
}

/// JSON description of a graph and, optionally, the vertex to query from.
///
/// ```json
/// { "vertices": [0, 1, 2], "edges": [[0, 1, 5], [1, 2, 2]], "source": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: Vec<i64>,

    /// `[u, v, weight]` triples
    #[serde(default)]
    pub edges: Vec<(i64, i64, i64)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,

    #[serde(default)]
    pub duplicate_policy: DuplicateEdgePolicy,
}

impl GraphFile {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let graph_file = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} vertices and {} edges from {}",
            graph_file.vertices.len(),
            graph_file.edges.len(),
            path.display()
        );
        Ok(graph_file)
    }

    /// Picks the vertex to query from: `explicit` first, then the file's
    /// `source`, then the first listed vertex. An empty file falls back to 0,
    /// which yields an empty distance map.
    pub fn query_source(&self, explicit: Option<i64>) -> i64 {
        explicit
            .or(self.source)
            .or_else(|| self.vertices.first().copied())
            .unwrap_or_default()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<i64, i64>> + '_ {
        self.edges.iter().copied().map(Edge::from)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new().with_duplicate_policy(self.duplicate_policy)
    }

    /// Builds the described graph in the requested representation
    pub fn to_graph(&self, representation: Representation) -> Result<DynGraph<i64, i64>, LoadError> {
        Ok(build_graph(
            self.vertices.iter().copied(),
            self.edges(),
            &self.build_options(),
            representation,
        )?)
    }
}
