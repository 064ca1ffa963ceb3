use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;

/// Marker trait for vertex identifiers.
///
/// Any cloneable, hashable key works: integers, strings, or small structs.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// The finite universe of vertices for one graph.
///
/// Each vertex gets a dense index in `0..len()` following first-seen order.
/// Graph representations and the search engine work on indices; the set
/// translates between indices and caller-supplied identifiers.
#[derive(Debug, Clone)]
pub struct VertexSet<V: Vertex> {
    /// Vertices in index order
    vertices: Vec<V>,

    /// Reverse lookup: vertex -> index
    indices: HashMap<V, usize>,
}

impl<V: Vertex> VertexSet<V> {
    /// Creates an empty vertex set
    pub fn new() -> Self {
        VertexSet {
            vertices: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Inserts a vertex and returns its index.
    ///
    /// Inserting an existing vertex is a no-op that returns the original index.
    pub fn insert(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.indices.get(&vertex) {
            return index;
        }
        let index = self.vertices.len();
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        index
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    /// Returns the dense index of a vertex
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    /// Returns the vertex stored at a dense index
    pub fn get(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Iterates vertices in index order
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }
}

/// Panics when `index >= len()`, like slice indexing
impl<V: Vertex> Index<usize> for VertexSet<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.vertices[index]
    }
}

impl<V: Vertex> Default for VertexSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> FromIterator<V> for VertexSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = VertexSet::new();
        for vertex in iter {
            set.insert(vertex);
        }
        set
    }
}
