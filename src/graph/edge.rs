/// An undirected weighted edge between two vertices.
///
/// The endpoint order carries no meaning; `Edge::new(a, b, w)` and
/// `Edge::new(b, a, w)` describe the same connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    pub u: V,
    pub v: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(u: V, v: V, weight: W) -> Self {
        Edge { u, v, weight }
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((u, v, weight): (V, V, W)) -> Self {
        Edge { u, v, weight }
    }
}
