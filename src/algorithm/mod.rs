pub mod dijkstra;
pub mod distance_map;
pub mod traits;

pub use distance_map::{DistanceMap, SearchStats};
pub use traits::ShortestPathAlgorithm;
