pub mod graph_file;
pub mod report;

pub use graph_file::{GraphFile, LoadError};
pub use report::{report_lines, signed_distances, with_sentinel, UNREACHABLE};
