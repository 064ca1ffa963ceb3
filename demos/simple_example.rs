use undirected_sssp::io::report_lines;
use undirected_sssp::{build, shortest_paths, AdjacencyMatrix, Graph};

fn main() -> Result<(), undirected_sssp::Error> {
    // Five vertices, six undirected edges
    let vertices: Vec<u32> = (0..5).collect();
    let edges: [(u32, u32, u64); 6] = [
        (0, 1, 5),
        (0, 3, 9),
        (0, 4, 1),
        (1, 2, 2),
        (2, 3, 6),
        (3, 4, 2),
    ];

    let graph = build(vertices.iter().copied(), edges)?;
    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let distances = shortest_paths(&source, &graph)?;
    for line in report_lines(&distances, graph.vertices(), None) {
        println!("{}", line);
    }

    // The dense representation answers the same query identically
    let matrix = AdjacencyMatrix::build(vertices, edges)?;
    let dense = shortest_paths(&source, &matrix)?;
    println!("\nDense and sparse results agree: {}", dense == distances);
    println!("Search stats: {:?}", distances.stats());

    Ok(())
}
