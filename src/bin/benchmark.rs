use std::time::{Duration, Instant};

use rayon::prelude::*;
use undirected_sssp::graph::generators::generate_random;
use undirected_sssp::{shortest_paths, AdjacencyList, Graph};

// Function to benchmark one query on a graph
fn benchmark_query<G>(name: &str, graph: &G, source: usize) -> Duration
where
    G: Graph<usize, u64>,
{
    let start = Instant::now();
    let result = match shortest_paths(&source, graph) {
        Ok(result) => result,
        Err(err) => {
            println!("  - {} failed: {}", name, err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!(
        "  - {}: {} reachable vertices, {} stale pops in {:?}",
        name,
        result.len(),
        result.stats().stale_pops,
        duration
    );

    duration
}

// Runs one query per source in parallel over a single shared graph
fn benchmark_concurrent(graph: &AdjacencyList<usize, u64>, sources: &[usize]) -> Duration {
    let start = Instant::now();
    let reached: usize = sources
        .par_iter()
        .map(|source| shortest_paths(source, graph).map_or(0, |result| result.len()))
        .sum();
    let duration = start.elapsed();

    println!(
        "  - {} concurrent queries reached {} vertices in total in {:?}",
        sources.len(),
        reached,
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Dense storage is quadratic, so it only runs on the smaller sizes
    let graph_sizes = vec![1_000, 5_000, 10_000, 100_000];
    let dense_limit = 5_000;
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: adjacency list vs adjacency matrix");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let generated = generate_random(size, edge_factor, 100, size as u64);
        let source = 0;

        let list = match generated.to_adjacency_list() {
            Ok(list) => list,
            Err(err) => {
                println!("  - failed to build graph: {}", err);
                continue;
            }
        };
        println!("Graph has {} vertices and {} edges", list.vertex_count(), list.edge_count());

        let sparse_time = benchmark_query("adjacency list", &list, source);
        let dense_time = if size <= dense_limit {
            generated
                .to_adjacency_matrix()
                .ok()
                .map(|matrix| benchmark_query("adjacency matrix", &matrix, source))
        } else {
            None
        };

        let sources: Vec<usize> = (0..size).step_by((size / 64).max(1)).collect();
        let concurrent_time = benchmark_concurrent(&list, &sources);

        results.push((size, sparse_time, dense_time, concurrent_time, sources.len()));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<22}",
        "Vertices", "List (ms)", "Matrix (ms)", "Concurrent (ms/query)"
    );
    println!("-----------------------------------------------------");

    for (size, sparse_time, dense_time, concurrent_time, queries) in &results {
        let dense = dense_time
            .map(|t| format!("{:.2}", t.as_secs_f64() * 1000.0))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} | {:<12.2} | {:<12} | {:<22.3}",
            size,
            sparse_time.as_secs_f64() * 1000.0,
            dense,
            concurrent_time.as_secs_f64() * 1000.0 / *queries as f64
        );
    }
}
