use std::collections::HashMap;

use ordered_float::OrderedFloat;
use undirected_sssp::graph::generators::generate_grid;
use undirected_sssp::{
    build, build_graph, shortest_paths, AdjacencyList, AdjacencyMatrix, BuildOptions, Dijkstra,
    Error, Graph, Representation, ShortestPathAlgorithm,
};

fn scenario_edges() -> Vec<(u32, u32, u64)> {
    vec![(0, 1, 5), (0, 3, 9), (0, 4, 1), (1, 2, 2), (2, 3, 6), (3, 4, 2)]
}

fn expected_scenario() -> HashMap<u32, u64> {
    HashMap::from([(0, 0), (1, 5), (2, 7), (3, 3), (4, 1)])
}

#[test]
fn test_five_vertex_scenario_sparse() {
    let graph = build(0..5u32, scenario_edges()).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.len(), 5);
    assert_eq!(distances.into_map(), expected_scenario());
}

#[test]
fn test_five_vertex_scenario_dense() {
    let graph = AdjacencyMatrix::build(0..5u32, scenario_edges()).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.into_map(), expected_scenario());
}

#[test]
fn test_isolated_vertex_is_absent() {
    let graph = build(0..6u32, scenario_edges()).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.len(), 5);
    assert!(!distances.contains(&5));
    assert_eq!(distances.get(&5), None);
}

#[test]
fn test_empty_graph_yields_empty_map() {
    let graph = build(Vec::<u32>::new(), Vec::<(u32, u32, u64)>::new()).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert!(distances.is_empty());
    assert_eq!(distances.stats().finalized, 0);
}

#[test]
fn test_unknown_source_is_rejected() {
    let graph = build(0..5u32, scenario_edges()).unwrap();
    let err = shortest_paths(&7, &graph).unwrap_err();

    assert_eq!(err, Error::UnknownVertex("7".to_string()));
}

#[test]
fn test_source_only_graph() {
    let graph = build([42u32], Vec::<(u32, u32, u64)>::new()).unwrap();
    let distances = shortest_paths(&42, &graph).unwrap();

    assert_eq!(distances.len(), 1);
    assert_eq!(distances.get(&42), Some(0));
    assert_eq!(distances.source(), &42);
}

#[test]
fn test_finalization_order_is_non_decreasing() {
    let graph = build(0..5u32, scenario_edges()).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    let order: Vec<(u32, u64)> = distances.iter().map(|(v, d)| (*v, d)).collect();
    assert_eq!(order, vec![(0, 0), (4, 1), (3, 3), (1, 5), (2, 7)]);
}

#[test]
fn test_stale_entries_are_discarded() {
    // Vertex 1 is first offered 10 directly, then 2 through vertex 2
    let graph = build(0..3u32, vec![(0u32, 1u32, 10u64), (0, 2, 1), (2, 1, 1)]).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.get(&1), Some(2));
    let stats = distances.stats();
    assert_eq!(stats.finalized, 3);
    assert_eq!(stats.relaxations, 3);
    assert_eq!(stats.stale_pops, 1);
    assert!(stats.max_queue_len >= 2);
}

#[test]
fn test_equal_distances_pop_in_index_order() {
    // Star with equal weights: leaves finalize in index order
    let graph = build([9u32, 3, 7, 1], vec![(9u32, 3u32, 4u64), (9, 7, 4), (9, 1, 4)]).unwrap();
    let distances = shortest_paths(&9, &graph).unwrap();

    let order: Vec<u32> = distances.iter().map(|(v, _)| *v).collect();
    assert_eq!(order, vec![9, 3, 7, 1]);
}

#[test]
fn test_overflow_is_reported() {
    let graph = build(0..3u32, vec![(0u32, 1u32, 200u8), (1, 2, 100)]).unwrap();
    let err = shortest_paths(&0, &graph).unwrap_err();

    assert_eq!(err, Error::Overflow("2".to_string()));
}

#[test]
fn test_overflowing_detour_does_not_fail_query() {
    // 0 -> 1 -> 2 overflows u8, but the direct edge 0 - 2 is representable
    let graph = build(0..3u32, vec![(0u32, 1u32, 200u8), (0, 2, 201), (1, 2, 100)]).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.get(&1), Some(200));
    assert_eq!(distances.get(&2), Some(201));
}

#[test]
fn test_float_weights() {
    let edges = vec![
        (0u32, 1u32, OrderedFloat(1.5)),
        (1, 2, OrderedFloat(0.25)),
        (0, 2, OrderedFloat(2.0)),
    ];
    let graph = build(0..3u32, edges).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.get(&2), Some(OrderedFloat(1.75)));
}

#[test]
fn test_float_overflow_is_reported() {
    let edges = vec![(0u32, 1u32, OrderedFloat(f64::MAX)), (1, 2, OrderedFloat(f64::MAX))];
    let graph = build(0..3u32, edges).unwrap();

    assert!(matches!(shortest_paths(&0, &graph), Err(Error::Overflow(_))));
}

#[test]
fn test_string_vertices() {
    let graph = build(
        ["home", "work", "gym"],
        vec![("home", "work", 3u32), ("work", "gym", 4)],
    )
    .unwrap();
    let distances = shortest_paths(&"gym", &graph).unwrap();

    assert_eq!(distances.get(&"home"), Some(7));
    assert_eq!(distances.get(&"work"), Some(4));
}

#[test]
fn test_self_loop_does_not_change_distances() {
    let mut edges = scenario_edges();
    edges.push((2, 2, 0));
    let graph = build(0..5u32, edges).unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.into_map(), expected_scenario());
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = build(0..5u32, scenario_edges()).unwrap();
    let first = shortest_paths(&0, &graph).unwrap();
    let second = shortest_paths(&0, &graph).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.stats(), second.stats());
    let first_order: Vec<_> = first.iter().collect();
    let second_order: Vec<_> = second.iter().collect();
    assert_eq!(first_order, second_order);
}

#[test]
fn test_trait_object_graph() {
    for representation in [Representation::Dense, Representation::Sparse] {
        let graph = build_graph(0..5u32, scenario_edges(), &BuildOptions::default(), representation)
            .unwrap();
        let distances = shortest_paths(&0, &*graph).unwrap();
        assert_eq!(distances.into_map(), expected_scenario());
    }
}

#[test]
fn test_algorithm_name() {
    let dijkstra = Dijkstra::new();
    let name = <Dijkstra as ShortestPathAlgorithm<u32, u64, AdjacencyList<u32, u64>>>::name(&dijkstra);
    assert_eq!(name, "Dijkstra");
}

#[test]
fn test_grid_distances() {
    let (width, height) = (8, 5);
    let graph = generate_grid(width, height).to_adjacency_list().unwrap();
    let distances = shortest_paths(&0, &graph).unwrap();

    assert_eq!(distances.len(), graph.vertex_count());
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            assert_eq!(distances.get(&vertex), Some((x + 2 * y) as u64));
        }
    }
}
