use undirected_sssp::{
    build, AdjacencyList, AdjacencyMatrix, BuildOptions, DuplicateEdgePolicy, Error, Graph,
};

fn scenario_edges() -> Vec<(u32, u32, u64)> {
    vec![(0, 1, 5), (0, 3, 9), (0, 4, 1), (1, 2, 2), (2, 3, 6), (3, 4, 2)]
}

// Asserts weight(u, v) == weight(v, u) for every ordered pair
fn assert_symmetric<G: Graph<u32, u64>>(graph: &G) {
    let n = graph.vertex_count();
    for u in 0..n {
        for v in 0..n {
            assert_eq!(graph.weight_between(u, v), graph.weight_between(v, u));
        }
    }
}

#[test]
fn test_list_is_symmetric() {
    let graph = AdjacencyList::build(0..5u32, scenario_edges()).unwrap();
    assert_symmetric(&graph);
    assert_eq!(graph.edge_weight(&3, &2), Some(6));
    assert_eq!(graph.edge_weight(&2, &3), Some(6));
}

#[test]
fn test_matrix_is_symmetric() {
    let graph = AdjacencyMatrix::build(0..5u32, scenario_edges()).unwrap();
    assert_symmetric(&graph);
    assert_eq!(graph.edge_weight(&4, &0), Some(1));
}

#[test]
fn test_missing_edges_have_no_weight() {
    let graph = AdjacencyMatrix::build(0..5u32, scenario_edges()).unwrap();

    assert_eq!(graph.edge_weight(&1, &4), None);
    assert_eq!(graph.edge_weight(&0, &0), None);
    assert_eq!(graph.edge_weight(&0, &99), None);

    let neighbors: Vec<(usize, u64)> = graph.neighbors(0).collect();
    assert_eq!(neighbors, vec![(1, 5), (3, 9), (4, 1)]);
}

#[test]
fn test_last_edge_wins_by_default() {
    let edges = vec![(0u32, 1u32, 5u64), (1, 0, 2), (1, 2, 3), (1, 2, 8)];
    let list = AdjacencyList::build(0..3u32, edges.clone()).unwrap();
    let matrix = AdjacencyMatrix::build(0..3u32, edges).unwrap();

    let graphs: [&dyn Graph<u32, u64>; 2] = [&list, &matrix];
    for graph in graphs {
        assert_eq!(graph.edge_weight(&0, &1), Some(2));
        assert_eq!(graph.edge_weight(&2, &1), Some(8));
        assert_eq!(graph.edge_count(), 2);
    }
}

#[test]
fn test_min_weight_policy() {
    let options = BuildOptions::new().with_duplicate_policy(DuplicateEdgePolicy::MinWeight);
    let edges = vec![(0u32, 1u32, 5u64), (1, 0, 2), (0, 1, 7)];
    let list = AdjacencyList::build_with(0..2u32, edges.clone(), &options).unwrap();
    let matrix = AdjacencyMatrix::build_with(0..2u32, edges, &options).unwrap();

    assert_eq!(list.edge_weight(&0, &1), Some(2));
    assert_eq!(matrix.edge_weight(&1, &0), Some(2));
}

#[test]
fn test_edge_outside_vertex_set() {
    let err = build(0..3u32, vec![(0u32, 9u32, 1u64)]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidEdge {
            from: "0".to_string(),
            to: "9".to_string()
        }
    );

    let err = AdjacencyMatrix::build(0..3u32, vec![(7u32, 1u32, 1u64)]).unwrap_err();
    assert!(matches!(err, Error::InvalidEdge { .. }));
}

#[test]
fn test_negative_weight_is_rejected() {
    let err = build(0..3i64, vec![(0i64, 1i64, 4i64), (1, 2, -1)]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidWeight {
            from: "1".to_string(),
            to: "2".to_string(),
            weight: "-1".to_string()
        }
    );
}

#[test]
fn test_endpoints_are_checked_before_weight() {
    let err = build(0..3i64, vec![(0i64, 5i64, -1i64)]).unwrap_err();
    assert!(matches!(err, Error::InvalidEdge { .. }));
}

#[test]
fn test_empty_input_builds_empty_graph() {
    let graph = build(Vec::<u32>::new(), Vec::<(u32, u32, u64)>::new()).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.vertices().is_empty());
}

#[test]
fn test_duplicate_vertices_collapse() {
    let graph = build(vec![1u32, 2, 2, 3, 1], vec![(1u32, 3u32, 4u64)]).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.vertices().index_of(&2), Some(1));
    assert_eq!(graph.vertices().get(2), Some(&3));
}

#[test]
fn test_self_loop_is_stored_once() {
    let graph = build(0..2u32, vec![(0u32, 0u32, 3u64), (0, 1, 1)]).unwrap();

    assert_eq!(graph.edge_weight(&0, &0), Some(3));
    assert_eq!(graph.degree(0), 2);
    assert_eq!(graph.degree(1), 1);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_inputs_are_not_consumed_by_reference_builds() {
    let vertices = vec![0u32, 1, 2];
    let edges = vec![(0u32, 1u32, 1u64), (1, 2, 1)];
    let graph = build(vertices.iter().copied(), edges.iter().copied()).unwrap();

    assert_eq!(vertices.len(), 3);
    assert_eq!(edges.len(), 2);
    assert!(graph.has_vertex(&2));
    assert!(!graph.has_vertex(&3));
}

#[test]
fn test_vertex_set_indexing_follows_first_seen_order() {
    let graph = build(["c", "a", "c", "b"], Vec::<(&str, &str, u64)>::new()).unwrap();
    let vertices = graph.vertices();

    assert_eq!(vertices.len(), 3);
    assert_eq!(vertices[0], "c");
    assert_eq!(vertices[1], "a");
    assert_eq!(vertices[2], "b");
    assert_eq!(vertices.get(3), None);
}
