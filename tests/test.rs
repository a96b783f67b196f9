use std::collections::HashSet;

use three_edge_connected::{algorithm, Graph};

/// Tests the correctness of the algorithm against graphs whose 3EC
/// components are known.

fn complete_graph(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    Graph::from_edges(edges)
}

fn bipartite_graph(k: usize, l: usize) -> Graph {
    let mut edges = Vec::new();
    for a in 0..k {
        for b in 0..l {
            edges.push((2 * a, 2 * b + 1));
        }
    }
    Graph::from_edges(edges)
}

/// Two triangles `{0,1,2}` and `{3,4,5}` joined by `bridges` parallel
/// copies of the edge `(2, 3)`.
fn bridged_triangles(bridges: usize) -> Graph {
    let mut edges = vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
    for _ in 0..bridges {
        edges.push((2, 3));
    }
    Graph::from_edges(edges)
}

/// Two hubs `0, 1` joined by three internally disjoint paths, each
/// through two of the six remaining vertices.
fn theta_graph() -> Graph {
    let edges = vec![
        (0, 2),
        (2, 3),
        (3, 1),
        (0, 4),
        (4, 5),
        (5, 1),
        (0, 6),
        (6, 7),
        (7, 1),
    ];
    Graph::from_edges(edges)
}

fn as_sets(components: &[Vec<usize>]) -> Vec<HashSet<usize>> {
    components.iter().map(|c| c.iter().copied().collect()).collect()
}

fn assert_components_eq(components: &[Vec<usize>], expected: &[&[usize]]) {
    let got = as_sets(components);
    let want: Vec<HashSet<usize>> = expected
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect();
    assert_eq!(got.len(), want.len(), "component count mismatch: {:?}", components);
    for set in &want {
        assert!(got.contains(set), "missing expected component {:?} in {:?}", set, components);
    }
}

#[test]
fn triangle_is_one_component() {
    let graph = complete_graph(3);
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2]]);
}

#[test]
fn bridged_triangles_are_two_components() {
    let graph = bridged_triangles(1);
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2], &[3, 4, 5]]);
}

#[test]
fn k4_is_one_component() {
    let graph = complete_graph(4);
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2, 3]]);
}

#[test]
fn two_parallel_bridges_are_still_two_components() {
    // A pair of parallel edges is itself a cut-pair.
    let graph = bridged_triangles(2);
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2], &[3, 4, 5]]);
}

#[test]
fn three_parallel_bridges_merge_into_one_component() {
    let graph = bridged_triangles(3);
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2, 3, 4, 5]]);
}

#[test]
fn theta_graph_is_one_component() {
    let graph = theta_graph();
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2, 3, 4, 5, 6, 7]]);
}

#[test]
fn k_3_3_is_one_component() {
    let graph = bipartite_graph(3, 3);
    let comps = algorithm::find_components(&graph);
    // K_3,3 has edge connectivity 3, so it is a single 3EC component.
    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].len(), 6);
}

#[test]
fn sigma_cycles_partition_every_vertex_exactly_once() {
    let graph = complete_graph(5);
    let comps = algorithm::find_components(&graph);
    let mut seen: HashSet<usize> = HashSet::new();
    for comp in &comps {
        for &v in comp {
            assert!(seen.insert(v), "vertex {} appears in more than one component", v);
        }
    }
    assert_eq!(seen, (0..5).collect::<HashSet<_>>());
}

#[test]
fn quotient_of_bridged_triangles_is_idempotent() {
    // Contracting each component of the bridged-triangles graph to a
    // single vertex leaves a two-vertex graph joined by one bridge edge;
    // running the algorithm again must yield two singleton components.
    let graph = bridged_triangles(1);
    let comps = algorithm::find_components(&graph);
    assert_eq!(comps.len(), 2);

    let quotient = Graph::from_edges(vec![(0, 1)]);
    let quotient_comps = algorithm::find_components(&quotient);
    assert_eq!(quotient_comps.len(), 2);
    for comp in &quotient_comps {
        assert_eq!(comp.len(), 1);
    }
}

#[test]
fn quotient_of_three_parallel_bridges_is_idempotent() {
    // The three-parallel-bridge graph is already a single component, so
    // its quotient is a single vertex with no edges: one component.
    let graph = bridged_triangles(3);
    let comps = algorithm::find_components(&graph);
    assert_eq!(comps.len(), 1);

    let quotient = Graph::from_adjacency_lists(&[Vec::new()]);
    let quotient_comps = algorithm::find_components(&quotient);
    assert_eq!(quotient_comps.len(), 1);
    assert_eq!(quotient_comps[0], vec![0]);
}

#[test]
fn parses_the_cli_text_format() {
    let text = "3\n1>2>3\n2>1>3\n3>1>2\n";
    let graph = Graph::parse(text).expect("well-formed input parses");
    let comps = algorithm::find_components(&graph);
    assert_components_eq(&comps, &[&[0, 1, 2]]);
}

#[test]
fn rejects_malformed_header() {
    let err = Graph::parse("not-a-number\n").unwrap_err();
    assert!(matches!(err, three_edge_connected::Error::MalformedInput { .. }));
}

#[test]
fn rejects_unpaired_edge() {
    // Vertex 1 claims an edge to vertex 2, but vertex 2's list doesn't
    // mention vertex 1 back.
    let text = "2\n1>2\n2\n";
    let err = Graph::parse(text).unwrap_err();
    assert!(matches!(
        err,
        three_edge_connected::Error::InconsistentUndirected { .. }
    ));
}

#[test]
fn compute_three_edge_connected_components_matches_adjacency_entry_point() {
    let adjacency = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
    let comps = three_edge_connected::compute_three_edge_connected_components(&adjacency);
    assert_components_eq(&comps, &[&[0, 1, 2]]);
}
