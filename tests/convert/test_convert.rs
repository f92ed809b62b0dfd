use dagtree::convert::*;
use dagtree::identity::Edge;
use dagtree::representation::*;

use super::strategy::arb_adjacency;

use proptest::{prop_assert, prop_assert_eq, proptest};
use std::collections::BTreeSet;

fn edge_set<N: Ord + Clone>(edges: &Edges<N>) -> BTreeSet<(N, N)> {
    edges
        .iter()
        .map(|e| (e.start.clone(), e.stop.clone()))
        .collect()
}

fn chain_example() -> Edges<&'static str> {
    [("a", "b"), ("c", "d"), ("a", "d"), ("d", "e")]
        .into_iter()
        .collect()
}

////////////////////////////////////////
// Examples

#[test]
fn test_edges_to_adjacency() {
    let adjacency = edges_to_adjacency(&chain_example());

    let expected: Adjacency<&str> = [
        ("a", vec!["b", "d"]),
        ("b", vec![]),
        ("c", vec!["d"]),
        ("d", vec!["e"]),
        ("e", vec![]),
    ]
    .into_iter()
    .collect();
    assert_eq!(adjacency, expected);
}

#[test]
fn test_duplicate_edges_collapse() {
    let edges: Edges<&str> = [("a", "b"), ("a", "b")].into_iter().collect();
    assert_eq!(edges.len(), 2);

    let adjacency = edges_to_adjacency(&edges);
    assert_eq!(adjacency.edge_count(), 1);
    assert_eq!(adjacency_to_edges(&adjacency).len(), 1);
}

#[test]
fn test_adjacency_to_edges_order() {
    let edges = adjacency_to_edges(&edges_to_adjacency(&chain_example()));
    let expected: Edges<&str> = [("a", "b"), ("a", "d"), ("c", "d"), ("d", "e")]
        .into_iter()
        .collect();
    assert_eq!(edges, expected);
    assert_eq!(edges, chain_example().sorted());
}

#[test]
fn test_adjacency_to_matrix() {
    let matrix = edges_to_matrix(&chain_example());
    assert_eq!(matrix.labels, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(
        matrix.grid,
        vec![
            vec![0, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
        ]
    );
    assert!(matrix.get(0, 1));
    assert!(!matrix.get(1, 0));
    assert!(!matrix.get(9, 9));
}

#[test]
fn test_implicit_leaves_get_matrix_rows() {
    // "b" is only a successor, never a key
    let adjacency: Adjacency<&str> = [("a", vec!["b"])].into_iter().collect();
    let matrix = adjacency_to_matrix(&adjacency);
    assert_eq!(matrix.labels, vec!["a", "b"]);

    let back = matrix_to_adjacency(&matrix).unwrap();
    assert!(back.contains(&"b"));
    assert!(back.contains_edge(&"a", &"b"));
}

#[test]
fn test_matrix_to_edges() {
    let matrix = Matrix::new(vec![vec![0, 1], vec![1, 0]], vec!['x', 'y']).unwrap();
    let edges = matrix_to_edges(&matrix).unwrap();
    assert_eq!(edges.0, vec![Edge::new('x', 'y'), Edge::new('y', 'x')]);
}

#[test]
fn test_pipeline_to_adjacency() {
    let chain = pipeline_to_adjacency(&Pipeline(vec!["a", "b", "c"]));
    let expected: Adjacency<&str> = [("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])]
        .into_iter()
        .collect();
    assert_eq!(chain, expected);

    let single = pipeline_to_adjacency(&Pipeline(vec!["a"]));
    assert_eq!(single.len(), 1);
    assert_eq!(single.edge_count(), 0);

    assert!(pipeline_to_adjacency(&Pipeline::<&str>(vec![])).is_empty());
}

#[test]
fn test_pipelines_to_adjacency_is_a_union() {
    let pipelines: Pipelines<&str> = [
        ("left", Pipeline(vec!["a", "b", "d"])),
        ("right", Pipeline(vec!["a", "c", "d"])),
    ]
    .into_iter()
    .collect();

    let adjacency = pipelines_to_adjacency(&pipelines);
    assert_eq!(adjacency.successors(&"a"), Some(&BTreeSet::from(["b", "c"])));
    assert_eq!(adjacency.edge_count(), 4);
}

#[test]
fn test_representation_views() {
    let edges = chain_example();
    let adjacency = Adjacency::from_edges(&edges);
    let matrix: Matrix<&str> = Representation::from_edges(&edges);

    assert_eq!(matrix.to_adjacency(), adjacency);
    assert_eq!(Edges::from_matrix(&matrix).unwrap(), adjacency.edges());
    assert_eq!(adjacency.matrix(), matrix);
}

////////////////////////////////////////
// Round trips

proptest! {
    #[test]
    fn edges_round_trip(a in arb_adjacency(8)) {
        let edges = adjacency_to_edges(&a);
        let back = edges_to_adjacency(&edges);

        prop_assert_eq!(edge_set(&adjacency_to_edges(&back)), edge_set(&edges));

        // nodes without any edge cannot be represented in an edge list
        for (node, stops) in &a {
            let isolated = stops.is_empty() && !edges.iter().any(|e| e.stop == *node);
            prop_assert_eq!(back.contains(node), !isolated);
            if !isolated {
                prop_assert_eq!(back.successors(node), Some(stops));
            }
        }
    }

    #[test]
    fn matrix_round_trip(a in arb_adjacency(8)) {
        let matrix = adjacency_to_matrix(&a);
        prop_assert!(matrix.validate().is_ok());
        prop_assert_eq!(matrix.grid.len(), matrix.labels.len());

        let back = matrix_to_adjacency(&matrix).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn matrix_cells_match_edges(a in arb_adjacency(8)) {
        let matrix = adjacency_to_matrix(&a);
        for (i, start) in matrix.labels.iter().enumerate() {
            for (j, stop) in matrix.labels.iter().enumerate() {
                prop_assert_eq!(matrix.get(i, j), a.contains_edge(start, stop));
            }
        }
    }
}
