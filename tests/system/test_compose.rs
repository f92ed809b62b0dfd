use dagtree::prelude::*;

use std::collections::BTreeSet;

fn chain(nodes: &[&'static str]) -> System<&'static str> {
    System::from_pipeline(&Pipeline(nodes.to_vec()))
}

////////////////////////////////////////
// Merge

#[test]
fn test_merge_is_last_writer_wins() {
    let mut s = System::new();
    s.connect("k", "n").unwrap();

    let mut other = System::new();
    other.connect("k", "m").unwrap();

    s.merge(other).unwrap();

    // k's successors are replaced, not unioned
    assert_eq!(s.successors(&"k"), Some(&BTreeSet::from(["m"])));
    // n survives as a node, now unreachable from k
    assert!(s.contains(&"n"));
    assert_eq!(s.root(), BTreeSet::from(["k", "n"]));
}

#[test]
fn test_merge_successor_only_nodes_are_reset() {
    let mut s = chain(&["a", "b", "c"]);
    let edges: Edges<&str> = [("x", "b")].into_iter().collect();
    s.merge(edges).unwrap();

    assert!(s.contains_edge(&"x", &"b"));
    assert!(s.contains_edge(&"a", &"b"));
    // b appears in the edge list, so it takes the edge list's (empty) successors
    assert!(!s.contains_edge(&"b", &"c"));
}

#[test]
fn test_merge_adjacency_keeps_edges_of_implicit_leaves() {
    let mut s = chain(&["b", "c"]);
    let adjacency: Adjacency<&str> = [("x", vec!["b", "y"])].into_iter().collect();
    s.merge(adjacency).unwrap();

    assert!(s.contains_edge(&"x", &"b"));
    // b is only a successor in the merged adjacency, so its own edge survives
    assert!(s.contains_edge(&"b", &"c"));
    // y was new, so it is added as an endpoint
    assert_eq!(s.successors(&"y"), Some(&BTreeSet::new()));
    assert_eq!(s.endpoint(), BTreeSet::from(["c", "y"]));
}

#[test]
fn test_append_adjacency_keeps_edges_of_implicit_leaves() {
    let mut s = chain(&["a", "b", "c"]);
    let adjacency: Adjacency<&str> = [("x", vec!["b"])].into_iter().collect();
    s.append(adjacency).unwrap();

    assert!(s.contains_edge(&"b", &"c"));
    assert!(s.contains_edge(&"c", &"x"));
    assert!(s.contains_edge(&"x", &"b"));
}

#[test]
fn test_merge_sources() {
    let mut s = chain(&["a", "b"]);

    let adjacency: Adjacency<&str> = [("c", vec!["d"])].into_iter().collect();
    s.merge(adjacency).unwrap();
    assert!(s.contains_edge(&"c", &"d"));
    assert!(s.contains(&"d"));

    let matrix = Matrix::new(vec![vec![0u8, 1], vec![0, 0]], vec!["e", "f"]).unwrap();
    s.merge(matrix).unwrap();
    assert!(s.contains_edge(&"e", &"f"));

    s.merge(vec!["g", "h"]).unwrap();
    assert!(s.contains(&"g") && s.contains(&"h"));

    assert_eq!(s.len(), 8);
}

#[test]
fn test_merge_invalid_matrix() {
    let mut s = chain(&["a", "b"]);
    let matrix = Matrix {
        grid: vec![vec![0u8, 1]],
        labels: vec!["e", "f"],
    };
    let err = s.merge(matrix).unwrap_err();
    assert_eq!(
        err,
        GraphError::Matrix(MatrixError::LabelMismatch { rows: 1, labels: 2 })
    );
    assert_eq!(s, chain(&["a", "b"]));
}

////////////////////////////////////////
// Append and prepend

#[test]
fn test_append_joins_endpoints_to_roots() {
    //  a → b        x → y
    //  a → c
    let mut s = System::new();
    s.connect("a", "b").unwrap();
    s.connect("a", "c").unwrap();

    s.append(chain(&["x", "y"])).unwrap();

    assert!(s.contains_edge(&"b", &"x"));
    assert!(s.contains_edge(&"c", &"x"));
    assert_eq!(s.root(), BTreeSet::from(["a"]));
    assert_eq!(s.endpoint(), BTreeSet::from(["y"]));
    assert_eq!(
        s.paths(),
        vec![vec!["a", "b", "x", "y"], vec!["a", "c", "x", "y"]]
    );
}

#[test]
fn test_prepend_joins_endpoints_of_other_to_roots() {
    let mut s = chain(&["x", "y"]);
    s.prepend(chain(&["a", "b"])).unwrap();

    assert_eq!(s.paths(), vec![vec!["a", "b", "x", "y"]]);
}

#[test]
fn test_append_shared_node() {
    let mut s = chain(&["a", "b"]);
    s.append(chain(&["b", "c"])).unwrap();
    assert_eq!(s.paths(), vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_append_to_empty() {
    let mut s = System::new();
    s.append(chain(&["a", "b"])).unwrap();
    assert_eq!(s, chain(&["a", "b"]));
}

#[test]
fn test_append_edges() {
    let mut s = chain(&["load", "clean"]);
    let edges: Edges<&str> = [("fit", "score"), ("fit", "plot")].into_iter().collect();
    s.append(edges).unwrap();
    assert_eq!(
        s.paths(),
        vec![
            vec!["load", "clean", "fit", "plot"],
            vec!["load", "clean", "fit", "score"]
        ]
    );
}

#[test]
fn test_shr_appends_copy() {
    let a = chain(&["a", "b"]);
    let b = chain(&["c", "d"]);

    let ab = (&a >> &b).unwrap();
    assert_eq!(ab, chain(&["a", "b", "c", "d"]));
    // operands are untouched
    assert_eq!(a, chain(&["a", "b"]));
}
