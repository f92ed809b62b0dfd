use dagtree::prelude::*;

use super::test_system::chain_example;

#[test]
fn test_walk_examples() {
    let mut s = System::new();
    s.connect("a", "b").unwrap();
    s.connect("a", "d").unwrap();
    s.connect("d", "e").unwrap();

    assert_eq!(s.walk(&"a", &"e"), vec![vec!["a", "d", "e"]]);
    assert_eq!(s.walk(&"a", &"b"), vec![vec!["a", "b"]]);
}

#[test]
fn test_walk_finds_every_path() {
    //   a → b → d
    //   a → c → d
    //   a → d
    let edges: Edges<&str> = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("a", "d")]
        .into_iter()
        .collect();
    let s = System::from_edges(&edges);

    assert_eq!(
        s.walk(&"a", &"d"),
        vec![vec!["a", "b", "d"], vec!["a", "c", "d"], vec!["a", "d"]]
    );
}

#[test]
fn test_walk_missing_or_unreachable() {
    let s = chain_example();
    assert!(s.walk(&"zzz", &"e").is_empty());
    assert!(s.walk(&"b", &"e").is_empty());
    assert!(s.walk(&"a", &"zzz").is_empty());
    assert_eq!(s.walk(&"b", &"b"), vec![vec!["b"]]);
}

#[test]
fn test_walk_terminates_on_cycles() {
    let mut s = System::new();
    s.connect(1, 2).unwrap();
    s.connect(2, 3).unwrap();
    s.connect(3, 1).unwrap();
    s.connect(3, 4).unwrap();

    assert_eq!(s.walk(&1, &4), vec![vec![1, 2, 3, 4]]);
    assert!(!s.is_acyclic());
    assert_eq!(s.topological_order(), None);
}

#[test]
fn test_paths() {
    let s = chain_example();
    assert_eq!(
        s.paths(),
        vec![vec!["a", "b"], vec!["a", "d", "e"], vec!["c", "d", "e"]]
    );
}

#[test]
fn test_isolated_node_is_its_own_path() {
    let mut s = chain_example();
    s.add("solo");
    assert!(s.paths().contains(&vec!["solo"]));
}

#[test]
fn test_pipeline_flattens_and_dedupes() {
    let s = chain_example();
    assert_eq!(s.pipeline(), Pipeline(vec!["a", "b", "d", "e", "c"]));
}

#[test]
fn test_pipelines_are_named_paths() {
    let s = chain_example();
    let pipelines = s.pipelines();

    assert_eq!(pipelines.len(), 3);
    assert_eq!(
        pipelines.names().collect::<Vec<_>>(),
        vec!["pipeline_0", "pipeline_1", "pipeline_2"]
    );
    assert_eq!(
        pipelines.get("pipeline_2"),
        Some(&Pipeline(vec!["c", "d", "e"]))
    );
    assert_eq!(pipelines.get("pipeline_9"), None);

    // pipelines rebuild the same graph
    assert_eq!(System::from_pipelines(&pipelines), s);
}

#[test]
fn test_layers() {
    let s = chain_example();
    assert_eq!(
        s.layers(),
        Some(vec![vec!["a", "c"], vec!["b", "d"], vec!["e"]])
    );
    assert_eq!(
        s.topological_order(),
        Some(vec!["a", "c", "b", "d", "e"])
    );
    assert!(s.is_acyclic());
}

#[test]
fn test_empty_system() {
    let s: System<&str> = System::new();
    assert!(s.paths().is_empty());
    assert!(s.pipeline().is_empty());
    assert_eq!(s.layers(), Some(vec![]));
}
