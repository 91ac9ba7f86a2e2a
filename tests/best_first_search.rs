use best_first_search::prelude::*;
use nanorand::{Rng, WyRand};

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_graph() -> (Graph<&'static str>, HashMap<&'static str, Cost>) {
    let graph = [
        ("A", vec![("B", 6), ("C", 3)]),
        ("B", vec![("D", 2), ("E", 5)]),
        ("C", vec![("F", 4)]),
        ("D", vec![]),
        ("E", vec![("G", 2)]),
        ("F", vec![("G", 5)]),
        ("G", vec![]),
    ]
    .into_iter()
    .collect();

    let heuristic = [
        ("A", 10),
        ("B", 8),
        ("C", 5),
        ("D", 7),
        ("E", 3),
        ("F", 6),
        ("G", 0),
    ]
    .into_iter()
    .collect();

    (graph, heuristic)
}

#[test]
fn reference() {
    init();
    let (graph, heuristic) = reference_graph();

    let result = best_first_search(&graph, &heuristic, &"A", &"G").unwrap();

    assert!(result.found());
    assert_eq!(result.expansion_order(), ["A", "C", "F", "G"]);

    let path = result.path().unwrap();
    assert_eq!(*path, vec!["A", "C", "F", "G"]);
    assert_eq!(path.cost(), 12);
    assert_eq!(path.to_string(), "Path[Cost = 12]: A -> C -> F -> G");
}

#[test]
fn reference_other_goals() {
    init();
    let (graph, heuristic) = reference_graph();

    // expansion order does not depend on the goal until it is met
    let result = best_first_search(&graph, &heuristic, &"A", &"D").unwrap();
    assert_eq!(result.expansion_order(), ["A", "C", "F", "G", "B", "E", "D"]);
    assert_eq!(result.path().unwrap().path, vec!["A", "B", "D"]);

    let result = best_first_search(&graph, &heuristic, &"F", &"A").unwrap();
    assert_eq!(result.outcome(), SearchOutcome::Unreachable);
    assert_eq!(result.expansion_order(), ["F", "G"]);
}

#[test]
fn idempotent() {
    init();
    let (graph, heuristic) = reference_graph();

    let first = best_first_search(&graph, &heuristic, &"A", &"D").unwrap();
    let second = best_first_search(&graph, &heuristic, &"A", &"D").unwrap();

    assert_eq!(first, second);
}

#[test]
fn self_loop() {
    init();
    let graph: Graph<&str> = [("X", vec![("X", 1)])].into_iter().collect();
    let heuristic: BTreeMap<&str, Cost> = [("X", 4)].into_iter().collect();

    let result = best_first_search(&graph, &heuristic, &"X", &"Y").unwrap();

    assert_eq!(result.outcome(), SearchOutcome::Unreachable);
    assert_eq!(result.expansion_order(), ["X"]);
}

#[test]
fn zero_weight_cycle() {
    init();
    let graph: Graph<u8> = [(1, vec![(2, 0)]), (2, vec![(3, 0)]), (3, vec![(1, 0)])]
        .into_iter()
        .collect();
    let heuristic = FnHeuristic(|_: &u8| Some(0));

    let result = best_first_search(&graph, &heuristic, &1, &4).unwrap();

    assert!(!result.found());
    assert_eq!(result.expansion_order(), [1, 2, 3]);
}

#[test]
fn invalid_start() {
    init();
    let (graph, heuristic) = reference_graph();

    let err = best_first_search(&graph, &heuristic, &"Q", &"G").unwrap_err();

    assert_eq!(err, SearchError::InvalidInput { start: "Q" });
    assert_eq!(err.to_string(), "start node \"Q\" is not part of the graph");
}

#[test]
fn missing_heuristic() {
    init();
    let (graph, mut heuristic) = reference_graph();
    heuristic.remove("F");

    assert_eq!(
        best_first_search(&graph, &heuristic, &"A", &"G"),
        Err(SearchError::MissingHeuristic { node: "F" })
    );

    // F is never scheduled when starting from B
    let result = best_first_search(&graph, &heuristic, &"B", &"G").unwrap();
    assert_eq!(result.expansion_order(), ["B", "E", "G"]);
}

#[test]
fn goal_outside_graph() {
    init();
    let (graph, heuristic) = reference_graph();

    let result = best_first_search(&graph, &heuristic, &"A", &"Z").unwrap();

    assert_eq!(result.outcome(), SearchOutcome::Unreachable);
    assert_eq!(result.expansion_order().len(), graph.len());
}

#[test]
fn removed_node_is_unreachable() {
    init();
    let (mut graph, heuristic) = reference_graph();
    graph.remove_node(&"G");

    let result = best_first_search(&graph, &heuristic, &"A", &"G").unwrap();

    assert_eq!(result.outcome(), SearchOutcome::Unreachable);
    assert_eq!(result.expansion_order(), ["A", "C", "F", "B", "E", "D"]);
}

#[test]
fn batch_matches_single_searches() {
    init();
    let (graph, heuristic) = reference_graph();
    let nodes: Vec<&str> = graph.nodes().copied().collect();
    let mut queries: Vec<(&str, &str)> = nodes
        .iter()
        .flat_map(|&start| nodes.iter().map(move |&goal| (start, goal)))
        .collect();
    queries.push(("Q", "A"));

    let results = search_all(&graph, &heuristic, &queries, SearchConfig::default());

    assert_eq!(results.len(), queries.len());
    for ((start, goal), result) in queries.iter().zip(results) {
        assert_eq!(result, best_first_search(&graph, &heuristic, start, goal));
    }
}

struct RandomGraph {
    graph: Graph<u32>,
    heuristic: HashMap<u32, Cost>,
}

// heuristic is 0 exactly at `goal` and positive everywhere else
fn random_graph(rng: &mut WyRand, node_count: u32, goal: u32) -> RandomGraph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut heuristic = HashMap::new();
    for id in 0..node_count {
        graph.add_node(id);
        let estimate = if id == goal {
            0
        } else {
            rng.generate_range(1_usize..=20)
        };
        heuristic.insert(id, estimate);
    }
    for id in 0..node_count {
        let edge_count = rng.generate_range(0_u32..4);
        for _ in 0..edge_count {
            let other = rng.generate_range(0..node_count);
            let weight = rng.generate_range(0_usize..10);
            graph.add_edge(id, other, weight);
        }
    }
    RandomGraph { graph, heuristic }
}

fn reachable(graph: &Graph<u32>, start: u32, goal: u32) -> bool {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for (&other, _) in graph.neighbors(&current).unwrap() {
            if seen.insert(other) {
                queue.push_back(other);
            }
        }
    }
    false
}

#[test]
fn random_graphs() {
    init();
    let mut rng = WyRand::new_seed(4);

    for _ in 0..200 {
        let node_count = rng.generate_range(1_u32..40);
        let start = rng.generate_range(0..node_count);
        let goal = rng.generate_range(0..node_count);
        let RandomGraph { graph, heuristic } = random_graph(&mut rng, node_count, goal);

        let result = best_first_search(&graph, &heuristic, &start, &goal).unwrap();
        let order = result.expansion_order();

        // no Node is expanded twice
        let unique: HashSet<_> = order.iter().collect();
        assert_eq!(unique.len(), order.len());
        assert_eq!(order[0], start);

        if reachable(&graph, start, goal) {
            assert!(result.found());
            assert_eq!(order.last(), Some(&goal));

            let path = result.path().unwrap();
            assert_eq!(path[0], start);
            assert_eq!(path[path.len() - 1], goal);
            assert!(path.iter().all(|id| unique.contains(id)));
        } else {
            assert_eq!(result.outcome(), SearchOutcome::Unreachable);
            assert!(!order.contains(&goal));
            assert!(result.path().is_none());
        }

        let again = best_first_search(&graph, &heuristic, &start, &goal).unwrap();
        assert_eq!(result, again);
    }
}

#[test]
fn random_graphs_with_limit() {
    init();
    let mut rng = WyRand::new_seed(17);

    for _ in 0..100 {
        let node_count = rng.generate_range(2_u32..40);
        let goal = node_count - 1;
        let RandomGraph { graph, heuristic } = random_graph(&mut rng, node_count, goal);
        let limit = rng.generate_range(1_usize..10);

        let unbounded = best_first_search(&graph, &heuristic, &0, &goal).unwrap();
        let config = SearchConfig::with_expansion_limit(limit);
        let limited =
            best_first_search_with_config(&graph, &heuristic, &0, &goal, config).unwrap();

        let full_order = unbounded.expansion_order();
        if full_order.len() <= limit {
            assert_eq!(limited, unbounded);
        } else {
            assert_eq!(limited.outcome(), SearchOutcome::LimitReached);
            assert_eq!(limited.expansion_order(), &full_order[..limit]);
        }
    }
}
