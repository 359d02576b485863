use apsp_pool::algorithm::all_pairs::compute_all_pairs;
use apsp_pool::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use apsp_pool::graph::generators::{generate_connected, generate_grid, generate_sparse};
use apsp_pool::graph::{infinity, Graph, UndirectedGraph};
use apsp_pool::Dijkstra;
use std::collections::HashMap;

// Minimum weight over all simple paths from `source`, by exhaustive search
fn brute_force_distances(graph: &UndirectedGraph<usize, u64>, source: usize) -> HashMap<usize, u64> {
    fn explore(
        graph: &UndirectedGraph<usize, u64>,
        vertex: usize,
        cost: u64,
        on_path: &mut Vec<bool>,
        best: &mut HashMap<usize, u64>,
    ) {
        let entry = best.entry(vertex).or_insert(u64::MAX);
        if cost < *entry {
            *entry = cost;
        }
        for (&next, weight) in graph.neighbors(&vertex) {
            if !on_path[next] {
                on_path[next] = true;
                explore(graph, next, cost + weight, on_path, best);
                on_path[next] = false;
            }
        }
    }

    let mut best = HashMap::new();
    let mut on_path = vec![false; graph.vertex_count()];
    on_path[source] = true;
    explore(graph, source, 0, &mut on_path, &mut best);
    best
}

// Every reachable vertex must be explained by its predecessor edge, and following
// predecessors must reach the source with strictly decreasing distances
fn assert_valid_tree(graph: &UndirectedGraph<usize, u64>, result: &ShortestPathResult<usize, u64>) {
    assert_eq!(result.distance(&result.source), Some(0));
    assert_eq!(result.predecessor(&result.source), None);

    for &vertex in graph.vertices() {
        let Some(distance) = result.distance(&vertex) else {
            assert_eq!(result.predecessor(&vertex), None, "unreachable vertex {} has a predecessor", vertex);
            continue;
        };
        if vertex == result.source {
            continue;
        }

        let pred = *result.predecessor(&vertex).expect("reachable vertex without predecessor");
        let weight = graph.edge_weight(&pred, &vertex).expect("predecessor edge must exist");
        assert_eq!(result.distance(&pred).unwrap() + weight, distance);

        let mut current = vertex;
        let mut steps = 0;
        while current != result.source {
            let next = *result.predecessor(&current).unwrap();
            assert!(result.distance(&next).unwrap() <= result.distance(&current).unwrap());
            current = next;
            steps += 1;
            assert!(steps <= graph.vertex_count(), "predecessor chain does not terminate");
        }
    }
}

#[test]
fn test_distances_match_brute_force() {
    let dijkstra = Dijkstra::new();

    for seed in 0..25 {
        let graph = generate_sparse(7, 0.45, 9, seed);
        for &source in graph.vertices() {
            let result = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
            let expected = brute_force_distances(&graph, source);

            for &target in graph.vertices() {
                let brute = expected.get(&target).copied();
                assert_eq!(
                    result.distance(&target),
                    brute,
                    "seed {} source {} target {}",
                    seed,
                    source,
                    target
                );
            }
        }
    }
}

#[test]
fn test_predecessor_chains_are_valid() {
    let dijkstra = Dijkstra::new();

    for seed in 0..10 {
        let graph = generate_sparse(40, 0.08, 20, seed);
        for &source in graph.vertices() {
            let result = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
            assert_valid_tree(&graph, &result);
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    // Distinct power-of-two weights give a unique shortest path tree
    let mut graph: UndirectedGraph<usize, u64> = UndirectedGraph::new();
    let mut weight = 1;
    for u in 0..8usize {
        for v in (u + 1)..8 {
            graph.add_edge(u, v, weight).unwrap();
            weight *= 2;
        }
    }

    let dijkstra = Dijkstra::new();
    for &source in graph.vertices() {
        let first = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
        let second = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
        assert_eq!(first, second);
    }

    // Ties allowed: distances still have to agree
    let grid = generate_grid(6, 6);
    let first = dijkstra.compute_shortest_paths(&grid, &0).unwrap();
    let second = dijkstra.compute_shortest_paths(&grid, &0).unwrap();
    assert_eq!(first.distances, second.distances);
    assert_eq!(first.distance(&35), Some(10));
}

#[test]
fn test_single_edge() {
    let mut graph: UndirectedGraph<&str, u64> = UndirectedGraph::new();
    graph.add_edge("A", "B", 5).unwrap();
    let dijkstra = Dijkstra::new();

    let from_a = dijkstra.compute_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(from_a.distances, HashMap::from([("A", 0), ("B", 5)]));
    assert_eq!(from_a.predecessor(&"B"), Some(&"A"));
    assert_eq!(from_a.predecessor(&"A"), None);

    let from_b = dijkstra.compute_shortest_paths(&graph, &"B").unwrap();
    assert_eq!(from_b.distances, HashMap::from([("B", 0), ("A", 5)]));
    assert_eq!(from_b.predecessor(&"A"), Some(&"B"));
}

#[test]
fn test_shorter_path_through_intermediate_vertex() {
    let graph = UndirectedGraph::from_edges([("A", "B", 1u64), ("B", "C", 1), ("A", "C", 10)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(result.distance(&"C"), Some(2));
    assert_eq!(result.predecessor(&"C"), Some(&"B"));
    assert_eq!(result.predecessor(&"B"), Some(&"A"));
}

#[test]
fn test_isolated_vertex_keeps_sentinel() {
    let mut graph: UndirectedGraph<&str, u64> = UndirectedGraph::new();
    graph.add_edge("A", "B", 4).unwrap();
    graph.add_vertex("D");
    let dijkstra = Dijkstra::new();

    let from_a = dijkstra.compute_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(from_a.distances[&"D"], infinity::<u64>());
    assert_eq!(from_a.predecessors[&"D"], None);
    assert!(!from_a.is_reachable(&"D"));
    assert_eq!(from_a.reachable_count(), 2);

    let from_d = dijkstra.compute_shortest_paths(&graph, &"D").unwrap();
    assert_eq!(from_d.distance(&"D"), Some(0));
    assert_eq!(from_d.reachable_count(), 1);
    assert!(from_d.predecessors.values().all(Option::is_none));
}

#[test]
fn test_zero_weight_edges() {
    let graph = UndirectedGraph::from_edges([(0usize, 1usize, 0u64), (1, 2, 0), (0, 2, 1)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();

    assert_eq!(result.distance(&2), Some(0));
    assert_eq!(result.predecessor(&2), Some(&1));
}

#[test]
fn test_all_pairs_is_symmetric() {
    let graph = generate_connected(60, 90, 50, 11);
    let all = compute_all_pairs(&graph, &Dijkstra::new()).unwrap();

    assert_eq!(all.len(), 60);
    for (&s, from_s) in &all {
        assert_eq!(from_s.reachable_count(), 60);
        for (&t, from_t) in &all {
            assert_eq!(from_s.distance(&t), from_t.distance(&s));
        }
    }
}
