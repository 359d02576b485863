use crate::graph::UndirectedGraph;
use rand::prelude::*;

/// Generates a connected random graph with `n` vertices labelled `0..n`.
///
/// A random spanning tree keeps every vertex reachable; `extra_edges` additional
/// random edges are added on top of it. Weights are drawn from `1..=max_weight`;
/// a `max_weight` of zero is treated as 1. The same seed always yields the same graph.
pub fn generate_connected(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    seed: u64,
) -> UndirectedGraph<usize, u64> {
    let max_weight = max_weight.max(1);

    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }

    // Attach every vertex to an earlier one
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let weight = rng.gen_range(1..=max_weight);
        add_generated_edge(&mut graph, parent, v, weight);
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                let weight = rng.gen_range(1..=max_weight);
                add_generated_edge(&mut graph, u, v, weight);
            }
        }
    }

    graph
}

/// Generates a random graph whose edges are drawn independently with probability `p`.
///
/// Unlike [`generate_connected`] the result may have several components and
/// isolated vertices. Weights are drawn from `0..=max_weight`, so zero-weight
/// edges occur too.
pub fn generate_sparse(n: usize, p: f64, max_weight: u64, seed: u64) -> UndirectedGraph<usize, u64> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                let weight = rng.gen_range(0..=max_weight);
                add_generated_edge(&mut graph, u, v, weight);
            }
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<usize, u64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                add_generated_edge(&mut graph, current, current + 1, 1);
            }
            if y + 1 < height {
                add_generated_edge(&mut graph, current, current + width, 1);
            }
        }
    }

    graph
}

fn add_generated_edge(graph: &mut UndirectedGraph<usize, u64>, u: usize, v: usize, weight: u64) {
    // Only a total weight near u64::MAX is rejected; such an edge is skipped
    let _ = graph.add_edge(u, v, weight);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_generate_connected_is_deterministic() {
        let a = generate_connected(50, 40, 20, 7);
        let b = generate_connected(50, 40, 20, 7);

        assert_eq!(a.vertex_count(), 50);
        assert_eq!(a.edge_count(), b.edge_count());
        for u in a.vertices() {
            for (v, w) in a.neighbors(u) {
                assert_eq!(b.edge_weight(u, v), Some(w));
            }
        }
    }

    #[test]
    fn test_zero_max_weight_uses_unit_weights() {
        let graph = generate_connected(10, 5, 0, 3);
        assert_eq!(graph.vertex_count(), 10);
        for u in graph.vertices() {
            assert!(graph.neighbors(u).all(|(_, w)| w == 1));
        }
    }

    #[test]
    fn test_generate_grid_edge_count() {
        let grid = generate_grid(4, 3);
        assert_eq!(grid.vertex_count(), 12);
        // 3 horizontal edges per row, 4 vertical edges per row gap
        assert_eq!(grid.edge_count(), 3 * 3 + 4 * 2);
    }
}
