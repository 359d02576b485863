use std::time::{Duration, Instant};

use apsp_pool::algorithm::all_pairs::compute_all_pairs;
use apsp_pool::graph::generators::generate_connected;
use apsp_pool::graph::{Graph, UndirectedGraph};
use apsp_pool::sink::ResultSink;
use apsp_pool::{Dijkstra, Pipeline, PipelineConfig, ShortestPathResult};

/// Sink that only counts, so the benchmark measures computation and hand-off
#[derive(Default)]
struct CountingSink {
    results: usize,
    reachable: usize,
}

impl ResultSink<usize, u64> for CountingSink {
    fn accept(&mut self, result: ShortestPathResult<usize, u64>) -> apsp_pool::Result<()> {
        self.results += 1;
        self.reachable += result.reachable_count();
        Ok(())
    }
}

// Function to benchmark the pipeline on a graph with a given worker count
fn benchmark_pipeline(graph: &UndirectedGraph<usize, u64>, workers: usize) -> Duration {
    let config = PipelineConfig::default().with_workers(workers);
    let mut sink = CountingSink::default();

    let start = Instant::now();
    let report = Pipeline::new(graph, config)
        .run(&mut sink)
        .expect("pipeline failed");
    let duration = start.elapsed();

    assert_eq!(report.delivered, graph.vertex_count());
    println!(
        "  - {:>2} workers: {} results, {} reachable pairs in {:?}",
        workers, sink.results, sink.reachable, duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![250, 500, 1_000, 2_000];

    // Extra edges on top of the spanning tree, per vertex
    let edge_factor = 3;

    let max_workers = apsp_pool::pipeline::config::default_workers();
    let mut worker_counts = vec![1, 2, 4, 8, 16];
    worker_counts.retain(|&w| w <= max_workers.max(1));
    if !worker_counts.contains(&max_workers) {
        worker_counts.push(max_workers);
    }

    println!("=====================================================");
    println!("Benchmark: all-sources Dijkstra pipeline");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_connected(size, size * edge_factor, 100, size as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let sequential = benchmark_pipeline(&graph, 1);
        for &workers in worker_counts.iter().filter(|&&w| w > 1) {
            let parallel = benchmark_pipeline(&graph, workers);
            results.push((size, workers, sequential, parallel));
        }

        let start = Instant::now();
        let all = compute_all_pairs(&graph, &Dijkstra::new()).expect("rayon run failed");
        println!("  - rayon in-memory: {} results in {:?}", all.len(), start.elapsed());
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<8} | {:<15} | {:<15} | {:<10}", "Vertices", "Workers", "1 worker (ms)", "N workers (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, workers, sequential, parallel) in &results {
        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64();
        println!(
            "{:<10} | {:<8} | {:<15} | {:<15} | {:<10.2}",
            size,
            workers,
            sequential.as_millis(),
            parallel.as_millis(),
            speedup
        );
    }
}
