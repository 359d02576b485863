use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use apsp_pool::graph::edge_list::load_edge_list;
use apsp_pool::pipeline::config::{default_workers, DEFAULT_RESULT_CAPACITY, DEFAULT_WORK_CAPACITY};
use apsp_pool::{JsonLinesSink, Pipeline, PipelineConfig, PipelineStatus, TextSink};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "apsp")]
#[command(about = "Run Dijkstra from every vertex of an undirected edge-list graph and write all distance and predecessor maps.", long_about = None)]
struct Cli {
    /// Edge-list file: optional `N M` header, then one `A B WEIGHT` line per edge
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "dijkstra-output.txt")]
    output: PathBuf,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    #[arg(long, default_value_t = DEFAULT_WORK_CAPACITY)]
    work_capacity: usize,

    #[arg(long, default_value_t = DEFAULT_RESULT_CAPACITY)]
    result_capacity: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> apsp_pool::Result<()> {
    let start = Instant::now();
    let workers = cli.workers.unwrap_or_else(default_workers);
    println!("Worker threads: {}", workers);

    let graph = load_edge_list(&cli.input)?;
    let load_time = start.elapsed();

    let config = PipelineConfig::default()
        .with_workers(workers)
        .with_work_capacity(cli.work_capacity)
        .with_result_capacity(cli.result_capacity);
    let pipeline = Pipeline::new(&graph, config);

    let report = match cli.format {
        OutputFormat::Text => pipeline.run(&mut TextSink::create(&cli.output)?)?,
        OutputFormat::Json => pipeline.run(&mut JsonLinesSink::create(&cli.output)?)?,
    };

    if report.status != PipelineStatus::Completed {
        eprintln!("Stopped early: {} of {} results written", report.delivered, report.expected);
    }
    println!("Finished in {:?}", start.elapsed());
    println!("Finished file reading at {:?}", load_time);
    println!("Results written to {}", cli.output.display());
    Ok(())
}
