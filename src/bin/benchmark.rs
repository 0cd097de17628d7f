use std::io;
use std::time::{Duration, Instant};
use mt_sssp::graph::generators::generate_random;
use mt_sssp::graph::{DirectedGraph, Graph};
use mt_sssp::{BellmanFord, Pipeline, PipelineConfig};

// Function to benchmark the pipeline on a graph with a given number of workers
fn benchmark_pipeline(graph: &DirectedGraph<i64>, threads: usize) -> mt_sssp::Result<Duration> {
    println!("Running pipeline with {} workers on graph with {} vertices...", threads, graph.vertex_count());

    let pipeline = Pipeline::new(PipelineConfig::new().with_threads(threads));
    let start = Instant::now();
    let report = pipeline.run(&BellmanFord::new(), graph, &mut io::sink())?;
    let duration = start.elapsed();

    println!("  - Wrote {} records in {:?}", report.written, duration);
    Ok(duration)
}

fn main() -> mt_sssp::Result<()> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![100, 250, 500, 1_000];
    let thread_counts = vec![1, 2, 4, 8];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: pipeline scaling with worker count");
    println!("Edge factor: {} edges per vertex (on average), negative weights", edge_factor);
    println!("=====================================================");

    // Results storage
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, true, size as u64)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let mut timings = Vec::with_capacity(thread_counts.len());
        for &threads in &thread_counts {
            timings.push(benchmark_pipeline(&graph, threads)?);
        }
        results.push((size, timings));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results (ms, speedup over 1 worker)");
    println!("=====================================================");
    print!("{:<10}", "Vertices");
    for threads in &thread_counts {
        print!(" | {:>18}", format!("{} workers", threads));
    }
    println!();
    println!("-----------------------------------------------------");

    for (size, timings) in &results {
        print!("{:<10}", size);
        let base = timings[0].as_secs_f64();
        for timing in timings {
            let speedup = base / timing.as_secs_f64().max(f64::EPSILON);
            print!(" | {:>9} ({:>5.2}x)", timing.as_millis(), speedup);
        }
        println!();
    }
    Ok(())
}
