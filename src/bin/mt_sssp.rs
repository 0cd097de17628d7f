use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use mt_sssp::graph::{load_graph, Graph};
use mt_sssp::{BellmanFord, FailurePolicy, Pipeline, PipelineConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    about = "Computes, for every node of a graph, the farthest reachable node and the shortest path to it.",
    long_about = None
)]
struct CliArgs {
    /// The binary graph file.
    input: PathBuf,

    #[arg(short = 'f', long)]
    /// Where to write the binary results (standard output if missing).
    output: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = 4)]
    /// The number of worker threads.
    threads: usize,

    #[arg(short = 'v', long)]
    /// Log the progress of the pipeline.
    verbose: bool,

    #[arg(short = 'p', long)]
    /// Print human-readable results instead of the binary format.
    print: bool,

    #[arg(long)]
    /// Stop the whole run at the first source that cannot be analysed.
    abort_on_failure: bool,
}

fn run(args: CliArgs) -> Result<bool> {
    let graph = load_graph(&args.input)
        .with_context(|| format!("Could not load graph from {}", args.input.display()))?;
    info!(
        "Number of nodes: {}, number of edges: {}",
        graph.vertex_count(),
        graph.edge_count()
    );

    let policy = if args.abort_on_failure {
        FailurePolicy::Abort
    } else {
        FailurePolicy::SkipSource
    };
    let config = PipelineConfig::new()
        .with_threads(args.threads)
        .with_print(args.print)
        .with_failure_policy(policy);
    let pipeline = Pipeline::new(config);

    let mut out: Box<dyn Write + Send> = match (&args.output, args.print) {
        (Some(path), false) => Box::new(BufWriter::new(File::create(path).with_context(
            || format!("Could not create output file {}", path.display()),
        )?)),
        (Some(path), true) => {
            warn!("Printing results, {} is not written", path.display());
            Box::new(BufWriter::new(std::io::stdout()))
        }
        (None, _) => Box::new(BufWriter::new(std::io::stdout())),
    };

    let report = pipeline
        .run(&BellmanFord::new(), &graph, &mut out)
        .context("Could not start the pipeline")?;
    info!(
        "{} workers, {} nodes dispatched, {} computed, {} written",
        report.workers, report.dispatched, report.computed, report.written
    );
    Ok(report.is_success())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("An error occurred, results are incomplete");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
