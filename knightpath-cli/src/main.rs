//! KnightPath CLI - Command-line interface
//!
//! This binary provides a command-line interface to the KnightPath library:
//! it queues a move, waits for the background daemon to publish the result,
//! and prints every shortest path.

use clap::Parser;
use knightpath::logging::init_logging;
use knightpath::runtime::RuntimeConfig;
use knightpath::service::{KnightPathService, PathResponse};
use std::time::{Duration, Instant};

mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "knightpath")]
#[command(version = knightpath::VERSION)]
#[command(about = "Find every shortest knight path between two squares", long_about = None)]
struct Args {
    /// Starting square, e.g. A1
    start: String,

    /// Target square, e.g. F6
    target: String,

    /// Give up if the result has not arrived after this many milliseconds
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,

    /// Suppress log output on stderr
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the operation id and paths.
    if !args.quiet {
        if let Err(e) = init_logging() {
            CliError::LoggingInit(e.to_string()).exit();
        }
    }

    let (service, runtime) = KnightPathService::start(RuntimeConfig::default());

    let operation_id = match service.queue_knight_move(&args.start, &args.target) {
        Ok(id) => id,
        Err(e) => CliError::Submit(e).exit(),
    };

    println!("Operation {} created", operation_id);

    let response = wait_for_result(&service, &operation_id.to_string(), args.timeout_ms).await;
    runtime.shutdown().await;

    match response {
        Ok(Some(response)) => print_response(&response),
        Ok(None) => CliError::Timeout(args.timeout_ms).exit(),
        Err(e) => e.exit(),
    }
}

/// Polls the operation store until the result arrives or the deadline passes.
async fn wait_for_result(
    service: &KnightPathService,
    operation_id: &str,
    timeout_ms: u64,
) -> Result<Option<PathResponse>, CliError> {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        match service.take_path(operation_id) {
            Ok(Some(response)) => return Ok(Some(response)),
            Ok(None) => {
                if Instant::now() >= deadline {
                    return Ok(None);
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(e) => return Err(CliError::Collect(e)),
        }
    }
}

fn print_response(response: &PathResponse) {
    let path = &response.path;
    println!(
        "{} -> {}: {} moves, {} shortest paths",
        path.starting(),
        path.ending(),
        path.move_count,
        path.path_count()
    );
    for line in &path.shortest_paths {
        println!("  {}", line);
    }
}
