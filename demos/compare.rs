//! Generate inputs, solve them and compare the sequential and parallel paths.
//!
//! ```text
//! cargo run --release --example compare -- generate --len 10000000 input.txt
//! cargo run --release --example compare -- solve input.txt --report result.txt
//! cargo run --release --example compare -- compare input.txt --workers 8
//! ```
use clap::{Parser, Subcommand};
use rayon_max_subarray::io::{self, Report, DEFAULT_RANGE};
use rayon_max_subarray::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(about = "maximum subarray: sequential scan vs chunked parallel reduction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write random integers into a file.
    Generate {
        path: PathBuf,
        #[arg(long, default_value_t = 10_000_000)]
        len: usize,
        #[arg(long, default_value_t = *DEFAULT_RANGE.start(), allow_negative_numbers = true)]
        min: i32,
        #[arg(long, default_value_t = *DEFAULT_RANGE.end(), allow_negative_numbers = true)]
        max: i32,
    },
    /// Solve a file sequentially, printing the best subarray.
    Solve {
        path: PathBuf,
        /// Also save the result here.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Time both paths on a file and check they agree.
    Compare {
        path: PathBuf,
        /// Chunks of the parallel path, defaults to MAX_SUBARRAY_WORKERS or the number of cpus.
        #[arg(long)]
        workers: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse().command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Generate {
            path,
            len,
            min,
            max,
        } => {
            let start = Instant::now();
            io::generate_file(&path, len, min..=max)?;
            println!(
                "wrote {} integers to {} in {:.2?}",
                len,
                path.display(),
                start.elapsed()
            );
        }
        Command::Solve { path, report } => {
            let input = io::read_sequence(&path)?;
            let start = Instant::now();
            let solution = solve_sequential(&input);
            let result = Report {
                sum: solution.sum,
                elapsed: start.elapsed(),
                witness: Some(solution.witness(&input)),
            };
            println!("{}", result);
            if let Some(report) = report {
                io::write_report(&report, &result)?;
                println!("full result saved to {}", report.display());
            }
        }
        Command::Compare { path, workers } => {
            let input = io::read_sequence(&path)?;
            println!("{} elements", input.len());

            let start = Instant::now();
            let sequential = solve_sequential(&input).sum;
            let sequential_time = start.elapsed();
            println!("sequential: {} in {:.6} sec", sequential, sequential_time.as_secs_f64());

            let mut builder = ReduceConfigBuilder::from_env()?;
            if let Some(workers) = workers {
                builder = builder.workers(workers);
            }
            let reducer = ParallelReducer::new(builder.build()?)?;
            let start = Instant::now();
            let parallel = reducer.solve(&input)?;
            let parallel_time = start.elapsed();
            println!(
                "parallel ({} chunks): {} in {:.6} sec",
                reducer.config().workers(),
                parallel,
                parallel_time.as_secs_f64()
            );

            if parallel != sequential {
                eprintln!("results differ!");
                return Ok(ExitCode::FAILURE);
            }
            println!(
                "results agree, speedup {:.2}x",
                sequential_time.as_secs_f64() / parallel_time.as_secs_f64()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
