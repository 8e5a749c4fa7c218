// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Sextant CLI
//!
//! Solves a travelling salesman instance given as a file of city coordinates.
//! The file is read if it holds enough cities; otherwise (or with
//! `--generate`) a new random file is written first.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use sextant_model::{
    generation::{CityGenerator, write_cities_to_path},
    geometry::Point,
    loading::CityLoader,
    matrix::CostMatrix,
    tour::Tour,
};
use sextant_search::exhaustive::ExhaustiveSolver;
use sextant_solver::solver::SolverBuilder;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Command-line interface for the Sextant TSP solvers
#[derive(Parser, Debug)]
#[command(name = "sextant")]
#[command(about = "Optimal travelling salesman tours over random or stored cities")]
#[command(version)]
struct Cli {
    /// Number of cities to use
    #[arg(short, long, default_value_t = 10)]
    cities: usize,

    /// City file, one `x,y` pair per line
    #[arg(short, long, default_value = "cities")]
    file: PathBuf,

    /// Write a fresh random city file instead of reading the existing one
    #[arg(short, long)]
    generate: bool,

    /// Seed for city generation
    #[arg(long)]
    seed: Option<u64>,

    /// Solution method
    #[arg(short, long, value_enum, default_value_t = Method::BranchAndBound)]
    method: Method,

    /// Stop branch-and-bound after this many seconds and report the best tour so far
    #[arg(long)]
    time_limit: Option<f64>,

    /// Seconds between progress log lines
    #[arg(long)]
    log_interval: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Best-first branch-and-bound
    BranchAndBound,
    /// Evaluate every tour
    BruteForce,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if cli.cities == 0 {
        bail!("at least one city is required");
    }

    let cities = load_or_generate(&cli)?;
    println!("The cities are:");
    for (i, city) in cities.iter().enumerate() {
        println!("{} at {}", i, city);
    }

    let matrix =
        CostMatrix::from_points(&cities).context("failed to build the distance matrix")?;

    let start = Instant::now();
    let (tour, proven) = match cli.method {
        Method::BranchAndBound => run_branch_and_bound(&cli, &matrix)?,
        Method::BruteForce => {
            let mut solver = ExhaustiveSolver::new();
            let tour = solver.solve(&matrix);
            info!("Evaluated {} tours", solver.tours_evaluated());
            (tour, true)
        }
    };
    let elapsed = start.elapsed().as_secs_f64();

    if !proven {
        warn!("Search stopped early, the tour below is not proven optimal");
    }
    println!(
        "Calculated path {:?} with cost {} in {} seconds.",
        tour.as_raw(),
        tour.cost(),
        elapsed
    );

    Ok(())
}

fn run_branch_and_bound(
    cli: &Cli,
    matrix: &CostMatrix<f64>,
) -> anyhow::Result<(Tour<f64>, bool)> {
    let mut builder = SolverBuilder::new();
    if let Some(secs) = cli.time_limit {
        builder = builder.with_time_limit(seconds(secs, "--time-limit")?);
    }
    if let Some(secs) = cli.log_interval {
        builder = builder.with_logging(seconds(secs, "--log-interval")?);
    }

    let outcome = builder.build().solve(matrix)?;
    info!("{}", outcome.termination_reason());

    let proven = outcome.is_optimal();
    match outcome.into_tour() {
        Some(tour) => Ok((tour, proven)),
        None => bail!("no tour was found before the search stopped"),
    }
}

fn seconds(secs: f64, flag: &str) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("{} must be a non-negative number of seconds", flag))
}

/// Reads `cli.cities` cities from `cli.file`, writing a new random file
/// first when asked to or when reading fails.
fn load_or_generate(cli: &Cli) -> anyhow::Result<Vec<Point>> {
    let loader = CityLoader::new().with_limit(cli.cities);

    if !cli.generate {
        match loader.from_path(&cli.file) {
            Ok(cities) => {
                info!("Read {} cities from {}", cities.len(), cli.file.display());
                return Ok(cities);
            }
            Err(e) => warn!(
                "Could not read {} ({}), creating a new file instead",
                cli.file.display(),
                e
            ),
        }
    }

    generate_file(&cli.file, cli.cities, cli.seed)?;
    loader
        .from_path(&cli.file)
        .with_context(|| format!("failed to read back generated file {}", cli.file.display()))
}

fn generate_file(path: &Path, amount: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut generator = match seed {
        Some(seed) => CityGenerator::seeded(seed),
        None => CityGenerator::from_entropy(),
    };
    let cities = generator.generate(amount);
    write_cities_to_path(path, &cities)
        .with_context(|| format!("failed to write city file {}", path.display()))?;
    info!("Wrote {} random cities to {}", amount, path.display());
    Ok(())
}
