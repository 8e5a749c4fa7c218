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

//! # Configured Solver
//!
//! A thin layer over `sextant_bnb::bnb::BnbSolver` that validates its inputs
//! and builds the monitor stack for a run.
//!
//! ## Highlights
//!
//! - Entry points:
//!   - `solve(&CostMatrix<T>) -> Tour<T>` for a validated matrix.
//!   - `solve_rows(Vec<Vec<T>>)` validating the rows into a matrix first.
//! - Builder pattern:
//!   - `SolverBuilder` to configure time, node and solution limits, an
//!     external interrupt flag, periodic progress logging, pruning and an
//!     initial incumbent.
//! - Monitor stack:
//!   - A `CompositeTreeSearchMonitor<T>` per run, holding only the monitors
//!     that were asked for.
//!
//! ## Usage
//!
//! ```rust
//! use sextant_model::matrix::CostMatrix;
//! use sextant_solver::solver::SolverBuilder;
//!
//! let matrix = CostMatrix::from_rows(&[
//!     [0, 10, 15, 20],
//!     [10, 0, 35, 25],
//!     [15, 35, 0, 30],
//!     [20, 25, 30, 0],
//! ])
//! .unwrap();
//!
//! let mut solver = SolverBuilder::<i64>::new()
//!     .with_time_limit(std::time::Duration::from_secs(30))
//!     .build();
//!
//! let outcome = solver.solve(&matrix).unwrap();
//! assert!(outcome.is_optimal());
//! assert_eq!(outcome.cost(), Some(80));
//! ```

use sextant_bnb::{
    bnb::BnbSolver,
    bound::MinOutgoingEdgeBound,
    monitor::{
        composite::CompositeTreeSearchMonitor, interrupt::InterruptMonitor,
        log::LogTreeSearchMonitor, no_op::NoOperationMonitor, node_limit::NodeLimitMonitor,
        solution::SolutionLimitMonitor, time::TimeLimitMonitor,
    },
    result::BnbSolverOutcome,
};
use sextant_model::{
    matrix::{CostMatrix, MatrixError},
    tour::Tour,
};
use sextant_search::num::SolverNumeric;
use std::{sync::atomic::AtomicBool, time::Duration};

/// Errors reported by the validated entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The cost data does not form a valid matrix.
    #[error("invalid cost matrix: {0}")]
    InvalidMatrix(#[from] MatrixError),
    /// The warm-start tour does not visit every city of the matrix exactly once.
    #[error(
        "initial tour with {tour_len} entries is not a Hamiltonian cycle over {num_cities} cities"
    )]
    IncumbentMismatch { num_cities: usize, tour_len: usize },
}

/// Solves `matrix` to optimality.
///
/// Returns a tour of `n + 1` cities starting and ending at city 0. For a
/// single city the tour is `[0, 0]` with cost zero.
pub fn solve<T>(matrix: &CostMatrix<T>) -> Tour<T>
where
    T: SolverNumeric,
{
    let outcome = BnbSolver::preallocated(matrix.num_cities()).solve(
        matrix,
        &MinOutgoingEdgeBound::new(),
        NoOperationMonitor::new(),
    );
    debug_assert!(outcome.is_optimal());

    outcome
        .into_tour()
        .expect("expected an optimal tour from a search without limits")
}

/// Validates `rows` into a cost matrix and solves it to optimality.
pub fn solve_rows<T>(rows: Vec<Vec<T>>) -> Result<Tour<T>, SolveError>
where
    T: SolverNumeric,
{
    let matrix = CostMatrix::from_rows(&rows)?;
    Ok(solve(&matrix))
}

/// A branch-and-bound solver with a fixed set of limits and options.
///
/// Build one with `SolverBuilder`. The same solver may be used for several
/// matrices; the engine keeps its allocations between runs.
#[derive(Debug)]
pub struct Solver<'a, T>
where
    T: SolverNumeric,
{
    engine: BnbSolver<T>,
    incumbent: Option<Tour<T>>,
    interrupt: Option<&'a AtomicBool>,
    time_limit: Option<Duration>,
    node_limit: Option<u64>,
    solution_limit: Option<u64>,
    log_interval: Option<Duration>,
}

impl<'a, T> Solver<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    #[inline]
    pub fn solution_limit(&self) -> Option<u64> {
        self.solution_limit
    }

    #[inline]
    pub fn log_interval(&self) -> Option<Duration> {
        self.log_interval
    }

    #[inline]
    pub fn incumbent(&self) -> Option<&Tour<T>> {
        self.incumbent.as_ref()
    }

    #[inline]
    pub fn has_limits(&self) -> bool {
        self.interrupt.is_some()
            || self.time_limit.is_some()
            || self.node_limit.is_some()
            || self.solution_limit.is_some()
    }

    /// Runs the branch-and-bound search on `matrix`.
    ///
    /// A configured initial tour is re-priced against `matrix` before the
    /// search starts; it must be a Hamiltonian cycle over its cities.
    pub fn solve(&mut self, matrix: &CostMatrix<T>) -> Result<BnbSolverOutcome<T>, SolveError> {
        let num_cities = matrix.num_cities();
        let incumbent = match &self.incumbent {
            Some(tour) if !tour.is_hamiltonian_cycle(num_cities) => {
                return Err(SolveError::IncumbentMismatch {
                    num_cities,
                    tour_len: tour.cities().len(),
                });
            }
            Some(tour) => Some(Tour::from_cities(matrix, tour.cities().to_vec())),
            None => None,
        };

        let monitor = self.build_monitor();
        let estimator = MinOutgoingEdgeBound::new();

        log::debug!(
            "Solving {} cities with {} monitor(s), pruning {}",
            num_cities,
            monitor.len(),
            if self.engine.is_pruning_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );

        let outcome = match incumbent {
            Some(tour) => {
                log::debug!("Warm start from {}", tour);
                self.engine
                    .solve_with_incumbent(matrix, &estimator, monitor, tour)
            }
            None => self.engine.solve(matrix, &estimator, monitor),
        };

        log::debug!("{}", outcome.statistics());
        Ok(outcome)
    }

    fn build_monitor(&self) -> CompositeTreeSearchMonitor<'a, T> {
        let mut monitor = CompositeTreeSearchMonitor::new();

        if let Some(flag) = self.interrupt {
            monitor.add_monitor(InterruptMonitor::new(flag));
        }
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.node_limit {
            monitor.add_monitor(NodeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.solution_limit {
            monitor.add_monitor(SolutionLimitMonitor::new(limit));
        }
        if let Some(interval) = self.log_interval {
            monitor.add_monitor(LogTreeSearchMonitor::new(
                interval,
                LogTreeSearchMonitor::<T>::DEFAULT_CLOCK_CHECK_MASK,
            ));
        }

        monitor
    }
}

pub struct SolverBuilder<'a, T> {
    incumbent: Option<Tour<T>>,
    interrupt: Option<&'a AtomicBool>,
    time_limit: Option<Duration>,
    node_limit: Option<u64>,
    solution_limit: Option<u64>,
    log_interval: Option<Duration>,
    pruning: bool,
}

impl<'a, T> Default for SolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            incumbent: None,
            interrupt: None,
            time_limit: None,
            node_limit: None,
            solution_limit: None,
            log_interval: None,
            pruning: true,
        }
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Stops after `limit` node expansions.
    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Stops after `limit` incumbent improvements.
    #[inline]
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    /// Stops as soon as `flag` is set, e.g. from a signal handler thread.
    #[inline]
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Logs search progress at `info` level every `interval`.
    #[inline]
    pub fn with_logging(mut self, interval: Duration) -> Self {
        self.log_interval = Some(interval);
        self
    }

    #[inline]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Starts every search from `tour` as the initial incumbent.
    #[inline]
    pub fn with_incumbent(mut self, tour: Tour<T>) -> Self {
        self.incumbent = Some(tour);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a, T> {
        Solver {
            engine: BnbSolver::new().with_pruning(self.pruning),
            incumbent: self.incumbent,
            interrupt: self.interrupt,
            time_limit: self.time_limit,
            node_limit: self.node_limit,
            solution_limit: self.solution_limit,
            log_interval: self.log_interval,
        }
    }
}
