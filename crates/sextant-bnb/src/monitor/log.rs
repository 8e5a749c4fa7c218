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

//! Progress logging for tree search
//!
//! `LogTreeSearchMonitor` writes a header when the search starts, one progress
//! line per `log_interval` while it runs, and a summary when it ends. All
//! output goes through the `log` facade at `info` level (incumbent
//! improvements at `debug`), so the binary decides where it ends up.
//!
//! The clock is only read on steps selected by `clock_check_mask`.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use num_traits::ToPrimitive;
use sextant_model::{matrix::CostMatrix, tour::Tour};
use sextant_search::num::SolverNumeric;
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 96;

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_cost: Option<T>,
    current_depth: usize,
    frontier_len: usize,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: SolverNumeric,
{
    /// Steps between two clock reads.
    pub const DEFAULT_CLOCK_CHECK_MASK: u64 = 0xFFF;

    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_cost: None,
            current_depth: 0,
            frontier_len: 0,
        }
    }

    /// Returns the best cost seen so far.
    #[inline]
    pub fn best_cost(&self) -> Option<T> {
        self.best_cost
    }

    #[inline(always)]
    fn log_header(&self) {
        log::info!(
            "{:<9} | {:<12} | {:<7} | {:<12} | {:<14} | {:<12} | {:<8}",
            "Elapsed",
            "Expanded",
            "Depth",
            "Frontier",
            "Best Tour",
            "Pruned",
            "Gap"
        );
        log::info!("{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &BnbSolverStatistics<T>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best = match self.best_cost {
            Some(cost) => format!("{}", cost),
            None => "Inf".to_string(),
        };
        let gap = match self.best_cost.and_then(|c| optimality_gap(stats.root_lower_bound, c)) {
            Some(gap) => format!("{:.2}%", gap * 100.0),
            None => "-".to_string(),
        };

        log::info!(
            "{:<9} | {:<12} | {:<7} | {:<12} | {:<14} | {:<12} | {:<8}",
            format!("{:.1}s", elapsed),
            stats.nodes_expanded,
            self.current_depth,
            self.frontier_len,
            best,
            stats.prunings_total(),
            gap
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Self::DEFAULT_CLOCK_CHECK_MASK)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {:?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}

/// Returns `(best - bound) / best`, the root gap of the search.
fn optimality_gap<T>(root_lower_bound: T, best: T) -> Option<f64>
where
    T: ToPrimitive,
{
    let bound = root_lower_bound.to_f64()?;
    let best = best.to_f64()?;
    if best <= 0.0 || !best.is_finite() {
        return None;
    }
    Some(((best - bound) / best).max(0.0))
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, matrix: &CostMatrix<T>, stats: &BnbSolverStatistics<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_cost = stats.initial_upper_bound;
        self.current_depth = 0;
        self.frontier_len = 0;

        log::info!(
            "Branch-and-bound search over {} cities, root lower bound {}",
            matrix.num_cities(),
            stats.root_lower_bound
        );
        if let Some(cost) = self.best_cost {
            log::info!("Starting from a tour of cost {}", cost);
        }
        self.log_header();
    }

    fn on_step(&mut self, frontier_len: usize, stats: &BnbSolverStatistics<T>) {
        self.frontier_len = frontier_len;
        if (stats.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(stats);
        }
    }

    fn on_node_expanded(&mut self, node: &SearchNode<T>, _stats: &BnbSolverStatistics<T>) {
        self.current_depth = node.level();
    }

    fn on_prune(
        &mut self,
        _node: &SearchNode<T>,
        _reason: PruneReason,
        _stats: &BnbSolverStatistics<T>,
    ) {
    }

    fn on_children_enqueued(
        &mut self,
        _node: &SearchNode<T>,
        _count: usize,
        _stats: &BnbSolverStatistics<T>,
    ) {
    }

    fn on_solution_found(&mut self, tour: &Tour<T>, stats: &BnbSolverStatistics<T>) {
        self.best_cost = Some(tour.cost());
        log::debug!(
            "New incumbent #{} after {} expansions: {}",
            stats.solutions_found,
            stats.nodes_expanded,
            tour
        );
    }

    fn on_exit_search(&mut self, stats: &BnbSolverStatistics<T>) {
        self.log_line(stats);
        log::info!("{}", "-".repeat(RULE_WIDTH));
        log::info!(
            "Search finished after {} steps in {:.2?}.",
            stats.steps,
            stats.time_total
        );
    }
}
