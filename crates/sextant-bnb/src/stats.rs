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

use sextant_core::num::{constants::Zero, ops::saturating_arithmetic::SaturatingAddVal};
use std::time::Duration;

/// Statistics collected during the execution of the Sextant-BnB solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbSolverStatistics<T> {
    /// Total iterations of the main loop.
    pub steps: u64,
    /// Nodes popped from the frontier and expanded into children.
    pub nodes_expanded: u64,
    /// Child nodes constructed.
    pub nodes_generated: u64,
    /// Nodes inserted into the frontier, the root included.
    pub nodes_enqueued: u64,
    /// Popped nodes discarded because the incumbent dominates their bound.
    pub prunings_on_pop: u64,
    /// Children discarded before insertion for the same reason.
    pub prunings_on_insertion: u64,
    /// Number of times the incumbent was improved.
    pub solutions_found: u64,
    /// The deepest level of an expanded node.
    pub max_depth: u64,
    /// The largest number of nodes held by the frontier at once.
    pub peak_frontier_size: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
    /// The lower bound at the root node. Used to calculate the optimality gap.
    pub root_lower_bound: T,
    /// Cost of the tour the search was started from, if any.
    pub initial_upper_bound: Option<T>,
}

impl<T> Default for BnbSolverStatistics<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self {
            steps: 0,
            nodes_expanded: 0,
            nodes_generated: 0,
            nodes_enqueued: 0,
            prunings_on_pop: 0,
            prunings_on_insertion: 0,
            solutions_found: 0,
            max_depth: 0,
            peak_frontier_size: 0,
            time_total: Duration::ZERO,
            root_lower_bound: T::ZERO,
            initial_upper_bound: None,
        }
    }
}

impl<T> BnbSolverStatistics<T> {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add_val(1);
    }

    #[inline]
    pub fn on_node_expanded(&mut self, level: u64) {
        self.nodes_expanded = self.nodes_expanded.saturating_add_val(1);
        self.max_depth = self.max_depth.max(level);
    }

    #[inline]
    pub fn on_node_generated(&mut self) {
        self.nodes_generated = self.nodes_generated.saturating_add_val(1);
    }

    /// Records an insertion and the frontier size right after it.
    #[inline]
    pub fn on_node_enqueued(&mut self, frontier_len: u64) {
        self.nodes_enqueued = self.nodes_enqueued.saturating_add_val(1);
        self.peak_frontier_size = self.peak_frontier_size.max(frontier_len);
    }

    #[inline]
    pub fn on_pruning_on_pop(&mut self) {
        self.prunings_on_pop = self.prunings_on_pop.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_on_insertion(&mut self) {
        self.prunings_on_insertion = self.prunings_on_insertion.saturating_add_val(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add_val(1);
    }

    /// Returns all prunings, on pop and on insertion.
    #[inline]
    pub fn prunings_total(&self) -> u64 {
        self.prunings_on_pop
            .saturating_add_val(self.prunings_on_insertion)
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: T) {
        self.root_lower_bound = bound;
    }

    #[inline]
    pub fn set_initial_upper_bound(&mut self, cost: T) {
        self.initial_upper_bound = Some(cost);
    }
}

impl<T> std::fmt::Display for BnbSolverStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sextant-BnB Solver Statistics:")?;
        writeln!(f, "  Steps:                {}", self.steps)?;
        writeln!(f, "  Nodes expanded:       {}", self.nodes_expanded)?;
        writeln!(f, "  Nodes generated:      {}", self.nodes_generated)?;
        writeln!(f, "  Nodes enqueued:       {}", self.nodes_enqueued)?;
        writeln!(f, "  Prunings (pop):       {}", self.prunings_on_pop)?;
        writeln!(f, "  Prunings (insertion): {}", self.prunings_on_insertion)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Peak frontier size:   {}", self.peak_frontier_size)?;
        writeln!(f, "  Root Lower Bound:     {}", self.root_lower_bound)?;
        match &self.initial_upper_bound {
            Some(cost) => writeln!(f, "  Initial Upper Bound:  {}", cost)?,
            None => writeln!(f, "  Initial Upper Bound:  -")?,
        }
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_maxima() {
        let mut stats = BnbSolverStatistics::<i64>::default();
        stats.on_step();
        stats.on_node_expanded(2);
        stats.on_node_expanded(1);
        stats.on_node_generated();
        stats.on_node_enqueued(5);
        stats.on_node_enqueued(3);
        stats.on_pruning_on_pop();
        stats.on_pruning_on_insertion();
        stats.on_pruning_on_insertion();
        stats.on_solution_found();

        assert_eq!(stats.steps, 1);
        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.nodes_generated, 1);
        assert_eq!(stats.nodes_enqueued, 2);
        assert_eq!(stats.peak_frontier_size, 5);
        assert_eq!(stats.prunings_total(), 3);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbSolverStatistics::<i64> {
            steps: u64::MAX,
            ..Default::default()
        };
        stats.on_step();
        assert_eq!(stats.steps, u64::MAX);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let mut stats = BnbSolverStatistics::<i64>::default();
        stats.set_root_lower_bound(55);
        stats.set_total_time(Duration::from_millis(1500));
        let text = format!("{}", stats);
        assert!(text.starts_with("Sextant-BnB Solver Statistics:"));
        assert!(text.contains("Root Lower Bound:     55"));
        assert!(text.contains("Initial Upper Bound:  -"));
        assert!(text.contains("Total time:           1.50s"));
        assert_eq!(text.lines().count(), 13);

        stats.set_initial_upper_bound(80);
        assert!(format!("{}", stats).contains("Initial Upper Bound:  80"));
    }
}
