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

//! Best-first branch-and-bound for the travelling salesman problem.
//!
//! This module implements the search engine. A search session owns the
//! per-run state (incumbent, statistics, timing) and repeatedly pulls the most
//! promising node from the frontier, discards it if the incumbent dominates
//! its bound, and otherwise expands it into one child per unvisited city.
//! Complete children are priced exactly and offered to the incumbent; the
//! others go back into the frontier unless they are dominated already. When
//! the frontier runs dry the incumbent is optimal.
//!
//! The `BnbSolver` keeps its frontier allocation between solves and resets
//! the logical state after each one. Monitors may stop a run early, in which
//! case the incumbent (if any) is returned as a feasible, unproven tour.
//! Pruning can be switched off for verification; the result is the same, only
//! the amount of work grows.

use crate::{
    bound::BoundEstimator,
    frontier::Frontier,
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    result::BnbSolverOutcome,
    stats::BnbSolverStatistics,
};
use sextant_model::{matrix::CostMatrix, tour::Tour};
use sextant_search::{command::SearchCommand, num::SolverNumeric, result::TerminationReason};

/// A best-first branch-and-bound TSP solver.
///
/// Note that this is just the execution engine; the lower bounds are supplied
/// by a `BoundEstimator` and the run is observed and limited by a
/// `TreeSearchMonitor`.
#[derive(Clone, Debug)]
pub struct BnbSolver<T>
where
    T: SolverNumeric,
{
    frontier: Frontier<T>,
    pruning: bool,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: SolverNumeric,
{
    /// Create a new solver instance with pruning enabled.
    #[inline]
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
            pruning: true,
        }
    }

    /// Create a new solver instance with a frontier preallocated for
    /// `num_cities` cities.
    ///
    /// # Note
    ///
    /// The solver grows the frontier on demand anyway; preallocation only
    /// moves the first allocations to construction time.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            frontier: Frontier::preallocated(num_cities),
            pruning: true,
        }
    }

    /// Enables or disables bound pruning.
    #[inline]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Returns `true` if bound pruning is enabled.
    #[inline]
    pub fn is_pruning_enabled(&self) -> bool {
        self.pruning
    }

    /// Returns the memory held by the frontier between solves.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.frontier.allocated_memory_bytes()
    }

    /// Solve `matrix` using the given lower bound estimator and monitor.
    #[inline]
    pub fn solve<E, S>(
        &mut self,
        matrix: &CostMatrix<T>,
        estimator: &E,
        monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        E: BoundEstimator<T> + ?Sized,
        S: TreeSearchMonitor<T>,
    {
        self.solve_internal(matrix, estimator, monitor, Incumbent::new())
    }

    /// Solve `matrix`, starting from a known tour.
    ///
    /// The tour is the initial incumbent: everything its cost dominates is
    /// pruned from the start, and it is returned as optimal if nothing
    /// strictly cheaper exists.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `incumbent` is not a Hamiltonian cycle of
    /// `matrix`.
    #[inline]
    pub fn solve_with_incumbent<E, S>(
        &mut self,
        matrix: &CostMatrix<T>,
        estimator: &E,
        monitor: S,
        incumbent: Tour<T>,
    ) -> BnbSolverOutcome<T>
    where
        E: BoundEstimator<T> + ?Sized,
        S: TreeSearchMonitor<T>,
    {
        debug_assert!(
            incumbent.is_hamiltonian_cycle(matrix.num_cities()),
            "called `BnbSolver::solve_with_incumbent` with a tour that is not a Hamiltonian cycle over {} cities: {}",
            matrix.num_cities(),
            incumbent
        );

        self.solve_internal(matrix, estimator, monitor, Incumbent::with_tour(incumbent))
    }

    #[inline(always)]
    fn solve_internal<E, S>(
        &mut self,
        matrix: &CostMatrix<T>,
        estimator: &E,
        mut monitor: S,
        incumbent: Incumbent<T>,
    ) -> BnbSolverOutcome<T>
    where
        E: BoundEstimator<T> + ?Sized,
        S: TreeSearchMonitor<T>,
    {
        self.frontier.ensure_capacity(matrix.num_cities());

        let session = BnbSolverSearchSession::new(
            &mut self.frontier,
            self.pruning,
            matrix,
            estimator,
            &mut monitor,
            incumbent,
        );
        let res = session.run();
        self.reset();
        res
    }

    /// Clears the frontier without releasing its memory.
    #[inline]
    fn reset(&mut self) {
        self.frontier.reset();
    }
}

/// A search session for the solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, T, E, S>
where
    T: SolverNumeric,
    E: ?Sized,
{
    frontier: &'a mut Frontier<T>,
    pruning: bool,
    matrix: &'a CostMatrix<T>,
    estimator: &'a E,
    monitor: &'a mut S,
    incumbent: Incumbent<T>,
    stats: BnbSolverStatistics<T>,
    start_time: std::time::Instant,
}

impl<'a, T, E, S> std::fmt::Display for BnbSolverSearchSession<'a, T, E, S>
where
    T: SolverNumeric,
    E: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchSession(frontier: {}, incumbent: {}, pruning: {})",
            self.frontier, self.incumbent, self.pruning
        )
    }
}

impl<'a, T, E, S> BnbSolverSearchSession<'a, T, E, S>
where
    T: SolverNumeric,
    E: BoundEstimator<T> + ?Sized,
    S: TreeSearchMonitor<T>,
{
    /// Create a new search session.
    #[inline]
    fn new(
        frontier: &'a mut Frontier<T>,
        pruning: bool,
        matrix: &'a CostMatrix<T>,
        estimator: &'a E,
        monitor: &'a mut S,
        incumbent: Incumbent<T>,
    ) -> Self {
        Self {
            frontier,
            pruning,
            matrix,
            estimator,
            monitor,
            incumbent,
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    #[inline]
    fn run(mut self) -> BnbSolverOutcome<T> {
        debug_assert!(
            self.frontier.is_empty(),
            "called `BnbSolverSearchSession::run` with a non-empty frontier: the len is {}",
            self.frontier.len()
        );

        let root = SearchNode::root(self.matrix, self.estimator);
        self.stats.set_root_lower_bound(root.lower_bound());
        if self.incumbent.has_tour() {
            self.stats.set_initial_upper_bound(self.incumbent.cost());
        }
        self.monitor.on_enter_search(self.matrix, &self.stats);

        // The root is never pruned; a single city is already a closed tour.
        if root.is_complete() {
            self.handle_complete(&root);
        } else {
            self.enqueue(root);
        }

        let termination_reason = loop {
            self.monitor.on_step(self.frontier.len(), &self.stats);
            self.stats.on_step();

            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                break TerminationReason::Aborted(msg);
            }

            let Some(node) = self.frontier.pop() else {
                break TerminationReason::OptimalityProven;
            };

            if self.pruning && self.incumbent.dominates(node.lower_bound()) {
                self.stats.on_pruning_on_pop();
                self.monitor
                    .on_prune(&node, PruneReason::BoundDominated, &self.stats);
                continue;
            }

            self.expand(&node);
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(termination_reason)
    }

    /// Builds one child per unvisited city of `node`.
    #[inline]
    fn expand(&mut self, node: &SearchNode<T>) {
        self.stats.on_node_expanded(node.level() as u64);
        self.monitor.on_node_expanded(node, &self.stats);

        let mut enqueued = 0usize;
        for city in node.unvisited() {
            let child = node.child(city, self.matrix, self.estimator);
            self.stats.on_node_generated();

            if child.is_complete() {
                self.handle_complete(&child);
                continue;
            }

            if self.pruning && self.incumbent.dominates(child.lower_bound()) {
                self.stats.on_pruning_on_insertion();
                self.monitor
                    .on_prune(&child, PruneReason::DominatedOnInsertion, &self.stats);
                continue;
            }

            self.enqueue(child);
            enqueued += 1;
        }

        self.monitor
            .on_children_enqueued(node, enqueued, &self.stats);
    }

    /// Offers a complete node's tour to the incumbent.
    #[inline]
    fn handle_complete(&mut self, node: &SearchNode<T>) {
        if !self.incumbent.improves(node.lower_bound()) {
            return;
        }

        let tour = node.to_tour();
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&tour, &self.stats);
        log::trace!("incumbent improved: {}", tour);
        self.incumbent.try_install(tour);
    }

    #[inline]
    fn enqueue(&mut self, node: SearchNode<T>) {
        self.frontier.push(node);
        self.stats.on_node_enqueued(self.frontier.len() as u64);
    }

    /// Finalize the solver result based on the incumbent
    /// and the termination reason.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize_result(self, reason: TerminationReason) -> BnbSolverOutcome<T> {
        match reason {
            TerminationReason::OptimalityProven => {
                // Every complete node is offered to the incumbent and an empty
                // incumbent dominates nothing, so an exhausted search has a tour.
                let tour = self
                    .incumbent
                    .into_tour()
                    .expect("expected an incumbent tour when termination is OptimalityProven");
                BnbSolverOutcome::optimal(tour, self.stats)
            }
            TerminationReason::Aborted(msg) => {
                BnbSolverOutcome::aborted(self.incumbent.into_tour(), msg, self.stats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bound::{MinOutgoingEdgeBound, PrefixCostBound},
        monitor::{
            interrupt::InterruptMonitor, no_op::NoOperationMonitor, node_limit::NodeLimitMonitor,
            solution::SolutionLimitMonitor,
        },
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use sextant_model::{geometry::Point, index::CityIndex};
    use sextant_search::{exhaustive::ExhaustiveSolver, result::SolverResult};
    use std::sync::atomic::AtomicBool;

    type IntegerType = i64;

    fn reference_matrix() -> CostMatrix<IntegerType> {
        CostMatrix::from_rows(&[
            [0, 10, 15, 20],
            [10, 0, 35, 25],
            [15, 35, 0, 30],
            [20, 25, 30, 0],
        ])
        .unwrap()
    }

    fn random_matrix(rng: &mut StdRng, n: usize, symmetric: bool) -> CostMatrix<IntegerType> {
        let mut rows = vec![vec![0; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j || (symmetric && j < i) {
                    continue;
                }
                let cost = rng.random_range(1..100);
                rows[i][j] = cost;
                if symmetric {
                    rows[j][i] = cost;
                }
            }
        }
        CostMatrix::from_rows(&rows).unwrap()
    }

    fn tour_of(ids: &[usize]) -> Tour<IntegerType> {
        Tour::from_cities(
            &reference_matrix(),
            ids.iter().copied().map(CityIndex::new).collect(),
        )
    }

    fn solve(matrix: &CostMatrix<IntegerType>) -> BnbSolverOutcome<IntegerType> {
        BnbSolver::new().solve(
            matrix,
            &MinOutgoingEdgeBound::new(),
            NoOperationMonitor::new(),
        )
    }

    #[test]
    fn test_reference_instance() {
        let outcome = solve(&reference_matrix());
        assert!(outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );

        let tour = outcome.tour().unwrap();
        assert_eq!(tour.cost(), 80);
        let raw = tour.as_raw();
        assert!(raw == vec![0, 1, 3, 2, 0] || raw == vec![0, 2, 3, 1, 0], "{:?}", raw);
        assert_eq!(outcome.statistics().root_lower_bound, 55);
        assert_eq!(outcome.statistics().initial_upper_bound, None);
    }

    #[test]
    fn test_single_city() {
        let m = CostMatrix::from_rows(&[[0i64]]).unwrap();
        let outcome = solve(&m);
        assert!(outcome.is_optimal());
        let tour = outcome.into_tour().unwrap();
        assert_eq!(tour.as_raw(), vec![0, 0]);
        assert_eq!(tour.cost(), 0);
    }

    #[test]
    fn test_two_cities() {
        let m = CostMatrix::from_rows(&[[0i64, 5], [5, 0]]).unwrap();
        let tour = solve(&m).into_tour().unwrap();
        assert_eq!(tour.as_raw(), vec![0, 1, 0]);
        assert_eq!(tour.cost(), 10);
    }

    #[test]
    fn test_matches_exhaustive_on_random_instances() {
        let mut rng = StdRng::seed_from_u64(0x7E57);
        let mut solver = BnbSolver::preallocated(8);
        let bound = MinOutgoingEdgeBound::new();

        for n in 1..=8 {
            for trial in 0..6 {
                let m = random_matrix(&mut rng, n, trial % 2 == 0);
                let expected = ExhaustiveSolver::new().solve(&m).cost();
                let outcome = solver.solve(&m, &bound, NoOperationMonitor::new());

                assert!(outcome.is_optimal());
                let tour = outcome.tour().unwrap();
                assert_eq!(tour.cost(), expected, "n = {}, trial = {}", n, trial);
                assert!(tour.is_hamiltonian_cycle(n));
                assert_eq!(m.path_cost(tour.cities()), tour.cost());
            }
        }
    }

    #[test]
    fn test_matches_exhaustive_on_euclidean_instances() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=7 {
            let points: Vec<Point> = (0..n)
                .map(|_| {
                    Point::new(
                        rng.random_range(-1000.0..1000.0),
                        rng.random_range(-1000.0..1000.0),
                    )
                })
                .collect();
            let m = CostMatrix::from_points(&points).unwrap();

            let expected = ExhaustiveSolver::new().solve(&m).cost();
            let outcome = BnbSolver::new().solve(&m, &MinOutgoingEdgeBound, NoOperationMonitor::new());
            let cost = outcome.cost().unwrap();
            assert!((cost - expected).abs() < 1e-6, "{} vs {}", cost, expected);
        }
    }

    #[test]
    fn test_disabling_pruning_keeps_the_optimum() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 2..=7 {
            let m = random_matrix(&mut rng, n, false);

            let pruned = solve(&m);
            let full = BnbSolver::new().with_pruning(false).solve(
                &m,
                &MinOutgoingEdgeBound::new(),
                NoOperationMonitor::new(),
            );

            assert!(full.is_optimal());
            assert_eq!(pruned.cost(), full.cost());
            assert_eq!(full.statistics().prunings_total(), 0);
            assert!(full.statistics().nodes_expanded >= pruned.statistics().nodes_expanded);
        }
    }

    #[test]
    fn test_weaker_bound_same_optimum() {
        let mut rng = StdRng::seed_from_u64(5);
        let m = random_matrix(&mut rng, 7, true);

        let strong = solve(&m);
        let weak = BnbSolver::new().solve(&m, &PrefixCostBound::new(), NoOperationMonitor::new());
        assert_eq!(strong.cost(), weak.cost());
    }

    #[test]
    fn test_dyn_estimator() {
        let estimator: Box<dyn BoundEstimator<IntegerType>> = Box::new(MinOutgoingEdgeBound);
        let outcome = BnbSolver::new().solve(
            &reference_matrix(),
            estimator.as_ref(),
            NoOperationMonitor::new(),
        );
        assert_eq!(outcome.cost(), Some(80));
    }

    #[test]
    fn test_statistics_coherence_after_solve() {
        let mut rng = StdRng::seed_from_u64(1234);
        let m = random_matrix(&mut rng, 8, true);
        let outcome = solve(&m);
        let stats = outcome.statistics();

        // Every enqueued node is popped exactly once, then one final empty pop.
        assert_eq!(stats.nodes_expanded + stats.prunings_on_pop, stats.nodes_enqueued);
        assert_eq!(stats.steps, stats.nodes_enqueued + 1);
        assert!(stats.solutions_found >= 1);
        assert!(stats.max_depth <= 6);
        assert!(stats.peak_frontier_size <= stats.nodes_enqueued);
        assert!(stats.root_lower_bound <= outcome.cost().unwrap());
    }

    #[test]
    fn test_solver_is_reusable_and_reset() {
        let mut solver = BnbSolver::new();
        let bound = MinOutgoingEdgeBound::new();
        let m = reference_matrix();

        let first = solver.solve(&m, &bound, NoOperationMonitor::new());
        let memory = solver.allocated_memory_bytes();
        let second = solver.solve(&m, &bound, NoOperationMonitor::new());

        assert_eq!(first.tour(), second.tour());
        assert_eq!(first.statistics().steps, second.statistics().steps);
        assert_eq!(solver.allocated_memory_bytes(), memory);
        assert!(solver.frontier.is_empty());
    }

    #[test]
    fn test_node_limit_returns_incumbent_as_feasible() {
        let mut rng = StdRng::seed_from_u64(77);
        let m = random_matrix(&mut rng, 8, true);

        // Depth-first tie-breaking reaches a complete tour within n - 1 expansions.
        let outcome = BnbSolver::new().solve(
            &m,
            &MinOutgoingEdgeBound::new(),
            NodeLimitMonitor::new(7),
        );

        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "node limit reached"),
            TerminationReason::OptimalityProven => {
                // Tiny search trees may finish before the budget runs out.
                assert!(outcome.statistics().nodes_expanded < 7);
            }
        }
        let tour = outcome.tour().unwrap();
        assert!(tour.is_hamiltonian_cycle(8));
        assert_eq!(m.path_cost(tour.cities()), tour.cost());
    }

    #[test]
    fn test_solution_limit_aborts_with_feasible_tour() {
        let mut rng = StdRng::seed_from_u64(2024);
        let m = random_matrix(&mut rng, 8, false);
        let outcome = BnbSolver::new().solve(
            &m,
            &MinOutgoingEdgeBound::new(),
            SolutionLimitMonitor::new(1),
        );

        assert!(matches!(outcome.result(), SolverResult::Feasible(_)));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("solution limit reached".to_string())
        );
        assert_eq!(outcome.statistics().solutions_found, 1);
    }

    #[test]
    fn test_interrupt_before_any_tour_is_unknown() {
        let flag = AtomicBool::new(true);
        let outcome = BnbSolver::new().solve(
            &reference_matrix(),
            &MinOutgoingEdgeBound::new(),
            InterruptMonitor::new(&flag),
        );
        assert_eq!(outcome.result(), &SolverResult::Unknown);
        assert_eq!(outcome.statistics().steps, 1);
        assert_eq!(outcome.statistics().nodes_expanded, 0);
    }

    #[test]
    fn test_warm_start_with_optimal_tour_is_kept() {
        let warm = tour_of(&[0, 2, 3, 1, 0]);
        assert_eq!(warm.cost(), 80);

        let outcome = BnbSolver::new().solve_with_incumbent(
            &reference_matrix(),
            &MinOutgoingEdgeBound::new(),
            NoOperationMonitor::new(),
            warm.clone(),
        );

        assert!(outcome.is_optimal());
        assert_eq!(outcome.tour(), Some(&warm));
        assert_eq!(outcome.statistics().solutions_found, 0);
        assert_eq!(outcome.statistics().initial_upper_bound, Some(80));
    }

    #[test]
    fn test_warm_start_with_worse_tour_is_improved() {
        let warm = tour_of(&[0, 1, 2, 3, 0]);
        assert_eq!(warm.cost(), 95);

        let outcome = BnbSolver::new().solve_with_incumbent(
            &reference_matrix(),
            &MinOutgoingEdgeBound::new(),
            NoOperationMonitor::new(),
            warm,
        );
        assert_eq!(outcome.cost(), Some(80));
        assert!(outcome.statistics().solutions_found >= 1);
    }

    #[test]
    fn test_warm_start_prunes_more() {
        let mut rng = StdRng::seed_from_u64(31337);
        let m = random_matrix(&mut rng, 8, true);
        let cold = solve(&m);
        let optimum = cold.tour().unwrap().clone();

        let warm = BnbSolver::new().solve_with_incumbent(
            &m,
            &MinOutgoingEdgeBound::new(),
            NoOperationMonitor::new(),
            optimum,
        );
        assert_eq!(warm.cost(), cold.cost());
        assert!(warm.statistics().nodes_expanded <= cold.statistics().nodes_expanded);
    }

    #[derive(Default)]
    struct CountingMonitor {
        entered: bool,
        exited: bool,
        expanded: u64,
        pruned: u64,
        enqueued: usize,
        solutions: Vec<IntegerType>,
    }

    impl TreeSearchMonitor<IntegerType> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_search(
            &mut self,
            _matrix: &CostMatrix<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.entered = true;
        }
        fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics<IntegerType>) {
            self.exited = true;
        }
        fn on_step(&mut self, _frontier_len: usize, _statistics: &BnbSolverStatistics<IntegerType>) {}
        fn on_node_expanded(
            &mut self,
            _node: &SearchNode<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.expanded += 1;
        }
        fn on_prune(
            &mut self,
            _node: &SearchNode<IntegerType>,
            _reason: PruneReason,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.pruned += 1;
        }
        fn on_children_enqueued(
            &mut self,
            _node: &SearchNode<IntegerType>,
            count: usize,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.enqueued += count;
        }
        fn on_solution_found(
            &mut self,
            tour: &Tour<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.solutions.push(tour.cost());
        }
    }

    #[test]
    fn test_monitor_sees_every_event() {
        let mut rng = StdRng::seed_from_u64(8);
        let m = random_matrix(&mut rng, 7, true);
        let mut monitor = CountingMonitor::default();

        let outcome = BnbSolver::new().solve(&m, &MinOutgoingEdgeBound::new(), &mut monitor);
        let stats = outcome.statistics();

        assert!(monitor.entered && monitor.exited);
        assert_eq!(monitor.expanded, stats.nodes_expanded);
        assert_eq!(monitor.pruned, stats.prunings_total());
        assert_eq!(monitor.enqueued as u64 + 1, stats.nodes_enqueued);
        assert_eq!(monitor.solutions.len() as u64, stats.solutions_found);

        // Incumbent improvements are strictly decreasing and end at the optimum.
        assert!(monitor.solutions.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(monitor.solutions.last().copied(), outcome.cost());
    }
}
