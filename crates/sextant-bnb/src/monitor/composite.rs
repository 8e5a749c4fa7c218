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

//! Monitoring combinators for tree search
//!
//! Provides `CompositeTreeSearchMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging, limits and custom
//! instrumentation without coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    node::SearchNode,
    stats::BnbSolverStatistics,
};
use sextant_model::{matrix::CostMatrix, tour::Tour};
use sextant_search::{command::SearchCommand, num::SolverNumeric};

/// A tree search monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    /// Creates a new empty `CompositeTreeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeTreeSearchMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn TreeSearchMonitor<T> + 'a>> for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeTreeSearchMonitor<'a, T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, matrix: &CostMatrix<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(matrix, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics<T>) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_step(&mut self, frontier_len: usize, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_step(frontier_len, statistics);
        }
    }

    #[inline(always)]
    fn on_node_expanded(&mut self, node: &SearchNode<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_node_expanded(node, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        node: &SearchNode<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_prune(node, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_children_enqueued(
        &mut self,
        node: &SearchNode<T>,
        count: usize,
        statistics: &BnbSolverStatistics<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_children_enqueued(node, count, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, tour: &Tour<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(tour, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    type IntegerType = i64;

    struct Recording {
        name: &'static str,
        command: SearchCommand,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl Recording {
        fn new(
            name: &'static str,
            command: SearchCommand,
            events: &Rc<RefCell<Vec<String>>>,
        ) -> Self {
            Self {
                name,
                command,
                events: Rc::clone(events),
            }
        }

        fn record(&self, event: &str) {
            self.events
                .borrow_mut()
                .push(format!("{}:{}", self.name, event));
        }
    }

    impl TreeSearchMonitor<IntegerType> for Recording {
        fn name(&self) -> &str {
            self.name
        }
        fn on_enter_search(
            &mut self,
            _matrix: &CostMatrix<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.record("enter");
        }
        fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics<IntegerType>) {
            self.record("exit");
        }
        fn search_command(
            &mut self,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) -> SearchCommand {
            self.record("command");
            self.command.clone()
        }
        fn on_step(&mut self, _frontier_len: usize, _statistics: &BnbSolverStatistics<IntegerType>) {
            self.record("step");
        }
        fn on_node_expanded(
            &mut self,
            _node: &SearchNode<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
        }
        fn on_prune(
            &mut self,
            _node: &SearchNode<IntegerType>,
            _reason: PruneReason,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
        }
        fn on_children_enqueued(
            &mut self,
            _node: &SearchNode<IntegerType>,
            _count: usize,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
        }
        fn on_solution_found(
            &mut self,
            _tour: &Tour<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
            self.record("solution");
        }
    }

    #[test]
    fn test_events_fan_out_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(Recording::new("a", SearchCommand::Continue, &events));
        composite.add_monitor(Recording::new("b", SearchCommand::Continue, &events));
        assert_eq!(composite.len(), 2);

        let matrix = CostMatrix::from_rows(&[[0i64, 1], [1, 0]]).unwrap();
        let stats = BnbSolverStatistics::default();
        composite.on_enter_search(&matrix, &stats);
        composite.on_step(1, &stats);
        composite.on_exit_search(&stats);

        assert_eq!(
            *events.borrow(),
            vec!["a:enter", "b:enter", "a:step", "b:step", "a:exit", "b:exit"]
        );
    }

    #[test]
    fn test_search_command_short_circuits() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let monitors: Vec<Box<dyn TreeSearchMonitor<IntegerType>>> = vec![
            Box::new(Recording::new("a", SearchCommand::Continue, &events)),
            Box::new(Recording::new(
                "b",
                SearchCommand::Terminate("stop".into()),
                &events,
            )),
            Box::new(Recording::new("c", SearchCommand::Continue, &events)),
        ];
        let mut composite: CompositeTreeSearchMonitor<IntegerType> =
            monitors.into_iter().collect();

        let stats = BnbSolverStatistics::default();
        assert_eq!(
            composite.search_command(&stats),
            SearchCommand::Terminate("stop".into())
        );
        assert_eq!(*events.borrow(), vec!["a:command", "b:command"]);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeTreeSearchMonitor::<IntegerType>::with_capacity(4);
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&BnbSolverStatistics::default()),
            SearchCommand::Continue
        );
        assert_eq!(format!("{:?}", composite), "[]");
    }
}
