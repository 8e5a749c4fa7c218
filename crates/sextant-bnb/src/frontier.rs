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

//! The best-first frontier of open search nodes.
//!
//! `Frontier` is a binary max-heap. From most to least promising, nodes are
//! ordered by:
//!
//! 1. larger level (deeper nodes first, so complete tours appear early),
//! 2. smaller lower bound,
//! 3. smaller prefix cost,
//! 4. earlier insertion.
//!
//! Every push is stamped with a strictly increasing sequence number, so no
//! two entries ever compare equal and nodes that tie on the first three keys
//! are all kept. Costs are compared with a total order, so floating point
//! bounds are valid heap keys.

use crate::node::SearchNode;
use sextant_search::num::SolverNumeric;
use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Clone, Debug)]
struct FrontierEntry<T> {
    sequence: u64,
    node: SearchNode<T>,
}

impl<T> PartialEq for FrontierEntry<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> where T: SolverNumeric {}

impl<T> PartialOrd for FrontierEntry<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // `Greater` pops first.
        self.node
            .level()
            .cmp(&other.node.level())
            .then_with(|| {
                other
                    .node
                    .lower_bound()
                    .total_cmp_val(&self.node.lower_bound())
            })
            .then_with(|| {
                other
                    .node
                    .prefix_cost()
                    .total_cmp_val(&self.node.prefix_cost())
            })
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A priority queue of open search nodes, most promising first.
#[derive(Clone, Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_sequence: u64,
}

impl<T> Default for Frontier<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T>
where
    T: SolverNumeric,
{
    /// Creates a new, empty `Frontier`.
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Creates a `Frontier` with room for `num_cities²` nodes.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(num_cities.saturating_mul(num_cities)),
            next_sequence: 0,
        }
    }

    /// Ensures room for at least `num_cities²` nodes.
    #[inline]
    pub fn ensure_capacity(&mut self, num_cities: usize) {
        let capacity = num_cities.saturating_mul(num_cities);
        if self.heap.capacity() < capacity {
            self.heap.reserve(capacity - self.heap.len());
        }
    }

    /// Inserts `node`.
    #[inline]
    pub fn push(&mut self, node: SearchNode<T>) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.heap.push(FrontierEntry { sequence, node });
    }

    /// Removes and returns the most promising node.
    #[inline]
    pub fn pop(&mut self) -> Option<SearchNode<T>> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Returns the most promising node without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&SearchNode<T>> {
        self.heap.peek().map(|entry| &entry.node)
    }

    /// Returns the number of open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no nodes are open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pushes since the last reset.
    #[inline]
    pub fn total_pushed(&self) -> u64 {
        self.next_sequence
    }

    /// Clears all nodes, but keeps the allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }

    /// Returns the allocated heap slot memory in bytes, excluding the
    /// per-node visited sets and spilled tours.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.heap.capacity() * std::mem::size_of::<FrontierEntry<T>>()
    }
}

impl<T> std::fmt::Display for Frontier<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frontier(len: {}", self.heap.len())?;
        if let Some(best) = self.peek() {
            write!(f, ", best: {}", best)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::{MinOutgoingEdgeBound, PrefixCostBound};
    use sextant_model::{index::CityIndex, matrix::CostMatrix};

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn reference_matrix() -> CostMatrix<i64> {
        CostMatrix::from_rows(&[
            [0, 10, 15, 20],
            [10, 0, 35, 25],
            [15, 35, 0, 30],
            [20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_deeper_nodes_come_first() {
        let m = reference_matrix();
        let bound = MinOutgoingEdgeBound::new();
        let root = SearchNode::root(&m, &bound);
        let deep = root.child(ci(2), &m, &bound).child(ci(1), &m, &bound);
        let shallow = root.child(ci(1), &m, &bound);
        assert!(deep.lower_bound() > shallow.lower_bound());

        let mut frontier = Frontier::new();
        frontier.push(root.clone());
        frontier.push(shallow.clone());
        frontier.push(deep.clone());

        assert_eq!(frontier.pop(), Some(deep));
        assert_eq!(frontier.pop(), Some(shallow));
        assert_eq!(frontier.pop(), Some(root));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_smaller_bound_first_within_a_level() {
        let m = reference_matrix();
        let bound = MinOutgoingEdgeBound::new();
        let root = SearchNode::root(&m, &bound);

        let mut frontier = Frontier::new();
        for city in [3, 2, 1] {
            frontier.push(root.child(ci(city), &m, &bound));
        }

        let mut bounds = Vec::new();
        while let Some(node) = frontier.pop() {
            bounds.push(node.lower_bound());
        }
        let mut sorted = bounds.clone();
        sorted.sort();
        assert_eq!(bounds, sorted);
    }

    #[test]
    fn test_smaller_prefix_breaks_bound_ties() {
        // [0, 1]: prefix 1, remainder 5 + 5 + 5.
        // [0, 2]: prefix 2, remainder 5 + 5 + 4.
        let m = CostMatrix::from_rows(&[
            [0i64, 1, 2, 9],
            [5, 0, 5, 5],
            [5, 5, 0, 5],
            [5, 4, 5, 0],
        ])
        .unwrap();
        let bound = MinOutgoingEdgeBound::new();
        let root = SearchNode::root(&m, &bound);
        let a = root.child(ci(1), &m, &bound);
        let b = root.child(ci(2), &m, &bound);
        assert_eq!(a.lower_bound(), b.lower_bound());
        assert!(a.prefix_cost() < b.prefix_cost());

        let mut frontier = Frontier::new();
        frontier.push(b.clone());
        frontier.push(a.clone());
        assert_eq!(frontier.pop(), Some(a));
        assert_eq!(frontier.pop(), Some(b));
    }

    #[test]
    fn test_full_ties_are_all_kept_in_insertion_order() {
        let m = CostMatrix::from_rows(&[[0i64, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();
        let bound = PrefixCostBound::new();
        let root = SearchNode::root(&m, &bound);
        let first = root.child(ci(2), &m, &bound);
        let second = root.child(ci(1), &m, &bound);

        let mut frontier = Frontier::new();
        frontier.push(first.clone());
        frontier.push(second.clone());
        frontier.push(first.clone());
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.total_pushed(), 3);

        assert_eq!(frontier.pop(), Some(first.clone()));
        assert_eq!(frontier.pop(), Some(second));
        assert_eq!(frontier.pop(), Some(first));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_float_bounds_are_ordered() {
        let m = CostMatrix::from_rows(&[[0.0, 1.5, 0.5], [1.0, 0.0, 2.0], [0.25, 3.0, 0.0]])
            .unwrap();
        let bound = PrefixCostBound::new();
        let root = SearchNode::root(&m, &bound);

        let mut frontier = Frontier::new();
        frontier.push(root.child(ci(1), &m, &bound));
        frontier.push(root.child(ci(2), &m, &bound));
        assert_eq!(frontier.peek().map(|n| n.last_city()), Some(ci(2)));
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let m = reference_matrix();
        let bound = MinOutgoingEdgeBound::new();
        let mut frontier = Frontier::preallocated(4);
        assert!(frontier.allocated_memory_bytes() > 0);
        let before = frontier.allocated_memory_bytes();

        frontier.push(SearchNode::root(&m, &bound));
        frontier.reset();
        assert!(frontier.is_empty());
        assert_eq!(frontier.total_pushed(), 0);
        assert_eq!(frontier.allocated_memory_bytes(), before);

        frontier.ensure_capacity(8);
        assert!(frontier.allocated_memory_bytes() >= 64 * std::mem::size_of::<FrontierEntry<i64>>());
    }

    #[test]
    fn test_display() {
        let m = reference_matrix();
        let mut frontier = Frontier::new();
        assert_eq!(format!("{}", frontier), "Frontier(len: 0)");
        frontier.push(SearchNode::root(&m, &MinOutgoingEdgeBound::new()));
        assert_eq!(
            format!("{}", frontier),
            "Frontier(len: 1, best: SearchNode([0], prefix: 0, bound: 55))"
        );
    }
}
