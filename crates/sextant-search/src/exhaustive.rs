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

//! # Exhaustive Search
//!
//! The reference solver: fix city 0 at the front, price every ordering of
//! the remaining cities and keep the cheapest. It visits `(n - 1)!` tours,
//! which is only reasonable for small instances, but it has no bound or
//! pruning logic that could be wrong. The exact engines are tested against
//! it.
//!
//! Orderings come from `Permutations`, a lazy iterator over the
//! lexicographic successors of a sorted sequence. It holds one working
//! buffer and derives each permutation from the previous one in place, so
//! memory use stays linear regardless of how many permutations exist.

use crate::num::SolverNumeric;
use sextant_model::{
    index::{CityIndex, START_CITY},
    matrix::CostMatrix,
    tour::Tour,
};

/// A lazy iterator over all permutations of a sequence in lexicographic
/// order.
///
/// The sequence is sorted on construction, so the first item is the
/// smallest arrangement. Repeated elements yield each distinct arrangement
/// once. An empty sequence has exactly one permutation: itself.
#[derive(Clone, Debug)]
pub struct Permutations<T> {
    items: Vec<T>,
    exhausted: bool,
    started: bool,
}

impl<T> Permutations<T>
where
    T: Ord + Clone,
{
    /// Creates an iterator over the permutations of `items`.
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        Self {
            items,
            exhausted: false,
            started: false,
        }
    }

    /// Rewinds the iterator to the first permutation.
    pub fn reset(&mut self) {
        self.items.sort();
        self.exhausted = false;
        self.started = false;
    }

    /// Returns the permutation most recently yielded, or the first one if
    /// iteration has not started.
    #[inline]
    pub fn current(&self) -> &[T] {
        &self.items
    }

    /// Rearranges `items` into its lexicographic successor.
    ///
    /// Returns `false`, leaving `items` sorted ascending, when `items` was
    /// already the last permutation.
    pub fn advance(items: &mut [T]) -> bool {
        let len = items.len();
        if len < 2 {
            return false;
        }

        let mut pivot = len - 1;
        while pivot > 0 && items[pivot - 1] >= items[pivot] {
            pivot -= 1;
        }

        if pivot == 0 {
            items.reverse();
            return false;
        }

        let mut successor = len - 1;
        while items[successor] <= items[pivot - 1] {
            successor -= 1;
        }

        items.swap(pivot - 1, successor);
        items[pivot..].reverse();
        true
    }
}

impl<T> Iterator for Permutations<T>
where
    T: Ord + Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
        } else if !Self::advance(&mut self.items) {
            self.exhausted = true;
            return None;
        }

        Some(self.items.clone())
    }
}

impl<T> std::iter::FusedIterator for Permutations<T> where T: Ord + Clone {}

/// Solves the TSP by pricing every tour that starts at city 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSolver {
    tours_evaluated: u64,
}

impl ExhaustiveSolver {
    /// Creates a new exhaustive solver.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of complete tours priced by the last `solve`.
    #[inline]
    pub fn tours_evaluated(&self) -> u64 {
        self.tours_evaluated
    }

    /// Returns an optimal tour for `matrix`.
    ///
    /// Among tours of equal cost the lexicographically first visiting order
    /// is returned.
    pub fn solve<T>(&mut self, matrix: &CostMatrix<T>) -> Tour<T>
    where
        T: SolverNumeric,
    {
        let n = matrix.num_cities();
        self.tours_evaluated = 0;

        let others: Vec<CityIndex> = CityIndex::range(n).skip(1).collect();
        let mut best: Option<(T, Vec<CityIndex>)> = None;

        for order in Permutations::new(others) {
            let cost = closed_cost(matrix, &order);
            self.tours_evaluated = self.tours_evaluated.saturating_add(1);

            if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
                best = Some((cost, order));
            }
        }

        // `Permutations` always yields at least one item.
        let (cost, order) = best.unwrap_or((T::ZERO, Vec::new()));
        let mut cities = Vec::with_capacity(n + 1);
        cities.push(START_CITY);
        cities.extend(order);
        cities.push(START_CITY);

        Tour::new(cost, cities)
    }
}

fn closed_cost<T>(matrix: &CostMatrix<T>, order: &[CityIndex]) -> T
where
    T: SolverNumeric,
{
    let mut cost = T::ZERO;
    let mut previous = START_CITY;
    for &city in order {
        cost = cost.saturating_add_val(matrix.cost(previous, city));
        previous = city;
    }

    if previous != START_CITY {
        cost = cost.saturating_add_val(matrix.cost(previous, START_CITY));
    }

    cost
}
