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

//! Lower bounds on the unfixed remainder of a tour.
//!
//! A search node fixes a path `0 -> ... -> last` and leaves a set of
//! unvisited cities. Any completion departs once from `last` and once from
//! every unvisited city, and each departure enters either an unvisited city
//! or, finally, city `0`. A `BoundEstimator` prices that remainder from
//! below; the node adds the exact prefix cost on top.
//!
//! Estimators must be:
//! - admissible: never above the cheapest real completion, and
//! - monotone: fixing one more city never lowers `prefix + remainder`.
//!
//! Pruning relies on both properties for correctness.

use fixedbitset::FixedBitSet;
use sextant_model::{
    index::{CityIndex, START_CITY},
    matrix::CostMatrix,
};
use sextant_search::num::SolverNumeric;

/// Computes a lower bound on the cost still to be paid by a partial tour.
pub trait BoundEstimator<T>
where
    T: SolverNumeric,
{
    /// Returns the name of the estimator.
    fn name(&self) -> &str;

    /// Returns a lower bound on the cost of completing a partial tour that
    /// currently ends at `last` and has visited the cities in `visited`.
    ///
    /// Only called for partial tours; at least one city is unvisited.
    fn remainder(&self, matrix: &CostMatrix<T>, last: CityIndex, visited: &FixedBitSet) -> T;
}

impl<T> std::fmt::Debug for dyn BoundEstimator<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundEstimator({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn BoundEstimator<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundEstimator({})", self.name())
    }
}

/// Sums, over every city that still has to be departed from, its cheapest
/// outgoing edge into a city that can still be entered.
///
/// The departing cities are the unvisited ones plus the tour's last city;
/// the enterable cities are the unvisited ones plus city `0`. A city is never
/// matched with itself. At the root this is the sum of every city's cheapest
/// outgoing edge. `O(n²)` per call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinOutgoingEdgeBound;

impl MinOutgoingEdgeBound {
    /// Creates a new `MinOutgoingEdgeBound`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn cheapest_departure<T>(row: &[T], from: usize, visited: &FixedBitSet) -> Option<T>
    where
        T: SolverNumeric,
    {
        let start = START_CITY.get();
        let mut best: Option<T> = None;

        for to in visited.zeroes().chain(std::iter::once(start)) {
            if to == from {
                continue;
            }
            let cost = row[to];
            if best.is_none_or(|b| cost < b) {
                best = Some(cost);
            }
        }

        best
    }
}

impl<T> BoundEstimator<T> for MinOutgoingEdgeBound
where
    T: SolverNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "MinOutgoingEdgeBound"
    }

    fn remainder(&self, matrix: &CostMatrix<T>, last: CityIndex, visited: &FixedBitSet) -> T {
        debug_assert!(
            visited.len() == matrix.num_cities(),
            "called `MinOutgoingEdgeBound::remainder` with a visited set of the wrong size: the len is {} but the matrix has {} cities",
            visited.len(),
            matrix.num_cities()
        );
        debug_assert!(
            visited.contains(last.get()),
            "called `MinOutgoingEdgeBound::remainder` with last city {} not marked as visited",
            last.get()
        );

        let mut total = T::ZERO;
        for from in std::iter::once(last.get()).chain(visited.zeroes()) {
            let row = matrix.row(CityIndex::new(from));
            if let Some(cost) = Self::cheapest_departure(row, from, visited) {
                total = total.saturating_add_val(cost);
            }
        }

        total
    }
}

/// The trivial estimator: the remainder costs nothing.
///
/// Admissible for any non-negative matrix, but prunes only on the exact
/// prefix cost, so the search degrades towards enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefixCostBound;

impl PrefixCostBound {
    /// Creates a new `PrefixCostBound`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> BoundEstimator<T> for PrefixCostBound
where
    T: SolverNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "PrefixCostBound"
    }

    #[inline]
    fn remainder(&self, _matrix: &CostMatrix<T>, _last: CityIndex, _visited: &FixedBitSet) -> T {
        T::ZERO
    }
}
