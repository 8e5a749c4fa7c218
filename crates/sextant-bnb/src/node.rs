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

//! Search nodes: immutable snapshots of a partial tour.
//!
//! A node owns its city sequence (no sharing with parent or siblings), a bit
//! set of the visited cities, the exact cost of the fixed prefix and a lower
//! bound computed once at construction. For a complete node the lower bound
//! is the exact cost of the closed tour, closing edge included.

use crate::bound::BoundEstimator;
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;
use sextant_model::{
    index::{CityIndex, START_CITY},
    matrix::CostMatrix,
    tour::Tour,
};
use sextant_search::num::SolverNumeric;

/// Number of cities a node can hold without spilling its tour to the heap.
pub const INLINE_TOUR_CAPACITY: usize = 16;

/// The inline-first city sequence of a search node.
pub type NodeTour = SmallVec<[CityIndex; INLINE_TOUR_CAPACITY]>;

/// One partial (or complete) tour in the search tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode<T> {
    tour: NodeTour,
    visited: FixedBitSet,
    prefix_cost: T,
    lower_bound: T,
}

impl<T> SearchNode<T>
where
    T: SolverNumeric,
{
    /// Creates the root node `[0]`.
    pub fn root<E>(matrix: &CostMatrix<T>, estimator: &E) -> Self
    where
        E: BoundEstimator<T> + ?Sized,
    {
        let mut tour = NodeTour::new();
        tour.push(START_CITY);

        let mut visited = FixedBitSet::with_capacity(matrix.num_cities());
        visited.insert(START_CITY.get());

        Self::finish(matrix, estimator, tour, visited, T::ZERO)
    }

    /// Creates the child that extends this tour with `city`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `city` is out of bounds or already visited.
    pub fn child<E>(&self, city: CityIndex, matrix: &CostMatrix<T>, estimator: &E) -> Self
    where
        E: BoundEstimator<T> + ?Sized,
    {
        let index = city.get();
        debug_assert!(
            index < self.visited.len(),
            "called `SearchNode::child` with city index out of bounds: the len is {} but the index is {}",
            self.visited.len(),
            index
        );
        debug_assert!(
            !self.visited.contains(index),
            "called `SearchNode::child` with city {} which is already on the tour",
            index
        );

        let mut tour = NodeTour::with_capacity(self.tour.len() + 1);
        tour.extend_from_slice(&self.tour);
        tour.push(city);

        let mut visited = self.visited.clone();
        visited.insert(index);

        let prefix_cost = self
            .prefix_cost
            .saturating_add_val(matrix.cost(self.last_city(), city));

        Self::finish(matrix, estimator, tour, visited, prefix_cost)
    }

    #[inline]
    fn finish<E>(
        matrix: &CostMatrix<T>,
        estimator: &E,
        tour: NodeTour,
        visited: FixedBitSet,
        prefix_cost: T,
    ) -> Self
    where
        E: BoundEstimator<T> + ?Sized,
    {
        let last = tour[tour.len() - 1];
        let lower_bound = if tour.len() == visited.len() {
            if last == START_CITY {
                prefix_cost
            } else {
                prefix_cost.saturating_add_val(matrix.cost(last, START_CITY))
            }
        } else {
            prefix_cost.saturating_add_val(estimator.remainder(matrix, last, &visited))
        };

        Self {
            tour,
            visited,
            prefix_cost,
            lower_bound,
        }
    }

    /// Returns the exact cost of the fixed path.
    #[inline]
    pub fn prefix_cost(&self) -> T {
        self.prefix_cost
    }

    /// Returns the lower bound on every completion of this node; exact for
    /// complete nodes.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower_bound
    }

    /// Converts a complete node into its closed tour.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the node is not complete.
    pub fn to_tour(&self) -> Tour<T> {
        debug_assert!(
            self.is_complete(),
            "called `SearchNode::to_tour` on a partial node: {} of {} cities visited",
            self.tour.len(),
            self.visited.len()
        );

        let mut cities = Vec::with_capacity(self.tour.len() + 1);
        cities.extend_from_slice(&self.tour);
        cities.push(START_CITY);
        Tour::new(self.lower_bound, cities)
    }
}

impl<T> SearchNode<T> {
    /// Returns the fixed city sequence, starting at city `0`.
    #[inline]
    pub fn tour(&self) -> &[CityIndex] {
        &self.tour
    }

    /// Returns the set of cities on the tour.
    #[inline]
    pub fn visited(&self) -> &FixedBitSet {
        &self.visited
    }

    /// Returns `true` if `city` is on the tour.
    #[inline]
    pub fn is_visited(&self, city: CityIndex) -> bool {
        self.visited.contains(city.get())
    }

    /// Iterates over the cities not yet on the tour, in ascending order.
    #[inline]
    pub fn unvisited(&self) -> impl Iterator<Item = CityIndex> + '_ {
        self.visited.zeroes().map(CityIndex::new)
    }

    /// Returns the last city of the tour.
    #[inline]
    pub fn last_city(&self) -> CityIndex {
        self.tour[self.tour.len() - 1]
    }

    /// Returns the depth in the search tree: `0` at the root, `n - 1` once
    /// every city is on the tour.
    #[inline]
    pub fn level(&self) -> usize {
        self.tour.len() - 1
    }

    /// Returns the number of cities in the instance.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if every city is on the tour.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }
}

impl<T> std::fmt::Display for SearchNode<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchNode([")?;
        for (i, city) in self.tour.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", city.get())?;
        }
        write!(
            f,
            "], prefix: {}, bound: {})",
            self.prefix_cost, self.lower_bound
        )
    }
}
