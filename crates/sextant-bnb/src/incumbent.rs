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

//! The best complete tour found so far in one solve.
//!
//! `Incumbent<T>` starts with cost `T::UNBOUNDED` and no tour. The cost is
//! only an upper bound once a tour exists: `dominates` never reports a bound
//! as dominated while the incumbent is empty, so the first complete tour is
//! always accepted even if its cost saturates at `T::UNBOUNDED`.

use sextant_model::tour::Tour;
use sextant_search::num::SolverNumeric;

/// The best known tour of a single search session.
#[derive(Clone, Debug, PartialEq)]
pub struct Incumbent<T> {
    cost: T,
    tour: Option<Tour<T>>,
}

impl<T> Default for Incumbent<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: SolverNumeric,
{
    /// Creates an empty incumbent with cost `T::UNBOUNDED`.
    #[inline]
    pub fn new() -> Self {
        Self {
            cost: T::UNBOUNDED,
            tour: None,
        }
    }

    /// Creates an incumbent seeded with a known tour.
    #[inline]
    pub fn with_tour(tour: Tour<T>) -> Self {
        Self {
            cost: tour.cost(),
            tour: Some(tour),
        }
    }

    /// Returns the best known cost, or `T::UNBOUNDED` if no tour is known.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the best known tour.
    #[inline]
    pub fn tour(&self) -> Option<&Tour<T>> {
        self.tour.as_ref()
    }

    /// Returns `true` if a tour is known.
    #[inline]
    pub fn has_tour(&self) -> bool {
        self.tour.is_some()
    }

    /// Returns `true` if nothing with lower bound `bound` can improve on the
    /// incumbent.
    #[inline]
    pub fn dominates(&self, bound: T) -> bool {
        self.tour.is_some() && bound >= self.cost
    }

    /// Returns `true` if a tour of cost `cost` would replace the incumbent.
    #[inline]
    pub fn improves(&self, cost: T) -> bool {
        self.tour.is_none() || cost < self.cost
    }

    /// Installs `tour` if it is strictly cheaper than the incumbent (or the
    /// incumbent is empty). Returns `true` if it was installed.
    #[inline]
    pub fn try_install(&mut self, tour: Tour<T>) -> bool {
        if !self.improves(tour.cost()) {
            return false;
        }

        self.cost = tour.cost();
        self.tour = Some(tour);
        true
    }

    /// Consumes the incumbent, returning its tour.
    #[inline]
    pub fn into_tour(self) -> Option<Tour<T>> {
        self.tour
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tour {
            Some(tour) => write!(f, "Incumbent({})", tour),
            None => write!(f, "Incumbent(none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sextant_model::index::CityIndex;

    fn tour(cost: i64, ids: &[usize]) -> Tour<i64> {
        Tour::new(cost, ids.iter().copied().map(CityIndex::new).collect())
    }

    #[test]
    fn test_empty_incumbent_dominates_nothing() {
        let inc = Incumbent::<i64>::new();
        assert_eq!(inc.cost(), i64::MAX);
        assert!(!inc.has_tour());
        assert!(!inc.dominates(i64::MAX));
        assert!(inc.improves(i64::MAX));
    }

    #[test]
    fn test_install_requires_strict_improvement() {
        let mut inc = Incumbent::new();
        assert!(inc.try_install(tour(95, &[0, 1, 2, 3, 0])));
        assert_eq!(inc.cost(), 95);

        assert!(!inc.try_install(tour(95, &[0, 3, 2, 1, 0])));
        assert_eq!(inc.tour().map(|t| t.as_raw()), Some(vec![0, 1, 2, 3, 0]));

        assert!(inc.try_install(tour(80, &[0, 1, 3, 2, 0])));
        assert_eq!(inc.cost(), 80);
        assert!(!inc.try_install(tour(81, &[0, 2, 1, 3, 0])));
    }

    #[test]
    fn test_dominance_is_inclusive() {
        let inc = Incumbent::with_tour(tour(80, &[0, 1, 3, 2, 0]));
        assert!(inc.dominates(80));
        assert!(inc.dominates(81));
        assert!(!inc.dominates(79));
    }

    #[test]
    fn test_saturated_first_tour_is_accepted() {
        let mut inc = Incumbent::new();
        assert!(inc.try_install(tour(i64::MAX, &[0, 1, 0])));
        assert!(inc.dominates(i64::MAX));
    }

    #[test]
    fn test_float_incumbent() {
        let mut inc = Incumbent::<f64>::new();
        assert!(inc.cost().is_infinite());
        let t = Tour::new(12.5, vec![CityIndex::new(0), CityIndex::new(1), CityIndex::new(0)]);
        assert!(inc.try_install(t));
        assert!(inc.dominates(12.5));
        assert!(!inc.dominates(12.25));
        assert_eq!(inc.into_tour().map(|t| t.cost()), Some(12.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Incumbent::<i64>::new()), "Incumbent(none)");
        assert_eq!(
            format!("{}", Incumbent::with_tour(tour(10, &[0, 1, 0]))),
            "Incumbent(0 -> 1 -> 0 (cost: 10))"
        );
    }
}
