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

use crate::stats::BnbSolverStatistics;
use sextant_model::tour::Tour;
use sextant_search::result::{SolverResult, TerminationReason};

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics<T>,
}

impl<T> BnbSolverOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn optimal(tour: Tour<T>, statistics: BnbSolverStatistics<T>) -> Self {
        Self {
            result: SolverResult::Optimal(tour),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(tour: Option<Tour<T>>, reason: R, statistics: BnbSolverStatistics<T>) -> Self
    where
        R: Into<String>,
    {
        let result = match tour {
            Some(tour) => SolverResult::Feasible(tour),
            None => SolverResult::Unknown,
        };

        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics<T> {
        &self.statistics
    }

    /// Returns the best tour found, optimal or not.
    #[inline]
    pub fn tour(&self) -> Option<&Tour<T>> {
        self.result.tour()
    }

    /// Returns the cost of the best tour found.
    #[inline]
    pub fn cost(&self) -> Option<T> {
        self.result.tour().map(|tour| tour.cost())
    }

    /// Returns `true` if the tour is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.result.is_optimal()
    }

    /// Consumes the outcome, returning the best tour found.
    #[inline]
    pub fn into_tour(self) -> Option<Tour<T>> {
        self.result.into_tour()
    }

    /// Consumes the outcome, returning its parts.
    #[inline]
    pub fn into_parts(self) -> (SolverResult<T>, TerminationReason, BnbSolverStatistics<T>) {
        (self.result, self.termination_reason, self.statistics)
    }
}

impl<T> std::fmt::Display for BnbSolverOutcome<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result:      {}", self.result)?;
        writeln!(f, "Termination: {}", self.termination_reason)?;
        if let Some(tour) = self.result.tour() {
            writeln!(f, "Tour:        {}", tour)?;
        }
        write!(f, "{}", self.statistics)
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
    fn test_optimal_outcome() {
        let outcome = BnbSolverOutcome::optimal(tour(10, &[0, 1, 0]), Default::default());
        assert!(outcome.is_optimal());
        assert_eq!(outcome.cost(), Some(10));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.into_tour().map(|t| t.as_raw()), Some(vec![0, 1, 0]));
    }

    #[test]
    fn test_aborted_with_tour_is_feasible() {
        let outcome = BnbSolverOutcome::aborted(
            Some(tour(12, &[0, 1, 0])),
            "time limit exceeded",
            Default::default(),
        );
        assert!(outcome.result().is_feasible());
        assert!(!outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("time limit exceeded".to_string())
        );
    }

    #[test]
    fn test_aborted_without_tour_is_unknown() {
        let outcome = BnbSolverOutcome::<i64>::aborted(None, "interrupted", Default::default());
        assert_eq!(outcome.result(), &SolverResult::Unknown);
        assert_eq!(outcome.cost(), None);
        assert_eq!(outcome.statistics().steps, 0);
    }

    #[test]
    fn test_display_includes_tour_and_statistics() {
        let outcome = BnbSolverOutcome::optimal(tour(10, &[0, 1, 0]), Default::default());
        let text = format!("{}", outcome);
        assert!(text.contains("Result:      Optimal(cost=10)"));
        assert!(text.contains("Tour:        0 -> 1 -> 0 (cost: 10)"));
        assert!(text.contains("Sextant-BnB Solver Statistics:"));
    }
}
