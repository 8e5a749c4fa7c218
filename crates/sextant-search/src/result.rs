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

use sextant_model::tour::Tour;

/// What a solver found.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<T> {
    /// A tour was found and proven optimal.
    Optimal(Tour<T>),
    /// A tour was found, but the search stopped before proving optimality.
    Feasible(Tour<T>),
    /// The search stopped before finding any tour.
    Unknown,
}

impl<T> SolverResult<T> {
    /// Returns the tour, if one was found.
    #[inline]
    pub fn tour(&self) -> Option<&Tour<T>> {
        match self {
            SolverResult::Optimal(tour) | SolverResult::Feasible(tour) => Some(tour),
            SolverResult::Unknown => None,
        }
    }

    /// Consumes the result, returning the tour if one was found.
    #[inline]
    pub fn into_tour(self) -> Option<Tour<T>> {
        match self {
            SolverResult::Optimal(tour) | SolverResult::Feasible(tour) => Some(tour),
            SolverResult::Unknown => None,
        }
    }

    /// Returns `true` if the result is a proven optimum.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }

    /// Returns `true` if the result is a tour without optimality proof.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, SolverResult::Feasible(_))
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(tour) => write!(f, "Optimal(cost={})", tour.cost()),
            SolverResult::Feasible(tour) => write!(f, "Feasible(cost={})", tour.cost()),
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why a solver stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted; the result is optimal.
    OptimalityProven,
    /// A monitor stopped the search. The string says which limit was hit.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}
