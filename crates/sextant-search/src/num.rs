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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for search and solver components. `SolverNumeric`
//! collects everything an engine needs from a cost type into one alias:
//! associated constants (`Zero`, `Unbounded`), by-value saturating and checked
//! addition, a total order usable as a heap key, a finiteness check, and a
//! lossy conversion to `f64` (via `num_traits::ToPrimitive`) for reporting.
//!
//! It is implemented for every primitive integer and for `f32`/`f64`, so
//! integer instances keep exact arithmetic while Euclidean instances run on
//! floats through the same code path.

use num_traits::ToPrimitive;
use sextant_core::num::{
    constants::{Unbounded, Zero},
    ops::{
        checked_arithmetic::CheckedAddVal, finite::IsFiniteVal,
        saturating_arithmetic::SaturatingAddVal, total_order::TotalOrdVal,
    },
};

/// A trait alias for cost types accepted by the solvers.
pub trait SolverNumeric:
    Copy
    + PartialOrd
    + ToPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + Unbounded
    + SaturatingAddVal
    + CheckedAddVal
    + TotalOrdVal
    + IsFiniteVal
    + Send
    + Sync
    + 'static
{
}

impl<T> SolverNumeric for T where
    T: Copy
        + PartialOrd
        + ToPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + Unbounded
        + SaturatingAddVal
        + CheckedAddVal
        + TotalOrdVal
        + IsFiniteVal
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solver_numeric<T: SolverNumeric>() {}

    #[test]
    fn test_primitive_types_are_solver_numeric() {
        assert_solver_numeric::<i32>();
        assert_solver_numeric::<i64>();
        assert_solver_numeric::<u32>();
        assert_solver_numeric::<u64>();
        assert_solver_numeric::<f32>();
        assert_solver_numeric::<f64>();
    }
}
