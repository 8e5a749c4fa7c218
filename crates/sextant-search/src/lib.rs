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

//! # Sextant Search
//!
//! Solver-agnostic vocabulary shared by every Sextant engine, plus the
//! exhaustive reference solver.
//!
//! ## Modules
//!
//! - `num`: `SolverNumeric`, the bundle of numeric capabilities a cost type
//!   needs to be solvable (integers and floats alike).
//! - `result`: `SolverResult` and `TerminationReason`, describing what a
//!   solver found and why it stopped.
//! - `command`: `SearchCommand`, the continue/terminate signal monitors hand
//!   back to a running search.
//! - `exhaustive`: `Permutations`, a lazy next-permutation iterator, and
//!   `ExhaustiveSolver`, which prices every tour. Only practical for a
//!   handful of cities; used to cross-check the exact engines.

pub mod command;
pub mod exhaustive;
pub mod num;
pub mod result;
