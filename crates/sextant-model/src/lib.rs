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

//! # Sextant Model
//!
//! **The problem and solution types of the Sextant TSP solver.**
//!
//! This crate is the data interchange layer between the callers that produce
//! a travelling salesman instance and the engines that solve it.
//!
//! ## Architecture
//!
//! * **`index`**: `CityIndex`, a strongly typed city id.
//! * **`matrix`**: `CostMatrix` (immutable, validated, flattened row-major)
//!   and `CostMatrixBuilder`.
//! * **`tour`**: `Tour`, a closed city sequence starting and ending at city 0
//!   together with its cost.
//! * **`geometry`**: `Point` and Euclidean cost matrices.
//! * **`loading`**: `CityLoader`, reading `x,y` coordinate files.
//! * **`generation`**: `CityGenerator` and `write_cities`, producing such files.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: a `CostMatrix` can only be obtained through validating
//!    constructors, so solvers never see an empty, ragged, negative or
//!    non-finite matrix.
//! 2. **Type Safety**: city ids are `CityIndex`, not bare `usize`.
//! 3. **Memory Layout**: costs live in one contiguous vector; a row is a slice.

pub mod generation;
pub mod geometry;
pub mod index;
pub mod loading;
pub mod matrix;
pub mod tour;
