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

//! # Sextant Core
//!
//! Foundational building blocks shared by every Sextant crate. Nothing in
//! here knows about tours or cities; it only provides the numeric vocabulary
//! the solvers are generic over and the strongly typed index wrapper used to
//! keep city ids apart from plain counts.
//!
//! ## Modules
//!
//! - `num`: associated-constant traits (`Zero`, `Unbounded`) and by-value
//!   operations (saturating addition, total ordering, finiteness checks)
//!   implemented uniformly for the primitive integer and floating point types.
//! - `utils`: phantom-tagged indices (`TypedIndex<T>`).
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod utils;
