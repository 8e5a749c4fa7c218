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

//! Crate: Sextant‑BnB
//!
//! Exact travelling salesman solver built on best‑first branch‑and‑bound.
//! Partial tours rooted at city 0 are kept in a frontier ordered by depth and
//! lower bound; the deepest, most promising one is expanded next, and any node
//! whose bound the incumbent already matches is discarded.
//!
//! Core flow
//! - Build a `sextant_model::matrix::CostMatrix<T>`.
//! - Choose a `bound::BoundEstimator` (admissible remainder estimate).
//! - Optionally supply an incumbent tour and monitors.
//! - Run `bnb::BnbSolver` and inspect the `result::BnbSolverOutcome`.
//!
//! Assumptions and guarantees
//! - Costs are non‑negative; the diagonal is ignored.
//! - Estimators must be admissible, or optimality is not guaranteed.
//! - The search is deterministic: ties are broken by insertion order.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `bound`: lower bound estimators.
//! - `frontier`: the best‑first priority queue.
//! - `incumbent`: best tour found so far.
//! - `monitor`: tree‑search monitors (log, limits, composite).
//! - `node`: partial tours with cost and bound.
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.

pub mod bnb;
pub mod bound;
pub mod frontier;
pub mod incumbent;
pub mod monitor;
pub mod node;
pub mod result;
pub mod stats;
