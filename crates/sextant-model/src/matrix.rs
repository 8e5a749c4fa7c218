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

//! Travel cost matrices.
//!
//! `CostMatrix<T>` is the single required input of every solver: a square,
//! non-negative, finite matrix where `cost(i, j)` is the cost of travelling
//! directly from city `i` to city `j`. It does not need to be symmetric. The
//! diagonal is never read by the solvers and is therefore not validated.
//!
//! The matrix is immutable once built. It can be created from nested rows,
//! from a flat row-major vector, through `CostMatrixBuilder`, or from city
//! coordinates (see `geometry`). All constructors validate and report the
//! first offending entry through `MatrixError`.

use crate::index::CityIndex;
use sextant_core::num::{
    constants::Zero,
    ops::{
        checked_arithmetic::CheckedAddVal, finite::IsFiniteVal,
        saturating_arithmetic::SaturatingAddVal,
    },
};

/// The ways a cost matrix can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The matrix has no cities at all.
    #[error("cost matrix must contain at least one city")]
    Empty,
    /// A row does not have as many entries as there are rows.
    #[error("cost matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat cost data does not have `num_cities * num_cities` entries.
    #[error("cost data has {found} entries but {num_cities} cities require {expected}")]
    DimensionMismatch {
        num_cities: usize,
        expected: usize,
        found: usize,
    },
    /// An off-diagonal cost is below zero.
    #[error("cost from city {from} to city {to} is negative")]
    NegativeCost { from: usize, to: usize },
    /// An off-diagonal cost is `NaN` or infinite.
    #[error("cost from city {from} to city {to} is not finite")]
    NonFiniteCost { from: usize, to: usize },
    /// The sum of the largest outgoing cost of every city does not fit in
    /// the cost type, so some tour cost could overflow.
    #[error("tour costs may overflow the cost type: the largest outgoing costs up to city {row} exceed its range")]
    CostOverflow { row: usize },
}

/// An immutable, validated `n × n` travel cost matrix stored row-major.
#[derive(Clone, PartialEq)]
pub struct CostMatrix<T> {
    num_cities: usize,
    costs: Vec<T>,
}

impl<T> CostMatrix<T>
where
    T: Copy + PartialOrd + Zero + IsFiniteVal + CheckedAddVal,
{
    /// Builds a matrix from a flat row-major vector of `num_cities²` costs.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::Empty` for zero cities,
    /// `MatrixError::DimensionMismatch` if the vector has the wrong length,
    /// `NegativeCost`/`NonFiniteCost` for the first invalid off-diagonal
    /// entry, and `CostOverflow` if a tour cost might not fit in `T`.
    pub fn from_flat(num_cities: usize, costs: Vec<T>) -> Result<Self, MatrixError> {
        if num_cities == 0 {
            return Err(MatrixError::Empty);
        }

        let expected = num_cities.checked_mul(num_cities).ok_or(
            MatrixError::DimensionMismatch {
                num_cities,
                expected: usize::MAX,
                found: costs.len(),
            },
        )?;

        if costs.len() != expected {
            return Err(MatrixError::DimensionMismatch {
                num_cities,
                expected,
                found: costs.len(),
            });
        }

        Self::validate_entries(num_cities, &costs)?;
        Ok(Self { num_cities, costs })
    }

    /// Builds a matrix from nested rows, `rows[i][j]` being the cost of
    /// travelling from city `i` to city `j`.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::Empty` for no rows, `MatrixError::NotSquare` for
    /// the first row whose length differs from the row count, and
    /// `NegativeCost`/`NonFiniteCost` for the first invalid entry, and
    /// `CostOverflow` if a tour cost might not fit in `T`.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
    {
        let num_cities = rows.len();
        if num_cities == 0 {
            return Err(MatrixError::Empty);
        }

        let mut costs = Vec::with_capacity(num_cities * num_cities);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_cities {
                return Err(MatrixError::NotSquare {
                    row: row_index,
                    expected: num_cities,
                    found: row.len(),
                });
            }
            costs.extend_from_slice(row);
        }

        Self::validate_entries(num_cities, &costs)?;
        Ok(Self { num_cities, costs })
    }

    fn validate_entries(num_cities: usize, costs: &[T]) -> Result<(), MatrixError> {
        for (flat, &value) in costs.iter().enumerate() {
            let (from, to) = (flat / num_cities, flat % num_cities);
            if from == to {
                continue;
            }
            if !value.is_finite_val() {
                return Err(MatrixError::NonFiniteCost { from, to });
            }
            if value < T::ZERO {
                return Err(MatrixError::NegativeCost { from, to });
            }
        }

        // Every tour leaves each city once, so its cost is at most the sum of
        // the row maxima. If that sum fits, no solver sum can overflow.
        let mut ceiling = T::ZERO;
        for (row, costs) in costs.chunks_exact(num_cities).enumerate() {
            let row_max = costs
                .iter()
                .enumerate()
                .filter(|&(to, _)| to != row)
                .map(|(_, &c)| c)
                .fold(T::ZERO, |max, c| if c > max { c } else { max });
            ceiling = ceiling
                .checked_add_val(row_max)
                .ok_or(MatrixError::CostOverflow { row })?;
        }
        Ok(())
    }
}

impl<T> CostMatrix<T> {
    /// Returns the number of cities `n`.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Returns the cost of travelling directly from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> T
    where
        T: Copy,
    {
        let (f, t) = (from.get(), to.get());
        assert!(
            f < self.num_cities && t < self.num_cities,
            "called `CostMatrix::cost` with city index out of bounds: the len is {} but the indices are ({}, {})",
            self.num_cities,
            f,
            t
        );

        self.costs[f * self.num_cities + t]
    }

    /// Returns all costs leaving `from`, indexed by destination city.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    #[inline]
    pub fn row(&self, from: CityIndex) -> &[T] {
        let f = from.get();
        assert!(
            f < self.num_cities,
            "called `CostMatrix::row` with city index out of bounds: the len is {} but the index is {}",
            self.num_cities,
            f
        );

        let start = f * self.num_cities;
        &self.costs[start..start + self.num_cities]
    }

    /// Returns the flat row-major cost storage.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns `true` if `cost(i, j) == cost(j, i)` for every pair of cities.
    pub fn is_symmetric(&self) -> bool
    where
        T: PartialEq,
    {
        let n = self.num_cities;
        (0..n).all(|i| (i + 1..n).all(|j| self.costs[i * n + j] == self.costs[j * n + i]))
    }

    /// Sums the costs of the consecutive edges along `cities`.
    ///
    /// Edges from a city to itself are skipped, so the degenerate closed
    /// tour `[0, 0]` of a one-city instance costs zero.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn path_cost(&self, cities: &[CityIndex]) -> T
    where
        T: Copy + Zero + SaturatingAddVal,
    {
        cities
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .fold(T::ZERO, |acc, pair| {
                acc.saturating_add_val(self.cost(pair[0], pair[1]))
            })
    }
}

impl<T> std::fmt::Debug for CostMatrix<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostMatrix")
            .field("num_cities", &self.num_cities)
            .field("costs", &self.costs)
            .finish()
    }
}

impl<T> std::fmt::Display for CostMatrix<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CostMatrix({} cities)", self.num_cities)?;
        for row in self.costs.chunks(self.num_cities.max(1)) {
            let line = row
                .iter()
                .map(|c| format!("{:>10}", c))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Mutable staging area for a `CostMatrix`.
///
/// Starts with every cost set to zero; call `build` to validate.
#[derive(Clone, Debug)]
pub struct CostMatrixBuilder<T> {
    num_cities: usize,
    costs: Vec<T>,
}

impl<T> CostMatrixBuilder<T>
where
    T: Copy + PartialOrd + Zero + IsFiniteVal + CheckedAddVal,
{
    /// Creates a builder for `num_cities` cities with all costs zero.
    #[inline]
    pub fn new(num_cities: usize) -> Self {
        Self {
            num_cities,
            costs: vec![T::ZERO; num_cities.saturating_mul(num_cities)],
        }
    }

    /// Returns the number of cities of the matrix being built.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Sets the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set_cost(&mut self, from: CityIndex, to: CityIndex, cost: T) -> &mut Self {
        let (f, t) = (from.get(), to.get());
        assert!(
            f < self.num_cities && t < self.num_cities,
            "called `CostMatrixBuilder::set_cost` with city index out of bounds: the len is {} but the indices are ({}, {})",
            self.num_cities,
            f,
            t
        );

        self.costs[f * self.num_cities + t] = cost;
        self
    }

    /// Sets the cost in both directions between `a` and `b`.
    #[inline]
    pub fn set_symmetric_cost(&mut self, a: CityIndex, b: CityIndex, cost: T) -> &mut Self {
        self.set_cost(a, b, cost);
        self.set_cost(b, a, cost)
    }

    /// Validates the staged costs and freezes them into a `CostMatrix`.
    ///
    /// # Errors
    ///
    /// See `CostMatrix::from_flat`.
    pub fn build(self) -> Result<CostMatrix<T>, MatrixError> {
        CostMatrix::from_flat(self.num_cities, self.costs)
    }
}
