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

use crate::{
    index::{CityIndex, START_CITY},
    matrix::CostMatrix,
};
use sextant_core::num::{constants::Zero, ops::saturating_arithmetic::SaturatingAddVal};

/// A closed tour through every city of an instance.
///
/// The city sequence starts and ends at `START_CITY`, so a tour over `n`
/// cities holds `n + 1` entries. The one-city tour is `[0, 0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour<T> {
    /// The total travel cost of the closed tour.
    cost: T,

    /// The visiting order, closing back at the start city.
    cities: Vec<CityIndex>,
}

impl<T> Tour<T>
where
    T: Copy,
{
    /// Constructs a new `Tour` from its cost and closed city sequence.
    ///
    /// # Panics
    ///
    /// Panics if `cities` has fewer than two entries or does not start and
    /// end at `START_CITY`.
    pub fn new(cost: T, cities: Vec<CityIndex>) -> Self {
        assert!(
            cities.len() >= 2,
            "called `Tour::new` with an open sequence: the len is {} but a closed tour needs at least 2",
            cities.len()
        );
        assert!(
            cities[0] == START_CITY && cities[cities.len() - 1] == START_CITY,
            "called `Tour::new` with a sequence that does not start and end at {}: {:?}",
            START_CITY,
            cities
        );

        Self { cost, cities }
    }

    /// Builds a tour from a closed city sequence, pricing it against `matrix`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as `Tour::new`, or if a city is out
    /// of bounds for `matrix`.
    pub fn from_cities(matrix: &CostMatrix<T>, cities: Vec<CityIndex>) -> Self
    where
        T: Zero + SaturatingAddVal,
    {
        let cost = matrix.path_cost(&cities);
        Self::new(cost, cities)
    }

    /// Returns the total cost of the tour.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }
}

impl<T> Tour<T> {
    /// Returns the closed visiting order.
    #[inline]
    pub fn cities(&self) -> &[CityIndex] {
        &self.cities
    }

    /// Returns the number of distinct cities visited, i.e. `len - 1`.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cities.len() - 1
    }

    /// Returns the visiting order as raw `usize` ids.
    pub fn as_raw(&self) -> Vec<usize> {
        self.cities.iter().map(|c| c.get()).collect()
    }

    /// Iterates over the directed edges `(from, to)` of the tour.
    #[inline]
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (CityIndex, CityIndex)> + '_ {
        self.cities.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns `true` if the tour visits each of the `num_cities` cities
    /// exactly once before closing at the start city.
    pub fn is_hamiltonian_cycle(&self, num_cities: usize) -> bool {
        if num_cities == 0 || self.cities.len() != num_cities + 1 {
            return false;
        }

        let mut seen = vec![false; num_cities];
        for city in &self.cities[..num_cities] {
            let index = city.get();
            if index >= num_cities || seen[index] {
                return false;
            }
            seen[index] = true;
        }

        self.cities[0] == START_CITY && self.cities[num_cities] == START_CITY
    }

    /// Returns `true` if both tours visit the same cycle, in either direction.
    pub fn is_equivalent_to<U>(&self, other: &Tour<U>) -> bool {
        if self.cities.len() != other.cities.len() {
            return false;
        }

        self.cities == other.cities || self.cities.iter().eq(other.cities.iter().rev())
    }

    /// Consumes the tour, returning its cost and city sequence.
    #[inline]
    pub fn into_parts(self) -> (T, Vec<CityIndex>) {
        (self.cost, self.cities)
    }
}

impl<T> std::fmt::Display for Tour<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", city.get())?;
        }
        write!(f, " (cost: {})", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour_of(ids: &[usize]) -> Vec<CityIndex> {
        ids.iter().copied().map(CityIndex::new).collect()
    }

    fn reference_matrix() -> CostMatrix<i64> {
        CostMatrix::from_rows(&[
            [0, 10, 15, 20],
            [10, 0, 35, 25],
            [15, 35, 0, 30],
            [20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_cities_prices_the_tour() {
        let tour = Tour::from_cities(&reference_matrix(), tour_of(&[0, 1, 3, 2, 0]));
        assert_eq!(tour.cost(), 80);
        assert_eq!(tour.num_cities(), 4);
        assert_eq!(tour.as_raw(), vec![0, 1, 3, 2, 0]);
        assert!(tour.is_hamiltonian_cycle(4));
    }

    #[test]
    fn test_single_city_tour() {
        let m = CostMatrix::from_rows(&[[0i64]]).unwrap();
        let tour = Tour::from_cities(&m, tour_of(&[0, 0]));
        assert_eq!(tour.cost(), 0);
        assert_eq!(tour.num_cities(), 1);
        assert!(tour.is_hamiltonian_cycle(1));
        assert_eq!(tour.edges().count(), 1);
    }

    #[test]
    fn test_hamiltonian_check_rejects_repeats_and_wrong_length() {
        assert!(!Tour::new(0i64, tour_of(&[0, 1, 1, 0])).is_hamiltonian_cycle(3));
        assert!(!Tour::new(0i64, tour_of(&[0, 1, 0])).is_hamiltonian_cycle(3));
        assert!(!Tour::new(0i64, tour_of(&[0, 1, 5, 0])).is_hamiltonian_cycle(3));
        assert!(Tour::new(0i64, tour_of(&[0, 2, 1, 0])).is_hamiltonian_cycle(3));
    }

    #[test]
    fn test_edges_follow_the_sequence() {
        let tour = Tour::new(0i64, tour_of(&[0, 2, 1, 0]));
        let edges: Vec<(usize, usize)> = tour.edges().map(|(a, b)| (a.get(), b.get())).collect();
        assert_eq!(edges, vec![(0, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn test_reverse_equivalence() {
        let a = Tour::new(80i64, tour_of(&[0, 1, 3, 2, 0]));
        let b = Tour::new(80i64, tour_of(&[0, 2, 3, 1, 0]));
        let c = Tour::new(95i64, tour_of(&[0, 1, 2, 3, 0]));
        assert!(a.is_equivalent_to(&b));
        assert!(a.is_equivalent_to(&a));
        assert!(!a.is_equivalent_to(&c));
    }

    #[test]
    fn test_display_formatting() {
        let tour = Tour::new(80i64, tour_of(&[0, 1, 3, 2, 0]));
        assert_eq!(format!("{}", tour), "0 -> 1 -> 3 -> 2 -> 0 (cost: 80)");
    }

    #[test]
    fn test_into_parts() {
        let (cost, cities) = Tour::new(7i64, tour_of(&[0, 1, 0])).into_parts();
        assert_eq!(cost, 7);
        assert_eq!(cities, tour_of(&[0, 1, 0]));
    }

    #[test]
    #[should_panic(expected = "called `Tour::new` with a sequence that does not start and end at")]
    fn test_new_panics_when_not_closed_at_start() {
        let _ = Tour::new(0i64, tour_of(&[0, 1, 2]));
    }

    #[test]
    #[should_panic(expected = "called `Tour::new` with an open sequence")]
    fn test_new_panics_on_short_sequence() {
        let _ = Tour::new(0i64, tour_of(&[0]));
    }
}
