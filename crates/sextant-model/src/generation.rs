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

//! Random city generation and the city file writer.

use crate::geometry::Point;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// The default lower coordinate bound for generated cities.
pub const DEFAULT_MIN_COORDINATE: f64 = -1_000.0;

/// The default upper coordinate bound for generated cities.
pub const DEFAULT_MAX_COORDINATE: f64 = 1_000.0;

/// The number of decimal places generated coordinates are rounded to.
pub const COORDINATE_DECIMALS: i32 = 2;

/// Generates cities uniformly at random inside a square.
///
/// Coordinates are drawn from `[min, max)`, rounded to two decimal places and
/// clamped back into `[min, max]` should rounding push them outside.
#[derive(Debug, Clone)]
pub struct CityGenerator {
    rng: StdRng,
    min: f64,
    max: f64,
}

impl CityGenerator {
    /// Creates a reproducible generator from `seed`.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    #[inline]
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    #[inline]
    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            min: DEFAULT_MIN_COORDINATE,
            max: DEFAULT_MAX_COORDINATE,
        }
    }

    /// Sets the coordinate range for both axes.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not finite or `min >= max`.
    #[inline]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        assert!(
            min.is_finite() && max.is_finite() && min < max,
            "called `CityGenerator::with_range` with an invalid range: [{}, {}]",
            min,
            max
        );

        self.min = min;
        self.max = max;
        self
    }

    /// Returns the coordinate range as `(min, max)`.
    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Generates `amount` cities.
    pub fn generate(&mut self, amount: usize) -> Vec<Point> {
        (0..amount)
            .map(|_| {
                let x = self.coordinate();
                let y = self.coordinate();
                Point::new(x, y)
            })
            .collect()
    }

    fn coordinate(&mut self) -> f64 {
        let power = 10f64.powi(COORDINATE_DECIMALS);
        let value = (self.rng.random_range(self.min..self.max) * power).round() / power;

        if value > self.max {
            (self.max * power).floor() / power
        } else if value < self.min {
            (self.min * power).ceil() / power
        } else {
            value
        }
    }
}

/// Writes `cities` in the city file format, one `x,y` pair per line.
pub fn write_cities<W: Write>(mut writer: W, cities: &[Point]) -> std::io::Result<()> {
    for city in cities {
        writeln!(writer, "{},{}", city.x, city.y)?;
    }
    writer.flush()
}

/// Creates (or truncates) the file at `path` and writes `cities` into it.
pub fn write_cities_to_path<P: AsRef<Path>>(path: P, cities: &[Point]) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_cities(BufWriter::new(file), cities)
}
