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

//! City file loader.
//!
//! A city file is plain text with one `x,y` coordinate pair per line. The two
//! values may be separated by a comma, by whitespace, or by both. Everything
//! after a `#` is a comment, and blank lines are skipped. The loader reads the
//! first `limit` cities when a limit is configured, and the whole file
//! otherwise.
//!
//! Like the matrix constructors, the loader never guesses: a line with the
//! wrong number of values, a token that is not a number, or a coordinate that
//! is not finite is reported together with its 1-based line number.

use crate::geometry::Point;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The error type for loading city files.
#[derive(Debug, thiserror::Error)]
pub enum CityLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line did not contain exactly two values.
    #[error("line {line}: expected `x,y` but found {found} value(s) in '{content}'")]
    MalformedLine {
        line: usize,
        found: usize,
        content: String,
    },
    /// A coordinate token could not be parsed as a number.
    #[error("line {line}: could not parse '{token}' as a coordinate")]
    Parse { line: usize, token: String },
    /// A coordinate parsed to `NaN` or an infinity.
    #[error("line {line}: coordinate is not finite")]
    NonFinite { line: usize },
    /// The input holds fewer cities than requested.
    #[error("requested {requested} cities but the input only holds {found}")]
    NotEnoughCities { requested: usize, found: usize },
}

/// A configurable loader for city coordinate files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityLoader {
    limit: Option<usize>,
}

impl CityLoader {
    /// Creates a loader that reads every city in the input.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads only the first `amount` cities; fewer is an error.
    #[inline]
    pub fn with_limit(mut self, amount: usize) -> Self {
        self.limit = Some(amount);
        self
    }

    /// Returns the configured city limit, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Loads cities from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Point>, CityLoaderError> {
        let mut cities = Vec::with_capacity(self.limit.unwrap_or(0));

        for (index, line) in rdr.lines().enumerate() {
            if self.limit.is_some_and(|limit| cities.len() >= limit) {
                break;
            }

            let line = line?;
            if let Some(point) = parse_line(index + 1, &line)? {
                cities.push(point);
            }
        }

        let requested = self.limit.unwrap_or(1);
        if cities.len() < requested {
            return Err(CityLoaderError::NotEnoughCities {
                requested,
                found: cities.len(),
            });
        }

        Ok(cities)
    }

    /// Loads cities from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Point>, CityLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads cities from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Point>, CityLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads cities from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Point>, CityLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

fn parse_line(line_number: usize, line: &str) -> Result<Option<Point>, CityLoaderError> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let tokens: Vec<&str> = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [x, y] => {
            let x = parse_coordinate(line_number, x)?;
            let y = parse_coordinate(line_number, y)?;
            Ok(Some(Point::new(x, y)))
        }
        other => Err(CityLoaderError::MalformedLine {
            line: line_number,
            found: other.len(),
            content: content.trim().to_string(),
        }),
    }
}

fn parse_coordinate(line_number: usize, token: &str) -> Result<f64, CityLoaderError> {
    let value: f64 = token.parse().map_err(|_| CityLoaderError::Parse {
        line: line_number,
        token: token.to_string(),
    })?;

    if !value.is_finite() {
        return Err(CityLoaderError::NonFinite { line: line_number });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_comma_and_whitespace_separated_pairs() {
        let input = "1.5,2.5\n-3 4\n  5.25 , -6.75  \n";
        let cities = CityLoader::new().from_str(input).unwrap();
        assert_eq!(
            cities,
            vec![
                Point::new(1.5, 2.5),
                Point::new(-3.0, 4.0),
                Point::new(5.25, -6.75)
            ]
        );
    }

    #[test]
    fn test_skips_blank_lines_and_comments() {
        let input = "# header\n\n0,0 # origin\n   \n1,1\n";
        let cities = CityLoader::new().from_str(input).unwrap();
        assert_eq!(cities, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn test_limit_reads_only_the_first_cities() {
        let input = "0,0\n1,1\n2,2\nnot a city\n";
        let cities = CityLoader::new().with_limit(2).from_str(input).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_not_enough_cities() {
        let err = CityLoader::new().with_limit(5).from_str("0,0\n1,1\n").unwrap_err();
        assert!(matches!(
            err,
            CityLoaderError::NotEnoughCities {
                requested: 5,
                found: 2
            }
        ));

        let err = CityLoader::new().from_str("# nothing here\n").unwrap_err();
        assert!(matches!(
            err,
            CityLoaderError::NotEnoughCities {
                requested: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = CityLoader::new().from_str("0,0\n1,2,3\n").unwrap_err();
        match err {
            CityLoaderError::MalformedLine { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = CityLoader::new().from_str("7\n").unwrap_err();
        assert!(matches!(
            err,
            CityLoaderError::MalformedLine {
                line: 1,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_unparsable_and_non_finite_coordinates() {
        let err = CityLoader::new().from_str("0,0\n\nabc,1\n").unwrap_err();
        match err {
            CityLoaderError::Parse { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = CityLoader::new().from_str("inf,1\n").unwrap_err();
        assert!(matches!(err, CityLoaderError::NonFinite { line: 1 }));
    }

    #[test]
    fn test_from_path_and_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10,20").unwrap();
        writeln!(file, "30,40").unwrap();
        file.flush().unwrap();

        let cities = CityLoader::new().from_path(file.path()).unwrap();
        assert_eq!(cities, vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)]);

        let dir = tempfile::tempdir().unwrap();
        let err = CityLoader::new()
            .from_path(dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, CityLoaderError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
