//! Dense distance matrix.

use crate::error::SolveError;
use crate::subsets::check_capacity;

/// A dense n×n distance matrix stored in row-major order.
///
/// `get(i, j)` is the cost of traveling directly from city `i` to city `j`.
/// Entries need not be symmetric, so asymmetric instances are supported.
/// Every entry must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use held_karp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 7.0, 0.0]).unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(1, 0), 7.0);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns [`SolveError::InvalidInput`] if `size` is zero, the data
    /// length doesn't match `size * size`, or any entry is negative or
    /// non-finite.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, SolveError> {
        if size == 0 {
            return Err(SolveError::invalid_input("city count must be at least 1"));
        }
        if data.len() != size * size {
            return Err(SolveError::invalid_input(format!(
                "matrix data has {} entries, expected {}",
                data.len(),
                size * size
            )));
        }
        if let Some(d) = data.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(SolveError::invalid_input(format!(
                "distances must be finite and non-negative, got {d}"
            )));
        }
        Ok(Self { data, size })
    }

    /// Parses the plain-text payload format: the first token is the city
    /// count n, followed by n rows of n whitespace-separated non-negative
    /// numbers (row i, column j = distance from i to j).
    ///
    /// The city count is validated against [`crate::subsets::MAX_CITIES`]
    /// before anything is allocated, so an oversized or malformed header
    /// costs nothing: it returns [`SolveError::CapacityExceeded`] or
    /// [`SolveError::InvalidInput`] instead of attempting a huge buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use held_karp::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::parse("2\n0 5\n5 0\n").unwrap();
    /// assert_eq!(dm.size(), 2);
    /// assert_eq!(dm.get(0, 1), 5.0);
    /// ```
    pub fn parse(payload: &str) -> Result<Self, SolveError> {
        let mut tokens = payload.split_whitespace();

        let header = tokens
            .next()
            .ok_or_else(|| SolveError::invalid_input("empty payload, expected city count"))?;
        let size: usize = header.parse().map_err(|_| {
            SolveError::invalid_input(format!("city count is not a number: {header:?}"))
        })?;
        check_capacity(size)?;

        let mut data = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let token = tokens.next().ok_or_else(|| {
                    SolveError::invalid_input(format!(
                        "matrix ended early at row {row}, column {col} (expected {size}x{size})"
                    ))
                })?;
                let d: f64 = token.parse().map_err(|_| {
                    SolveError::invalid_input(format!(
                        "row {row}, column {col} is not a number: {token:?}"
                    ))
                })?;
                if !d.is_finite() || d < 0.0 {
                    return Err(SolveError::invalid_input(format!(
                        "row {row}, column {col} must be finite and non-negative, got {d}"
                    )));
                }
                data.push(d);
            }
        }
        if let Some(extra) = tokens.next() {
            return Err(SolveError::invalid_input(format!(
                "trailing data after {size}x{size} matrix: {extra:?}"
            )));
        }

        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
        assert!(DistanceMatrix::from_data(0, vec![]).is_err());
    }

    #[test]
    fn test_from_data_rejects_bad_entries() {
        assert!(DistanceMatrix::from_data(1, vec![-1.0]).is_err());
        assert!(DistanceMatrix::from_data(1, vec![f64::NAN]).is_err());
        assert!(DistanceMatrix::from_data(1, vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_parse() {
        let dm = DistanceMatrix::parse("3\n0 1 15\n1 0 1\n15 1 0\n").expect("valid");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 2), 15.0);
        assert_eq!(dm.get(2, 1), 1.0);
    }

    #[test]
    fn test_parse_any_whitespace() {
        // Tokens may be split across lines arbitrarily
        let dm = DistanceMatrix::parse("2 0 5\n5 0").expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
    }

    #[test]
    fn test_parse_empty() {
        assert!(DistanceMatrix::parse("").is_err());
        assert!(DistanceMatrix::parse("   \n  ").is_err());
    }

    #[test]
    fn test_parse_zero_cities() {
        let err = DistanceMatrix::parse("0\n").unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput { .. }));
    }

    #[test]
    fn test_parse_oversized_header() {
        // An oversized city count must come back as an error, not an
        // attempted multi-gigabyte allocation
        let err = DistanceMatrix::parse("100000\n").unwrap_err();
        assert!(matches!(
            err,
            SolveError::CapacityExceeded { cities: 100000, .. }
        ));
        // Large enough that size * size would overflow on 64-bit
        assert!(matches!(
            DistanceMatrix::parse("4000000000\n"),
            Err(SolveError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_parse_short_row() {
        let err = DistanceMatrix::parse("2\n0 5\n5\n").unwrap_err();
        assert!(err.to_string().contains("ended early"));
    }

    #[test]
    fn test_parse_trailing_data() {
        assert!(DistanceMatrix::parse("2\n0 5\n5 0\n99\n").is_err());
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(DistanceMatrix::parse("x\n").is_err());
        assert!(DistanceMatrix::parse("2\n0 five\n5 0\n").is_err());
    }

    #[test]
    fn test_parse_negative() {
        assert!(DistanceMatrix::parse("2\n0 -5\n5 0\n").is_err());
    }
}
