//! Error types for solve construction and input parsing.
//!
//! Both variants are detected before any cost table is allocated; a solve
//! that starts never fails with these. Violations of internal DP invariants
//! (a lookup of a terminal outside its subset, an incomplete predecessor
//! chain during reconstruction) indicate a bug rather than bad input and
//! panic instead of returning an error.

use thiserror::Error;

/// Errors raised while validating or parsing problem input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The input payload or matrix is malformed.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
    /// The city count exceeds what the bitmask representation supports.
    #[error("capacity exceeded: {cities} cities (maximum supported is {max})")]
    CapacityExceeded {
        /// Requested city count.
        cities: usize,
        /// Maximum supported city count.
        max: usize,
    },
}

impl SolveError {
    /// Builds an [`SolveError::InvalidInput`] from anything displayable.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = SolveError::invalid_input("row 2 has 3 entries, expected 4");
        assert_eq!(
            e.to_string(),
            "invalid input: row 2 has 3 entries, expected 4"
        );

        let e = SolveError::CapacityExceeded {
            cities: 40,
            max: 30,
        };
        assert!(e.to_string().contains("40"));
        assert!(e.to_string().contains("30"));
    }
}
