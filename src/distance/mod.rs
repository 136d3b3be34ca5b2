//! Distance matrices.
//!
//! Provides the dense distance matrix the solver reads, including a parser
//! for the plain-text payload format (city count, then the matrix rows).

mod matrix;

pub use matrix::DistanceMatrix;
