//! # held-karp
//!
//! Exact Traveling Salesman Problem solving over a dense (possibly
//! asymmetric) distance matrix, via the Held-Karp dynamic program:
//! subset-indexed cost tables over integer bitmasks, filled by ascending
//! subset size, with predecessor links for optimal tour reconstruction.
//!
//! ## Modules
//!
//! - [`distance`] — Dense distance matrix and the plain-text payload parser
//! - [`subsets`] — Bitmask subset enumeration in dependency order
//! - [`solver`] — The DP cost table fill and tour reconstruction
//! - [`models`] — The [`Tour`] result type
//! - [`error`] — Input and capacity errors
//!
//! ## Example
//!
//! ```
//! use held_karp::distance::DistanceMatrix;
//!
//! let dm = DistanceMatrix::parse("3\n0 1 15\n1 0 1\n15 1 0\n")?;
//! let tour = held_karp::solve(&dm)?;
//! assert_eq!(tour.cost(), 17.0);
//! assert_eq!(tour.cities(), &[0, 1, 2, 0]);
//! # Ok::<(), held_karp::SolveError>(())
//! ```

pub mod distance;
pub mod error;
pub mod models;
pub mod solver;
pub mod subsets;

pub use error::SolveError;
pub use models::Tour;
pub use solver::{solve, Solver};
