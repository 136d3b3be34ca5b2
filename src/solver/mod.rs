//! Exact TSP solving via the Held-Karp dynamic program.
//!
//! # Algorithm
//!
//! Let `C(S, j)` be the minimum cost of a path starting at city 0, visiting
//! exactly the cities of S, and ending at city j ∈ S. With base cases
//! `C({0}, 0) = 0` and `C({0,j}, j) = d(0, j)`, the recurrence is
//!
//! ```text
//! C(S, j) = min over i ∈ S \ {0, j} of  C(S \ {j}, i) + d(i, j)
//! ```
//!
//! processed by ascending subset size so every right-hand lookup refers to
//! an already finalized, strictly smaller subset. The optimal tour cost is
//! `min over j ≠ 0 of C(full, j) + d(j, 0)`; the closing edge appears only
//! in that extraction, never in the recurrence.
//!
//! # Complexity
//!
//! O(n² · 2^n) time, O(n · 2^n) space. Exact but exponential; see
//! [`crate::subsets::MAX_CITIES`] for the hard cap.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

mod reconstruct;
mod table;

use log::debug;
use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::models::Tour;
use crate::subsets::{check_capacity, members, subsets_of_size};

use reconstruct::reconstruct;
use table::{CostEntry, CostTable};

/// Solves a TSP instance exactly, returning the optimal tour.
///
/// Convenience wrapper around [`Solver::new`] + [`Solver::solve`].
///
/// # Examples
///
/// ```
/// use held_karp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::parse("3\n0 1 15\n1 0 1\n15 1 0\n").unwrap();
/// let tour = held_karp::solve(&dm).unwrap();
/// assert_eq!(tour.cost(), 17.0);
/// assert_eq!(tour.cities(), &[0, 1, 2, 0]);
/// ```
pub fn solve(distances: &DistanceMatrix) -> Result<Tour, SolveError> {
    Ok(Solver::new(distances)?.solve())
}

/// Exact Held-Karp solver over a borrowed distance matrix.
///
/// Construction validates the city count before anything is allocated;
/// after that, solving cannot fail. Each [`solve`](Solver::solve) call
/// builds its own cost table and discards it once the tour is extracted,
/// so repeated and concurrent solves are independent.
pub struct Solver<'a> {
    distances: &'a DistanceMatrix,
    n: usize,
}

impl<'a> Solver<'a> {
    /// Creates a solver for the given matrix.
    ///
    /// Returns [`SolveError::CapacityExceeded`] when the city count is
    /// beyond the bitmask limit, or [`SolveError::InvalidInput`] for an
    /// empty matrix; no table is allocated in either case.
    pub fn new(distances: &'a DistanceMatrix) -> Result<Self, SolveError> {
        let n = distances.size();
        check_capacity(n)?;
        Ok(Self { distances, n })
    }

    /// Computes the optimal tour with the sequential fill.
    pub fn solve(&self) -> Tour {
        let mut t = CostTable::new(self.n);
        self.seed_base_cases(&mut t);
        for size in 3..=self.n {
            let level = subsets_of_size(self.n, size);
            debug!("filling {} subsets of size {size}", level.len());
            for &mask in &level {
                for (j, entry) in self.subset_entries(&t, mask) {
                    t.set(mask, j, entry);
                }
            }
        }
        reconstruct(&t, self.distances)
    }

    /// Computes the optimal tour, filling each subset-size level in
    /// parallel.
    ///
    /// The recurrence's only cross-subset dependency is that all subsets of
    /// size s-1 are finalized before size s begins, so each level fans out
    /// across subsets and joins at the level boundary. Work is partitioned
    /// by subset, giving every `(subset, terminal)` cell exactly one
    /// writer; cells of the previous level are immutable by then. Yields
    /// the same cost as [`solve`](Solver::solve) (the tour may differ only
    /// between equal-cost optima).
    pub fn par_solve(&self) -> Tour {
        let mut t = CostTable::new(self.n);
        self.seed_base_cases(&mut t);
        for size in 3..=self.n {
            let level = subsets_of_size(self.n, size);
            debug!("filling {} subsets of size {size} in parallel", level.len());
            let computed: Vec<(u32, Vec<(usize, CostEntry)>)> = level
                .par_iter()
                .map(|&mask| (mask, self.subset_entries(&t, mask)))
                .collect();
            for (mask, entries) in computed {
                for (j, entry) in entries {
                    t.set(mask, j, entry);
                }
            }
        }
        reconstruct(&t, self.distances)
    }

    /// Writes the size-1 and size-2 base cases.
    ///
    /// The singleton entries are written here, up front, so they are never
    /// read at their unreached default. `C(S, 0)` for larger S stays at its
    /// explicit infinite default and is never overwritten: a path cannot
    /// both start and end at the origin before the closing edge.
    fn seed_base_cases(&self, table: &mut CostTable) {
        table.set(0b1, 0, CostEntry::START);
        for j in 1..self.n {
            let mask = 0b1 | (1 << j);
            table.set(mask, j, CostEntry::new(self.distances.get(0, j), 0));
        }
    }

    /// Computes the finalized entries for one subset of size ≥ 3: for each
    /// non-origin terminal j, the cheapest extension of a smaller path.
    ///
    /// Reads only cells of strictly smaller subsets. The minimum is taken
    /// into a fresh entry, never by mutating a stored cell; ties keep the
    /// first (lowest-index) predecessor reaching the minimum.
    fn subset_entries(&self, table: &CostTable, mask: u32) -> Vec<(usize, CostEntry)> {
        let mut entries = Vec::with_capacity(mask.count_ones() as usize - 1);
        for j in members(mask & !1) {
            let rest = mask & !(1 << j);
            let mut best = CostEntry::UNREACHED;
            for i in members(rest & !1) {
                let base = table.get(rest, i);
                if !base.cost.is_finite() {
                    continue;
                }
                let cost = base.cost + self.distances.get(i, j);
                if cost < best.cost {
                    best = CostEntry::new(cost, i);
                }
            }
            entries.push((j, best));
        }
        entries
    }
}
