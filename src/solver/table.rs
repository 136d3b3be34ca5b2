//! The dynamic-programming cost table.
//!
//! Stores, for every subset S of cities containing the origin and every
//! terminal city j in S, the minimum cost of a path that starts at city 0,
//! visits exactly the cities of S, and ends at j, plus the predecessor city
//! achieving it.
//!
//! # Indexing
//!
//! Only subsets containing bit 0 are addressable. Since that bit is always
//! set, it is dropped from the index: cell `(mask, j)` lives at
//! `(mask >> 1) * n + j`, so the table holds exactly `2^(n-1) * n` cells
//! instead of `2^n * n`.
//!
//! Looking up a terminal that is not a member of the subset can only come
//! from a bug in the fill order, so it panics rather than returning an
//! error.

/// One cell of the cost table.
///
/// Cells start as [`CostEntry::UNREACHED`] (infinite cost, no predecessor)
/// and are written at most once; a finalized cell is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CostEntry {
    /// Minimum path cost, or `f64::INFINITY` when no path exists.
    pub cost: f64,
    /// City visited immediately before the terminal, `None` for the origin
    /// base case and for unreached cells.
    pub predecessor: Option<usize>,
}

impl CostEntry {
    /// No path recorded.
    pub const UNREACHED: Self = Self {
        cost: f64::INFINITY,
        predecessor: None,
    };

    /// The origin base case: zero cost, no predecessor.
    pub const START: Self = Self {
        cost: 0.0,
        predecessor: None,
    };

    pub fn new(cost: f64, predecessor: usize) -> Self {
        Self {
            cost,
            predecessor: Some(predecessor),
        }
    }
}

/// Dense cost table over `(origin subset, terminal city)` keys.
///
/// Allocated fresh for each solve invocation and discarded once the tour is
/// extracted, so repeated solves never share state.
pub(crate) struct CostTable {
    entries: Vec<CostEntry>,
    n: usize,
}

impl CostTable {
    /// Allocates a table for n cities with every cell unreached.
    pub fn new(n: usize) -> Self {
        Self {
            entries: vec![CostEntry::UNREACHED; (1usize << (n - 1)) * n],
            n,
        }
    }

    fn index(&self, mask: u32, terminal: usize) -> usize {
        assert!(
            mask & 1 == 1,
            "subset {mask:#b} does not contain the origin"
        );
        assert!(
            terminal < self.n && mask & (1 << terminal) != 0,
            "terminal {terminal} is not a member of subset {mask:#b}"
        );
        ((mask >> 1) as usize) * self.n + terminal
    }

    pub fn get(&self, mask: u32, terminal: usize) -> CostEntry {
        self.entries[self.index(mask, terminal)]
    }

    pub fn set(&mut self, mask: u32, terminal: usize, entry: CostEntry) {
        let idx = self.index(mask, terminal);
        debug_assert_eq!(
            self.entries[idx],
            CostEntry::UNREACHED,
            "cell ({mask:#b}, {terminal}) written twice"
        );
        self.entries[idx] = entry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_unreached() {
        let table = CostTable::new(3);
        let entry = table.get(0b111, 2);
        assert!(entry.cost.is_infinite());
        assert_eq!(entry.predecessor, None);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut table = CostTable::new(3);
        table.set(0b011, 1, CostEntry::new(4.5, 0));
        let entry = table.get(0b011, 1);
        assert_eq!(entry.cost, 4.5);
        assert_eq!(entry.predecessor, Some(0));
        // Other cells untouched
        assert!(table.get(0b011, 0).cost.is_infinite());
    }

    #[test]
    fn test_cells_are_distinct() {
        let mut table = CostTable::new(4);
        table.set(0b0011, 1, CostEntry::new(1.0, 0));
        table.set(0b1011, 1, CostEntry::new(2.0, 3));
        table.set(0b1011, 3, CostEntry::new(3.0, 1));
        assert_eq!(table.get(0b0011, 1).cost, 1.0);
        assert_eq!(table.get(0b1011, 1).cost, 2.0);
        assert_eq!(table.get(0b1011, 3).cost, 3.0);
    }

    #[test]
    #[should_panic(expected = "not a member")]
    fn test_terminal_outside_subset_panics() {
        let table = CostTable::new(3);
        table.get(0b011, 2);
    }

    #[test]
    #[should_panic(expected = "does not contain the origin")]
    fn test_subset_without_origin_panics() {
        let table = CostTable::new(3);
        table.get(0b110, 1);
    }
}
