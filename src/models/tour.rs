//! Optimal tour result.

use serde::Serialize;

use crate::distance::DistanceMatrix;

/// A closed tour: an ordered city sequence starting and ending at city 0,
/// visiting every city exactly once, with its total edge cost.
///
/// # Examples
///
/// ```
/// use held_karp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// let tour = held_karp::solve(&dm).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 0]);
/// assert_eq!(tour.cost(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    pub(crate) fn new(cities: Vec<usize>, cost: f64) -> Self {
        Self { cities, cost }
    }

    /// The visiting order, origin to origin (n + 1 entries for n cities).
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Total cost of the tour, including the closing edge back to city 0.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of entries in the visiting order (n + 1 for n cities).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the visiting order has no entries.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if the sequence starts and ends at city 0.
    pub fn is_closed(&self) -> bool {
        matches!((self.cities.first(), self.cities.last()), (Some(0), Some(0)))
    }

    /// Re-sums the tour's edges over the given matrix, independently of the
    /// stored cost.
    pub fn edge_cost(&self, distances: &DistanceMatrix) -> f64 {
        self.cities
            .windows(2)
            .map(|leg| distances.get(leg[0], leg[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let tour = Tour::new(vec![0, 2, 1, 0], 12.0);
        assert_eq!(tour.cities(), &[0, 2, 1, 0]);
        assert_eq!(tour.cost(), 12.0);
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_empty());
        assert!(tour.is_closed());
    }

    #[test]
    fn test_not_closed() {
        assert!(!Tour::new(vec![0, 1, 2], 0.0).is_closed());
        assert!(!Tour::new(vec![], 0.0).is_closed());
    }

    #[test]
    fn test_edge_cost() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 2, 3.0);
        dm.set(2, 1, 4.0);
        dm.set(1, 0, 5.0);
        let tour = Tour::new(vec![0, 2, 1, 0], 12.0);
        assert_eq!(tour.edge_cost(&dm), 12.0);
    }
}
