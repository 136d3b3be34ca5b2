//! Tour reconstruction from the finalized cost table.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::table::CostTable;

/// Extracts the optimal closed tour from a fully filled table.
///
/// The closing edge back to the origin is added here, and only here: the
/// table itself holds open-path costs. Picks the terminal city minimizing
/// `C(full, j) + distance[j][0]`, then walks predecessor links backward
/// until the subset collapses to the singleton origin.
///
/// # Panics
///
/// Panics if the full-set row has no finite entry or a predecessor link is
/// missing before the walk reaches the origin. Either means the table was
/// not filled in dependency order, which is a bug, not recoverable input
/// trouble; a truncated tour must never be returned in its place.
pub(crate) fn reconstruct(table: &CostTable, distances: &DistanceMatrix) -> Tour {
    let n = distances.size();
    if n == 1 {
        return Tour::new(vec![0, 0], distances.get(0, 0));
    }

    let full: u32 = (1 << n) - 1;
    let mut best: Option<(usize, f64)> = None;
    for j in 1..n {
        let entry = table.get(full, j);
        if !entry.cost.is_finite() {
            continue;
        }
        let closed = entry.cost + distances.get(j, 0);
        if best.is_none() || closed < best.expect("checked is_none").1 {
            best = Some((j, closed));
        }
    }
    let Some((last, cost)) = best else {
        panic!("no finite cost recorded for the full city set");
    };

    // Built back-to-front: closing origin, visited cities in reverse, origin
    let mut order = vec![0];
    let mut mask = full;
    let mut city = last;
    while !(mask == 0b1 && city == 0) {
        order.push(city);
        let Some(pred) = table.get(mask, city).predecessor else {
            panic!("predecessor chain broken at subset {mask:#b}, city {city}");
        };
        mask &= !(1 << city);
        city = pred;
    }
    order.push(0);
    order.reverse();

    Tour::new(order, cost)
}
