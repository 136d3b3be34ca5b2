//! Bitmask subset enumeration over the city set.
//!
//! # Representation
//!
//! A subset of `{0, …, n-1}` is a `u32` where bit k set means city k is a
//! member. The dynamic program only ever references subsets containing the
//! origin (bit 0), so only those are enumerated.
//!
//! # Ordering
//!
//! Subsets are produced by ascending population count, ties broken by
//! ascending numeric value. This is a dependency ordering, not a stylistic
//! one: the recurrence for a subset of size s reads entries for subsets of
//! size s-1, so every smaller subset must be finalized first.

use crate::error::SolveError;

/// Maximum supported city count.
///
/// Subsets are `u32` bitmasks, and the algorithm's `O(n² · 2^n)` time makes
/// it impractical well below this bound anyway.
pub const MAX_CITIES: usize = 30;

/// Checks a city count against [`MAX_CITIES`] and the n ≥ 1 lower bound.
pub fn check_capacity(n: usize) -> Result<(), SolveError> {
    if n == 0 {
        return Err(SolveError::invalid_input("city count must be at least 1"));
    }
    if n > MAX_CITIES {
        return Err(SolveError::CapacityExceeded {
            cities: n,
            max: MAX_CITIES,
        });
    }
    Ok(())
}

/// Enumerates all `2^(n-1)` subsets of `{0, …, n-1}` containing the origin,
/// ordered by ascending population count, ties by ascending value.
///
/// # Examples
///
/// ```
/// use held_karp::subsets::origin_subsets;
///
/// let subsets = origin_subsets(3).unwrap();
/// assert_eq!(subsets, vec![0b001, 0b011, 0b101, 0b111]);
/// ```
pub fn origin_subsets(n: usize) -> Result<Vec<u32>, SolveError> {
    check_capacity(n)?;

    let mut subsets: Vec<u32> = Vec::with_capacity(1 << (n - 1));
    for s in 1..=n {
        subsets.extend(subsets_of_size(n, s));
    }
    Ok(subsets)
}

/// Enumerates the subsets of `{0, …, n-1}` with exactly `size` members that
/// contain the origin, in ascending numeric order.
///
/// Walks fixed-popcount masks with Gosper's hack, keeping those with bit 0
/// set. Callers must have validated `n` via [`check_capacity`].
pub fn subsets_of_size(n: usize, size: usize) -> Vec<u32> {
    debug_assert!(n >= 1 && n <= MAX_CITIES);
    if size == 0 || size > n {
        return Vec::new();
    }

    let limit: u32 = (1 << n) - 1;
    let mut out = Vec::new();
    let mut mask: u32 = (1 << size) - 1;
    while mask <= limit {
        if mask & 1 == 1 {
            out.push(mask);
        }
        // Gosper's hack: next larger integer with the same popcount
        let c = mask & mask.wrapping_neg();
        let r = mask + c;
        mask = (((r ^ mask) >> 2) / c) | r;
    }
    out
}

/// Iterates the member cities of a subset mask in ascending order.
///
/// # Examples
///
/// ```
/// use held_karp::subsets::members;
///
/// let cities: Vec<usize> = members(0b1011).collect();
/// assert_eq!(cities, vec![0, 1, 3]);
/// ```
pub fn members(mut mask: u32) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            let city = mask.trailing_zeros() as usize;
            mask &= mask - 1;
            Some(city)
        }
    })
}
