//! Integer compositions (ordered tuples with a fixed sum).
//!
//! Purpose
//! - Enumerate the transversal-count assignments for a disk: one
//!   non-negative count per boundary strand pair.
//!
//! Why this design
//! - Stars and bars over cut positions keeps the enumeration lazy and
//!   lexicographic, so the search visits disks in a stable order and
//!   discovered-graph ids are reproducible across runs.

use itertools::{Either, Itertools};

/// Ordered `k`-tuples of positive integers summing to `n`, in lexicographic
/// order.
///
/// There are C(n-1, k-1) of them; the iterator is empty when `k == 0` or
/// `n < k`.
pub fn positive(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>> {
    if k == 0 || n < k {
        return Either::Left(std::iter::empty());
    }
    // A tuple corresponds to k-1 cut positions in 0..n-1; the parts are the
    // gaps between consecutive cuts.
    Either::Right((0..n - 1).combinations(k - 1).map(move |cuts| {
        let mut parts = Vec::with_capacity(k);
        let mut prev = 0;
        for &c in &cuts {
            parts.push(c + 1 - prev);
            prev = c + 1;
        }
        parts.push(n - prev);
        parts
    }))
}

/// Ordered `k`-tuples of non-negative integers summing to `n`, in
/// lexicographic order. There are C(n+k-1, k-1) of them.
pub fn non_negative(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>> {
    positive(n + k, k).map(|mut parts| {
        for p in &mut parts {
            *p -= 1;
        }
        parts
    })
}
