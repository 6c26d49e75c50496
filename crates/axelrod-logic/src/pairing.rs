//! Round-robin pairing enumeration
//!
//! Pairings are ranked in roster order: (0,1), (0,2), ..., (0,n-1), (1,2), ...
//! `get_pairing` unranks directly so a single pairing can be looked up
//! (or replayed) without walking the whole schedule.

/// Number of pairings in a full round-robin over `n` participants
pub fn pairing_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n * (n - 1) / 2
}

/// Every unordered pair `(i, j)` with `i < j`, in roster order
pub fn round_robin_pairings(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// Get the pairing at a given schedule index, O(1) memory
pub fn get_pairing(n: usize, index: usize) -> Option<(usize, usize)> {
    if index >= pairing_count(n) {
        return None;
    }
    Some(unrank_pair(n, index))
}

/// Number of pairings that come before row `i`
///
/// Row `i` holds the `n - 1 - i` pairings whose first member is `i`.
fn row_start(n: usize, i: usize) -> usize {
    i * (2 * n - i - 1) / 2
}

/// Lexicographic unranking: rank → (i, j) with i < j.
fn unrank_pair(n: usize, rank: usize) -> (usize, usize) {
    // Estimate the row from the closed form, then correct for rounding.
    // Pairings from row i onward number (n-i)(n-i-1)/2.
    let remaining = pairing_count(n) - rank;
    let val = 1u64 + 8 * remaining as u64;
    let mut s = val;
    let mut t = (s + 1) / 2;
    while t < s {
        s = t;
        t = (s + val / s) / 2;
    }
    // s = floor(sqrt(val)); m = ceil of the tail length
    let m = ((s as usize) + 1) / 2;
    let mut i = n.saturating_sub(m + 1);

    while i > 0 && row_start(n, i) > rank {
        i -= 1;
    }
    while i + 1 < n && row_start(n, i + 1) <= rank {
        i += 1;
    }

    let j = i + 1 + (rank - row_start(n, i));
    (i, j)
}
