//! Canonical single-elimination seeding
//!
//! Orders a seed-sorted field so that, read two at a time, the first-round
//! pairings keep the top 2 seeds apart until the final, the top 4 apart
//! until the semifinals, and so on for every round:
//!
//! ```text
//! N = 4   1 4 2 3
//! N = 8   1 8 4 5 2 7 3 6
//! ```
//!
//! Two constructions are provided. [`canonical_positions`] doubles the
//! order one round at a time (each seed `s` is followed by its opponent
//! `2m + 1 - s`). [`fold_blocks`] works in place on the sorted field by
//! repeatedly folding blocks of doubling size. Both yield the same order.
//!
//! No validation happens here: callers pass exactly N entries, N a power
//! of two, sorted by seed.

/// Seed numbers (1-based) in canonical pairing order for a field of `n`.
pub fn canonical_positions(n: usize) -> Vec<usize> {
    if n <= 2 {
        return (1..=n).collect();
    }

    canonical_positions(n / 2)
        .into_iter()
        .flat_map(|seed| [seed, n + 1 - seed])
        .collect()
}

/// Permute a seed-sorted field into canonical pairing order.
///
/// `sorted[i]` must hold seed `i + 1`.
pub fn bracket_order<T>(sorted: Vec<T>) -> Vec<T> {
    let positions = canonical_positions(sorted.len());
    let mut pool: Vec<Option<T>> = sorted.into_iter().map(Some).collect();

    positions
        .into_iter()
        .filter_map(|seed| pool.get_mut(seed - 1).and_then(Option::take))
        .collect()
}

/// Iterative block-folding form of [`bracket_order`].
///
/// With blocks of size `g` (starting at 1), the blocks are re-laid out as
/// first, last, second, second-to-last, ... and `g` doubles while it is
/// below `n / 2`.
pub fn fold_blocks<T>(mut field: Vec<T>) -> Vec<T> {
    let n = field.len();
    let mut group = 1;

    while group < n / 2 {
        let blocks = n / group;
        let mut pool: Vec<Option<T>> = field.into_iter().map(Some).collect();
        let mut folded = Vec::with_capacity(n);

        for k in 0..blocks / 2 {
            for block in [k, blocks - 1 - k] {
                let start = block * group;
                folded.extend(pool[start..start + group].iter_mut().filter_map(Option::take));
            }
        }

        field = folded;
        group *= 2;
    }

    field
}

/// First-round seed pairings for a field of `n`
pub fn first_round_pairs(n: usize) -> Vec<(usize, usize)> {
    canonical_positions(n)
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_16: [usize; 16] = [1, 16, 8, 9, 4, 13, 5, 12, 2, 15, 7, 10, 3, 14, 6, 11];

    #[test]
    fn test_canonical_sequences() {
        assert_eq!(canonical_positions(2), vec![1, 2]);
        assert_eq!(canonical_positions(4), vec![1, 4, 2, 3]);
        assert_eq!(canonical_positions(8), vec![1, 8, 4, 5, 2, 7, 3, 6]);
        assert_eq!(canonical_positions(16), ORDER_16.to_vec());
    }

    #[test]
    fn test_bracket_order_moves_values() {
        let names: Vec<String> = (1..=8).map(|s| format!("seed-{s}")).collect();
        let ordered = bracket_order(names);
        assert_eq!(ordered[0], "seed-1");
        assert_eq!(ordered[1], "seed-8");
        assert_eq!(ordered[7], "seed-6");
    }

    #[test]
    fn test_fold_blocks_matches_canonical() {
        for n in [2usize, 4, 8, 16, 32, 64, 128] {
            let field: Vec<usize> = (1..=n).collect();
            assert_eq!(fold_blocks(field), canonical_positions(n), "n = {n}");
        }
        assert_eq!(fold_blocks((1..=16).collect::<Vec<_>>()), ORDER_16.to_vec());
    }

    #[test]
    fn test_first_round_pairs_sum() {
        for (a, b) in first_round_pairs(32) {
            assert_eq!(a + b, 33);
        }
    }
}
