//! Power-of-two helpers shared by tree construction and validation

/// `true` when `n` is a positive power of two.
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Exact base-2 logarithm, `None` unless `n` is a positive power of two.
#[inline]
pub fn exact_log2(n: usize) -> Option<u32> {
    if is_power_of_two(n) {
        Some(n.trailing_zeros())
    } else {
        None
    }
}

/// Number of competitors a tree with `depth` levels below the root holds.
///
/// Depth 0 is a lone final (two competitors).
#[inline]
pub fn competitors_for_depth(depth: u32) -> usize {
    2usize << depth
}
