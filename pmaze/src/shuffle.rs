use rand::Rng;

/// Shuffles `items` in place (Durstenfeld's Fisher–Yates).
///
/// For `i` from `len - 1` down to 1, swaps `items[i]` with `items[j]` where
/// `j` is drawn uniformly from `0..=i`. Every permutation is equally likely,
/// given an unbiased `rng`.
///
/// Indices are drawn as `u32`: `usize` sampling in `rand` depends on the
/// pointer width, and a seed has to give the same maze on every target.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i as u32) as usize;
        items.swap(i, j);
    }
}
