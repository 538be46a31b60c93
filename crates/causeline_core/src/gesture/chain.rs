//! Touched-marker sequence to causal pairs.

/// Links consecutive touched entries into `(cause, effect)` pairs.
///
/// `[a, b, c]` yields `[(a, b), (b, c)]`; fewer than two entries yield none.
/// Every touched entry takes part, including the last one.
pub fn chain_edges<T: Copy>(touched: &[T]) -> Vec<(T, T)> {
    touched.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
