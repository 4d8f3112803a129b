use ndarray::Array2;

use super::types::PHash;
use crate::config::HASH_BLOCK_SIZE;

/// Core fingerprint extraction
///

/// The 64 low-frequency coefficients a fingerprint is built from, in bit order.
///
/// Row-major over the top-left 8×8 block. Unless `include_dc` is set, the DC
/// slot `[0, 0]` is filled with the next horizontal frequency `[0, 8]`.
pub fn low_frequencies(frequencies: &Array2<f64>, include_dc: bool) -> Vec<f64> {
    (0..HASH_BLOCK_SIZE)
        .flat_map(|row| (0..HASH_BLOCK_SIZE).map(move |col| (row, col)))
        .map(|(row, col)| match (row, col) {
            (0, 0) if !include_dc => frequencies[[0, HASH_BLOCK_SIZE]],
            _ => frequencies[[row, col]],
        })
        .collect()
}

/// Threshold the low-frequency coefficients against their median.
/// The first coefficient lands in the most significant bit.
pub fn fingerprint_from_frequencies(frequencies: &Array2<f64>, include_dc: bool) -> PHash {
    let coefficients = low_frequencies(frequencies, include_dc);
    let median = median(&coefficients);

    let last_bit = coefficients.len() - 1;
    let hash = coefficients
        .iter()
        .enumerate()
        .filter(|(_, c)| **c > median)
        .fold(0u64, |hash, (i, _)| hash | 1u64 << (last_bit - i));

    PHash(hash)
}

/// Median of a non-empty slice; the mean of the two middle values for even lengths
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
