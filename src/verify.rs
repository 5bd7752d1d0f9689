//! Downloaded size verification.

/// Permitted absolute deviation, in MB, between expected and actual size.
pub const DEFAULT_TOLERANCE_MB: f64 = 0.1;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Check whether a downloaded byte count matches an expected size in binary MB.
///
/// Returns `true` iff the absolute difference between `actual_bytes`
/// converted to MB and `expected_mb` is within `tolerance_mb`.
///
/// ```rust
/// use bulkfetch::verify::{verify_size, DEFAULT_TOLERANCE_MB};
///
/// assert!(verify_size(1_048_576, 1.0, DEFAULT_TOLERANCE_MB));
/// assert!(!verify_size(1_048_576, 1.2, DEFAULT_TOLERANCE_MB));
/// ```
pub fn verify_size(actual_bytes: u64, expected_mb: f64, tolerance_mb: f64) -> bool {
    let actual_mb = actual_bytes as f64 / BYTES_PER_MB;
    (actual_mb - expected_mb).abs() <= tolerance_mb
}
