//! Centralized validation and helper functions.

/// Maximum number of strings accepted in a single list (DOS protection)
///
/// Overlap resolution is cubic in the worst case, so unbounded inputs are refused.
pub const MAX_LIST_ENTRIES: usize = 10_000;

/// Check that a multigram window width is usable.
///
/// # Examples
///
/// ```
/// use dice_overlap::utils::validation::is_valid_multigram_length;
///
/// assert!(is_valid_multigram_length(2));
/// assert!(!is_valid_multigram_length(0));
/// ```
#[must_use]
pub fn is_valid_multigram_length(length: usize) -> bool {
    length > 0
}

/// Check that a match minimum lies in `[0, 1]` (NaN is rejected).
///
/// # Examples
///
/// ```
/// use dice_overlap::utils::validation::is_valid_match_minimum;
///
/// assert!(is_valid_match_minimum(0.5));
/// assert!(!is_valid_match_minimum(1.01));
/// assert!(!is_valid_match_minimum(f64::NAN));
/// ```
#[must_use]
pub fn is_valid_match_minimum(minimum: f64) -> bool {
    (0.0..=1.0).contains(&minimum)
}

/// Check whether a list of `count` entries is over the maximum allowed.
#[must_use]
pub fn exceeds_list_limit(count: usize) -> bool {
    count > MAX_LIST_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multigram_length() {
        assert!(is_valid_multigram_length(1));
        assert!(is_valid_multigram_length(10));
        assert!(!is_valid_multigram_length(0));
    }

    #[test]
    fn test_match_minimum() {
        assert!(is_valid_match_minimum(0.0));
        assert!(is_valid_match_minimum(1.0));
        assert!(!is_valid_match_minimum(-0.001));
        assert!(!is_valid_match_minimum(f64::INFINITY));
        assert!(!is_valid_match_minimum(f64::NAN));
    }

    #[test]
    fn test_exceeds_list_limit() {
        assert!(!exceeds_list_limit(0));
        assert!(!exceeds_list_limit(MAX_LIST_ENTRIES));
        assert!(exceeds_list_limit(MAX_LIST_ENTRIES + 1));
    }
}
