use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::core::multigram::{split, Multigrams};

/// Safely convert usize to f64 for coefficient calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Dice coefficient between two raw strings, split with the given window width.
///
/// Identical strings score exactly 1.0, even when too short to produce any
/// multigrams. Otherwise a string with no multigrams scores 0.0 against anything.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use dice_overlap::matching::scoring::coefficient_strings;
///
/// let k = NonZeroUsize::new(2).unwrap();
/// assert!((coefficient_strings("night", "nacht", k) - 0.25).abs() < 1e-12);
/// assert_eq!(coefficient_strings("", "", k), 1.0);
/// ```
#[must_use]
pub fn coefficient_strings(a: &str, b: &str, length: NonZeroUsize) -> f64 {
    if a == b {
        return 1.0;
    }
    dice(&split(a, length), &split(b, length))
}

/// Dice coefficient between two multigram sequences.
///
/// Sequences with equal content score exactly 1.0, including two empty ones.
#[must_use]
pub fn coefficient_multigrams(a: &Multigrams, b: &Multigrams) -> f64 {
    if a == b {
        return 1.0;
    }
    dice(a, b)
}

/// `2 |A ∩ B| / (|A| + |B|)` over multisets, 0.0 if either side is empty
fn dice(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = sorted_intersection_count(a, b);
    count_to_f64(2 * intersection) / count_to_f64(a.len() + b.len())
}

/// Count multiset intersection of two ascending sequences with a two-pointer merge.
///
/// Each equal pair consumes one element from each side, so duplicates match
/// at most as many times as the smaller multiplicity.
fn sorted_intersection_count(a: &[String], b: &[String]) -> usize {
    let (mut i, mut j) = (0, 0);
    let mut intersection = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                intersection += 1;
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }

    intersection
}

/// Pairwise Dice coefficients between two lists of strings.
///
/// Rows index the first list, columns the second. Stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl CoefficientMatrix {
    /// Score every pair of `left` x `right`.
    ///
    /// Each string is split once. A pair of equal strings scores 1.0 regardless
    /// of length, matching [`coefficient_strings`].
    #[must_use]
    pub fn build<S: AsRef<str>>(left: &[S], right: &[S], length: NonZeroUsize) -> Self {
        let left_grams: Vec<Multigrams> = left.iter().map(|s| split(s.as_ref(), length)).collect();
        let right_grams: Vec<Multigrams> =
            right.iter().map(|s| split(s.as_ref(), length)).collect();

        let mut values = Vec::with_capacity(left.len() * right.len());
        for (a, a_grams) in left.iter().zip(&left_grams) {
            for (b, b_grams) in right.iter().zip(&right_grams) {
                let value = if a.as_ref() == b.as_ref() {
                    1.0
                } else {
                    dice(a_grams, b_grams)
                };
                values.push(value);
            }
        }

        Self {
            rows: left.len(),
            cols: right.len(),
            values,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coefficient at `(row, col)`, or `None` when out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }

    /// One row of coefficients
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    #[cfg(test)]
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.values[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.cols + col] = value;
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn grams(items: &[&str]) -> Multigrams {
        Multigrams::from_unsorted(items.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn test_night_nacht() {
        // {gh, ht, ig, ni} vs {ac, ch, ht, na}: only "ht" in common
        let c = coefficient_strings("night", "nacht", k(2));
        assert!((c - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(coefficient_strings("hello", "hello", k(2)), 1.0);
        assert_eq!(coefficient_strings("a", "a", k(2)), 1.0);
        assert_eq!(coefficient_strings("", "", k(2)), 1.0);
    }

    #[test]
    fn test_short_distinct_strings_score_zero() {
        // Both sides produce no multigrams but the strings differ
        assert_eq!(coefficient_strings("a", "b", k(2)), 0.0);
        assert_eq!(coefficient_strings("", "xy", k(2)), 0.0);
        assert_eq!(coefficient_strings("xy", "", k(2)), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = coefficient_strings("helicopters", "hello", k(2));
        let ba = coefficient_strings("hello", "helicopters", k(2));
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_hello_helicopters() {
        // {el, he, ll, lo} vs 10 grams sharing {el, he}: 2*2 / 14
        let c = coefficient_strings("hello", "helicopters", k(2));
        assert!((c - 4.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicates_match_by_multiplicity() {
        // [aa, aa, aa] vs [aa]: one match, not three
        let c = coefficient_multigrams(&grams(&["aa", "aa", "aa"]), &grams(&["aa"]));
        assert!((c - 0.5).abs() < 1e-12);

        let c = coefficient_multigrams(&grams(&["aa", "aa"]), &grams(&["aa", "aa", "bb"]));
        assert!((c - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_multigram_equality_short_circuit() {
        assert_eq!(coefficient_multigrams(&grams(&[]), &grams(&[])), 1.0);
        assert_eq!(
            coefficient_multigrams(&grams(&["ab", "cd"]), &grams(&["cd", "ab"])),
            1.0
        );
        assert_eq!(coefficient_multigrams(&grams(&[]), &grams(&["ab"])), 0.0);
    }

    #[test]
    fn test_sorted_intersection_count() {
        let a = ["a", "b", "b", "d"].map(String::from);
        let b = ["b", "c", "d", "d"].map(String::from);
        assert_eq!(sorted_intersection_count(&a, &b), 2);
        assert_eq!(sorted_intersection_count(&a, &[]), 0);
    }

    #[test]
    fn test_matrix_build() {
        let matrix = CoefficientMatrix::build(&["hello", "world"], &["helicopters", "are", "wonderful"], k(2));
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert!((matrix.get(0, 0).unwrap() - 4.0 / 14.0).abs() < 1e-12);
        assert_eq!(matrix.get(0, 1), Some(0.0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.row(1).len(), 3);
    }

    #[test]
    fn test_matrix_equal_short_strings() {
        let matrix = CoefficientMatrix::build(&["a", "b"], &["a"], k(2));
        assert_eq!(matrix.get(0, 0), Some(1.0));
        assert_eq!(matrix.get(1, 0), Some(0.0));
    }

    #[test]
    fn test_empty_matrix() {
        let empty: [&str; 0] = [];
        let matrix = CoefficientMatrix::build(&empty, &["a"], k(2));
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.cols(), 1);
    }
}
