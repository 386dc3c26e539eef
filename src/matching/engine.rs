use crate::core::config::DiceConfig;
use crate::core::multigram::{split, Multigrams};
use crate::core::types::Overlap;
use crate::matching::overlap::resolve_overlap;
use crate::matching::scoring::{coefficient_multigrams, coefficient_strings, CoefficientMatrix};

/// The main similarity engine.
///
/// Holds its own copy of a [`DiceConfig`]; every call reads the window width
/// and match minimum from that copy, so engines with different settings can be
/// used side by side.
#[derive(Debug, Clone, Default)]
pub struct DiceEngine {
    config: DiceConfig,
}

impl DiceEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(config: DiceConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DiceConfig {
        &self.config
    }

    /// Sorted multigrams of `input` using the configured window width
    #[must_use]
    pub fn split(&self, input: &str) -> Multigrams {
        split(input, self.config.multigram_length())
    }

    /// Dice coefficient between two strings
    #[must_use]
    pub fn coefficient(&self, a: &str, b: &str) -> f64 {
        coefficient_strings(a, b, self.config.multigram_length())
    }

    /// Dice coefficient between two already-split sequences
    #[must_use]
    pub fn coefficient_multigrams(&self, a: &Multigrams, b: &Multigrams) -> f64 {
        coefficient_multigrams(a, b)
    }

    /// Pairwise coefficients between every string of `left` and every string of `right`
    #[must_use]
    pub fn coefficient_matrix<S: AsRef<str>>(&self, left: &[S], right: &[S]) -> CoefficientMatrix {
        CoefficientMatrix::build(left, right, self.config.multigram_length())
    }

    /// Map each string of `left` to its mutually-preferred partner in `right`, if any.
    ///
    /// The result has one entry per element of `left`; no index into `right`
    /// appears twice.
    #[must_use]
    pub fn overlap<S: AsRef<str>>(&self, left: &[S], right: &[S]) -> Vec<Option<usize>> {
        self.overlap_detailed(left, right).mapping
    }

    /// Like [`DiceEngine::overlap`], also reporting accepted coefficients and pass count
    #[must_use]
    pub fn overlap_detailed<S: AsRef<str>>(&self, left: &[S], right: &[S]) -> Overlap {
        let config = self.config;
        let matrix = CoefficientMatrix::build(left, right, config.multigram_length());
        resolve_overlap(matrix, config.match_minimum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_split() {
        let engine = DiceEngine::new();
        assert_eq!(
            engine.split("alpha bravo").as_slice(),
            [" b", "a ", "al", "av", "br", "ha", "lp", "ph", "ra", "vo"]
        );
    }

    #[test]
    fn test_engine_uses_configured_length() {
        let engine = DiceEngine::with_config(DiceConfig::new(3, 0.5).unwrap());
        assert_eq!(engine.split("abcd").as_slice(), ["abc", "bcd"]);
        // Trigrams of "night"/"nacht" share nothing
        assert_eq!(engine.coefficient("night", "nacht"), 0.0);
    }

    #[test]
    fn test_coefficient_via_multigrams_matches_strings() {
        let engine = DiceEngine::new();
        let a = engine.split("night");
        let b = engine.split("nacht");
        let direct = engine.coefficient("night", "nacht");
        assert!((engine.coefficient_multigrams(&a, &b) - direct).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_hello_world() {
        let engine = DiceEngine::new();
        let mapping = engine.overlap(&["hello", "world"], &["helicopters", "are", "wonderful"]);
        assert_eq!(mapping, vec![None, None]);
    }

    #[test]
    fn test_overlap_threshold_from_config() {
        // "hello" vs "helicopters" scores 4/14
        let lenient = DiceEngine::with_config(DiceConfig::new(2, 0.25).unwrap());
        let mapping = lenient.overlap(&["hello", "world"], &["helicopters", "are", "wonderful"]);
        assert_eq!(mapping[0], Some(0));
    }

    #[test]
    fn test_overlap_owned_strings() {
        let engine = DiceEngine::new();
        let left = vec!["Project plan".to_string(), "Budget".to_string()];
        let right = vec!["Budget v2".to_string(), "Project plans".to_string()];
        let overlap = engine.overlap_detailed(&left, &right);
        assert_eq!(overlap.mapping, vec![Some(1), Some(0)]);
        assert_eq!(overlap.matched_count(), 2);
    }

    #[test]
    fn test_coefficient_matrix_dimensions() {
        let engine = DiceEngine::new();
        let matrix = engine.coefficient_matrix(&["a", "b", "c"], &["a"]);
        assert_eq!((matrix.rows(), matrix.cols()), (3, 1));
    }
}
