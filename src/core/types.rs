use serde::{Deserialize, Serialize};

/// A mutually-preferred pairing accepted by the overlap resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapMatch {
    /// Index into the first list
    pub left: usize,

    /// Index into the second list
    pub right: usize,

    /// Dice coefficient of the pair, at least the configured match minimum
    pub coefficient: f64,
}

/// Full outcome of resolving the overlap between two lists of strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlap {
    /// One entry per element of the first list: the matched index in the second list, if any
    pub mapping: Vec<Option<usize>>,

    /// Accepted matches in the order they were resolved
    pub matches: Vec<OverlapMatch>,

    /// Number of row/column maximum scans performed
    pub passes: usize,
}

impl Overlap {
    /// An overlap for `len` left-hand strings with nothing matched
    #[must_use]
    pub fn unmatched(len: usize) -> Self {
        Self {
            mapping: vec![None; len],
            matches: Vec::new(),
            passes: 0,
        }
    }

    /// Number of left-hand strings that found a partner
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matches.len()
    }

    /// Indices into the first list that found no partner
    pub fn unmatched_left(&self) -> impl Iterator<Item = usize> + '_ {
        self.mapping
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.is_none().then_some(i))
    }

    /// Indices into a second list of `right_len` strings that no left-hand string claimed
    #[must_use]
    pub fn unmatched_right(&self, right_len: usize) -> Vec<usize> {
        let mut claimed = vec![false; right_len];
        for m in &self.matches {
            if let Some(slot) = claimed.get_mut(m.right) {
                *slot = true;
            }
        }
        claimed
            .into_iter()
            .enumerate()
            .filter_map(|(j, taken)| (!taken).then_some(j))
            .collect()
    }
}
