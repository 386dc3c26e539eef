use std::num::NonZeroUsize;
use std::ops::Deref;

use serde::Serialize;

/// A sorted sequence of fixed-width substrings taken from a source string.
///
/// Duplicates are kept. Every constructor sorts, so the merge-based intersection
/// in [`crate::matching::scoring`] can rely on ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Multigrams(Vec<String>);

impl Multigrams {
    /// Build from an arbitrary collection of grams, sorting them lexicographically
    #[must_use]
    pub fn from_unsorted(mut grams: Vec<String>) -> Self {
        grams.sort_unstable();
        Self(grams)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Multigrams {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Multigrams {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split a string into its sorted multigrams of width `length`.
///
/// The input is windowed over `char`s. A string of `L` chars yields
/// `max(L - length + 1, 0)` grams; shorter strings yield none.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use dice_overlap::core::multigram::split;
///
/// let grams = split("alpha bravo", NonZeroUsize::new(2).unwrap());
/// assert_eq!(grams.as_slice(), [" b", "a ", "al", "av", "br", "ha", "lp", "ph", "ra", "vo"]);
/// ```
#[must_use]
pub fn split(input: &str, length: NonZeroUsize) -> Multigrams {
    let chars: Vec<char> = input.chars().collect();
    let grams = chars
        .windows(length.get())
        .map(|window| window.iter().collect::<String>())
        .collect();
    Multigrams::from_unsorted(grams)
}
