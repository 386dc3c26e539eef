//! Dice coefficient scoring and overlap resolution.
//!
//! This module provides the algorithmic core:
//!
//! - [`DiceEngine`]: Main entry point, holding a [`DiceConfig`](crate::core::config::DiceConfig)
//! - [`scoring`]: Dice coefficient between strings or multigram sequences, and the pairwise matrix
//! - [`overlap`]: Greedy mutual-maximum resolution of a coefficient matrix
//!
//! ## Dice Coefficient
//!
//! For two sorted multigram sequences `A` and `B`:
//!
//! ```text
//! 2 |A ∩ B| / (|A| + |B|)
//! ```
//!
//! The intersection is counted with a linear merge, so duplicate grams match
//! at most as often as they occur on the rarer side.
//!
//! ## Overlap
//!
//! ```text
//! left   ["AB", "CD", "EF", "GH", "IJ"]
//!           0     1     2     3     4
//!           |     |                 |
//! overlap [ 0,    2,  None, None,   3 ]
//!           |      \               /
//!           0     1  2            3
//! right  ["AA", "XY", "CD", "IJ"]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dice_overlap::{DiceConfig, DiceEngine};
//!
//! let engine = DiceEngine::with_config(DiceConfig::new(1, 0.5).unwrap());
//! let mapping = engine.overlap(
//!     &["AB", "CD", "EF", "GH", "IJ"],
//!     &["AA", "XY", "CD", "IJ"],
//! );
//! assert_eq!(mapping, vec![Some(0), Some(2), None, None, Some(3)]);
//! ```

pub mod engine;
pub mod overlap;
pub mod scoring;

pub use engine::DiceEngine;
