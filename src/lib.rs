//! # dice-overlap
//!
//! A library for string similarity with the Dice coefficient over character
//! multigrams, and for matching one list of strings to another.
//!
//! When a list of labels changes between two versions, some entries are
//! renamed, some reordered, some added and some removed. `dice-overlap`
//! recovers which old entry became which new one by pairing strings that are
//! each other's most similar candidate.
//!
//! ## Features
//!
//! - **Multigram splitting**: Sorted fixed-width character windows, duplicates kept
//! - **Dice coefficient**: `2 |A ∩ B| / (|A| + |B|)` via a linear merge of sorted multigrams
//! - **Overlap resolution**: Greedy one-to-one matching of mutual row/column maxima
//! - **Explicit configuration**: Window width and match minimum live in a validated [`DiceConfig`]
//!
//! ## Example
//!
//! ```rust
//! use dice_overlap::{DiceConfig, DiceEngine};
//!
//! let engine = DiceEngine::new();
//! assert!((engine.coefficient("night", "nacht") - 0.25).abs() < 1e-12);
//!
//! let previous = ["Revenue 2023", "Total cost", "Net margin", "Headcount"];
//! let current = ["Net margins", "Revenue 2024", "Office space", "Total costs"];
//! let mapping = engine.overlap(&previous, &current);
//! assert_eq!(mapping, vec![Some(1), Some(3), Some(0), None]);
//!
//! // Stricter matching
//! let strict = DiceEngine::with_config(DiceConfig::new(2, 0.95).unwrap());
//! assert_eq!(strict.overlap(&previous, &current), vec![None, None, None, None]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Configuration, multigrams and result types
//! - [`matching`]: Coefficient calculation and overlap resolution
//! - [`parsing`]: Reading string lists from text or JSON
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::config::{ConfigError, DiceConfig};
pub use core::multigram::{split, Multigrams};
pub use core::types::{Overlap, OverlapMatch};
pub use matching::engine::DiceEngine;
pub use matching::scoring::{coefficient_multigrams, coefficient_strings, CoefficientMatrix};
