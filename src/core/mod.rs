//! Core data types for Dice similarity.
//!
//! - [`DiceConfig`](config::DiceConfig): Window width and match minimum, validated on construction
//! - [`Multigrams`](multigram::Multigrams): A sorted sequence of fixed-width substrings
//! - [`Overlap`](types::Overlap), [`OverlapMatch`](types::OverlapMatch): Resolver results
//!
//! ## Multigrams
//!
//! With the default window width of 2:
//!
//! | Input         | Multigrams                                            |
//! |---------------|-------------------------------------------------------|
//! | `night`       | `gh`, `ht`, `ig`, `ni`                                |
//! | `alpha bravo` | `" b"`, `"a "`, `al`, `av`, `br`, `ha`, `lp`, `ph`, `ra`, `vo` |
//! | `a`           | (none)                                                |

pub mod config;
pub mod multigram;
pub mod types;
