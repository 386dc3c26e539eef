//! Parsers for the string lists fed to overlap resolution.
//!
//! Two layouts are understood:
//!
//! - **Plain text**: one string per line; blank lines are skipped
//! - **JSON**: a single array of strings
//!
//! ## Example
//!
//! ```rust
//! use dice_overlap::parsing::list::{parse_list_text, ListFormat};
//!
//! let labels = parse_list_text("Revenue\nTotal cost\n\nHeadcount\n", ListFormat::Lines).unwrap();
//! assert_eq!(labels, ["Revenue", "Total cost", "Headcount"]);
//! ```

pub mod list;
