//! Overlap command - match the strings of one list file to those of another.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::config::DiceConfig;
use crate::core::types::Overlap;
use crate::matching::engine::DiceEngine;
use crate::parsing::list::parse_list_file;

/// Arguments for the overlap command
#[derive(Args)]
pub struct OverlapArgs {
    /// First list (one string per line, or a JSON array in a .json file)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub list_a: PathBuf,

    /// Second list, in the same formats
    #[arg(required = true)]
    pub list_b: PathBuf,
}

/// Execute the overlap command
///
/// # Errors
///
/// Returns an error if either list cannot be read or parsed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: OverlapArgs,
    format: OutputFormat,
    config: DiceConfig,
    verbose: bool,
) -> anyhow::Result<()> {
    if args.list_a.as_os_str() == "-" && args.list_b.as_os_str() == "-" {
        anyhow::bail!("Only one list can be read from stdin");
    }

    let list_a = read_list(&args.list_a)?;
    let list_b = read_list(&args.list_b)?;

    if verbose {
        eprintln!(
            "Matching {} strings against {} (multigram length {}, match minimum {:.2})",
            list_a.len(),
            list_b.len(),
            config.multigram_length(),
            config.match_minimum()
        );
    }

    let engine = DiceEngine::with_config(config);
    let overlap = engine.overlap_detailed(&list_a, &list_b);

    match format {
        OutputFormat::Text => print_text_overlap(&args, &list_a, &list_b, &overlap),
        OutputFormat::Json => print_json_overlap(&list_a, &list_b, &overlap)?,
        OutputFormat::Tsv => print_tsv_overlap(&list_a, &list_b, &overlap),
    }

    Ok(())
}

fn read_list(path: &Path) -> anyhow::Result<Vec<String>> {
    parse_list_file(path).with_context(|| format!("Failed to read list {}", path.display()))
}

fn print_text_overlap(args: &OverlapArgs, list_a: &[String], list_b: &[String], overlap: &Overlap) {
    println!("Overlap Results");
    println!("{}", "=".repeat(60));

    println!("\nList A: {} ({} strings)", args.list_a.display(), list_a.len());
    println!("List B: {} ({} strings)", args.list_b.display(), list_b.len());

    println!("\nMatches ({}):", overlap.matched_count());
    for m in &overlap.matches {
        println!(
            "  [{}] {:?} -> [{}] {:?} ({:.2}%)",
            m.left,
            list_a[m.left],
            m.right,
            list_b[m.right],
            m.coefficient * 100.0
        );
    }

    let unmatched_a: Vec<usize> = overlap.unmatched_left().collect();
    if !unmatched_a.is_empty() {
        println!("\nOnly in A ({}):", unmatched_a.len());
        for i in unmatched_a {
            println!("  [{i}] {:?}", list_a[i]);
        }
    }

    let unmatched_b = overlap.unmatched_right(list_b.len());
    if !unmatched_b.is_empty() {
        println!("\nOnly in B ({}):", unmatched_b.len());
        for j in unmatched_b {
            println!("  [{j}] {:?}", list_b[j]);
        }
    }
}

fn print_json_overlap(list_a: &[String], list_b: &[String], overlap: &Overlap) -> anyhow::Result<()> {
    let matches: Vec<serde_json::Value> = overlap
        .matches
        .iter()
        .map(|m| {
            serde_json::json!({
                "left": m.left,
                "right": m.right,
                "left_value": list_a[m.left],
                "right_value": list_b[m.right],
                "coefficient": m.coefficient,
            })
        })
        .collect();

    let unmatched_left: Vec<usize> = overlap.unmatched_left().collect();
    let unmatched_right = overlap.unmatched_right(list_b.len());

    let output = serde_json::json!({
        "mapping": overlap.mapping,
        "matches": matches,
        "unmatched_left": unmatched_left,
        "unmatched_right": unmatched_right,
        "passes": overlap.passes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_overlap(list_a: &[String], list_b: &[String], overlap: &Overlap) {
    println!("left_index\tleft\tright_index\tright\tcoefficient");
    for (i, left) in list_a.iter().enumerate() {
        match overlap.matches.iter().find(|m| m.left == i) {
            Some(m) => println!(
                "{i}\t{left}\t{}\t{}\t{:.4}",
                m.right, list_b[m.right], m.coefficient
            ),
            None => println!("{i}\t{left}\t\t\t"),
        }
    }
}
