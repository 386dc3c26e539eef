use clap::Args;

use crate::cli::OutputFormat;
use crate::core::config::DiceConfig;
use crate::core::multigram::Multigrams;
use crate::matching::engine::DiceEngine;

#[derive(Args)]
pub struct SplitArgs {
    /// String to split into multigrams
    #[arg(required = true, allow_hyphen_values = true)]
    pub input: String,
}

/// Execute the split command
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SplitArgs, format: OutputFormat, config: DiceConfig) -> anyhow::Result<()> {
    let engine = DiceEngine::with_config(config);
    let multigrams = engine.split(&args.input);

    tracing::debug!(
        chars = args.input.chars().count(),
        multigrams = multigrams.len(),
        "Split input"
    );

    match format {
        OutputFormat::Text => print_text_split(&args, &config, &multigrams),
        OutputFormat::Json => print_json_split(&args, &config, &multigrams)?,
        OutputFormat::Tsv => print_tsv_split(&multigrams),
    }

    Ok(())
}

fn print_text_split(args: &SplitArgs, config: &DiceConfig, multigrams: &Multigrams) {
    println!(
        "{} multigrams of length {} in {:?}",
        multigrams.len(),
        config.multigram_length(),
        args.input
    );
    for gram in multigrams {
        println!("  {gram:?}");
    }
}

fn print_json_split(
    args: &SplitArgs,
    config: &DiceConfig,
    multigrams: &Multigrams,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input,
        "multigram_length": config.multigram_length().get(),
        "multigrams": multigrams,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_split(multigrams: &Multigrams) {
    println!("index\tmultigram");
    for (i, gram) in multigrams.iter().enumerate() {
        println!("{i}\t{gram}");
    }
}
