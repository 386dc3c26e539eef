use clap::Args;

use crate::cli::OutputFormat;
use crate::core::config::DiceConfig;
use crate::matching::engine::DiceEngine;

#[derive(Args)]
pub struct CoefficientArgs {
    /// First string
    #[arg(required = true, allow_hyphen_values = true)]
    pub a: String,

    /// Second string
    #[arg(required = true, allow_hyphen_values = true)]
    pub b: String,
}

/// Execute the coefficient command
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CoefficientArgs, format: OutputFormat, config: DiceConfig) -> anyhow::Result<()> {
    let engine = DiceEngine::with_config(config);
    let coefficient = engine.coefficient(&args.a, &args.b);

    match format {
        OutputFormat::Text => {
            println!("Comparing {:?} and {:?}", args.a, args.b);
            println!("  Multigram length: {}", config.multigram_length());
            println!("  Dice coefficient: {coefficient:.4}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "a": args.a,
                "b": args.b,
                "multigram_length": config.multigram_length().get(),
                "coefficient": coefficient,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("a\tb\tmultigram_length\tcoefficient");
            println!(
                "{}\t{}\t{}\t{coefficient:.4}",
                args.a,
                args.b,
                config.multigram_length()
            );
        }
    }

    Ok(())
}
