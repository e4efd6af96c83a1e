//! # Example Subcommand
//!
//! Prints the payload of the "Legislation waste management" reference
//! assessment.

use anyhow::{Context, Result};
use clap::Args;

use assessment_core::example::reference_assessment;

/// Arguments for the `assessment example` subcommand.
#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Print compact JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the example subcommand.
pub fn run_example(args: &ExampleArgs) -> Result<u8> {
    let assessment = reference_assessment().context("failed to build reference assessment")?;
    let rendered = if args.compact {
        serde_json::to_string(&assessment)
    } else {
        serde_json::to_string_pretty(&assessment)
    }
    .context("failed to serialize reference assessment")?;

    println!("{rendered}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_example_succeeds_in_both_formats() {
        assert_eq!(run_example(&ExampleArgs { compact: true }).unwrap(), 0);
        assert_eq!(run_example(&ExampleArgs { compact: false }).unwrap(), 0);
    }
}
