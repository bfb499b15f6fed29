//! Command-line parsing for the IDT-CLASS comparison tool.
//!
//! Parsing lives here; dispatch lives in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_OUTPUT_DIR, IntegrationRule};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "idt",
    version,
    about = "Compare ΛCDM with Enhanced IDT (hidden-region dark energy)"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate both models, render the four figures and print the summary.
    Compare(CompareArgs),
    /// Print the Enhanced equation of state on a scale-factor table.
    EosTable(EosTableArgs),
}

/// Options for `idt compare`.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Directory the PNG figures are written to (created if missing).
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// JSON parameter file overriding the reference models.
    #[arg(long, value_name = "JSON")]
    pub params: Option<PathBuf>,

    /// Rule for the dark-energy dilution integral.
    #[arg(long, value_enum, default_value_t = IntegrationRule::Reference)]
    pub integration: IntegrationRule,

    /// Skip rendering the figures.
    #[arg(long)]
    pub no_plots: bool,

    /// Export the per-redshift series to CSV.
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Export the full comparison (parameters, series, tension) to JSON.
    #[arg(long, value_name = "PATH")]
    pub export_json: Option<PathBuf>,
}

/// Options for `idt eos-table`.
#[derive(Debug, Args, Clone)]
pub struct EosTableArgs {
    /// JSON parameter file; only the `enhanced` section is used.
    #[arg(long, value_name = "JSON")]
    pub params: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_defaults() {
        let cli = Cli::try_parse_from(["idt", "compare"]).unwrap();
        assert_eq!(cli.verbose, 0);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.output_dir, PathBuf::from("IDT-CLASS/output/plots"));
        assert_eq!(args.integration, IntegrationRule::Reference);
        assert!(!args.no_plots);
        assert!(args.params.is_none());
        assert!(args.export_csv.is_none() && args.export_json.is_none());
    }

    #[test]
    fn compare_flags() {
        let cli = Cli::try_parse_from([
            "idt",
            "compare",
            "--integration",
            "trapezoid",
            "--no-plots",
            "--export-csv",
            "out.csv",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.integration, IntegrationRule::Trapezoid);
        assert!(args.no_plots);
        assert_eq!(args.export_csv, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn eos_table_subcommand() {
        let cli = Cli::try_parse_from(["idt", "eos-table", "--params", "p.json"]).unwrap();
        let Command::EosTable(args) = cli.command else {
            panic!("expected eos-table");
        };
        assert_eq!(args.params, Some(PathBuf::from("p.json")));
    }

    #[test]
    fn unknown_integration_rule_is_rejected() {
        assert!(Cli::try_parse_from(["idt", "compare", "--integration", "simpson"]).is_err());
    }
}
