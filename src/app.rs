//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads or defaults the model parameters
//! - runs the comparison pipeline
//! - renders figures, writes optional exports and prints the summary

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Command, CompareArgs, EosTableArgs};
use crate::domain::{CompareConfig, ModelPair};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable selecting the log line format (`json` or text).
pub const LOG_FORMAT_ENV: &str = "IDT_LOG_FORMAT";

/// Entry point for the `idt` binary.
pub fn run() -> Result<(), AppError> {
    // `idt` and `idt --no-plots` behave like `idt compare ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_tracing(cli.verbose);

    match cli.command {
        Command::Compare(args) => handle_compare(args),
        Command::EosTable(args) => handle_eos_table(args),
    }
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let config = compare_config_from_args(&args);
    let models = load_models(config.params.as_deref())?;
    let run = pipeline::run_comparison(&models, config.integration)?;

    let plots_dir = if config.plots {
        crate::plot::render_all(&run, &config.output_dir)?;
        Some(config.output_dir.as_path())
    } else {
        tracing::info!("plot rendering skipped");
        None
    };

    if let Some(path) = &config.export_csv {
        crate::io::write_series_csv(path, &run)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::write_comparison_json(path, &run)?;
    }

    print!("{}", crate::report::format_summary(&run, plots_dir));
    Ok(())
}

fn handle_eos_table(args: EosTableArgs) -> Result<(), AppError> {
    let models = load_models(args.params.as_deref())?;
    print!("{}", crate::report::format_eos_table(&models.enhanced));
    Ok(())
}

/// Parameter file if given, otherwise the reference models.
fn load_models(params: Option<&Path>) -> Result<ModelPair, AppError> {
    match params {
        Some(path) => crate::io::read_params_file(path),
        None => crate::io::resolve_params(ModelPair::default()),
    }
}

pub fn compare_config_from_args(args: &CompareArgs) -> CompareConfig {
    CompareConfig {
        output_dir: args.output_dir.clone(),
        params: args.params.clone(),
        integration: args.integration,
        plots: !args.no_plots,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Default filter directive for a `-v` count.
fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "idt_class=warn",
        1 => "idt_class=info",
        _ => "idt_class=debug",
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v == "json");

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}

/// Rewrite argv so `idt` defaults to `idt compare`.
///
/// Rules:
/// - `idt`                      -> `idt compare`
/// - `idt --no-plots ...`       -> `idt compare --no-plots ...`
/// - `idt --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("compare".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "compare" | "eos-table");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "compare flags".
    if arg1.starts_with('-') {
        argv.insert(1, "compare".to_string());
        return argv;
    }

    argv
}
