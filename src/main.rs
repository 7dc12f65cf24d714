//! Harness runner binary.
//!
//! Lists and executes the registered harness drivers, reporting outcomes
//! as human-readable lines or as a JSON run report. The process exits
//! with a non-zero status when any harness produces an outcome other
//! than the one it is registered to produce.

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use proofbed::harness::{self, HarnessSpec};
use proofbed::report::{HarnessResult, RunReport};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered harnesses.
    List,
    /// Execute all harnesses, or a single one selected by name.
    Run {
        /// Execute only the named harness.
        #[arg(long)]
        harness: Option<String>,
        /// Emit the run report as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Run { harness, json } => run(harness.as_deref(), json),
    }
}

#[expect(clippy::print_stdout, reason = "listing is the subcommand's output contract")]
fn list() {
    for spec in harness::registry() {
        println!("{} [{}] expects {}", spec.name, spec.kind, spec.expected);
    }
}

fn run(selected: Option<&str>, json: bool) -> Result<()> {
    let specs: Vec<&HarnessSpec> = match selected {
        Some(name) => {
            vec![harness::find(name).ok_or_else(|| anyhow!("unknown harness: {name}"))?]
        }
        None => harness::registry().iter().collect(),
    };

    let report = RunReport::new(execute_quietly(&specs));
    print_report(&report, json)?;

    if !report.all_as_expected() {
        bail!("{} of {} harnesses produced unexpected outcomes", report.unexpected, report.total);
    }
    Ok(())
}

/// Executes the selected harnesses with the panic hook silenced.
///
/// The bounds-overrun counterexample panics by design; its backtrace
/// belongs in the report detail, not on stderr.
fn execute_quietly(specs: &[&'static HarnessSpec]) -> Vec<HarnessResult> {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));

    let results = specs
        .iter()
        .map(|spec| {
            let observed = spec.execute();
            info!(
                harness = spec.name,
                as_expected = spec.is_expected(&observed),
                "harness finished"
            );
            HarnessResult::new(spec, &observed)
        })
        .collect();

    std::panic::set_hook(previous);
    results
}

#[expect(clippy::print_stdout, reason = "the report is the subcommand's output contract")]
fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for result in &report.results {
        let status = if result.as_expected { "ok" } else { "UNEXPECTED" };
        let detail = result
            .detail
            .as_ref()
            .map_or_else(String::new, |text| format!(": {text}"));
        println!("{status:>10}  {} [{}]{detail}", result.name, result.kind);
    }
    println!("{} harnesses, {} unexpected", report.total, report.unexpected);
    Ok(())
}
