//! surfmc — interactive Monte-Carlo front-end for the surf-break simulator.
//!
//! Collects the session parameters from a short prompt loop (blank input
//! keeps the default), runs the batch, and prints a formatted summary.
//! Errors raised by the core are reported as a message; the process still
//! exits normally afterward.
//!
//! An optional first argument names a JSON file overriding [`SimParams`]
//! (partial files are fine — missing fields keep their defaults).

use std::io::{self, Write as _};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};

use surf_core::{RuleType, SimParams, SpotLevel};
use surf_mc::{run_many, McOutcome};
use surf_output::{CsvWriter, OutputWriter, RunRow, SummaryRow};
use surf_session::{SessionRequest, DEFAULT_SESSION_DURATION_SECS};

const DEFAULT_ITERATIONS: usize = 30;
const DEFAULT_SEED: u64 = 42;

// ── Prompt helpers ────────────────────────────────────────────────────────────

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_owned()
}

/// Prompt for a value, falling back to `default` on blank or invalid input.
fn get_input<T>(prompt: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    let line = read_line(&format!("{prompt} [Default: {default}]: "));
    if line.is_empty() {
        return default;
    }
    match line.parse() {
        Ok(value) => value,
        Err(_) => {
            println!("Invalid input. Using default value: {default}");
            default
        }
    }
}

/// Prompt for an optional path; blank input means "skip".
fn get_optional_path(prompt: &str) -> Option<String> {
    let line = read_line(&format!("{prompt} [blank to skip]: "));
    if line.is_empty() { None } else { Some(line) }
}

// ── Params file ───────────────────────────────────────────────────────────────

fn load_params(path: &Path) -> Result<SimParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading params file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing params file {}", path.display()))
}

// ── CSV export ────────────────────────────────────────────────────────────────

fn export_csv(dir: &str, outcome: &McOutcome) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut writer = CsvWriter::new(Path::new(dir))?;
    writer.write_runs(&RunRow::from_outcome(outcome))?;
    writer.write_summary(&SummaryRow::from_outcome(outcome))?;
    writer.finish()?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!();
    println!("{}", "=".repeat(40));
    println!("Surf-break Monte Carlo simulator");
    println!("{}", "=".repeat(40));
    println!();

    let params = match std::env::args().nth(1) {
        Some(path) => load_params(Path::new(&path))?,
        None => SimParams::default(),
    };

    println!("Please configure the simulation parameters:");
    println!();

    let spot = get_input("Spot level (beginner/mixed/advanced)", SpotLevel::Beginner);
    let rule = get_input("Rule type (free-for-all/safe-distance)", RuleType::FreeForAll);
    let num_surfers = get_input("Number of surfers (0 for realistic auto-count)", 0usize);
    let duration = get_input("Session duration (seconds)", DEFAULT_SESSION_DURATION_SECS);
    let iterations = get_input("Number of iterations", DEFAULT_ITERATIONS);
    let seed = get_input("RNG seed", DEFAULT_SEED);
    let output_dir = get_optional_path("CSV output directory");

    let req = SessionRequest {
        num_surfers: if num_surfers == 0 { None } else { Some(num_surfers) },
        duration_secs: duration,
        ..SessionRequest::new(spot, rule)
    };

    println!();
    println!("{}", "-".repeat(40));
    println!("Running {iterations} Monte Carlo iterations...");
    println!("{}", "-".repeat(40));

    let t0 = Instant::now();
    match run_many(&req, &params, iterations, seed) {
        Ok(outcome) => {
            let elapsed = t0.elapsed();
            let mean = &outcome.mean;
            let std = &outcome.std;

            println!();
            println!("Simulation results ({} runs in {:.3} s):", outcome.runs.len(),
                     elapsed.as_secs_f64());
            println!("  - Spot level      : {spot}");
            println!("  - Rule            : {rule}");
            println!("  - Surfers (approx): {:.0}", mean.n_surfers);
            println!("  - Waves per run   : {:.1}", mean.wave_counts);
            println!(
                "  - Success rides   : {:.2} ± {:.2} rides/surfer",
                mean.avg_success_count, std.avg_success_count
            );
            println!(
                "  - Collisions      : {:.2} ± {:.2} collisions/surfer",
                mean.avg_collision_count, std.avg_collision_count
            );
            println!("  - Fairness (Gini) : {:.4}", mean.fairness);
            println!("  - Avg wait time   : {:.1} s", mean.avg_waiting_time);

            if let Some(dir) = output_dir {
                match export_csv(&dir, &outcome) {
                    Ok(()) => println!("  - CSV written to  : {dir}"),
                    Err(e) => eprintln!("CSV export failed: {e}"),
                }
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("Error: {e}");
        }
    }

    println!();
    println!("Done.");
    Ok(())
}
