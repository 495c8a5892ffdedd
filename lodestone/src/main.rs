//! # lodestone
//!
//! Recovers the 48-bit structure seed of a world from a handful of
//! observed shipwrecks, ruined portals, and villages.
#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::single_call_fn)]

mod input;
mod output;

use anyhow::{Context, bail};
use clap::Parser;
use lodestone_core::{Solver, select_solver};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

/// Structure-seed recovery from observed structures.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the constraints file.
    file: PathBuf,

    /// Worker threads; 0 means one per core.
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Where to write the surviving seeds.
    #[arg(long, default_value = "found_seeds.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let start = Instant::now();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("building the worker pool")?;
    }

    let parsed = input::parse_file(&args.file)?;
    info!("{} constraints parsed", parsed.constraints.len());
    if let Some(pillar) = parsed.pillar_seed {
        info!("pillar seed {pillar}");
    }
    if parsed.constraints.is_empty() && parsed.pillar_seed.is_none() {
        bail!("no usable constraints in {}", args.file.display());
    }

    let solver =
        select_solver(parsed.constraints, parsed.pillar_seed).map_err(anyhow::Error::msg)?;
    let seeds = solver.solve();
    info!("{} seeds survived every constraint", seeds.len());

    let written = output::write_seeds(&args.output, seeds)?;
    info!("wrote {written} seeds to {}", args.output.display());
    info!("finished in {:.3} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
