//! `sdelay`: print a software delay loop for a PicoBlaze-style target

mod duration;

use anyhow::{Context, Result};
use clap::Parser;
use sdelay_emitter::{emit_with, render, EmitOptions};
use sdelay_solver::{Solution, Solver};
use sdelay_spec::{DelayRequest, SolverConfig, DEFAULT_LABEL};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a nested-counter software delay loop")]
struct Opts {
    /// Clock speed in MHz
    #[arg(short, long)]
    clock: f64,
    /// Clock cycles per instruction
    #[arg(long, default_value_t = 2)]
    cycles: u32,
    /// Delay to generate: seconds, or a number with s/ms/us/ns
    #[arg(short, long, value_parser = duration::parse_seconds)]
    delay: f64,
    /// Label the loop body branches back to
    #[arg(short, long, default_value = DEFAULT_LABEL)]
    label: String,
    /// Most registers the loop may use
    #[arg(long, default_value_t = SolverConfig::DEFAULT.max_registers)]
    max_registers: u8,
    /// Write the listing to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print register count, outer repeats and exact timing to stderr
    #[arg(long)]
    summary: bool,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(solution: &Solution) {
    let config = &solution.configuration;
    eprintln!(
        "registers:      {} (estimate {})",
        config.register_count(),
        solution.seed_register_count
    );
    eprintln!("outer repeats:  {}", config.outer_repeats());
    eprintln!("instructions:   {}", solution.cost.instruction_count);
    eprintln!("cycles:         {}", solution.cost.cycle_count);
    eprintln!("elapsed:        {} s", solution.cost.elapsed_seconds);
    eprintln!("overshoot:      {} s", solution.overshoot_seconds());
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let request = DelayRequest::new(opts.clock, opts.cycles, opts.delay)
        .context("invalid delay request")?;
    let config = SolverConfig::DEFAULT
        .with_max_registers(opts.max_registers)
        .context("invalid --max-registers")?;
    let options = EmitOptions::default()
        .with_label(&opts.label)
        .context("invalid --label")?;

    tracing::debug!(%request, %config, "solving");
    let solution = Solver::new(config)?
        .solve(&request)
        .with_context(|| format!("cannot generate a delay of {} s", request.target_seconds()))?;

    if opts.summary {
        print_summary(&solution);
    }

    let lines = emit_with(&request, &solution.configuration, &solution.cost, &options);
    let text = render(&lines);

    match &opts.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), lines = lines.len(), "listing written");
        }
        None => print!("{}", text),
    }

    Ok(())
}
