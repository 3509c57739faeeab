//! Command-line front end for the nonet solving engine.
//!
//! Reads a 9-row grid from a file or standard input, solves it without
//! guessing, and reports what it did. With `--step` every placement is
//! printed as it happens, together with the reasoning that forced it.

use std::{error::Error, fs, io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use log::debug;
use nonet_core::{Puzzle, Variant};
use nonet_solver::BatchSolver;

#[derive(Parser)]
#[command(
    name = "nonet",
    version,
    about = "Deductive sudoku solving with explanations, for classic and NRC grids"
)]
struct Cli {
    /// Puzzle file holding 9 rows of 9 characters, with '.' or ' ' for
    /// blanks. Reads standard input when omitted.
    path: Option<PathBuf>,

    /// Grid variant to solve under.
    #[arg(long, value_enum, default_value_t = VariantArg::Classic)]
    variant: VariantArg,

    /// Print every placement with the reasoning that forced it.
    #[arg(long)]
    step: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// Rows, columns, and boxes.
    Classic,
    /// Classic groups plus the four NRC regions.
    Nrc,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Classic => Self::Classic,
            VariantArg::Nrc => Self::Nrc,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut puzzle = read_puzzle(&cli)?;
    let solver = BatchSolver::with_all_techniques();

    if cli.step {
        run_steps(&solver, &mut puzzle)
    } else {
        run_batch(&solver, &mut puzzle);
        Ok(())
    }
}

fn read_puzzle(cli: &Cli) -> Result<Puzzle, Box<dyn Error>> {
    let text = match &cli.path {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    debug!("read {} bytes", text.len());
    // Blank rows in NRC grids are all spaces, so only skip truly empty lines.
    let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
    Ok(Puzzle::new(cli.variant.into(), &rows)?)
}

fn run_steps(solver: &BatchSolver, puzzle: &mut Puzzle) -> Result<(), Box<dyn Error>> {
    while let Some(step) = solver.step(puzzle)? {
        println!("{} = {}", step.cell(), step.digit());
        for reason in step.reasons() {
            println!("  {}", reason.method());
            for record in reason.evidence() {
                println!("    {record}");
            }
        }
    }
    print_grid(puzzle);
    println!("{}", if puzzle.is_complete() { "solved" } else { "stuck" });
    Ok(())
}

fn run_batch(solver: &BatchSolver, puzzle: &mut Puzzle) {
    let outcome = solver.solve(puzzle);
    print_grid(puzzle);
    println!("{} after {} placements", outcome.state(), outcome.steps());
    for (technique, count) in outcome.eliminations() {
        println!("  {technique}: {count} candidates removed");
    }
}

fn print_grid(puzzle: &Puzzle) {
    for row in puzzle.to_rows() {
        println!("{row}");
    }
}
