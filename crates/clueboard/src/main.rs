//! Clue board move targets
//!
//! Loads a board from its setup and layout files and prints every cell a
//! token can land on from a given start cell and roll.

use std::path::PathBuf;

use clap::Parser;

use cb_core::{Board, BoardConfig, CellPos};

/// Clue board move target query
#[derive(Parser, Debug)]
#[command(name = "clueboard")]
#[command(author, version, about = "Clue board - where can I move?", long_about = None)]
struct Args {
    /// JSON settings file naming the data directory and board files
    #[arg(short = 'c', long = "config", conflicts_with_all = ["data_dir", "layout", "setup"])]
    config: Option<PathBuf>,

    /// Directory holding the board files
    #[arg(long = "data-dir", default_value = cb_core::config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Layout file name inside the data directory
    #[arg(long = "layout", default_value = "ClueLayout.csv")]
    layout: String,

    /// Setup file name inside the data directory
    #[arg(long = "setup", default_value = "ClueSetup.txt")]
    setup: String,

    /// Start row
    #[arg(short = 'r', long = "row")]
    row: usize,

    /// Start column
    #[arg(short = 'k', long = "col")]
    col: usize,

    /// Number of steps rolled
    #[arg(short = 's', long = "steps", value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,

    /// Cell holding another token, as ROW,COL (repeatable)
    #[arg(short = 'o', long = "occupied", value_parser = parse_pos)]
    occupied: Vec<CellPos>,

    /// Print targets as JSON
    #[arg(long = "json")]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn parse_pos(s: &str) -> Result<CellPos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row '{row}': {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column '{col}': {e}"))?;
    Ok(CellPos::new(row, col))
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => BoardConfig::from_json_file(path)?,
        None => BoardConfig::new(args.layout.clone(), args.setup.clone())
            .with_data_dir(args.data_dir.clone()),
    };

    let mut board = Board::load(&config)?;
    tracing::info!(
        rows = board.num_rows(),
        columns = board.num_columns(),
        "loaded board"
    );

    let start = CellPos::new(args.row, args.col);
    if board.cell_at(start).is_none() {
        return Err(format!(
            "start {start} is off the {}x{} board",
            board.num_rows(),
            board.num_columns()
        )
        .into());
    }

    for pos in &args.occupied {
        if !board.set_occupied(*pos, true) {
            tracing::warn!(%pos, "occupied cell is off the board, ignored");
        }
    }

    board.calc_targets(start, args.steps);
    let mut targets: Vec<CellPos> = board.targets().iter().copied().collect();
    targets.sort();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    for pos in &targets {
        let room = board
            .cell_at(*pos)
            .and_then(|cell| board.room_for_cell(cell))
            .map(|room| room.name())
            .unwrap_or("?");
        println!("{pos}\t{room}");
    }
    println!(
        "{} target(s) from {start} with {} step(s)",
        targets.len(),
        args.steps
    );

    Ok(())
}
