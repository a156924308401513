use clap::Parser;
use log::{debug, warn};

/// Choose a move by one-ply evaluation and print its 0-based index.
#[derive(Debug, Parser)]
#[command(name = "plyscore", version)]
struct Args {
    /// Current position in Forsyth-Edwards Notation
    fen: String,

    /// Space separated legal moves in algebraic notation
    moves: String,

    /// Seconds available to decide (unused by a one-ply search)
    #[arg(allow_hyphen_values = true)]
    timeout: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let timeout = parse_seconds(&args.timeout);
    debug!("fen {:?}, timeout {timeout}s", args.fen);

    let index = plyscore::select(&args.fen, &args.moves, timeout);
    println!("{index}");
    Ok(())
}

/// Read a leading integer the way `atoi` does, falling back to 0.
fn parse_seconds(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    trimmed[..end].parse().unwrap_or_else(|_| {
        warn!("timeout {text:?} is not a number, using 0");
        0
    })
}
