use clap::Parser;

use plyscore::{fen, select, visualization};

/// Show the decoded board and how every candidate move scores.
#[derive(Debug, Parser)]
#[command(name = "diagnostics", version)]
struct Args {
    /// Position in Forsyth-Edwards Notation
    fen: String,

    /// Space separated moves in algebraic notation
    moves: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let position = fen::decode(&args.fen);
    visualization::draw_board(&position)?;
    println!();

    let tokens = select::split_moves(&args.moves);
    for candidate in select::score_candidates(&position, &tokens) {
        match candidate.outcome {
            Ok(score) => println!("{:>3}  {:<8} {score:>8}", candidate.index, candidate.token),
            Err(e) => println!("{:>3}  {:<8} skipped: {e}", candidate.index, candidate.token),
        }
    }

    let best = if tokens.is_empty() {
        0
    } else {
        select::best_index(&position, &tokens)
    };
    println!("\nselected: {best}");
    Ok(())
}
