use std::io::{self, Write};

use shakmaty::{File, Rank, Square};

use crate::board::{Board, Position};

/// Draws the board of a position to stdout with the side to move underneath.
pub fn draw_board(position: &Position) -> io::Result<()> {
    let mut out = io::stdout().lock();
    render_board(&mut out, position.board())?;
    writeln!(out, "{:?} to move", position.side_to_move())?;
    out.flush()
}

/// Render a board to any writer, rank 8 at the top. Extracted for testability.
pub fn render_board(w: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(w, "╔═══╦═════════════════════════╗")?;

    for rank in Rank::ALL.iter().rev() {
        write!(w, "║ {} ║", rank.char())?;
        for file in File::ALL {
            let square = Square::from_coords(file, *rank);
            match board.piece_at(square) {
                Some(piece) => write!(w, " {} ", piece.char())?,
                None if board.is_unknown_at(square) => write!(w, " ? ")?,
                None => write!(w, " · ")?,
            }
        }
        writeln!(w, " ║")?;
    }

    writeln!(w, "╠═══╬═════════════════════════╣")?;
    writeln!(w, "║   ║ a  b  c  d  e  f  g  h  ║")?;
    writeln!(w, "╚═══╩═════════════════════════╝")?;
    writeln!(
        w,
        "Placement: {} | Pieces: {:02}",
        board.placement().board_fen(),
        board.count()
    )
}
