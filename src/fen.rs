use log::{trace, warn};

use crate::board::{Board, Color, File, Piece, Position, Rank, Square};

/// FEN of the standard starting position
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Decode the piece placement and side to move of a FEN string.
///
/// Decoding never fails. Characters that would land outside the board are
/// consumed and dropped, characters that are not piece letters mark their
/// square as unknown, and everything after the side-to-move character is
/// ignored.
///
/// Only `'w'` selects White; any other side-to-move character, or none at
/// all, leaves Black to move.
pub fn decode(fen: &str) -> Position {
    let (placement, rest) = fen.split_once(' ').unwrap_or((fen, ""));
    let board = decode_placement(placement);

    let side_to_move = match rest.chars().next() {
        Some('w') => Color::White,
        Some('b') => Color::Black,
        other => {
            warn!("unrecognized side to move {other:?}, treating as black");
            Color::Black
        }
    };

    Position::new(board, side_to_move)
}

/// Fill a board from the first FEN field.
fn decode_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    let mut row: usize = 0;
    let mut col: usize = 0;

    for c in placement.chars() {
        match c {
            '/' => {
                row = row.saturating_add(1);
                col = 0;
            }
            '1'..='8' => {
                col = col.saturating_add(c as usize - '0' as usize);
            }
            _ => {
                match (on_board(row, col), Piece::from_char(c)) {
                    (Some(square), Some(piece)) => board.set(square, piece),
                    (Some(square), None) => {
                        trace!("unknown piece {c:?} at {square}");
                        board.set_unknown(square);
                    }
                    (None, _) => trace!("dropping {c:?} outside the board"),
                }
                col = col.saturating_add(1);
            }
        }
    }

    board
}

/// Square under the cursor; row 0 is rank 8.
fn on_board(row: usize, col: usize) -> Option<Square> {
    let file = File::try_from(col).ok()?;
    let rank = Rank::try_from(7usize.checked_sub(row)?).ok()?;
    Some(Square::from_coords(file, rank))
}
