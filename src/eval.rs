use crate::board::{Board, Color, Piece, Role, Square};

/// Bonus for standing near the centre, indexed by `[rank][file]`.
const CENTRE_BONUS: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 2, 3, 3, 2, 0, 0],
    [0, 0, 2, 3, 3, 2, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Centipawns per centre bonus point for knights and bishops
const CENTRE_WEIGHT: i32 = 5;

/// Centipawns per rank a pawn has advanced
const ADVANCE_WEIGHT: i32 = 5;

/// Centipawn value of a piece kind.
pub const fn value_of(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20_000,
    }
}

/// Score a board in centipawns from White's point of view.
///
/// Positive favours White, negative favours Black. The score is material
/// plus a centre bonus for knights and bishops plus a bonus for pawns that
/// have moved towards promotion. Unknown squares and whose turn it is play
/// no part.
pub fn evaluate(board: &Board) -> i32 {
    board
        .placement()
        .iter()
        .map(|(square, piece)| match piece.color {
            Color::White => piece_score(square, piece),
            Color::Black => -piece_score(square, piece),
        })
        .sum()
}

/// Value of one piece for its own side.
fn piece_score(square: Square, piece: Piece) -> i32 {
    let positional = match piece.role {
        Role::Knight | Role::Bishop => {
            CENTRE_BONUS[square.rank().to_usize()][square.file().to_usize()] * CENTRE_WEIGHT
        }
        Role::Pawn => ranks_advanced(square, piece.color) * ADVANCE_WEIGHT,
        _ => 0,
    };
    value_of(piece.role) + positional
}

/// Ranks between a square and `color`'s back rank.
fn ranks_advanced(square: Square, color: Color) -> i32 {
    square.rank().distance(color.backrank()) as i32
}
