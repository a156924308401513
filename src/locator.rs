use crate::board::{
    Board, File, Piece, Rank, Role, Square, pawn_start_rank, pawn_step, scan_order, shift,
};

/// Knight jumps as (file, rank) deltas
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
    (-2, -1),
    (2, -1),
    (-1, -2),
    (1, -2),
];

const DIAGONALS: [(i32, i32); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

const ORTHOGONALS: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Source constraints taken from disambiguation characters of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hints {
    pub file: Option<File>,
    pub rank: Option<Rank>,
}

impl Hints {
    #[inline]
    pub const fn none() -> Self {
        Self {
            file: None,
            rank: None,
        }
    }

    /// Whether `square` satisfies every given hint.
    pub fn admits(&self, square: Square) -> bool {
        self.file.is_none_or(|file| file == square.file())
            && self.rank.is_none_or(|rank| rank == square.rank())
    }
}

/// Find the square of `piece` that can move to `destination`.
///
/// Squares are searched from a8 rank by rank and the first match is
/// returned, so when several pieces fit and the hints do not separate them
/// the one nearest a8 wins. Only movement geometry is checked: pins, checks
/// and the colour of whatever stands on `destination` are not.
pub fn locate(board: &Board, piece: Piece, destination: Square, hints: Hints) -> Option<Square> {
    scan_order().find(|&from| {
        board.piece_at(from) == Some(piece)
            && hints.admits(from)
            && can_reach(board, piece, from, destination)
    })
}

/// Whether `piece` standing on `from` can geometrically move to `to`.
pub fn can_reach(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.role {
        Role::Pawn => pawn_reaches(board, piece, from, to),
        Role::Knight => steps_to(from, to, &KNIGHT_OFFSETS),
        Role::Bishop => slides_to(board, from, to, &DIAGONALS),
        Role::Rook => slides_to(board, from, to, &ORTHOGONALS),
        Role::Queen => slides_to(board, from, to, &ALL_DIRECTIONS),
        Role::King => steps_to(from, to, &ALL_DIRECTIONS),
    }
}

fn pawn_reaches(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let forward = pawn_step(piece.color);

    if from.file() == to.file() && board.is_empty_at(to) {
        if shift(from, 0, forward) == Some(to) {
            return true;
        }
        // Double step from the starting rank over an empty square
        if from.rank() == pawn_start_rank(piece.color)
            && shift(from, 0, 2 * forward) == Some(to)
            && shift(from, 0, forward).is_some_and(|between| board.is_empty_at(between))
        {
            return true;
        }
    }

    // Diagonal step, whether a capture or en passant
    shift(from, -1, forward) == Some(to) || shift(from, 1, forward) == Some(to)
}

fn steps_to(from: Square, to: Square, offsets: &[(i32, i32)]) -> bool {
    offsets
        .iter()
        .any(|&(files, ranks)| shift(from, files, ranks) == Some(to))
}

/// Cast rays from `from`; each ray stops at the first occupied square.
fn slides_to(board: &Board, from: Square, to: Square, directions: &[(i32, i32)]) -> bool {
    directions.iter().any(|&(files, ranks)| {
        let mut current = shift(from, files, ranks);
        while let Some(square) = current {
            if square == to {
                return true;
            }
            if !board.is_empty_at(square) {
                return false;
            }
            current = shift(square, files, ranks);
        }
        false
    })
}
