use std::fmt;

use shakmaty::Bitboard;
pub use shakmaty::{Color, File, Piece, Rank, Role, Square};

/// Every square in reading order: rank 8 down to rank 1, file a to h within a rank.
pub fn scan_order() -> impl Iterator<Item = Square> {
    Rank::ALL
        .into_iter()
        .rev()
        .flat_map(|rank| File::ALL.map(|file| Square::from_coords(file, rank)))
}

/// The square `files` to the right and `ranks` up from `square`, if still on the board.
pub fn shift(square: Square, files: i32, ranks: i32) -> Option<Square> {
    Some(Square::from_coords(
        square.file().offset(files)?,
        square.rank().offset(ranks)?,
    ))
}

/// Ranks a pawn of `color` gains per step.
#[inline]
pub fn pawn_step(color: Color) -> i32 {
    color.fold_wb(1, -1)
}

/// Rank from which a pawn of `color` may advance two squares.
#[inline]
pub const fn pawn_start_rank(color: Color) -> Rank {
    color.relative_rank(Rank::Second)
}

/// Piece placement plus squares holding something that is not a chess piece.
///
/// Unknown squares come from unrecognised FEN letters or promotion letters.
/// They block rays and pawn pushes like a piece, are worth nothing, and are
/// replaced by whatever moves onto them.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    placement: shakmaty::Board,
    unknown: Bitboard,
}

impl Board {
    pub fn empty() -> Self {
        Self::from(shakmaty::Board::empty())
    }

    /// The chess pieces, without unknown squares.
    #[inline]
    pub fn placement(&self) -> &shakmaty::Board {
        &self.placement
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.placement.piece_at(square)
    }

    #[inline]
    pub fn is_unknown_at(&self, square: Square) -> bool {
        self.unknown.contains(square)
    }

    /// Neither a piece nor an unknown marker stands here.
    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        !self.placement.occupied().contains(square) && !self.is_unknown_at(square)
    }

    /// Put a piece on a square, replacing whatever stood there.
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.unknown.discard(square);
        self.placement.set_piece_at(square, piece);
    }

    /// Mark a square as holding an unrecognised piece.
    pub fn set_unknown(&mut self, square: Square) {
        self.placement.discard_piece_at(square);
        self.unknown.add(square);
    }

    /// Remove whatever stands on a square.
    pub fn clear(&mut self, square: Square) {
        self.placement.discard_piece_at(square);
        self.unknown.discard(square);
    }

    /// Number of chess pieces on the board.
    pub fn count(&self) -> usize {
        self.placement.occupied().count()
    }
}

impl From<shakmaty::Board> for Board {
    fn from(placement: shakmaty::Board) -> Self {
        Self {
            placement,
            unknown: Bitboard::EMPTY,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Board");
        tuple.field(&self.placement.board_fen().to_string());
        if !self.unknown.is_empty() {
            tuple.field(&self.unknown.into_iter().collect::<Vec<_>>());
        }
        tuple.finish()
    }
}

/// A board together with the side to move.
///
/// Positions are never mutated; moves are tried on copies of [`Position::board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    #[inline]
    pub const fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}
