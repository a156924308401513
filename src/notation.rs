use crate::apply::ApplyError;
use shakmaty::CastlingSide;

use crate::board::{File, Rank, Role, Square};
use crate::config::MAX_TOKEN_LEN;
use crate::locator::Hints;

/// What a pawn turns into on reaching the last rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    To(Role),
    /// A letter that names no piece; the destination holds an unknown piece.
    Unknown(char),
}

/// A non-castling move decoded from algebraic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMove {
    pub role: Role,
    pub hints: Hints,
    /// Whether the token carried an `x`; informational only
    pub capture: bool,
    pub destination: Square,
    pub promotion: Option<Promotion>,
}

/// One move token broken into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveToken {
    Castle(CastlingSide),
    Piece(PieceMove),
}

impl MoveToken {
    /// Parse a token such as `e4`, `Nbd2`, `exd5`, `R1a3`, `e8=Q+` or `O-O-O`.
    ///
    /// Tokens are cut to [`MAX_TOKEN_LEN`] characters first. Check and mate
    /// markers are dropped, as is anything between the piece letter and the
    /// destination that is neither `x`, a file letter nor a rank digit.
    pub fn parse(token: &str) -> Result<Self, ApplyError> {
        let token = truncate(token, MAX_TOKEN_LEN);

        if let Some(side) = castle_literal(token) {
            return Ok(MoveToken::Castle(side));
        }

        let chars: Vec<char> = token.trim_end_matches(['+', '#']).chars().collect();

        let (body, promotion) = match chars.as_slice() {
            [rest @ .., '=', letter] if chars.len() >= 4 => (rest, Some(promotion_of(*letter))),
            all => (all, None),
        };

        let (role, body) = match body.first().copied().and_then(named_piece) {
            Some(role) => (role, &body[1..]),
            None => (Role::Pawn, body),
        };

        let [between @ .., file, rank] = body else {
            return Err(ApplyError::TokenTooShort);
        };
        let destination = destination(*file, *rank).ok_or(ApplyError::DestinationOutOfRange {
            file: *file,
            rank: *rank,
        })?;

        let mut hints = Hints::none();
        let mut capture = false;
        for &c in between {
            match c {
                'x' => capture = true,
                'a'..='h' => hints.file = File::from_char(c),
                '1'..='8' => hints.rank = Rank::from_char(c),
                _ => {}
            }
        }

        Ok(MoveToken::Piece(PieceMove {
            role,
            hints,
            capture,
            destination,
            promotion,
        }))
    }
}

fn castle_literal(token: &str) -> Option<CastlingSide> {
    match token {
        "O-O" | "O-O+" | "O-O#" => Some(CastlingSide::KingSide),
        "O-O-O" | "O-O-O+" | "O-O-O#" => Some(CastlingSide::QueenSide),
        _ => None,
    }
}

fn destination(file: char, rank: char) -> Option<Square> {
    Some(Square::from_coords(File::from_char(file)?, Rank::from_char(rank)?))
}

/// Piece letters that may open a token; pawns are never named.
fn named_piece(letter: char) -> Option<Role> {
    match letter {
        'N' | 'B' | 'R' | 'Q' | 'K' => Role::from_char(letter),
        _ => None,
    }
}

fn promotion_of(letter: char) -> Promotion {
    Role::from_char(letter).map_or(Promotion::Unknown(letter), Promotion::To)
}

/// The first `max` characters of `s`.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    s.char_indices().nth(max).map_or(s, |(end, _)| &s[..end])
}
