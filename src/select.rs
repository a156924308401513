use log::{debug, trace};

use crate::apply::{ApplyError, apply};
use crate::board::{Color, Position};
use crate::config::{MAX_MOVE_LIST_LEN, MAX_MOVES, WORST_SCORE};
use crate::eval::evaluate;
use crate::fen;

/// Outcome of trying one candidate move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Position of the token in the move list
    pub index: usize,
    pub token: &'a str,
    /// Evaluation after the move, or why it could not be played
    pub outcome: Result<i32, ApplyError>,
}

/// Pick the best move for the side to move after a one-ply look ahead.
///
/// `moves` is a space separated list of algebraic tokens; the index of the
/// chosen token is returned. Tokens that cannot be played are skipped. When
/// the list is empty, or no token can be played at all, the result is 0.
///
/// The time budget is accepted for interface compatibility; a single ply
/// always finishes, so it is never consulted.
pub fn select(fen: &str, moves: &str, _time_budget_secs: i64) -> usize {
    let position = fen::decode(fen);
    debug!(
        "selecting for {:?} on {}",
        position.side_to_move(),
        position.board().placement().board_fen()
    );

    let tokens = split_moves(moves);
    if tokens.is_empty() {
        return 0;
    }

    best_index(&position, &tokens)
}

/// Split a move list into at most [`MAX_MOVES`] tokens.
///
/// Only the first [`MAX_MOVE_LIST_LEN`] bytes are read. Tokens are separated
/// by spaces; runs of spaces do not produce empty tokens.
pub fn split_moves(moves: &str) -> Vec<&str> {
    truncate_bytes(moves, MAX_MOVE_LIST_LEN)
        .split(' ')
        .filter(|token| !token.is_empty())
        .take(MAX_MOVES)
        .collect()
}

/// Index of the token whose resulting board is best for the side to move.
///
/// White maximises and Black minimises the evaluation. Only a strictly
/// better score replaces the current best, so ties go to the earlier token.
pub fn best_index<S: AsRef<str>>(position: &Position, tokens: &[S]) -> usize {
    let side = position.side_to_move();
    let mut best_index = 0;
    let mut best_score = match side {
        Color::White => -WORST_SCORE,
        Color::Black => WORST_SCORE,
    };

    for candidate in score_candidates(position, tokens) {
        let score = match candidate.outcome {
            Ok(score) => score,
            Err(e) => {
                debug!("skipping {:?}: {e}", candidate.token);
                continue;
            }
        };
        trace!("{:?} scores {score}", candidate.token);

        let better = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if better {
            debug!("new best {:?} ({score})", candidate.token);
            best_index = candidate.index;
            best_score = score;
        }
    }

    best_index
}

/// Try every token on its own copy of the position's board, in order.
pub fn score_candidates<'a, S: AsRef<str>>(
    position: &'a Position,
    tokens: &'a [S],
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    tokens.iter().enumerate().map(move |(index, token)| {
        let token = token.as_ref();
        let outcome = apply(position.board(), token, position.side_to_move())
            .map(|board| evaluate(&board));
        Candidate {
            index,
            token,
            outcome,
        }
    })
}

/// The longest prefix of `s` no longer than `max` bytes that ends on a character boundary.
fn truncate_bytes(s: &str, max: usize) -> &str {
    let mut end = max.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
