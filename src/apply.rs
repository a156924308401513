use log::{debug, trace};
use shakmaty::CastlingSide;
use thiserror::Error;

use crate::board::{Board, Color, File, Role, Square};
use crate::locator::locate;
use crate::notation::{MoveToken, PieceMove, Promotion};

/// Reasons a move token could not be applied to a board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("move token is too short to name a destination")]
    TokenTooShort,
    #[error("destination '{file}{rank}' is not on the board")]
    DestinationOutOfRange { file: char, rank: char },
    #[error("no {role:?} can reach {destination}")]
    SourceNotFound { role: Role, destination: Square },
}

/// Play `token` for `side` on a copy of `board`.
///
/// The move is trusted to be legal: castling ignores rights and attacked
/// squares, and the moving piece is whichever one the locator finds first.
pub fn apply(board: &Board, token: &str, side: Color) -> Result<Board, ApplyError> {
    let parsed = MoveToken::parse(token)?;
    apply_token(board, &parsed, side)
}

/// Play an already parsed move for `side` on a copy of `board`.
pub fn apply_token(board: &Board, token: &MoveToken, side: Color) -> Result<Board, ApplyError> {
    let mut next = board.clone();
    match token {
        MoveToken::Castle(castle) => castle_on(&mut next, side, *castle),
        MoveToken::Piece(mv) => move_piece(&mut next, side, mv)?,
    }
    Ok(next)
}

/// Move king and rook to their castled squares, whatever stood there before.
fn castle_on(board: &mut Board, color: Color, side: CastlingSide) {
    let back_rank = color.backrank();
    let rook_file = match side {
        CastlingSide::KingSide => File::H,
        CastlingSide::QueenSide => File::A,
    };

    board.clear(Square::from_coords(File::E, back_rank));
    board.clear(Square::from_coords(rook_file, back_rank));
    board.set(side.king_to(color), color.king());
    board.set(side.rook_to(color), color.rook());
}

fn move_piece(board: &mut Board, side: Color, mv: &PieceMove) -> Result<(), ApplyError> {
    let piece = mv.role.of(side);
    let to = mv.destination;
    let from = locate(board, piece, to, mv.hints).ok_or(ApplyError::SourceNotFound {
        role: mv.role,
        destination: to,
    })?;
    trace!("{:?} {from} -> {to} (capture marked: {})", mv.role, mv.capture);

    // A pawn stepping diagonally onto an empty square takes en passant
    let passed = Square::from_coords(to.file(), from.rank());
    if mv.role == Role::Pawn
        && from.file() != to.file()
        && board.is_empty_at(to)
        && board.piece_at(passed) == Some(side.other().pawn())
    {
        board.clear(passed);
    }

    board.clear(from);
    match mv.promotion {
        Some(Promotion::To(role)) => board.set(to, role.of(side)),
        Some(Promotion::Unknown(letter)) => {
            debug!("promotion to unknown piece {letter:?} on {to}");
            board.set_unknown(to);
        }
        None => board.set(to, piece),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use crate::fen::{FEN_STARTPOS, decode};
    use test_case::test_case;

    fn play(fen: &str, token: &str) -> Board {
        let position = decode(fen);
        apply(position.board(), token, position.side_to_move())
            .unwrap_or_else(|e| panic!("{token} failed on {fen}: {e}"))
    }

    fn assert_piece(board: &Board, square: Square, expected: Piece) {
        assert_eq!(
            board.piece_at(square),
            Some(expected),
            "Expected {:?} at {}, found {:?}",
            expected,
            square,
            board.piece_at(square)
        );
    }

    fn assert_empty(board: &Board, square: Square) {
        assert!(
            board.is_empty_at(square),
            "Expected empty at {}, found {:?}",
            square,
            board.piece_at(square)
        );
    }

    #[test]
    fn test_simple_pawn_move() {
        let board = play(FEN_STARTPOS, "e4");
        assert_empty(&board, Square::E2);
        assert_piece(&board, Square::E4, Color::White.pawn());
        assert_eq!(board.count(), 32);
    }

    #[test]
    fn test_knight_move() {
        let board = play(FEN_STARTPOS, "Nf3");
        assert_empty(&board, Square::G1);
        assert_piece(&board, Square::F3, Color::White.knight());
    }

    #[test]
    fn test_black_move() {
        let board = play(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "Nc6",
        );
        assert_empty(&board, Square::B8);
        assert_piece(&board, Square::C6, Color::Black.knight());
    }

    #[test]
    fn test_original_board_untouched() {
        let position = decode(FEN_STARTPOS);
        let before = position.board().clone();
        let after = apply(position.board(), "e4", Color::White).unwrap();
        assert_eq!(position.board(), &before);
        assert_ne!(after, before);
    }

    #[test_case("exd5"; "plain")]
    #[test_case("exd5+"; "with check marker")]
    fn test_capture(token: &str) {
        let board = play(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1",
            token,
        );
        assert_empty(&board, Square::E4);
        assert_piece(&board, Square::D5, Color::White.pawn());
        assert_eq!(board.count(), 31);
    }

    #[test]
    fn test_bishop_capture() {
        let board = play(
            "rnbqkbnr/ppp1pppp/8/3p4/8/6P1/PPPPPPBP/RNBQK1NR w KQkq - 0 1",
            "Bxd5",
        );
        assert_empty(&board, Square::G2);
        assert_piece(&board, Square::D5, Color::White.bishop());
        assert_eq!(board.count(), 31);
    }

    #[test]
    fn test_en_passant() {
        let board = play(
            "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1",
            "exd6",
        );
        assert_empty(&board, Square::E5);
        assert_empty(&board, Square::D5);
        assert_piece(&board, Square::D6, Color::White.pawn());
        assert_eq!(board.count(), 31);
    }

    #[test]
    fn test_black_en_passant() {
        let board = play("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1", "exd3");
        assert_empty(&board, Square::E4);
        assert_empty(&board, Square::D4);
        assert_piece(&board, Square::D3, Color::Black.pawn());
    }

    #[test]
    fn test_diagonal_step_spares_own_pawn() {
        // d2 reaches e3 first in scan order; the e2 pawn beside it stays.
        let board = play(FEN_STARTPOS, "e3");
        assert_empty(&board, Square::D2);
        assert_piece(&board, Square::E3, Color::White.pawn());
        assert_piece(&board, Square::E2, Color::White.pawn());
        assert_eq!(board.count(), 32);
    }

    #[test_case("O-O"; "plain")]
    #[test_case("O-O+"; "check")]
    #[test_case("O-O#"; "mate")]
    fn test_castle_king_side(token: &str) {
        let board = play(
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1",
            token,
        );
        assert_piece(&board, Square::G1, Color::White.king());
        assert_piece(&board, Square::F1, Color::White.rook());
        assert_empty(&board, Square::E1);
        assert_empty(&board, Square::H1);
    }

    #[test]
    fn test_castle_queen_side() {
        let board = play(
            "r1bqkbnr/ppp3pp/2n1pp2/3p4/3P1B2/2NQ4/PPP1PPPP/R3KBNR w KQkq - 0 1",
            "O-O-O",
        );
        assert_piece(&board, Square::C1, Color::White.king());
        assert_piece(&board, Square::D1, Color::White.rook());
        assert_empty(&board, Square::E1);
        assert_empty(&board, Square::A1);
    }

    #[test_case("O-O", Square::G8, Square::F8, Square::H8)]
    #[test_case("O-O-O", Square::C8, Square::D8, Square::A8)]
    fn test_black_castling(token: &str, king: Square, rook: Square, rook_from: Square) {
        let board = play("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1", token);
        assert_piece(&board, king, Color::Black.king());
        assert_piece(&board, rook, Color::Black.rook());
        assert_empty(&board, Square::E8);
        assert_empty(&board, rook_from);
    }

    #[test]
    fn test_castling_is_not_validated() {
        // No king or rook at home: castling still writes the castled squares.
        let board = play("4k3/8/8/8/8/8/8/8 w - - 0 1", "O-O");
        assert_piece(&board, Square::G1, Color::White.king());
        assert_piece(&board, Square::F1, Color::White.rook());
    }

    #[test]
    fn test_promotion() {
        let board = play(
            "r1bqkbnr/pPpppppp/2n5/8/8/8/PP1PPPPP/RNBQKBNR w KQkq - 0 1",
            "bxa8=Q",
        );
        assert_piece(&board, Square::A8, Color::White.queen());
        assert_empty(&board, Square::B7);
    }

    #[test]
    fn test_underpromotion_takes_side_colour() {
        let board = play("4k3/8/8/8/8/8/p7/4K3 b - - 0 1", "a1=n");
        assert_piece(&board, Square::A1, Color::Black.knight());
        assert_empty(&board, Square::A2);
    }

    #[test_case("a8=X"; "letter")]
    #[test_case("a8=?"; "symbol")]
    fn test_promotion_to_unknown_piece(token: &str) {
        let board = play("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", token);
        assert_empty(&board, Square::A7);
        assert_eq!(board.piece_at(Square::A8), None);
        assert!(board.is_unknown_at(Square::A8));
        assert_eq!(board.count(), 2);
    }

    #[test]
    fn test_piece_replaces_unknown_square() {
        let board = play("4k3/8/8/8/8/8/X7/R3K3 w - - 0 1", "Ra2");
        assert_piece(&board, Square::A2, Color::White.rook());
        assert!(!board.is_unknown_at(Square::A2));
    }

    #[test]
    fn test_unknown_square_blocks_rook() {
        let position = decode("4k3/8/8/8/8/8/X7/R3K3 w - - 0 1");
        assert_eq!(
            apply(position.board(), "Ra3", Color::White),
            Err(ApplyError::SourceNotFound {
                role: Role::Rook,
                destination: Square::A3,
            })
        );
    }

    #[test_case("Nbd2", Square::B1; "file")]
    #[test_case("Nfd2", Square::F3; "other file")]
    fn test_disambiguation(token: &str, from: Square) {
        let board = play(
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPP1PPPP/RNBQKB1R w KQkq - 0 1",
            token,
        );
        assert_empty(&board, from);
        assert_piece(&board, Square::D2, Color::White.knight());
        assert_eq!(board.count(), 31);
    }

    #[test]
    fn test_rank_disambiguation() {
        let board = play("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", "R1a3");
        assert_empty(&board, Square::A1);
        assert_piece(&board, Square::A5, Color::White.rook());
        assert_piece(&board, Square::A3, Color::White.rook());
    }

    #[test]
    fn test_unresolved_source() {
        let position = decode(FEN_STARTPOS);
        assert_eq!(
            apply(position.board(), "Nd4", Color::White),
            Err(ApplyError::SourceNotFound {
                role: Role::Knight,
                destination: Square::D4,
            })
        );
    }

    #[test_case("Zz9")]
    #[test_case("N")]
    #[test_case("e")]
    fn test_parse_failures_propagate(token: &str) {
        let position = decode(FEN_STARTPOS);
        assert_eq!(
            apply(position.board(), token, Color::White),
            Err(MoveToken::parse(token).unwrap_err())
        );
    }

    #[test]
    fn test_no_piece_is_duplicated() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";
        let position = decode(fen);
        let tokens = [
            "a3", "a4", "b3", "b4", "c3", "d3", "d4", "g3", "g4", "h3", "h4", "Na3", "Nc3", "Ng1",
            "Ng5", "Nh4", "Nxe5", "Bb3", "Bb5", "Bd5", "Be2", "Bf1", "Bxf7+", "Rf1", "Rg1", "Ke2",
            "Kf1", "O-O", "Qe2",
        ];

        for token in tokens {
            let board = apply(position.board(), token, Color::White)
                .unwrap_or_else(|e| panic!("{token}: {e}"));
            assert!(board.count() <= position.board().count(), "{token}");
            assert!(
                board.count() + 1 >= position.board().count(),
                "{token} removed more than one piece"
            );
        }
    }
}
