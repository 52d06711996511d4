//! # Move notation codec
//! Conversion of [`Move`] values to and from Standard Algebraic Notation and
//! long algebraic notation, against a host-provided [`Board`].
//!
//! Encoding is infallible. Decoding is resolved against the complete legal
//! move list of the current position: the per-notation parsers return precise
//! errors, and the auto-detecting [`move_from_string`] entry point collapses
//! all of them to `None` so that malformed, contradictory, ambiguous and
//! merely-illegal input are indistinguishable to callers — a string must
//! select exactly one legal move or nothing.

use thiserror::Error;

use crate::board::Board;
use crate::moves::{CastlingSide, Move};
use crate::parsing::PartialFromStr;
use crate::piece::{Piece, PieceKind};
use crate::square::{File, Rank, Square};

/// The two move notations this codec speaks.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Notation {
    /// Standard Algebraic Notation: "Nf3", "exd5", "a8=Q", "O-O".
    StandardAlgebraic,
    /// Long algebraic notation: "g1f3", "e7e8q".
    LongAlgebraic,
}

/// Errors that may arise when parsing SAN moves.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
pub enum SanParseError {
    #[error("SAN moves are at least 2 characters, got {0}")]
    TooLittleChars(usize),
    #[error("the only castling strings are \"O-O\" and \"O-O-O\"")]
    InvalidCastling,
    #[error("first character cannot open a SAN move")]
    InvalidFirstCharacter,
    #[error("origin qualifier is off the board")]
    InvalidOriginSquare,
    #[error("missing or invalid target square")]
    InvalidTargetSquare,
    #[error("capture marker disagrees with the board contents")]
    CaptureMismatch,
    #[error("missing or invalid promotion piece symbol")]
    InvalidPromotion,
    #[error("move string matches more than one legal move")]
    AmbiguousMatch,
    #[error("no legal move matches the move string")]
    NoMatch,
}

/// Errors that may arise when parsing long algebraic moves.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
pub enum LanParseError {
    #[error("long algebraic moves are at least 4 characters, got {0}")]
    TooLittleChars(usize),
    #[error("invalid origin square")]
    InvalidOriginSquare,
    #[error("invalid target square")]
    InvalidTargetSquare,
    #[error("invalid promotion piece symbol")]
    InvalidPromotion,
}

/// Encodes `mv` in the requested notation.
///
/// Castling moves of randomized-start variants are always encoded as SAN,
/// since long algebraic notation cannot express arbitrary castling geometry.
///
/// The board is borrowed mutably for the SAN check/checkmate suffix probe; see
/// [`san_string`].
pub fn move_string<B: Board>(board: &mut B, mv: Move, notation: Notation) -> String {
    if notation == Notation::StandardAlgebraic
        || (mv.castling.is_some() && board.random_castling())
    {
        san_string(board, mv)
    } else {
        long_algebraic_string(mv)
    }
}

/// Encodes `mv` in long algebraic notation: origin square, target square and
/// the lowercase promotion symbol if any.
pub fn long_algebraic_string(mv: Move) -> String {
    mv.to_string()
}

/// Encodes `mv` in Standard Algebraic Notation.
///
/// `mv` must be legal on `board`. The board is borrowed mutably because
/// deciding the '+'/'#' suffix plays the move, inspects the resulting
/// position and takes the move back; no mutation survives the call, on any
/// return path.
pub fn san_string<B: Board>(board: &mut B, mv: Move) -> String {
    let Some(mover) = board.piece_on(mv.origin) else {
        // Not a move this board can make sense of. Encoding has no failure
        // channel, so fall back to the raw coordinates.
        return long_algebraic_string(mv);
    };

    let check_or_mate = check_suffix(board, mv);

    // Castling prints as a literal: no qualifiers, no destination square.
    if mover.kind == PieceKind::King {
        if let Some(castling) = mv.castling {
            let mut san = String::from(match castling {
                CastlingSide::King => "O-O",
                CastlingSide::Queen => "O-O-O",
            });
            if let Some(suffix) = check_or_mate {
                san.push(suffix);
            }
            return san;
        }
    }

    let mut is_capture = board
        .piece_on(mv.target)
        .is_some_and(|taken| taken.colour != mover.colour);
    let mut needs_file = false;
    let mut needs_rank = false;
    let mut san = String::new();

    match mover.kind {
        PieceKind::Pawn => {
            if board.en_passant_square() == Some(mv.target) {
                is_capture = true;
            }
            if is_capture {
                needs_file = true;
            }
        }
        PieceKind::King => san.push(PieceKind::King.symbol()),
        kind => {
            san.push(kind.symbol());
            // A qualifier is needed whenever another piece of the same kind
            // can reach the same target. Files win: a rank only qualifies
            // moves that files cannot tell apart.
            for other in board.legal_moves() {
                if other.origin == mv.origin || other.target != mv.target {
                    continue;
                }
                if board.piece_on(other.origin).is_none_or(|p| p.kind != kind) {
                    continue;
                }
                if other.origin.file != mv.origin.file {
                    needs_file = true;
                } else if other.origin.rank != mv.origin.rank {
                    needs_rank = true;
                }
            }
        }
    }

    if needs_file {
        san.push(mv.origin.file.to_char());
    }
    if needs_rank {
        san.push(mv.origin.rank.to_char());
    }
    if is_capture {
        san.push('x');
    }
    san.push_str(&mv.target.to_string());
    if let Some(kind) = mv.promotion {
        san.push('=');
        san.push(kind.symbol());
    }
    if let Some(suffix) = check_or_mate {
        san.push(suffix);
    }
    san
}

/// Plays `mv`, asks whether the replying side stands in check or checkmate,
/// then restores the board.
fn check_suffix<B: Board>(board: &mut B, mv: Move) -> Option<char> {
    board.make(mv);
    let replying = board.side_to_move();
    let suffix = if board.in_check(replying) {
        Some(if board.legal_moves().is_empty() {
            '#'
        } else {
            '+'
        })
    } else {
        None
    };
    board.unmake();
    suffix
}

/// Decodes a move string, auto-detecting its notation.
///
/// SAN is attempted first — a SAN piece move can look like the prefix of a
/// long algebraic string, so the order is load-bearing. Returns `None` when
/// neither notation yields exactly one legal move; malformed input, a lying
/// capture marker, an under-qualified (ambiguous) move and a move that is
/// simply not legal are deliberately indistinguishable here.
pub fn move_from_string<B: Board>(board: &B, s: &str) -> Option<Move> {
    move_from_san(board, s)
        .or_else(|_| move_from_long_algebraic(board, s))
        .inspect_err(|_| log::trace!("{s:?} does not parse as a move in either notation"))
        .ok()
}

/// Parses a move from Standard Algebraic Notation.
///
/// The parsed fragments — piece kind, optional origin file/rank qualifiers,
/// capture marker, target square, promotion — are resolved against
/// [`Board::legal_moves`]: the result is the unique legal move fitting all of
/// them. Several fits mean the string under-qualifies and the parse fails with
/// [`SanParseError::AmbiguousMatch`] rather than picking one.
pub fn move_from_san<B: Board>(board: &B, s: &str) -> Result<Move, SanParseError> {
    // Check, mate and annotation marks carry no information the board does
    // not already have; drop them before parsing.
    let s = s.trim_end_matches(['+', '#', '!', '?']);
    if s.len() < 2 {
        return Err(SanParseError::TooLittleChars(s.len()));
    }

    if let Some(rest) = s.strip_prefix("O-O") {
        let castling = match rest {
            "" => CastlingSide::King,
            "-O" => CastlingSide::Queen,
            _ => return Err(SanParseError::InvalidCastling),
        };
        let side = board.side_to_move();
        return Ok(Move::castle(
            board.king_square(side),
            board.castling_target(side, castling),
            castling,
        ));
    }

    // A SAN move never opens with the capture marker, and pawn moves never
    // spell out their piece letter.
    if s.starts_with(['x', 'P']) {
        return Err(SanParseError::InvalidFirstCharacter);
    }

    let mut rest = s;
    let mut target = None;

    // Piece letter. Its absence means a pawn is moving, in which case the
    // string may open directly with the destination square.
    let piece = match PieceKind::partial_from_str(rest) {
        Ok((kind, after)) => {
            rest = after;
            kind
        }
        Err(_) => {
            if let Ok((square, after)) = Square::partial_from_str(rest) {
                if board.is_valid(square) {
                    target = Some(square);
                    rest = after;
                }
            }
            PieceKind::Pawn
        }
    };

    let mut origin_file = None;
    let mut origin_rank = None;
    let mut string_is_capture = false;

    if target.is_none() {
        // Tentative origin qualifiers. A file letter past the board's width
        // is not a qualifier at all, and what looks like a qualifier pair may
        // turn out to be the destination square itself — decided below by
        // whether anything follows it.
        if let Ok((file, after)) = File::partial_from_str(rest) {
            if file.index() < board.width() {
                origin_file = Some(file);
                rest = after;
                if rest.is_empty() {
                    return Err(SanParseError::InvalidTargetSquare);
                }
            }
        }
        if let Ok((rank, after)) = Rank::partial_from_str(rest) {
            if rank.index() >= board.height() {
                return Err(SanParseError::InvalidOriginSquare);
            }
            origin_rank = Some(rank);
            rest = after;
        }

        if rest.is_empty() {
            // What we thought was the origin qualifier was actually the
            // target square.
            let (Some(file), Some(rank)) = (origin_file.take(), origin_rank.take()) else {
                return Err(SanParseError::InvalidTargetSquare);
            };
            target = Some(Square::new(file, rank));
        } else if let Some(after) = rest.strip_prefix('x') {
            if after.is_empty() {
                return Err(SanParseError::InvalidTargetSquare);
            }
            string_is_capture = true;
            rest = after;
        }

        if target.is_none() {
            let (square, after) = Square::partial_from_str(rest)
                .map_err(|_| SanParseError::InvalidTargetSquare)?;
            target = Some(square);
            rest = after;
        }
    }

    let target = match target {
        Some(square) if board.is_valid(square) => square,
        _ => return Err(SanParseError::InvalidTargetSquare),
    };

    // The move string must agree with the board about whether or not this is
    // a capture.
    let side = board.side_to_move();
    let is_capture = board
        .piece_on(target)
        .is_some_and(|taken| taken.colour != side)
        || (piece == PieceKind::Pawn && board.en_passant_square() == Some(target));
    if is_capture != string_is_capture {
        return Err(SanParseError::CaptureMismatch);
    }

    // Optional promotion, with or without a separator. Characters after the
    // promotion symbol are ignored; annotations tend to end up there.
    let mut promotion = None;
    if !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(['=', '(']) {
            if after.is_empty() {
                return Err(SanParseError::InvalidPromotion);
            }
            rest = after;
        }
        let (kind, _) =
            PieceKind::partial_from_str(rest).map_err(|_| SanParseError::InvalidPromotion)?;
        promotion = Some(kind);
    }

    // Loop through all legal moves to find the one matching the data we got
    // from the move string.
    let mut matched = None;
    for candidate in board.legal_moves() {
        if candidate.target != target || candidate.castling.is_some() {
            continue;
        }
        if board
            .piece_on(candidate.origin)
            .is_none_or(|p| p.kind != piece)
        {
            continue;
        }
        if origin_file.is_some_and(|file| candidate.origin.file != file) {
            continue;
        }
        if origin_rank.is_some_and(|rank| candidate.origin.rank != rank) {
            continue;
        }
        if candidate.promotion != promotion {
            continue;
        }
        if matched.is_some() {
            log::debug!("{s:?} under-qualifies its move, refusing to pick a candidate");
            return Err(SanParseError::AmbiguousMatch);
        }
        matched = Some(candidate);
    }
    matched.ok_or(SanParseError::NoMatch)
}

/// Parses a move from long algebraic notation.
///
/// This is a structural parse: both squares are bounds-checked against the
/// board and the castling side is inferred from the geometry of a king moving
/// two or three files along its rank, but no legality check is performed.
/// Confirming the result against [`Board::legal_moves`] is the caller's
/// business.
pub fn move_from_long_algebraic<B: Board>(board: &B, s: &str) -> Result<Move, LanParseError> {
    if s.len() < 4 {
        return Err(LanParseError::TooLittleChars(s.len()));
    }

    let (origin, rest) =
        Square::partial_from_str(s).map_err(|_| LanParseError::InvalidOriginSquare)?;
    if !board.is_valid(origin) {
        return Err(LanParseError::InvalidOriginSquare);
    }
    let (target, rest) =
        Square::partial_from_str(rest).map_err(|_| LanParseError::InvalidTargetSquare)?;
    if !board.is_valid(target) {
        return Err(LanParseError::InvalidTargetSquare);
    }

    let promotion = match rest.chars().next() {
        Some(symbol) => Some(
            PieceKind::from_symbol(symbol.to_ascii_uppercase())
                .ok_or(LanParseError::InvalidPromotion)?,
        ),
        None => None,
    };

    // A king sliding two or three files along its rank can only be castling.
    // Deliberately structural: whether that castling is actually playable is
    // for the legality oracle to decide.
    let side = board.side_to_move();
    let mut castling = None;
    if board.piece_on(origin) == Some(Piece::new(PieceKind::King, side))
        && origin.rank == target.rank
    {
        let files_moved = target.file.index() as i16 - origin.file.index() as i16;
        castling = match files_moved {
            2 | 3 => Some(CastlingSide::King),
            -2 | -3 => Some(CastlingSide::Queen),
            _ => None,
        };
    }

    Ok(Move {
        origin,
        target,
        promotion,
        castling,
    })
}
