//! The internal move representation shared between the codec and its host
//! board.

use crate::piece::PieceKind;
use crate::square::Square;

/// The two castling moves a king move can represent.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum CastlingSide {
    King = 0,
    Queen = 1,
}

/// A move as a plain origin/target value pair with promotion and castling
/// metadata.
///
/// `Move` values are transient: they carry no reference to the board they were
/// created for and are never mutated after construction. Absence of a move
/// ("no match", "parse failure") is expressed as `Option<Move>` at the API
/// boundary; there is no in-band null value that could collide with a real
/// move touching the corner square.
///
/// For castling moves, `origin` is the king's square and `target` the
/// board-configured castling target for that side — which, in randomized-start
/// variants, need not be two files away from the king.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Move {
    pub origin: Square,
    pub target: Square,
    pub promotion: Option<PieceKind>,
    pub castling: Option<CastlingSide>,
}
impl Move {
    /// Creates a plain move between two squares.
    #[inline]
    pub const fn new(origin: Square, target: Square) -> Self {
        Self {
            origin,
            target,
            promotion: None,
            castling: None,
        }
    }

    /// Creates a pawn move promoting to `kind` on arrival.
    #[inline]
    pub const fn promoting(origin: Square, target: Square, kind: PieceKind) -> Self {
        Self {
            origin,
            target,
            promotion: Some(kind),
            castling: None,
        }
    }

    /// Creates a castling move from the king's square to the configured
    /// castling target.
    #[inline]
    pub const fn castle(origin: Square, target: Square, side: CastlingSide) -> Self {
        Self {
            origin,
            target,
            promotion: None,
            castling: Some(side),
        }
    }
}
impl std::fmt::Display for Move {
    /// The long algebraic form: origin square, target square and, for
    /// promotions, the lowercase symbol of the promotion piece.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.origin, self.target)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol().to_ascii_lowercase())?
        }
        Ok(())
    }
}
