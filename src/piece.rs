//! Piece types and their notation symbols.

use std::str::FromStr;

use thiserror::Error;

use crate::colour::Colour;
use crate::parsing::PartialFromStr;

/// Total number of different piece kinds (6).
pub const NUM_PIECES: usize = 6;

const PIECE_SYMBOLS: [char; NUM_PIECES] = ['P', 'N', 'B', 'R', 'Q', 'K'];

/// Complete set of information for identifying a piece.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
}
impl Piece {
    /// Pairs a piece kind with the side owning it.
    #[inline]
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self { kind, colour }
    }
}
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = self.kind.symbol();
        write!(
            f,
            "{}",
            if self.colour.is_black() {
                symbol.to_ascii_lowercase()
            } else {
                symbol
            }
        )
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
#[error("invalid piece symbol")]
pub struct PieceParseError;

impl FromStr for Piece {
    type Err = PieceParseError;

    /// Parses a one-character piece symbol, uppercase for white and lowercase
    /// for black (the FEN convention).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next().ok_or(PieceParseError)?;
        if chars.next().is_some() {
            return Err(PieceParseError);
        }
        let kind =
            PieceKind::from_symbol(symbol.to_ascii_uppercase()).ok_or(PieceParseError)?;
        let colour = if symbol.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };
        Ok(Self { kind, colour })
    }
}

/// The kind of a piece, one of Pawn, Knight, Bishop, Rook, Queen or King.
/// Which side it belongs to is carried separately, usually in the tuple type
/// [`Piece`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}
impl PieceKind {
    /// Pieces that a pawn can promote to.
    pub const PROMOTION_TARGETS: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// The uppercase notation symbol for this piece kind.
    #[inline]
    pub const fn symbol(self) -> char {
        PIECE_SYMBOLS[self as usize]
    }

    /// The piece kind an uppercase notation symbol stands for.
    ///
    /// SAN is case-sensitive — lowercase letters name files — so only
    /// uppercase symbols are recognized here. Callers dealing with
    /// case-insensitive input (long algebraic promotions) upcase first.
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl PartialFromStr for PieceKind {
    type Err = PieceParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let symbol = s.chars().next().ok_or(PieceParseError)?;
        let kind = Self::from_symbol(symbol).ok_or(PieceParseError)?;
        Ok((kind, &s[1..]))
    }
}
