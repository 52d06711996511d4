//! Files, ranks and squares of a (possibly non-8x8) chessboard.
//!
//! Variant boards are not all 8x8, so files and ranks are bounded-integer
//! newtypes rather than fixed enumerations. Their bounds are what algebraic
//! notation can express — files are written 'a'..='z' and ranks '1'..='9' —
//! while whether a square actually exists on a given board is checked against
//! [`Board::width`](crate::board::Board::width) and
//! [`Board::height`](crate::board::Board::height), not here.

use std::str::FromStr;

use thiserror::Error;

use crate::parsing::PartialFromStr;

/// Maximum number of files expressible in notation (letters 'a' to 'z').
pub const MAX_FILES: u8 = 26;
/// Maximum number of ranks expressible in notation (digits '1' to '9').
pub const MAX_RANKS: u8 = 9;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
#[error("invalid square string")]
pub struct SquareParseError;

/// A file (column) of the board, displayed as a lowercase letter.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct File(u8);
impl File {
    /// A file from a given index.
    ///
    /// Fails if the index cannot be written as a file letter.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < MAX_FILES { Some(Self(index)) } else { None }
    }

    /// A file from its notation letter.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if matches!(c, 'a'..='z') {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the index of this file, 0 being the a-file.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the notation letter for this file.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}
impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
impl PartialFromStr for File {
    type Err = SquareParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let c = s.chars().next().ok_or(SquareParseError)?;
        let file = Self::from_char(c).ok_or(SquareParseError)?;
        Ok((file, &s[1..]))
    }
}

/// A rank (row) of the board, displayed as a digit counting from 1.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Rank(u8);
impl Rank {
    /// A rank from a given index.
    ///
    /// Fails if the index cannot be written as a rank digit.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < MAX_RANKS { Some(Self(index)) } else { None }
    }

    /// A rank from its notation digit.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if matches!(c, '1'..='9') {
            Some(Self(c as u8 - b'1'))
        } else {
            None
        }
    }

    /// Returns the index of this rank, 0 being the first rank.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the notation digit for this rank.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self.0) as char
    }
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
impl PartialFromStr for Rank {
    type Err = SquareParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let c = s.chars().next().ok_or(SquareParseError)?;
        let rank = Self::from_char(c).ok_or(SquareParseError)?;
        Ok((rank, &s[1..]))
    }
}

/// A square as a file/rank coordinate pair.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}
impl Square {
    /// Instantiates a new square from its file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
impl PartialFromStr for Square {
    type Err = SquareParseError;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err> {
        let (file, rest) = File::partial_from_str(s)?;
        let (rank, rest) = Rank::partial_from_str(rest)?;
        Ok((Self::new(file, rank), rest))
    }
}
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::partial_from_str(s) {
            Ok((square, "")) => Ok(square),
            _ => Err(SquareParseError),
        }
    }
}
