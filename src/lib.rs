//! # Notare
//! Conversion between an internal chess move representation and the two
//! human-readable algebraic notations: Standard Algebraic Notation (SAN,
//! e.g. "Nf3", "exd5", "a8=Q", "O-O") and long algebraic notation (LAN,
//! e.g. "g1f3", "e7e8q").
//!
//! The codec owns no chess rules. Everything it needs from the game — board
//! contents, the set of currently legal moves, check information, castling
//! geometry — is consumed through the narrow [`Board`](board::Board) trait,
//! which a host engine or GUI implements over its own position type. This
//! keeps the hard part honest: SAN disambiguation and validation are resolved
//! against the *complete* legal move list, never guessed from string syntax
//! alone, and Chess960-style variants with arbitrary castling targets work
//! without the codec knowing anything about them.
//!
//! Decoding auto-detects the notation and collapses every failure (malformed
//! syntax, a capture marker that contradicts the board, an under-qualified
//! ambiguous move, a move that is simply not legal) to `None` rather than
//! picking a plausible move.

pub mod board;
pub mod colour;
pub mod moves;
pub mod notation;
pub mod parsing;
pub mod piece;
pub mod square;
