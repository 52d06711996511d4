//! # Parsing
//! Notation strings rarely arrive as a single token: a SAN move is a sequence
//! of smaller atoms (piece letter, origin qualifiers, capture marker, squares)
//! that have to be consumed one after another, sometimes only tentatively.
//!
//! The notation atoms in this crate therefore implement [`PartialFromStr`] in
//! addition to the standard [`FromStr`](std::str::FromStr) where it makes
//! sense. Unlike [`FromStr`](std::str::FromStr), the `Ok` variant returned by
//! [`PartialFromStr`] contains two values:
//! - The parsed value
//! - The suffix of the input that was not part of the parsed value.
//!
//! A string like "d4rest" parses into a square and the leftover `"rest"`.
//! Backtracking then stays a matter of keeping the previous slice around,
//! which is exactly what the SAN grammar's "was that qualifier actually the
//! destination?" step needs.

pub trait PartialFromStr: Sized {
    type Err;

    fn partial_from_str(s: &str) -> Result<(Self, &str), Self::Err>;
}
