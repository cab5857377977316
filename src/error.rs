//! Errors surfaced by this crate.

use std::num::ParseIntError;

use thiserror::Error;

/// Everything that can go wrong when locating keys or reading a roster.
///
/// Structural operations on the trees themselves (`insert`, `delete`, traversals) never fail:
/// inserting a duplicate and deleting a missing key are both defined, silent behaviors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key being located isn't in the tree.
    #[error("key not found in tree")]
    KeyNotFound,

    /// The key lives deeper than a position can be encoded in.
    #[error("node at level {level} is too deep for its position to be encoded")]
    PositionOverflow {
        /// The level at which the position overflowed.
        level: usize,
    },

    /// The roster input ended before all of its key lines were read.
    #[error("expected a line of keys at line {line}")]
    MissingLine {
        /// The 1-based line number that was missing.
        line: usize,
    },

    /// A token on a roster line wasn't an integer.
    #[error("invalid key {token:?} on line {line}")]
    InvalidKey {
        /// The 1-based line number the token was on.
        line: usize,
        /// The offending token.
        token: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },
}
