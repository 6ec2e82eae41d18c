//! # Errors
//!
//! Error type shared by the codec, checksum and alphabet operations.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use crate::constants::MAX_DIGITS;

/// Errors returned by codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A character of a code has no entry in the alphabet's backward map.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character as it appeared in the input
        symbol: char,
        /// Character (not byte) offset within the input
        position: usize,
    },

    /// A single character has no entry in the alphabet's backward map.
    #[error("invalid symbol {symbol:?}")]
    UnknownSymbol {
        /// The offending character
        symbol: char,
    },

    /// The value does not fit in the requested number of symbols.
    #[error("value out of range for a {digits}-symbol code")]
    Overflow {
        /// Width that was exceeded
        digits: usize,
    },

    /// A code width of zero symbols was requested.
    #[error("code width must be at least one symbol")]
    ZeroWidth,

    /// A code width above the supported maximum was requested.
    #[error("code width {digits} exceeds the maximum of {max} symbols", max = MAX_DIGITS)]
    WidthTooLarge {
        /// Requested width
        digits: usize,
    },

    /// The trailing check digit does not validate the payload.
    #[error("check digit mismatch")]
    ChecksumMismatch,

    /// The code is too short to carry a payload and a check digit.
    #[error("code is too short to contain a check digit")]
    MissingCheckDigit,

    /// A custom alphabet violates the alphabet rules.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
