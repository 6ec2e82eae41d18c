//! # Codec
//!
//! Encodes non-negative integers as short, case-insensitive base32 codes and
//! back. Each symbol carries 5 bits, most significant symbol first. Codes are
//! left-padded with the symbol for value 0 (`A` in the built-in alphabet) and
//! may carry a trailing Luhn mod 32 check symbol.
//!
//! The free functions use [`Alphabet::DEFAULT`]; the same operations are
//! available as methods on any [`Alphabet`].
//!
//! ## Example
//! ```
//! use couponcode::{codec, BigUint};
//!
//! let one = BigUint::from(1u32);
//! assert_eq!(codec::encode(&one, 5, false).unwrap(), "AAAA1");
//! assert_eq!(codec::decode("aaaal").unwrap(), one);
//!
//! let code = codec::encode(&one, 5, true).unwrap();
//! assert!(codec::check(&code).unwrap());
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod checksum;

use num_bigint::BigUint;
use num_traits::Zero;

pub use self::alphabet::Alphabet;
use crate::{
    constants::{BITS_PER_SYMBOL, MAX_DIGITS},
    error::{CodecError, Result},
};

/// Radix of the code as a multiplier for [`BigUint`] arithmetic.
const RADIX: u32 = 1 << BITS_PER_SYMBOL;

impl Alphabet {
    /// Encodes `value` as exactly `digits` symbols, optionally followed by a
    /// check symbol.
    ///
    /// Fails with [`CodecError::Overflow`] when `value` needs more than
    /// `digits` symbols, with [`CodecError::ZeroWidth`] when `digits` is 0 and
    /// with [`CodecError::WidthTooLarge`] above [`MAX_DIGITS`].
    pub fn encode(&self, value: &BigUint, digits: usize, with_check_digit: bool) -> Result<String> {
        if digits == 0 {
            return Err(CodecError::ZeroWidth);
        }
        if digits > MAX_DIGITS {
            return Err(CodecError::WidthTooLarge { digits });
        }

        // Most significant first; zero yields a single 0 digit
        let values = value.to_radix_be(RADIX);
        if values.len() > digits {
            return Err(CodecError::Overflow { digits });
        }

        let mut code = String::with_capacity(digits + 1);
        code.extend(std::iter::repeat(self.symbol_for(0)).take(digits - values.len()));
        code.extend(values.iter().map(|&value| self.symbol_for(value)));

        if with_check_digit {
            let check = self.digit(&code)?;
            code.push(check);
        }
        Ok(code)
    }

    /// Decodes a code into its integer value.
    ///
    /// Every character is part of the number; a trailing check symbol is not
    /// stripped (see [`Alphabet::decode_checked`]). The empty string is 0.
    /// Codes of any length decode.
    pub fn decode(&self, code: &str) -> Result<BigUint> {
        if code.is_empty() {
            return Ok(BigUint::zero());
        }

        let values = self.values(code)?;
        Ok(values
            .iter()
            .fold(BigUint::zero(), |acc, &value| acc * RADIX + value))
    }

    /// Validates the trailing check symbol, then decodes the payload before it.
    pub fn decode_checked(&self, code: &str) -> Result<BigUint> {
        let Some((split, _)) = code.char_indices().last() else {
            return Err(CodecError::MissingCheckDigit);
        };
        if split == 0 {
            return Err(CodecError::MissingCheckDigit);
        }

        if !self.check(code)? {
            return Err(CodecError::ChecksumMismatch);
        }
        self.decode(&code[..split])
    }

    /// Rewrites a code using canonical symbols only (uppercase, look-alikes
    /// replaced).
    pub fn normalize(&self, code: &str) -> Result<String> {
        let values = self.values(code)?;
        Ok(values.iter().map(|&value| self.symbol_for(value)).collect())
    }
}

/// Encodes `value` with the built-in alphabet. See [`Alphabet::encode`].
pub fn encode(value: &BigUint, digits: usize, with_check_digit: bool) -> Result<String> {
    Alphabet::DEFAULT.encode(value, digits, with_check_digit)
}

/// Decodes `code` with the built-in alphabet. See [`Alphabet::decode`].
pub fn decode(code: &str) -> Result<BigUint> {
    Alphabet::DEFAULT.decode(code)
}

/// Decodes a code that ends in a check symbol. See [`Alphabet::decode_checked`].
pub fn decode_checked(code: &str) -> Result<BigUint> {
    Alphabet::DEFAULT.decode_checked(code)
}

/// Computes the check symbol for a payload. See [`Alphabet::digit`].
pub fn digit(code: &str) -> Result<char> {
    Alphabet::DEFAULT.digit(code)
}

/// Validates a payload followed by its check symbol. See [`Alphabet::check`].
pub fn check(code: &str) -> Result<bool> {
    Alphabet::DEFAULT.check(code)
}

/// Canonical spelling of `code`. See [`Alphabet::normalize`].
pub fn normalize(code: &str) -> Result<String> {
    Alphabet::DEFAULT.normalize(code)
}
