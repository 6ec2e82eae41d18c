//! # Luhn mod 32 Checksum
//!
//! The Luhn algorithm generalized from base 10 to the 32 symbol values.
//!
//! Values are weighted right to left with alternating factors. Each weighted
//! value is reduced by summing its base-32 digits, and the sum of all reduced
//! values must be a multiple of 32 for a valid code.
//!
//! Generating a check digit weights the rightmost payload symbol by 2, since
//! that symbol moves one place left once the digit is appended. Validation
//! weights the rightmost symbol (the check digit itself) by 1.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Alphabet;
use crate::{constants::BITS_PER_SYMBOL, error::Result};

/// Checksum modulus, equal to the number of symbol values.
const MODULUS: u32 = 1 << BITS_PER_SYMBOL;

/// Factor applied to the rightmost symbol when computing a check digit.
const GENERATE_FACTOR: u32 = 2;

/// Factor applied to the rightmost symbol when validating.
const VALIDATE_FACTOR: u32 = 1;

/// Reduces a weighted value to a single base-32 digit by summing its digits.
///
/// With factors of at most 2 the loop body runs at most once.
const fn fold(mut addend: u32) -> u32 {
    while addend >= MODULUS {
        addend = addend / MODULUS + addend % MODULUS;
    }
    addend
}

/// Weighted digit sum modulo 32, starting with `first_factor` on the right.
fn weighted_sum(values: &[u8], first_factor: u32) -> u32 {
    let mut factor = first_factor;
    let mut total = 0;
    for &value in values.iter().rev() {
        total = (total + fold(u32::from(value) * factor)) % MODULUS;
        factor = if factor == 2 { 1 } else { 2 };
    }
    total
}

impl Alphabet {
    /// Computes the check symbol for a payload.
    ///
    /// An empty payload yields the symbol for value 0.
    #[allow(clippy::cast_possible_truncation)] // result < MODULUS
    pub fn digit(&self, code: &str) -> Result<char> {
        let values = self.values(code)?;
        let remainder = weighted_sum(&values, GENERATE_FACTOR);
        let check_value = (MODULUS - remainder) % MODULUS;
        Ok(self.symbol_for(check_value as u8))
    }

    /// Returns whether a payload followed by its check symbol is consistent.
    ///
    /// An empty string is trivially consistent.
    pub fn check(&self, code: &str) -> Result<bool> {
        let values = self.values(code)?;
        Ok(weighted_sum(&values, VALIDATE_FACTOR) == 0)
    }
}
