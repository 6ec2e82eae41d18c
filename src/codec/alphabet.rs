//! # Alphabet
//!
//! Bidirectional mapping between 5-bit values and printable symbols.
//!
//! The forward direction is canonical: every value has exactly one symbol.
//! The backward direction is forgiving: input is folded to uppercase, known
//! look-alikes are substituted by their canonical symbol, and only then is the
//! strict symbol-to-value lookup performed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use crate::{
    constants::{DEFAULT_ALIASES, DEFAULT_SYMBOLS, RADIX},
    error::{CodecError, Result},
};

/// Size of the ASCII lookup tables.
const ASCII_LEN: usize = 128;

/// Marker for "no value" in the backward table.
const NO_VALUE: u8 = u8::MAX;

/// Marker for "no substitution" in the alias table.
const NO_ALIAS: u8 = 0;

/// Mask selecting the low 5 bits of a value.
pub(crate) const VALUE_MASK: u8 = 0x1F;

/// A 32-symbol alphabet with case-insensitive, alias-aware decoding.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// Canonical symbol (ASCII) for each value
    forward: [u8; RADIX],
    /// Value for each canonical uppercase symbol, `NO_VALUE` elsewhere
    backward: [u8; ASCII_LEN],
    /// Canonical symbol substituted for each folded look-alike
    aliases: [u8; ASCII_LEN],
}

impl Alphabet {
    /// The built-in alphabet: `0-9` and `A-Z` without `I`, `L`, `O` and `U`,
    /// accepting `O` for `0` and `I`/`L` for `1` on input.
    pub const DEFAULT: Self = Self::build(DEFAULT_SYMBOLS.as_bytes(), DEFAULT_ALIASES);

    /// Creates a custom alphabet.
    ///
    /// `symbols` lists the canonical symbol for each value in order and must
    /// contain exactly 32 ASCII alphanumeric characters that stay distinct
    /// after uppercase folding. Each alias maps an extra input character to
    /// one of those symbols.
    pub fn new(symbols: &str, aliases: &[(char, char)]) -> Result<Self> {
        let count = symbols.chars().count();
        if count != RADIX {
            return Err(CodecError::InvalidAlphabet(format!(
                "expected {RADIX} symbols, found {count}"
            )));
        }

        let mut folded = Vec::with_capacity(RADIX);
        for symbol in symbols.chars() {
            if !symbol.is_ascii_alphanumeric() {
                return Err(CodecError::InvalidAlphabet(format!(
                    "symbol {symbol:?} is not an ASCII letter or digit"
                )));
            }
            let upper = symbol.to_ascii_uppercase();
            if folded.contains(&upper) {
                return Err(CodecError::InvalidAlphabet(format!(
                    "symbol {symbol:?} appears more than once"
                )));
            }
            folded.push(upper);
        }

        let mut resolved: Vec<(char, char)> = Vec::with_capacity(aliases.len());
        for &(alias, target) in aliases {
            if !alias.is_ascii_alphanumeric() {
                return Err(CodecError::InvalidAlphabet(format!(
                    "alias {alias:?} is not an ASCII letter or digit"
                )));
            }
            let alias = alias.to_ascii_uppercase();
            let target = target.to_ascii_uppercase();
            if folded.contains(&alias) {
                return Err(CodecError::InvalidAlphabet(format!(
                    "alias {alias:?} is already a canonical symbol"
                )));
            }
            if !folded.contains(&target) {
                return Err(CodecError::InvalidAlphabet(format!(
                    "alias {alias:?} points at {target:?}, which is not a canonical symbol"
                )));
            }
            match resolved.iter().find(|(existing, _)| *existing == alias) {
                Some(&(_, previous)) if previous != target => {
                    return Err(CodecError::InvalidAlphabet(format!(
                        "alias {alias:?} maps to both {previous:?} and {target:?}"
                    )));
                }
                Some(_) => {}
                None => resolved.push((alias, target)),
            }
        }

        let bytes: Vec<u8> = folded.iter().map(|&c| c as u8).collect();
        Ok(Self::build(&bytes, &resolved))
    }

    /// Fills the lookup tables. Inputs must already satisfy the alphabet rules.
    #[allow(clippy::cast_possible_truncation)] // values < RADIX, symbols are ASCII
    const fn build(symbols: &[u8], aliases: &[(char, char)]) -> Self {
        let mut forward = [0u8; RADIX];
        let mut backward = [NO_VALUE; ASCII_LEN];
        let mut alias_table = [NO_ALIAS; ASCII_LEN];

        let mut value = 0;
        while value < RADIX {
            let symbol = symbols[value].to_ascii_uppercase();
            forward[value] = symbol;
            backward[symbol as usize] = value as u8;
            value += 1;
        }

        let mut i = 0;
        while i < aliases.len() {
            let (alias, target) = aliases[i];
            let alias = (alias as u8).to_ascii_uppercase();
            alias_table[alias as usize] = (target as u8).to_ascii_uppercase();
            i += 1;
        }

        Self {
            forward,
            backward,
            aliases: alias_table,
        }
    }

    /// Returns the canonical symbol for a 5-bit value.
    ///
    /// Only the low 5 bits of `value` are used, so every input has a symbol.
    pub const fn symbol_for(&self, value: u8) -> char {
        self.forward[(value & VALUE_MASK) as usize] as char
    }

    /// Returns the value of a symbol, accepting any case and known look-alikes.
    ///
    /// A lone character has no position, so failures are
    /// [`CodecError::UnknownSymbol`]; use [`Alphabet::values`] for codes.
    pub fn value_for(&self, symbol: char) -> Result<u8> {
        self.lookup(symbol)
            .ok_or(CodecError::UnknownSymbol { symbol })
    }

    /// Resolves every character of `code` to its value.
    ///
    /// The error names the first unresolvable character and its position.
    pub fn values(&self, code: &str) -> Result<Vec<u8>> {
        code.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.lookup(symbol)
                    .ok_or(CodecError::InvalidSymbol { symbol, position })
            })
            .collect()
    }

    /// Returns the canonical symbols in value order.
    pub fn symbols(&self) -> String {
        self.forward.iter().map(|&b| char::from(b)).collect()
    }

    /// Returns the configured look-alikes as `(alias, canonical)` pairs.
    pub fn aliases(&self) -> Vec<(char, char)> {
        (0u8..)
            .zip(self.aliases.iter())
            .filter(|(_, &target)| target != NO_ALIAS)
            .map(|(alias, &target)| (char::from(alias), char::from(target)))
            .collect()
    }

    /// Fold, substitute, then look up strictly.
    fn lookup(&self, symbol: char) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        let folded = symbol.to_ascii_uppercase() as usize;
        let canonical = match self.aliases[folded] {
            NO_ALIAS => folded,
            target => usize::from(target),
        };
        match self.backward[canonical] {
            NO_VALUE => None,
            value => Some(value),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.symbols())
            .field("aliases", &self.aliases())
            .finish()
    }
}
