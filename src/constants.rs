//! # Constants
//!
//! Centralized constants for magic values used throughout couponcode.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Codec
// =============================================================================

/// Number of bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

/// Number of distinct symbol values (2^5).
pub const RADIX: usize = 1 << BITS_PER_SYMBOL;

/// Default code width in symbols (excluding any check digit).
pub const DEFAULT_DIGITS: usize = 5;

/// Widest code `encode` will produce, in symbols (5120 bits of payload).
pub const MAX_DIGITS: usize = 4096;

/// Canonical symbols of the built-in alphabet, indexed by value.
///
/// Value 0 is `A` and value 10 is `0`, so codes never start with a digit
/// zero when padded.
pub const DEFAULT_SYMBOLS: &str = "A1234567890BCDEFGHJKMNPQRSTVWXYZ";

/// Look-alike input characters and the canonical symbol they stand for.
/// Lowercase forms are covered by case folding.
pub const DEFAULT_ALIASES: &[(char, char)] = &[('O', '0'), ('I', '1'), ('L', '1')];

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "couponcode";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
