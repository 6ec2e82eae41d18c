//! # Configuration
//!
//! Resolved configuration: file settings with command-line overrides applied.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use anyhow::Result;

pub use self::global::{set_home_override, AlphabetConfig, GlobalConfig};
use crate::codec::Alphabet;

/// Effective configuration used by the commands
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings as loaded from the config file
    pub global: GlobalConfig,

    /// Alphabet built and validated from the settings
    pub alphabet: Alphabet,

    /// Problems found while loading that did not prevent it
    pub warnings: Vec<String>,
}

impl Config {
    /// Loads the config file (or defaults) and builds the alphabet.
    pub fn load() -> Result<Self> {
        let (global, warnings) = GlobalConfig::load()?;
        let alphabet = global.alphabet()?;

        Ok(Self {
            global,
            alphabet,
            warnings,
        })
    }

    /// Returns the effective code width (argument overrides config)
    pub fn digits(&self, digits: Option<usize>) -> usize {
        digits.unwrap_or(self.global.digits)
    }

    /// Returns whether to use a check digit (`--check` / `--no-check` override config)
    pub fn check_digit(&self, flag: Option<bool>) -> bool {
        flag.unwrap_or(self.global.check_digit)
    }
}
