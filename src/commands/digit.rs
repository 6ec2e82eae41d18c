//! # Digit Command
//!
//! Prints the check digit for a payload.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use super::load_config;

/// Executes the digit command.
pub fn execute(code: &str) -> Result<()> {
    let config = load_config()?;
    let digit = config
        .alphabet
        .digit(code)
        .with_context(|| format!("Cannot compute check digit for '{code}'"))?;
    println!("{digit}");
    Ok(())
}
