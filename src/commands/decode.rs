//! # Decode Command
//!
//! Decodes codes back into integers, optionally verifying the check digit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use super::{load_config, print_lines};
use crate::config::Config;

/// Arguments for the decode command
pub struct DecodeArgs {
    pub codes: Vec<String>,
    /// `Some` when `--check` or `--no-check` was given
    pub check_digit: Option<bool>,
}

/// Executes the decode command.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let config = load_config()?;
    print_lines(&render(&config, args)?);
    Ok(())
}

/// Decodes every code, one integer per code.
pub fn render(config: &Config, args: &DecodeArgs) -> Result<Vec<String>> {
    let check_digit = config.check_digit(args.check_digit);

    args.codes
        .iter()
        .map(|code| {
            let value = if check_digit {
                config.alphabet.decode_checked(code)
            } else {
                config.alphabet.decode(code)
            };
            value
                .map(|v| v.to_string())
                .with_context(|| format!("Cannot decode '{code}'"))
        })
        .collect()
}
