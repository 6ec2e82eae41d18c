//! # Encode Command
//!
//! Encodes integers as codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use num_bigint::BigUint;

use super::{load_config, print_lines};
use crate::config::Config;

/// Arguments for the encode command
pub struct EncodeArgs {
    pub values: Vec<BigUint>,
    pub digits: Option<usize>,
    /// `Some` when `--check` or `--no-check` was given
    pub check_digit: Option<bool>,
}

/// Executes the encode command.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let config = load_config()?;
    print_lines(&render(&config, args)?);
    Ok(())
}

/// Encodes every value, one code per value.
pub fn render(config: &Config, args: &EncodeArgs) -> Result<Vec<String>> {
    let digits = config.digits(args.digits);
    let check_digit = config.check_digit(args.check_digit);

    args.values
        .iter()
        .map(|value| {
            config
                .alphabet
                .encode(value, digits, check_digit)
                .with_context(|| format!("Cannot encode {value}"))
        })
        .collect()
}
