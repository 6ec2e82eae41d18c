//! # Check Command
//!
//! Validates codes that end in a check digit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use super::{load_config, print_lines};
use crate::{config::Config, ui};

/// Arguments for the check command
pub struct CheckArgs {
    pub codes: Vec<String>,
}

/// Executes the check command. Fails if any code is invalid.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let config = load_config()?;
    let results = validate(&config, args)?;

    let lines: Vec<String> = results
        .iter()
        .map(|(code, valid)| ui::verdict(code, *valid))
        .collect();
    print_lines(&lines);

    let failed = results.iter().filter(|(_, valid)| !valid).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} codes failed validation", results.len());
    }
    Ok(())
}

/// Checks every code, pairing it with its verdict.
pub fn validate<'a>(config: &Config, args: &'a CheckArgs) -> Result<Vec<(&'a str, bool)>> {
    args.codes
        .iter()
        .map(|code| {
            let valid = config
                .alphabet
                .check(code)
                .with_context(|| format!("Cannot check '{code}'"))?;
            Ok((code.as_str(), valid))
        })
        .collect()
}
