//! # Normalize Command
//!
//! Rewrites codes in their canonical spelling.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use super::{load_config, print_lines};

/// Executes the normalize command.
pub fn execute(codes: &[String]) -> Result<()> {
    let config = load_config()?;
    let lines = codes
        .iter()
        .map(|code| {
            config
                .alphabet
                .normalize(code)
                .with_context(|| format!("Cannot normalize '{code}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    print_lines(&lines);
    Ok(())
}
