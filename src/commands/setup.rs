//! # Setup Command
//!
//! Writes a commented default config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success("Created config", &path);
    } else {
        ui::print_note("Config already exists", &path);
    }

    Ok(())
}
