//! # Commands
//!
//! CLI command implementations for cpn.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod check;
pub mod completions;
pub mod decode;
pub mod digit;
pub mod encode;
pub mod normalize;
pub mod setup;

pub use self::{
    check::{execute as check, CheckArgs},
    completions::execute as completions,
    decode::{execute as decode, DecodeArgs},
    digit::execute as digit,
    encode::{execute as encode, EncodeArgs},
    normalize::execute as normalize,
    setup::execute as setup,
};

use crate::{config::Config, ui};

/// Loads the config and reports any non-fatal problems.
fn load_config() -> anyhow::Result<Config> {
    let config = Config::load()?;
    ui::print_warnings(&config.warnings);
    Ok(config)
}

/// Prints one result per line on stdout.
fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
