//! # cpn CLI
//!
//! Command-line interface for the couponcode codec.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{builder::RangedU64ValueParser, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use couponcode::{
    commands::{self, CheckArgs, DecodeArgs, EncodeArgs},
    constants::MAX_DIGITS,
    BigUint,
};

const GLOBAL_HELP: &str = "\
Alphabet:
  Value  0-9    A 1 2 3 4 5 6 7 8 9
  Value 10-19   0 B C D E F G H J K
  Value 20-31   M N P Q R S T V W X Y Z
  Input is case-insensitive; O is read as 0, I and L as 1.

Configuration File:
  ~/.config/couponcode/config    Default width, check digit, custom alphabet

Getting Started:
  cpn encode 42                  Encode with the default width (AAA10)
  cpn encode 42 -d 8 -c          8 symbols plus a check digit
  cpn decode aaab2               Decode (any case, look-alikes accepted)
  cpn check AAAA1Y               Validate a code that ends in a check digit

Learn more:
  cpn <COMMAND> --help           Show detailed help for a command";

#[derive(Parser)]
#[command(name = "cpn")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Short, case-insensitive base32 codes with a Luhn mod 32 check digit")]
#[command(
    long_about = "cpn turns integers into short codes that are easy to read aloud and type \
back in, and turns those codes back into integers.\n\n\
Each symbol carries 5 bits. Codes never contain I, L, O or U, but I, L and O are \
accepted on input as 1, 1 and 0. An optional trailing check digit (Luhn mod 32) \
catches every single mistyped symbol."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode integers as codes
    #[command(
        long_about = "Encode one or more non-negative integers as codes.\n\n\
Each code is left-padded with the zero symbol (A) to the requested width. \
Encoding fails if a value needs more symbols than the width allows \
(5 symbols hold values up to 33554431). Values of any size are accepted; \
the width is limited to 4096 symbols.",
        after_help = "Examples:\n  \
cpn encode 1                    AAAA1\n  \
cpn encode 1 --check            AAAA1Y\n  \
cpn encode 1 2 3 -d 3           One code per line\n  \
cpn encode 1 --no-check         Ignore check_digit = true in the config\n\n\
Output: One code per line."
    )]
    Encode {
        /// Values to encode
        #[arg(required = true)]
        values: Vec<BigUint>,

        /// Number of symbols, not counting the check digit
        #[arg(
            short,
            long,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DIGITS as u64),
            help = "Code width in symbols (default from config, else 5)"
        )]
        digits: Option<usize>,

        /// Append a check digit
        #[arg(short, long, help = "Append a Luhn mod 32 check digit")]
        check: bool,

        /// Omit the check digit even if the config enables it
        #[arg(long, conflicts_with = "check", help = "No check digit (overrides config)")]
        no_check: bool,
    },

    /// Decode codes into integers
    #[command(
        long_about = "Decode one or more codes into integers.\n\n\
Input is case-insensitive and accepts O for 0 and I or L for 1. Without --check \
every symbol is part of the number, including a trailing check digit.",
        after_help = "Examples:\n  \
cpn decode AAAA1                1\n  \
cpn decode aaaal                1\n  \
cpn decode AAAA1Y --check       1 (check digit verified and removed)\n\n\
Output: One integer per line."
    )]
    Decode {
        /// Codes to decode
        #[arg(required = true)]
        codes: Vec<String>,

        /// Verify and strip a trailing check digit
        #[arg(short, long, help = "Verify and strip a trailing check digit")]
        check: bool,

        /// Decode every symbol even if the config enables check digits
        #[arg(long, conflicts_with = "check", help = "No check digit (overrides config)")]
        no_check: bool,
    },

    /// Print the check digit for a payload
    #[command(after_help = "Examples:\n  \
cpn digit AAAA1                 Y")]
    Digit {
        /// Code without check digit
        code: String,
    },

    /// Validate codes that end in a check digit
    #[command(
        long_about = "Validate codes that end in a check digit.\n\n\
Prints a verdict per code and exits with status 1 if any code is invalid.",
        after_help = "Examples:\n  \
cpn check AAAA1Y                AAAA1Y: valid\n  \
cpn check AAAA1Z                AAAA1Z: invalid"
    )]
    Check {
        /// Codes including their check digit
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Print codes in canonical spelling
    #[command(after_help = "Examples:\n  \
cpn normalize aaaal             AAAA1")]
    Normalize {
        /// Codes to normalize
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Create the config file with defaults
    Setup,

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            values,
            digits,
            check,
            no_check,
        } => commands::encode(&EncodeArgs {
            values,
            digits,
            check_digit: check_override(check, no_check),
        }),

        Commands::Decode {
            codes,
            check,
            no_check,
        } => commands::decode(&DecodeArgs {
            codes,
            check_digit: check_override(check, no_check),
        }),

        Commands::Digit { code } => commands::digit(&code),

        Commands::Check { codes } => commands::check(&CheckArgs { codes }),

        Commands::Normalize { codes } => commands::normalize(&codes),

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

/// Maps the `--check` / `--no-check` pair to a config override.
const fn check_override(check: bool, no_check: bool) -> Option<bool> {
    if check {
        Some(true)
    } else if no_check {
        Some(false)
    } else {
        None
    }
}
