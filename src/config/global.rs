//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/couponcode/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    codec::Alphabet,
    constants::{
        DEFAULT_ALIASES, DEFAULT_DIGITS, DEFAULT_SYMBOLS, GLOBAL_CONFIG_DIR,
        GLOBAL_CONFIG_FILENAME, MAX_DIGITS,
    },
};

/// Valid top-level field names in the config file.
const VALID_FIELDS: &[&str] = &["digits", "check_digit", "alphabet"];

/// Valid field names inside the `[alphabet]` table.
const VALID_ALPHABET_FIELDS: &[&str] = &["symbols", "aliases"];

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Custom alphabet section of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlphabetConfig {
    /// Canonical symbols in value order (built-in alphabet if not set)
    #[serde(default)]
    pub symbols: Option<String>,

    /// Look-alike input characters mapped to canonical symbols
    /// (built-in look-alikes if not set, none if empty)
    #[serde(default)]
    pub aliases: Option<BTreeMap<String, String>>,
}

impl AlphabetConfig {
    /// Builds and validates the alphabet described by this section.
    pub fn build(&self) -> Result<Alphabet> {
        let symbols = self.symbols.as_deref().unwrap_or(DEFAULT_SYMBOLS);

        let aliases = match &self.aliases {
            None => DEFAULT_ALIASES.to_vec(),
            Some(table) => table
                .iter()
                .map(|(alias, target)| Ok((single_char(alias)?, single_char(target)?)))
                .collect::<Result<Vec<_>>>()?,
        };

        Alphabet::new(symbols, &aliases).context("Invalid [alphabet] section")
    }
}

/// Parses a one-character alias entry.
fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("Alias entries must be single characters, found \"{s}\""),
    }
}

/// Global configuration stored at ~/.config/couponcode/config
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    /// Default code width in symbols
    #[serde(default = "default_digits")]
    pub digits: usize,

    /// Whether codes carry a trailing check digit by default
    #[serde(default)]
    pub check_digit: bool,

    /// Custom alphabet (built-in alphabet if not set)
    #[serde(default)]
    pub alphabet: Option<AlphabetConfig>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            check_digit: false,
            alphabet: None,
        }
    }
}

const fn default_digits() -> usize {
    DEFAULT_DIGITS
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/couponcode/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/couponcode)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    ///
    /// Returns the config together with warnings about unrecognized fields.
    pub fn load() -> Result<(Self, Vec<String>)> {
        let Some(path) = Self::path() else {
            return Ok((Self::default(), Vec::new()));
        };

        if !path.exists() {
            return Ok((Self::default(), Vec::new()));
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses config file content, collecting warnings about unknown fields.
    pub fn parse(content: &str) -> Result<(Self, Vec<String>)> {
        let table: toml::Table = toml::from_str(content)?;
        let warnings = unknown_fields(&table)
            .into_iter()
            .map(|field| format!("Ignoring unknown config field '{field}'"))
            .collect();

        let config: Self = toml::from_str(content)?;
        if !(1..=MAX_DIGITS).contains(&config.digits) {
            anyhow::bail!(
                "digits = {} is out of range (expected 1 to {MAX_DIGITS})",
                config.digits
            );
        }
        Ok((config, warnings))
    }

    /// Creates the config file with default values and comments.
    /// Used by `cpn setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    ///
    /// The alphabet section is written commented out with the built-in values.
    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        let aliases = format_aliases(DEFAULT_ALIASES.iter().copied());
        let alphabet_section =
            format!("# [alphabet]\n# symbols = \"{DEFAULT_SYMBOLS}\"\n# aliases = {aliases}");

        let content = format!(
            r#"# couponcode Configuration
# Location: ~/.config/couponcode/config

# Number of symbols in an encoded code, not counting the check digit.
# Each symbol carries 5 bits, so 5 symbols cover 0..=33554431.
# Default: {DEFAULT_DIGITS}
digits = {digits}

# Whether `cpn encode` appends a Luhn mod 32 check digit and
# `cpn decode` expects one.
# Default: false
check_digit = {check_digit}

# Custom alphabet. Codes encoded with one alphabet only decode with the same.
#
# symbols: 32 distinct ASCII letters or digits, the canonical symbol for each
#          value from 0 to 31. Case does not matter on input.
# aliases: extra input characters accepted in place of a canonical symbol.
#          Leave unset for the built-in look-alikes, set to {{}} for none.
{alphabet_section}
"#,
            digits = config.digits,
            check_digit = config.check_digit,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Returns the effective alphabet.
    pub fn alphabet(&self) -> Result<Alphabet> {
        self.alphabet
            .as_ref()
            .map_or(Ok(Alphabet::DEFAULT), AlphabetConfig::build)
    }
}

/// Formats aliases as an inline TOML table.
fn format_aliases(pairs: impl Iterator<Item = (char, char)>) -> String {
    let entries: Vec<String> = pairs
        .map(|(alias, target)| format!("{alias} = \"{target}\""))
        .collect();
    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}

/// Lists field names the config does not recognize, as dotted paths.
fn unknown_fields(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        if !VALID_FIELDS.contains(&key.as_str()) {
            unknown.push(key.clone());
        } else if key == "alphabet" {
            if let Some(section) = value.as_table() {
                unknown.extend(
                    section
                        .keys()
                        .filter(|k| !VALID_ALPHABET_FIELDS.contains(&k.as_str()))
                        .map(|k| format!("alphabet.{k}")),
                );
            }
        }
    }
    unknown
}
