//! # Test Harness
//!
//! Provides utilities for integration testing couponcode without affecting user configuration.
//! Library calls are redirected with the thread-local home override; CLI runs get a
//! temporary `HOME`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use couponcode::set_home_override;

/// Test environment with a temporary home directory for the config file.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/couponcode/config)
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment and points the home override at it.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("couponcode")
            .join("config")
    }

    /// Creates a config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Reads the config file content.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }

    /// Creates a `cpn` command that runs against this environment.
    pub fn cpn(&self) -> Command {
        let mut cmd = Command::cargo_bin("cpn").expect("cpn binary should build");
        cmd.env("HOME", self.home_dir.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
#[derive(Default)]
pub struct ConfigBuilder {
    digits: Option<usize>,
    check_digit: Option<bool>,
    symbols: Option<String>,
    aliases: Option<Vec<(char, char)>>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn check_digit(mut self, check_digit: bool) -> Self {
        self.check_digit = Some(check_digit);
        self
    }

    pub fn symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = Some(symbols.into());
        self
    }

    pub fn aliases(mut self, aliases: &[(char, char)]) -> Self {
        self.aliases = Some(aliases.to_vec());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(digits) = self.digits {
            lines.push(format!("digits = {digits}"));
        }
        if let Some(check_digit) = self.check_digit {
            lines.push(format!("check_digit = {check_digit}"));
        }
        if self.symbols.is_some() || self.aliases.is_some() {
            lines.push("[alphabet]".to_string());
            if let Some(symbols) = &self.symbols {
                lines.push(format!("symbols = \"{symbols}\""));
            }
            if let Some(aliases) = &self.aliases {
                let entries: Vec<String> = aliases
                    .iter()
                    .map(|(alias, target)| format!("{alias} = \"{target}\""))
                    .collect();
                lines.push(format!("aliases = {{ {} }}", entries.join(", ")));
            }
        }
        lines.join("\n")
    }
}
