//! crates/logging/src/config.rs
//! Verbosity configuration and its translation into tracing filter directives.

use super::levels::{Subsystem, SubsystemLevels};
use std::fmt::Write as _;

/// Per-subsystem verbosity configuration.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Level of each subsystem.
    pub levels: SubsystemLevels,
}

impl VerbosityConfig {
    /// Create a configuration from a `-v` count.
    ///
    /// Level `0` stays silent apart from warnings, `1` reports rewritten files
    /// and statistics, `2` adds traversal and exclusion decisions, `3` and
    /// above trace every subsystem.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.levels.rewrite = 1;
                config.levels.stats = 1;
            }
            2 => {
                config.levels.rewrite = 2;
                config.levels.stats = 1;
                config.levels.walk = 2;
                config.levels.filter = 2;
                config.levels.stream = 2;
                config.levels.write = 1;
            }
            _ => config.levels.set_all(3),
        }

        config
    }

    /// Apply a single flag token such as `write2` or `filter`.
    ///
    /// A token without digits sets the level to `1`.
    pub fn apply_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let flag = Subsystem::from_name(name).ok_or_else(|| format!("unknown flag: {name}"))?;
        self.levels.set(flag, level);
        Ok(())
    }

    /// Apply a comma-separated list of flag tokens.
    pub fn apply_flags(&mut self, tokens: &str) -> Result<(), String> {
        tokens
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_flag(token))
    }

    /// Renders the configuration as an `EnvFilter` directive string.
    ///
    /// Warnings and errors from every target stay enabled.
    #[must_use]
    pub fn directive(&self) -> String {
        let mut directive = String::from("warn");
        for flag in Subsystem::ALL {
            if let Some(level) = level_name(self.levels.get(flag)) {
                let _ = write!(directive, ",{}={level}", flag.target());
            }
        }
        directive
    }
}

const fn level_name(level: u8) -> Option<&'static str> {
    match level {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
