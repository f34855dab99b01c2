//! # Register Configuration
//!
//! Configuration for the `till` command.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TILL_DRY_RUN=true                                                  │
//! │     TILL_UNLIMITED_DRAWER=true                                         │
//! │     TILL_LOG_FILTER=debug                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/till/register.toml (Linux)                               │
//! │     ~/Library/Application Support/com.till.register/register.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Opening float of 10 per bill and 50 per coin, commit mode          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # register.toml
//! [drawer]
//! unlimited = false
//!
//! [drawer.opening_float]
//! TEN_EURO = 10
//! TWO_EURO = 50
//! TWENTY_CENT = 50
//!
//! [transaction]
//! dry_run = false
//!
//! [logging]
//! filter = "info,till=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use till_core::{Bill, Change, Coin, Denomination, TransactionMode};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Drawer Settings
// =============================================================================

/// What the drawer holds when the register opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawerSettings {
    /// Start from every denomination at the maximum count.
    /// Overrides `opening_float`.
    #[serde(default)]
    pub unlimited: bool,

    /// Units per denomination, e.g. `TEN_EURO = 10`.
    #[serde(default = "default_opening_float")]
    pub opening_float: BTreeMap<Denomination, u32>,
}

fn default_opening_float() -> BTreeMap<Denomination, u32> {
    let bills = Bill::ALL.into_iter().map(|b| (Denomination::from(b), 10));
    let coins = Coin::ALL.into_iter().map(|c| (Denomination::from(c), 50));
    bills.chain(coins).collect()
}

impl Default for DrawerSettings {
    fn default() -> Self {
        DrawerSettings {
            unlimited: false,
            opening_float: default_opening_float(),
        }
    }
}

impl DrawerSettings {
    /// Builds the drawer ledger described by these settings.
    pub fn opening_drawer(&self) -> Change {
        if self.unlimited {
            Change::max()
        } else {
            Change::from(self.opening_float.clone())
        }
    }
}

// =============================================================================
// Transaction Settings
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionSettings {
    /// Compute change without touching the drawer.
    #[serde(default)]
    pub dry_run: bool,
}

impl TransactionSettings {
    pub fn mode(&self) -> TransactionMode {
        TransactionMode::from_dry_run(self.dry_run)
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,till=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Register Configuration
// =============================================================================

/// Complete configuration for the `till` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterConfig {
    #[serde(default)]
    pub drawer: DrawerSettings,

    #[serde(default)]
    pub transaction: TransactionSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl RegisterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (register.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// file at the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)?;
                info!(?path, "Loading register config from file");
                Self::from_toml(&contents)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading register config from file");
                    Self::from_toml(&std::fs::read_to_string(&path)?)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.filter must not be empty".into(),
            ));
        }

        if !self.drawer.unlimited && self.drawer.opening_float.values().all(|c| *c == 0) {
            debug!("Opening float is empty; only exact payments can be settled");
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("TILL_DRY_RUN") {
            match parse_flag(&value) {
                Some(flag) => {
                    debug!(dry_run = flag, "Overriding dry run from environment");
                    self.transaction.dry_run = flag;
                }
                None => warn!(value = %value, "Ignoring TILL_DRY_RUN: not a boolean"),
            }
        }

        if let Some(value) = lookup("TILL_UNLIMITED_DRAWER") {
            match parse_flag(&value) {
                Some(flag) => self.drawer.unlimited = flag,
                None => warn!(value = %value, "Ignoring TILL_UNLIMITED_DRAWER: not a boolean"),
            }
        }

        if let Some(filter) = lookup("TILL_LOG_FILTER") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "register")
            .map(|dirs| dirs.config_dir().join("register.toml"))
    }

    /// The transaction mode the config asks for.
    pub fn mode(&self) -> TransactionMode {
        self.transaction.mode()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
