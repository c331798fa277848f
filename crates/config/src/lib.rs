// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! BiblePay Configuration Module
//!
//! This module provides the network parameters needed to encode and validate
//! addresses: which network is active and the base58 prefix bytes it uses.
//! Prefix values match the BiblePay chain parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Size of an address identifier (HASH160) in bytes
pub const IDENTIFIER_SIZE: usize = 20;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config: failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config: parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config: serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config: unknown network type '{0}'")]
    UnknownNetwork(String),
}

/// Network type for the BiblePay blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkType {
    #[default]
    #[serde(rename = "main", alias = "mainnet")]
    MainNet,
    #[serde(rename = "test", alias = "testnet")]
    TestNet,
    #[serde(rename = "devnet", alias = "dev")]
    DevNet,
    #[serde(rename = "regtest", alias = "reg")]
    RegTest,
}

impl NetworkType {
    /// Gets the base58 prefixes used by this network
    pub fn prefixes(&self) -> Base58Prefixes {
        match self {
            NetworkType::MainNet => Base58Prefixes::mainnet(),
            NetworkType::TestNet | NetworkType::DevNet | NetworkType::RegTest => {
                Base58Prefixes::testnet()
            }
        }
    }

    /// Gets the pubkey-hash address version
    pub fn address_version(&self) -> u8 {
        self.prefixes().pubkey_address
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "main"),
            NetworkType::TestNet => write!(f, "test"),
            NetworkType::DevNet => write!(f, "devnet"),
            NetworkType::RegTest => write!(f, "regtest"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkType::MainNet),
            "test" | "testnet" => Ok(NetworkType::TestNet),
            "devnet" | "dev" => Ok(NetworkType::DevNet),
            "regtest" | "reg" => Ok(NetworkType::RegTest),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Single-byte base58 prefixes of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash addresses ('B' on MainNet, 'y' on TestNet)
    pub pubkey_address: u8,
    /// Pay-to-script-hash addresses
    pub script_address: u8,
    /// WIF secret keys
    pub secret_key: u8,
}

impl Base58Prefixes {
    /// MainNet prefixes
    pub const fn mainnet() -> Self {
        Self { pubkey_address: 25, script_address: 16, secret_key: 182 }
    }

    /// TestNet prefixes, shared by DevNet and RegTest
    pub const fn testnet() -> Self {
        Self { pubkey_address: 140, script_address: 19, secret_key: 239 }
    }
}

impl Default for Base58Prefixes {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Per-field overrides applied on top of a network's prefixes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey_address: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_address: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<u8>,
}

impl PrefixOverrides {
    fn is_empty(&self) -> bool {
        self.pubkey_address.is_none() && self.script_address.is_none() && self.secret_key.is_none()
    }
}

/// Address configuration
///
/// ```toml
/// network = "test"
///
/// [prefixes]
/// script_address = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressConfig {
    #[serde(default)]
    pub network: NetworkType,
    #[serde(default)]
    pub prefixes: PrefixOverrides,
}

impl AddressConfig {
    /// Creates a configuration for the given network without overrides
    pub fn new(network: NetworkType) -> Self {
        Self { network, prefixes: PrefixOverrides::default() }
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AddressConfig = toml::from_str(content)?;
        debug!(network = %config.network, "parsed address configuration");
        Ok(config)
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
    }

    /// Network prefixes with overrides applied
    pub fn effective_prefixes(&self) -> Base58Prefixes {
        let base = self.network.prefixes();
        if self.prefixes.is_empty() {
            return base;
        }

        let effective = Base58Prefixes {
            pubkey_address: self.prefixes.pubkey_address.unwrap_or(base.pubkey_address),
            script_address: self.prefixes.script_address.unwrap_or(base.script_address),
            secret_key: self.prefixes.secret_key.unwrap_or(base.secret_key),
        };
        info!(network = %self.network, ?effective, "using overridden base58 prefixes");
        effective
    }
}
