//! Canonical address loading from the published package manifest.
//!
//! The documentation repo installs `@juicedollar/jusd` via npm; the package
//! ships a JSON manifest keyed by chain ID. The loader reads that manifest,
//! selects the configured chain and validates every address it finds. Any
//! failure here is fatal: no document is touched when the canonical source
//! cannot be trusted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Chain ID for Citrea Testnet
pub const CHAIN_ID: u64 = 5115;

/// Address manifest shipped by the published package
pub const MANIFEST_PATH: &str = "node_modules/@juicedollar/jusd/dist/address.json";

/// Loader errors. All of them abort the run before any file is modified.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read address manifest `{0}` (run `npm install` to fetch @juicedollar/jusd)")]
    Unavailable(PathBuf, #[source] std::io::Error),

    #[error("malformed address manifest `{0}`")]
    Malformed(PathBuf, #[source] serde_json::Error),

    #[error("no addresses found for chain ID {0} in @juicedollar/jusd")]
    ChainMissing(u64),

    #[error("invalid address for `{name}` in manifest: `{value}`")]
    InvalidAddress { name: &'static str, value: String },
}

/// Per-chain contract addresses published by `@juicedollar/jusd`.
///
/// Every field is optional: a key missing from the manifest disables
/// substitution for that contract instead of failing the whole run.
/// Casing is kept verbatim; the manifest is the authority on how an
/// address is spelled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressBook {
    pub juice_dollar: Option<String>,
    pub equity: Option<String>,
    #[serde(rename = "savingsVaultJUSD")]
    pub savings_vault_jusd: Option<String>,
    pub frontend_gateway: Option<String>,
    pub savings_gateway: Option<String>,
    pub minting_hub_gateway: Option<String>,
    pub position_factory_v2: Option<String>,
    pub roller: Option<String>,
    #[serde(rename = "bridgeStartUSD")]
    pub bridge_start_usd: Option<String>,
    #[serde(rename = "startUSD")]
    pub start_usd: Option<String>,
}

impl AddressBook {
    /// All known entries as `(manifest key, value)` pairs, in manifest order.
    fn entries(&self) -> [(&'static str, &Option<String>); 10] {
        [
            ("juiceDollar", &self.juice_dollar),
            ("equity", &self.equity),
            ("savingsVaultJUSD", &self.savings_vault_jusd),
            ("frontendGateway", &self.frontend_gateway),
            ("savingsGateway", &self.savings_gateway),
            ("mintingHubGateway", &self.minting_hub_gateway),
            ("positionFactoryV2", &self.position_factory_v2),
            ("roller", &self.roller),
            ("bridgeStartUSD", &self.bridge_start_usd),
            ("startUSD", &self.start_usd),
        ]
    }

    /// Reject entries that are not `0x` + 40 hex chars.
    fn validate(&self) -> Result<(), LoadError> {
        for (name, value) in self.entries() {
            if let Some(value) = value
                && !is_address(value)
            {
                return Err(LoadError::InvalidAddress {
                    name,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Whether `value` is a full hex address (`0x` + 40 hex chars).
fn is_address(value: &str) -> bool {
    value.len() == 42
        && value.starts_with("0x")
        && value[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Load the address book for [`CHAIN_ID`] from the installed package.
pub fn load() -> Result<AddressBook, LoadError> {
    load_from(Path::new(MANIFEST_PATH))
}

/// Load the address book for [`CHAIN_ID`] from a manifest file.
pub fn load_from(path: &Path) -> Result<AddressBook, LoadError> {
    let raw =
        fs::read_to_string(path).map_err(|e| LoadError::Unavailable(path.to_path_buf(), e))?;

    let mut manifest: HashMap<String, AddressBook> =
        serde_json::from_str(&raw).map_err(|e| LoadError::Malformed(path.to_path_buf(), e))?;

    let book = manifest
        .remove(&CHAIN_ID.to_string())
        .ok_or(LoadError::ChainMissing(CHAIN_ID))?;

    book.validate()?;
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_selects_configured_chain() {
        let file = write_manifest(
            r#"{
                "1": { "juiceDollar": "0x0000000000000000000000000000000000000001" },
                "5115": {
                    "juiceDollar": "0xAbC1230000000000000000000000000000000001",
                    "startUSD": "0x2222222222222222222222222222222222222222"
                }
            }"#,
        );

        let book = load_from(file.path()).unwrap();
        assert_eq!(
            book.juice_dollar.as_deref(),
            Some("0xAbC1230000000000000000000000000000000001")
        );
        assert_eq!(
            book.start_usd.as_deref(),
            Some("0x2222222222222222222222222222222222222222")
        );
        // Keys absent from the manifest stay unset
        assert!(book.equity.is_none());
    }

    #[test]
    fn test_load_missing_chain_is_fatal() {
        let file = write_manifest(r#"{ "1": {} }"#);
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::ChainMissing(5115)));
    }

    #[test]
    fn test_load_missing_manifest_mentions_npm_install() {
        let err = load_from(Path::new("/nonexistent/address.json")).unwrap_err();
        assert!(matches!(err, LoadError::Unavailable(..)));
        assert!(err.to_string().contains("npm install"));
    }

    #[test]
    fn test_load_malformed_manifest() {
        let file = write_manifest("not json");
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(..)));
    }

    #[test]
    fn test_load_rejects_short_address() {
        let file = write_manifest(r#"{ "5115": { "equity": "0x1234" } }"#);
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidAddress { name: "equity", .. }));
    }

    #[test]
    fn test_is_address() {
        assert!(is_address(
            "0xAbC1230000000000000000000000000000000001"
        ));
        assert!(!is_address("0x1234"));
        assert!(!is_address(
            "0xZZZ1230000000000000000000000000000000001"
        ));
        assert!(!is_address(
            "AbC12300000000000000000000000000000000011x"
        ));
    }
}
